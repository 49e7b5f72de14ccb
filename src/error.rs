//! Contract-violation errors.
//!
//! Recoverable failures are never errors in this crate: they are the
//! [`Failure`](crate::Outcome::Failure) variant. The only error condition is a
//! programmer error, raised when a variant-unsafe extraction such as
//! [`Outcome::unwrap`](crate::Outcome::unwrap) meets the wrong variant.
//! That condition is described by [`ContractViolation`] and always ends in a
//! panic.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tracing_compat::error;

/// One of the two variants of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// The `Success` variant.
    Success,
    /// The `Failure` variant.
    Failure,
}

impl Variant {
    /// Returns the variant name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }

    /// Returns the other variant.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Success => Self::Failure,
            Self::Failure => Self::Success,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variant-unsafe extraction was invoked on the wrong variant.
///
/// The payload of the variant that was actually present is kept as its
/// `Debug` rendering so the violation can outlive the consumed outcome.
///
/// ```
/// use outcomes::error::{ContractViolation, Variant};
///
/// let violation = ContractViolation::new(Variant::Success, "config missing", &"x");
/// assert_eq!(violation.found(), Variant::Failure);
/// assert_eq!(violation.to_string(), "config missing: \"x\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}: {payload}")]
pub struct ContractViolation {
    expected: Variant,
    message: String,
    payload: String,
}

impl ContractViolation {
    /// Creates a violation for an extraction that expected `expected`.
    ///
    /// `payload` is the payload of the opposite variant.
    pub fn new(expected: Variant, message: impl Into<String>, payload: &dyn fmt::Debug) -> Self {
        Self {
            expected,
            message: message.into(),
            payload: format!("{payload:?}"),
        }
    }

    /// Returns the variant the extraction expected.
    #[must_use]
    pub const fn expected(&self) -> Variant {
        self.expected
    }

    /// Returns the variant that was actually present.
    #[must_use]
    pub const fn found(&self) -> Variant {
        self.expected.opposite()
    }

    /// Returns the caller-supplied (or fixed) message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the rendered payload of the variant that was present.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Aborts the current operation with a [`ContractViolation`].
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violated(expected: Variant, message: &str, payload: &dyn fmt::Debug) -> ! {
    let violation = ContractViolation::new(expected, message, payload);
    error!(
        expected = %violation.expected(),
        found = %violation.found(),
        payload = %violation.payload(),
        "outcome extraction on the wrong variant"
    );
    panic!("{violation}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn variant_opposite_is_involutive() {
        init_test("variant_opposite_is_involutive");
        for variant in [Variant::Success, Variant::Failure] {
            let back = variant.opposite().opposite();
            crate::assert_with_log!(back == variant, "double opposite", variant, back);
        }
        crate::test_complete!("variant_opposite_is_involutive");
    }

    #[test]
    fn violation_display_combines_message_and_payload() {
        init_test("violation_display_combines_message_and_payload");
        let violation = ContractViolation::new(Variant::Failure, "expected an error", &9);
        let rendered = violation.to_string();
        crate::assert_with_log!(
            rendered == "expected an error: 9",
            "display",
            "expected an error: 9",
            rendered
        );
        assert_eq!(violation.expected(), Variant::Failure);
        assert_eq!(violation.found(), Variant::Success);
        assert_eq!(violation.message(), "expected an error");
        assert_eq!(violation.payload(), "9");
        crate::test_complete!("violation_display_combines_message_and_payload");
    }

    #[test]
    fn variant_serde_json() {
        let json = serde_json::to_string(&Variant::Success).unwrap();
        assert_eq!(json, "\"Success\"");
        let parsed: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Variant::Success);
    }

    #[test]
    #[should_panic(expected = "boom: \"late\"")]
    fn violated_panics_with_rendered_violation() {
        violated(Variant::Success, "boom", &"late");
    }
}
