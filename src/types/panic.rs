//! Captured panics.
//!
//! [`Caught<T>`] is the result of running a closure under
//! [`std::panic::catch_unwind`]: either the returned value or the panic
//! payload. The payload is kept as a [`PanicPayload`] holding the panic
//! message, so a `Caught` is ordinary comparable, serializable data.

use core::any::Any;
use core::fmt;
use std::panic::{self, UnwindSafe};

use serde::{Deserialize, Serialize};

use crate::tracing_compat::debug;

/// Message extracted from a panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanicPayload {
    message: String,
}

impl PanicPayload {
    /// Message used when the payload is neither `&str` nor `String`.
    pub const OPAQUE: &'static str = "<non-string panic payload>";

    /// Creates a payload with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a raw `catch_unwind` payload.
    pub fn from_any(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => Self::OPAQUE.to_string(),
            },
        };
        Self { message }
    }

    /// Returns the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic: {}", self.message)
    }
}

/// A value, or the panic that prevented it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Caught<T> {
    /// The closure returned normally.
    Returned(T),
    /// The closure panicked.
    Panicked(PanicPayload),
}

impl<T> Caught<T> {
    /// Runs `f`, capturing a panic instead of propagating it.
    ///
    /// ```
    /// use outcomes::types::Caught;
    ///
    /// let ok = Caught::run(|| 6 * 7);
    /// assert_eq!(ok, Caught::Returned(42));
    /// ```
    pub fn run<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => Self::Returned(value),
            Err(payload) => {
                let payload = PanicPayload::from_any(payload);
                debug!(message = %payload.message(), "captured panic");
                Self::Panicked(payload)
            }
        }
    }

    /// Returns true if the closure returned normally.
    pub const fn is_returned(&self) -> bool {
        matches!(self, Self::Returned(_))
    }

    /// Returns true if the closure panicked.
    pub const fn is_panicked(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Returns the value, if any.
    pub fn returned(self) -> Option<T> {
        match self {
            Self::Returned(value) => Some(value),
            Self::Panicked(_) => None,
        }
    }

    /// Returns the panic payload, if any.
    pub fn panicked(self) -> Option<PanicPayload> {
        match self {
            Self::Returned(_) => None,
            Self::Panicked(payload) => Some(payload),
        }
    }
}

impl<T> From<std::thread::Result<T>> for Caught<T> {
    fn from(result: std::thread::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Returned(value),
            Err(payload) => Self::Panicked(PanicPayload::from_any(payload)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn run_captures_return_value() {
        init_test("run_captures_return_value");
        let caught = Caught::run(|| "value");
        assert!(caught.is_returned());
        assert_eq!(caught.returned(), Some("value"));
        crate::test_complete!("run_captures_return_value");
    }

    #[test]
    fn run_captures_static_str_panic() {
        init_test("run_captures_static_str_panic");
        let caught: Caught<i32> = Caught::run(|| panic!("boom"));
        assert!(caught.is_panicked());
        let payload = caught.panicked().expect("panicked");
        crate::assert_with_log!(payload.message() == "boom", "message", "boom", payload.message());
        crate::test_complete!("run_captures_static_str_panic");
    }

    #[test]
    fn run_captures_formatted_panic() {
        init_test("run_captures_formatted_panic");
        let code = 7;
        let caught: Caught<()> = Caught::run(move || panic!("code {code}"));
        assert_eq!(caught, Caught::Panicked(PanicPayload::new("code 7")));
        crate::test_complete!("run_captures_formatted_panic");
    }

    #[test]
    fn opaque_payload_gets_placeholder() {
        init_test("opaque_payload_gets_placeholder");
        let payload = PanicPayload::from_any(Box::new(42_u32));
        assert_eq!(payload.message(), PanicPayload::OPAQUE);
        crate::test_complete!("opaque_payload_gets_placeholder");
    }

    #[test]
    fn from_thread_result() {
        init_test("from_thread_result");
        let handle = std::thread::spawn(|| -> u8 { panic!("worker died") });
        let caught = Caught::from(handle.join());
        assert_eq!(caught, Caught::Panicked(PanicPayload::new("worker died")));
        assert_eq!(PanicPayload::new("x").to_string(), "panic: x");
        crate::test_complete!("from_thread_result");
    }
}
