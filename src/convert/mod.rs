//! Conversion registry between `Outcome` and other representations.
//!
//! [`ToOutcome`] and [`FromOutcome`] are total conversions resolved through
//! trait bounds at the call site. There is no runtime registry: a type takes
//! part by implementing the trait, exactly like the built-in instances in
//! [`builtin`].
//!
//! ```
//! use outcomes::{Failure, FromOutcome, Outcome, Success, ToOutcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum Reply {
//!     Ok(u16),
//!     Refused(String),
//! }
//!
//! impl ToOutcome<String, u16> for Reply {
//!     fn to_outcome(self) -> Outcome<String, u16> {
//!         match self {
//!             Reply::Ok(code) => Success(code),
//!             Reply::Refused(reason) => Failure(reason),
//!         }
//!     }
//! }
//!
//! impl FromOutcome<String, u16> for Reply {
//!     fn from_outcome(outcome: Outcome<String, u16>) -> Self {
//!         outcome.fold(Reply::Refused, Reply::Ok)
//!     }
//! }
//!
//! let o = Outcome::from_value(Reply::Ok(200));
//! assert_eq!(o, Success(200));
//! let back: Reply = o.convert();
//! assert_eq!(back, Reply::Ok(200));
//! ```

pub mod builtin;

use crate::types::Outcome;

/// Total conversion of `Self` into an `Outcome<E, T>`.
pub trait ToOutcome<E, T> {
    /// Performs the conversion.
    fn to_outcome(self) -> Outcome<E, T>;
}

/// Total conversion of an `Outcome<E, T>` into `Self`.
pub trait FromOutcome<E, T>: Sized {
    /// Performs the conversion.
    fn from_outcome(outcome: Outcome<E, T>) -> Self;
}

impl<E, T> ToOutcome<E, T> for Outcome<E, T> {
    #[inline]
    fn to_outcome(self) -> Self {
        self
    }
}

impl<E, T> FromOutcome<E, T> for Outcome<E, T> {
    #[inline]
    fn from_outcome(outcome: Self) -> Self {
        outcome
    }
}

impl<E, T> Outcome<E, T> {
    /// Builds an outcome from any value with a [`ToOutcome`] instance.
    #[inline]
    pub fn from_value<V: ToOutcome<E, T>>(value: V) -> Self {
        value.to_outcome()
    }

    /// Converts into any type with a [`FromOutcome`] instance.
    #[inline]
    pub fn convert<V: FromOutcome<E, T>>(self) -> V {
        V::from_outcome(self)
    }
}
