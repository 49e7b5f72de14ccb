//! Swapping an `Outcome` with an `Option` held in one of its slots.
//!
//! The inverses, starting from an `Option<Outcome<E, T>>`, live in
//! [`crate::bridge::option::OptionOutcomeExt`].

use crate::types::Outcome::{self, Failure, Success};

impl<E, T> Outcome<E, Option<T>> {
    /// Converts `Outcome<E, Option<T>>` into `Option<Outcome<E, T>>`.
    ///
    /// `Success(None)` becomes `None`; `Success(Some(x))` becomes
    /// `Some(Success(x))`; `Failure(e)` becomes `Some(Failure(e))`.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let o: Outcome<&str, Option<i32>> = Success(Some(5));
    /// assert_eq!(o.transpose(), Some(Success(5)));
    /// let o: Outcome<&str, Option<i32>> = Success(None);
    /// assert_eq!(o.transpose(), None);
    /// ```
    #[inline]
    pub fn transpose(self) -> Option<Outcome<E, T>> {
        match self {
            Success(Some(value)) => Some(Success(value)),
            Success(None) => None,
            Failure(error) => Some(Failure(error)),
        }
    }
}

impl<E, T> Outcome<Option<E>, T> {
    /// Converts `Outcome<Option<E>, T>` into `Option<Outcome<E, T>>`.
    ///
    /// `Failure(None)` becomes `None`; the other cases keep their variant.
    #[inline]
    pub fn transpose_failure(self) -> Option<Outcome<E, T>> {
        match self {
            Failure(Some(error)) => Some(Failure(error)),
            Failure(None) => None,
            Success(value) => Some(Success(value)),
        }
    }
}
