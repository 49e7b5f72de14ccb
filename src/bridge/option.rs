//! Bridging `Option` and `Outcome`.
//!
//! [`OptionExt`] lifts a plain optional value into one of the two slots.
//! [`OptionOutcomeExt`] moves an `Option` wrapped around an outcome inside
//! it; these are the inverses of [`Outcome::transpose`] and
//! [`Outcome::transpose_failure`].

use crate::types::Outcome::{self, Failure, Success};

/// Conversions from `Option<T>` into an `Outcome`.
pub trait OptionExt<T> {
    /// `Some(v)` becomes `Success(v)`, `None` becomes `Failure(())`.
    ///
    /// ```
    /// use outcomes::{Failure, OptionExt, Success};
    ///
    /// assert_eq!(Some(3).to_success(), Success(3));
    /// assert_eq!(None::<i32>.to_success(), Failure(()));
    /// ```
    fn to_success(self) -> Outcome<(), T>;

    /// `Some(e)` becomes `Failure(e)`, `None` becomes `Success(())`.
    fn to_failure(self) -> Outcome<T, ()>;

    /// `Some(v)` becomes `Success(v)`, `None` becomes `Failure(default)`.
    fn to_success_or<E>(self, default: E) -> Outcome<E, T>;

    /// Like [`to_success_or`](Self::to_success_or) with a lazily computed failure.
    fn to_success_or_else<E>(self, default: impl FnOnce() -> E) -> Outcome<E, T>;

    /// `Some(e)` becomes `Failure(e)`, `None` becomes `Success(default)`.
    fn to_failure_or<U>(self, default: U) -> Outcome<T, U>;

    /// Like [`to_failure_or`](Self::to_failure_or) with a lazily computed success.
    fn to_failure_or_else<U>(self, default: impl FnOnce() -> U) -> Outcome<T, U>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn to_success(self) -> Outcome<(), T> {
        self.to_success_or(())
    }

    #[inline]
    fn to_failure(self) -> Outcome<T, ()> {
        self.to_failure_or(())
    }

    #[inline]
    fn to_success_or<E>(self, default: E) -> Outcome<E, T> {
        match self {
            Some(value) => Success(value),
            None => Failure(default),
        }
    }

    #[inline]
    fn to_success_or_else<E>(self, default: impl FnOnce() -> E) -> Outcome<E, T> {
        match self {
            Some(value) => Success(value),
            None => Failure(default()),
        }
    }

    #[inline]
    fn to_failure_or<U>(self, default: U) -> Outcome<T, U> {
        match self {
            Some(error) => Failure(error),
            None => Success(default),
        }
    }

    #[inline]
    fn to_failure_or_else<U>(self, default: impl FnOnce() -> U) -> Outcome<T, U> {
        match self {
            Some(error) => Failure(error),
            None => Success(default()),
        }
    }
}

/// Moving an outer `Option` into an `Outcome`.
pub trait OptionOutcomeExt<E, T> {
    /// `None` becomes `Success(None)`; a present outcome keeps its variant,
    /// with a success payload wrapped in `Some`.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, OptionOutcomeExt, Success};
    ///
    /// let present: Option<Outcome<&str, i32>> = Some(Success(1));
    /// assert_eq!(present.transpose_success(), Success(Some(1)));
    /// let absent: Option<Outcome<&str, i32>> = None;
    /// assert_eq!(absent.transpose_success(), Success(None));
    /// ```
    fn transpose_success(self) -> Outcome<E, Option<T>>;

    /// `None` becomes `Failure(None)`; a present outcome keeps its variant,
    /// with a failure payload wrapped in `Some`.
    fn transpose_failure(self) -> Outcome<Option<E>, T>;

    /// Unwraps a present outcome; `None` becomes `Failure(default)`.
    fn transpose_success_or(self, default: E) -> Outcome<E, T>;

    /// Unwraps a present outcome; `None` becomes `Success(default)`.
    fn transpose_failure_or(self, default: T) -> Outcome<E, T>;
}

impl<E, T> OptionOutcomeExt<E, T> for Option<Outcome<E, T>> {
    #[inline]
    fn transpose_success(self) -> Outcome<E, Option<T>> {
        self.map_or(Success(None), |outcome| outcome.map(Some))
    }

    #[inline]
    fn transpose_failure(self) -> Outcome<Option<E>, T> {
        self.map_or(Failure(None), |outcome| outcome.map_failure(Some))
    }

    #[inline]
    fn transpose_success_or(self, default: E) -> Outcome<E, T> {
        self.unwrap_or(Failure(default))
    }

    #[inline]
    fn transpose_failure_or(self, default: T) -> Outcome<E, T> {
        self.unwrap_or(Success(default))
    }
}
