//! Functorial transformations and elimination.
//!
//! `map` and `map_failure` touch only their own slot and leave the other
//! variant untouched. The `_or` forms take an eagerly evaluated default for
//! the other variant; the `_or_else` forms take a function of the other
//! variant's payload. `flatten` removes exactly one level of nesting.

use core::convert::identity;

use crate::types::Outcome::{self, Failure, Success};

impl<E, T> Outcome<E, T> {
    /// Applies `f` to a success payload.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let o: Outcome<&str, i32> = Success(2);
    /// assert_eq!(o.map(|x| x * 10), Success(20));
    /// let e: Outcome<&str, i32> = Failure("no");
    /// assert_eq!(e.map(|x| x * 10), Failure("no"));
    /// ```
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<E, U> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Applies `f` to a failure payload.
    #[inline]
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<F, T> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Applies one function per slot.
    #[inline]
    pub fn bimap<F, U>(
        self,
        on_failure: impl FnOnce(E) -> F,
        on_success: impl FnOnce(T) -> U,
    ) -> Outcome<F, U> {
        match self {
            Success(value) => Success(on_success(value)),
            Failure(error) => Failure(on_failure(error)),
        }
    }

    /// Applies `f` to a success payload, or returns `default` for a failure.
    #[inline]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// Applies `f` to a failure payload, or returns `default` for a success.
    #[inline]
    pub fn map_failure_or<U>(self, default: U, f: impl FnOnce(E) -> U) -> U {
        match self {
            Failure(error) => f(error),
            Success(_) => default,
        }
    }

    /// Applies `f` to a success payload, or `fallback` to a failure payload.
    #[inline]
    pub fn map_or_else<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(error) => fallback(error),
        }
    }

    /// Applies `f` to a failure payload, or `fallback` to a success payload.
    #[inline]
    pub fn map_failure_or_else<U>(
        self,
        fallback: impl FnOnce(T) -> U,
        f: impl FnOnce(E) -> U,
    ) -> U {
        match self {
            Failure(error) => f(error),
            Success(value) => fallback(value),
        }
    }

    /// Eliminates the outcome into a single value.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let describe = |o: Outcome<&str, i32>| o.fold(|e| format!("error: {e}"), |v| format!("value: {v}"));
    /// assert_eq!(describe(Success(1)), "value: 1");
    /// assert_eq!(describe(Failure("nope")), "error: nope");
    /// ```
    #[inline]
    pub fn fold<R>(self, on_failure: impl FnOnce(E) -> R, on_success: impl FnOnce(T) -> R) -> R {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }
}

impl<E, T> Outcome<E, Outcome<E, T>> {
    /// Removes one level of nesting from the success slot.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let nested: Outcome<&str, Outcome<&str, i32>> = Success(Failure("inner"));
    /// assert_eq!(nested.flatten(), Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<E, T> {
        self.and_then(identity)
    }
}

impl<E, T> Outcome<Outcome<E, T>, T> {
    /// Removes one level of nesting from the failure slot.
    #[inline]
    pub fn flatten_failure(self) -> Outcome<E, T> {
        self.or_else(identity)
    }
}
