//! Boolean-style combinators and monadic bind.
//!
//! `Success` behaves as logical true and `Failure` as logical false:
//!
//! | op | `self = Failure(e)` | `self = Success(x)`, `rhs = Failure(d)` | `self = Success(x)`, `rhs = Success(y)` |
//! |---|---|---|---|
//! | `and(rhs)` | `Failure(e)` | `Failure(d)` | `Success(y)` |
//! | `or(rhs)` | `rhs` | `Success(x)` | `Success(x)` |
//!
//! [`and_then`](Outcome::and_then) is monadic bind with `Success` as unit;
//! [`or_else`](Outcome::or_else) is its dual on the failure slot. Both obey
//! left identity, right identity and associativity (see
//! [`laws`](super::laws)).

use crate::types::Outcome::{self, Failure, Success};

impl<E, T> Outcome<E, T> {
    /// Returns `rhs` if `self` is a `Success`, else the own failure.
    ///
    /// `rhs` is evaluated eagerly; use [`and_then`](Self::and_then) for a
    /// lazily computed continuation.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<&str, i32> = Success(2);
    /// let y: Outcome<&str, &str> = Failure("late");
    /// assert_eq!(x.and(y), Failure("late"));
    ///
    /// let x: Outcome<&str, i32> = Failure("early");
    /// let y: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(x.and(y), Failure("early"));
    /// ```
    #[inline]
    pub fn and<U>(self, rhs: Outcome<E, U>) -> Outcome<E, U> {
        match self {
            Success(_) => rhs,
            Failure(error) => Failure(error),
        }
    }

    /// Calls `f` with the success payload, propagating a failure untouched.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<E, U>) -> Outcome<E, U> {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns `self` if it is a `Success`, else `rhs`.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<&str, i32> = Success(2);
    /// assert_eq!(x.or(Outcome::<&str, i32>::Success(100)), Success(2));
    ///
    /// let x: Outcome<&str, i32> = Failure("e");
    /// assert_eq!(x.or(Outcome::<&str, i32>::Success(2)), Success(2));
    /// ```
    #[inline]
    pub fn or<F>(self, rhs: Outcome<F, T>) -> Outcome<F, T> {
        match self {
            Success(value) => Success(value),
            Failure(_) => rhs,
        }
    }

    /// Calls `f` with the failure payload, propagating a success untouched.
    #[inline]
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<F, T>) -> Outcome<F, T> {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }
}
