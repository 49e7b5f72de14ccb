//! The two-variant outcome type.
//!
//! [`Outcome<E, T>`] is either [`Success(T)`](Outcome::Success) or
//! [`Failure(E)`](Outcome::Failure). It is plain immutable data: every
//! combinator consumes or borrows the value and returns a new one.
//!
//! This module holds the type itself together with its predicates,
//! extraction, widening and the bridge to `std::result::Result`. The
//! transforming combinators live in [`crate::combinator`].
//!
//! # Textual form
//!
//! Both `Debug` and `Display` render as `Success(x)` / `Failure(e)`, using the
//! payload's `Debug` or `Display` form respectively:
//!
//! ```
//! use outcomes::{Failure, Outcome, Success};
//!
//! let ok: Outcome<&str, i32> = Success(2);
//! let bad: Outcome<&str, i32> = Failure("late");
//! assert_eq!(format!("{ok:?}"), "Success(2)");
//! assert_eq!(format!("{bad:?}"), "Failure(\"late\")");
//! assert_eq!(bad.to_string(), "Failure(late)");
//! ```

use core::convert::Infallible;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Variant, violated};

/// A value that is either a success or a failure.
///
/// The failure type comes first, so `Outcome<E, T>` reads like a function
/// signature that "may fail with `E`, else yields `T`".
///
/// `Outcome` is covariant in both parameters wherever Rust applies variance
/// (lifetimes). For type-level widening use
/// [`with_success_type`](Self::with_success_type) and
/// [`with_failure_type`](Self::with_failure_type).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<E, T> {
    /// Success payload.
    Success(T),
    /// Failure payload.
    Failure(E),
}

use Outcome::{Failure, Success};

impl<E, T> Outcome<E, T> {
    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// Returns `true` for `Success`.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Returns `true` if this is a `Success` whose payload satisfies `pred`.
    ///
    /// `pred` is not called on a `Failure`.
    #[inline]
    pub fn is_success_and(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Success(value) => pred(value),
            Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose payload satisfies `pred`.
    #[inline]
    pub fn is_failure_and(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Failure(error) => pred(error),
            Success(_) => false,
        }
    }

    /// Returns `true` for any `Success`, else asks `pred` about the failure.
    #[inline]
    pub fn is_success_or(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Success(_) => true,
            Failure(error) => pred(error),
        }
    }

    /// Returns `true` for any `Failure`, else asks `pred` about the success.
    #[inline]
    pub fn is_failure_or(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Failure(_) => true,
            Success(value) => pred(value),
        }
    }

    /// Returns `true` if this is a `Success` holding a value equal to `value`.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let o: Outcome<&str, String> = Success("hi".to_string());
    /// assert!(o.contains("hi"));
    /// assert!(!Failure::<&str, String>("hi").contains("hi"));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        U: ?Sized,
        T: PartialEq<U>,
    {
        match self {
            Success(v) => v == value,
            Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` holding a value equal to `value`.
    #[inline]
    pub fn contains_failure<F>(&self, value: &F) -> bool
    where
        F: ?Sized,
        E: PartialEq<F>,
    {
        match self {
            Failure(e) => e == value,
            Success(_) => false,
        }
    }

    /// Returns which variant this is.
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Success(_) => Variant::Success,
            Failure(_) => Variant::Failure,
        }
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Borrows both payload slots.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Exchanges the two variants.
    #[inline]
    pub fn swap(self) -> Outcome<T, E> {
        match self {
            Success(value) => Failure(value),
            Failure(error) => Success(error),
        }
    }

    /// Iterates over the success payload (zero or one item).
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_ref().success().into_iter()
    }

    // ------------------------------------------------------------------
    // Optional conversion
    // ------------------------------------------------------------------

    /// Returns the success payload, or `None` for a `Failure`.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Returns the failure payload, or `None` for a `Success`.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Failure(error) => Some(error),
            Success(_) => None,
        }
    }

    // ------------------------------------------------------------------
    // Total extraction
    // ------------------------------------------------------------------

    /// Returns the success payload or `default`.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// assert_eq!(Success::<&str, i32>(9).unwrap_or(2), 9);
    /// assert_eq!(Failure::<&str, i32>("e").unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Returns the success payload or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    /// Returns whichever payload is present, unified into `R`.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome};
    ///
    /// let o: Outcome<u8, u32> = Failure(7);
    /// let n: u64 = o.into_success_or_failure();
    /// assert_eq!(n, 7);
    /// ```
    #[inline]
    pub fn into_success_or_failure<R>(self) -> R
    where
        T: Into<R>,
        E: Into<R>,
    {
        match self {
            Success(value) => value.into(),
            Failure(error) => error.into(),
        }
    }

    // ------------------------------------------------------------------
    // Widening
    // ------------------------------------------------------------------

    /// Re-parameterizes the success type to a wider `U`.
    ///
    /// A `Failure` passes through untouched; a `Success` payload is carried
    /// over by `Into`.
    #[inline]
    pub fn with_success_type<U>(self) -> Outcome<E, U>
    where
        T: Into<U>,
    {
        match self {
            Success(value) => Success(value.into()),
            Failure(error) => Failure(error),
        }
    }

    /// Re-parameterizes the failure type to a wider `F`.
    #[inline]
    pub fn with_failure_type<F>(self) -> Outcome<F, T>
    where
        E: Into<F>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error.into()),
        }
    }

    // ------------------------------------------------------------------
    // std bridge
    // ------------------------------------------------------------------

    /// Converts into a `std::result::Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

// ----------------------------------------------------------------------
// Variant-unsafe extraction
// ----------------------------------------------------------------------

impl<E: fmt::Debug, T> Outcome<E, T> {
    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics on a `Failure`, with `msg` followed by the failure payload.
    /// This signals a bug at the call site and is not meant to be caught.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Success(value) => value,
            Failure(error) => violated(Variant::Success, msg, &error),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics on a `Failure`; the message contains the failure payload.
    ///
    /// ```should_panic
    /// use outcomes::{Failure, Outcome};
    ///
    /// let o: Outcome<&str, i32> = Failure("x");
    /// o.unwrap(); // panics with `... value: "x"`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Success(value) => value,
            Failure(error) => violated(
                Variant::Success,
                "called `Outcome::unwrap()` on a `Failure` value",
                &error,
            ),
        }
    }
}

impl<E, T: fmt::Debug> Outcome<E, T> {
    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics on a `Success`, with `msg` followed by the success payload.
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E {
        match self {
            Failure(error) => error,
            Success(value) => violated(Variant::Failure, msg, &value),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics on a `Success`; the message contains the success payload.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Failure(error) => error,
            Success(value) => violated(
                Variant::Failure,
                "called `Outcome::unwrap_failure()` on a `Success` value",
                &value,
            ),
        }
    }
}

// ----------------------------------------------------------------------
// Uninhabited sides
// ----------------------------------------------------------------------

impl<T> Outcome<Infallible, T> {
    /// Returns the success payload of an outcome that cannot fail.
    ///
    /// ```
    /// use core::convert::Infallible;
    /// use outcomes::{Outcome, Success};
    ///
    /// let o: Outcome<Infallible, i32> = Success(3);
    /// assert_eq!(o.into_success(), 3);
    /// ```
    #[inline]
    pub fn into_success(self) -> T {
        match self {
            Success(value) => value,
            Failure(never) => match never {},
        }
    }

    /// Widens the failure type of an outcome that cannot fail to any `F`.
    #[inline]
    pub fn with_any_failure_type<F>(self) -> Outcome<F, T> {
        Success(self.into_success())
    }
}

impl<E> Outcome<E, Infallible> {
    /// Returns the failure payload of an outcome that cannot succeed.
    #[inline]
    pub fn into_failure(self) -> E {
        match self {
            Failure(error) => error,
            Success(never) => match never {},
        }
    }

    /// Widens the success type of an outcome that cannot succeed to any `U`.
    #[inline]
    pub fn with_any_success_type<U>(self) -> Outcome<E, U> {
        Failure(self.into_failure())
    }
}

// ----------------------------------------------------------------------
// Unit markers
// ----------------------------------------------------------------------

impl Outcome<(), ()> {
    /// The boolean-like `Success(())`.
    pub const UNIT_SUCCESS: Self = Success(());
    /// The boolean-like `Failure(())`.
    pub const UNIT_FAILURE: Self = Failure(());
}

// ----------------------------------------------------------------------
// Trait impls
// ----------------------------------------------------------------------

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Outcome<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => write!(f, "Success({value})"),
            Failure(error) => write!(f, "Failure({error})"),
        }
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<E, T> IntoIterator for Outcome<E, T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.success().into_iter()
    }
}

impl<'a, E, T> IntoIterator for &'a Outcome<E, T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
