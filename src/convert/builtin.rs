//! Built-in conversion instances.
//!
//! | type | to `Outcome` | from `Outcome` |
//! |---|---|---|
//! | `Either<L, R>` | `Left` ⇒ `Failure`, `Right` ⇒ `Success` | mirror |
//! | `Caught<T>` | `Panicked` ⇒ `Failure(PanicPayload)` | only from `Outcome<PanicPayload, T>` |
//! | `bool` | `true` ⇒ `Success(())`, `false` ⇒ `Failure(())` | from `Outcome<(), ()>` |
//! | `Result<T, E>` | `Err` ⇒ `Failure`, `Ok` ⇒ `Success` | mirror |
//! | `Option<T>` | `None` ⇒ `Failure(())` | none |

use super::{FromOutcome, ToOutcome};
use crate::types::Outcome::{self, Failure, Success};
use crate::types::{Caught, Either, PanicPayload};

impl<L, R> ToOutcome<L, R> for Either<L, R> {
    #[inline]
    fn to_outcome(self) -> Outcome<L, R> {
        match self {
            Self::Left(left) => Failure(left),
            Self::Right(right) => Success(right),
        }
    }
}

impl<L, R> FromOutcome<L, R> for Either<L, R> {
    #[inline]
    fn from_outcome(outcome: Outcome<L, R>) -> Self {
        match outcome {
            Success(right) => Self::Right(right),
            Failure(left) => Self::Left(left),
        }
    }
}

impl<T> ToOutcome<PanicPayload, T> for Caught<T> {
    #[inline]
    fn to_outcome(self) -> Outcome<PanicPayload, T> {
        match self {
            Self::Returned(value) => Success(value),
            Self::Panicked(payload) => Failure(payload),
        }
    }
}

impl<T> FromOutcome<PanicPayload, T> for Caught<T> {
    #[inline]
    fn from_outcome(outcome: Outcome<PanicPayload, T>) -> Self {
        match outcome {
            Success(value) => Self::Returned(value),
            Failure(payload) => Self::Panicked(payload),
        }
    }
}

impl ToOutcome<(), ()> for bool {
    #[inline]
    fn to_outcome(self) -> Outcome<(), ()> {
        if self { Success(()) } else { Failure(()) }
    }
}

impl FromOutcome<(), ()> for bool {
    #[inline]
    fn from_outcome(outcome: Outcome<(), ()>) -> Self {
        outcome.is_success()
    }
}

impl<T, E> ToOutcome<E, T> for Result<T, E> {
    #[inline]
    fn to_outcome(self) -> Outcome<E, T> {
        self.into()
    }
}

impl<T, E> FromOutcome<E, T> for Result<T, E> {
    #[inline]
    fn from_outcome(outcome: Outcome<E, T>) -> Self {
        outcome.into_result()
    }
}

impl<T> ToOutcome<(), T> for Option<T> {
    #[inline]
    fn to_outcome(self) -> Outcome<(), T> {
        self.map_or(Failure(()), Success)
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
    fn either_maps_left_to_failure() {
        init_test("either_maps_left_to_failure");
        let left: Either<&str, i32> = Either::Left("no");
        assert_eq!(Outcome::from_value(left), Failure("no"));
        let right: Either<&str, i32> = Either::Right(1);
        assert_eq!(Outcome::from_value(right), Success(1));

        let back: Either<&str, i32> = Outcome::<&str, i32>::Failure("no").convert();
        assert_eq!(back, Either::Left("no"));
        let back: Either<&str, i32> = Outcome::<&str, i32>::Success(1).convert();
        assert_eq!(back, Either::Right(1));
        crate::test_complete!("either_maps_left_to_failure");
    }

    #[test]
    fn caught_panic_becomes_failure() {
        init_test("caught_panic_becomes_failure");
        let caught: Caught<i32> = Caught::run(|| panic!("kaboom"));
        let o = Outcome::from_value(caught);
        crate::assert_with_log!(
            o == Failure(PanicPayload::new("kaboom")),
            "panicked",
            "Failure(kaboom)",
            o
        );

        let ok = Caught::run(|| 5);
        assert_eq!(Outcome::from_value(ok.clone()), Success(5));
        let back: Caught<i32> = Outcome::from_value(ok.clone()).convert();
        assert_eq!(back, ok);
        crate::test_complete!("caught_panic_becomes_failure");
    }

    #[test]
    fn bool_maps_to_unit_outcomes() {
        init_test("bool_maps_to_unit_outcomes");
        assert_eq!(Outcome::from_value(true), Outcome::<(), ()>::UNIT_SUCCESS);
        assert_eq!(Outcome::from_value(false), Outcome::<(), ()>::UNIT_FAILURE);
        assert!(Outcome::<(), ()>::UNIT_SUCCESS.convert::<bool>());
        assert!(!Outcome::<(), ()>::UNIT_FAILURE.convert::<bool>());
        crate::test_complete!("bool_maps_to_unit_outcomes");
    }

    #[test]
    fn result_and_option_instances() {
        init_test("result_and_option_instances");
        assert_eq!(Outcome::from_value(Ok::<i32, &str>(3)), Success(3));
        assert_eq!(Outcome::from_value(Err::<i32, &str>("e")), Failure("e"));
        let back: Result<i32, &str> = Outcome::<&str, i32>::Failure("e").convert();
        assert_eq!(back, Err("e"));

        assert_eq!(Outcome::from_value(Some(4)), Success(4));
        assert_eq!(Outcome::from_value(None::<i32>), Failure(()));
        crate::test_complete!("result_and_option_instances");
    }
}
