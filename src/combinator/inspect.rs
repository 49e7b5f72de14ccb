//! Side effects, quantifiers and filters.

use crate::types::Outcome::{self, Failure, Success};

impl<E, T> Outcome<E, T> {
    /// Calls `f` with a reference to the success payload, then returns `self`.
    ///
    /// ```
    /// use outcomes::{Outcome, Success};
    ///
    /// let mut seen = Vec::new();
    /// let o: Outcome<&str, i32> = Success(4);
    /// let o = o.inspect(|v| seen.push(*v)).map(|v| v + 1);
    /// assert_eq!(o, Success(5));
    /// assert_eq!(seen, [4]);
    /// ```
    #[inline]
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the failure payload, then returns `self`.
    #[inline]
    pub fn inspect_failure(self, f: impl FnOnce(&E)) -> Self {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Vacuously `true` for a `Failure`, else `pred` on the success payload.
    #[inline]
    pub fn forall(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Success(value) => pred(value),
            Failure(_) => true,
        }
    }

    /// Vacuously `true` for a `Success`, else `pred` on the failure payload.
    #[inline]
    pub fn forall_failure(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Failure(error) => pred(error),
            Success(_) => true,
        }
    }

    /// Vacuously `false` for a `Failure`, else `pred` on the success payload.
    #[inline]
    pub fn exists(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Success(value) => pred(value),
            Failure(_) => false,
        }
    }

    /// Vacuously `false` for a `Success`, else `pred` on the failure payload.
    #[inline]
    pub fn exists_failure(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Failure(error) => pred(error),
            Success(_) => false,
        }
    }

    /// Turns a `Success` whose payload fails `pred` into `Failure(default_failure)`.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let o: Outcome<&str, i32> = Success(-3);
    /// assert_eq!(o.filter_or_else(|v| *v >= 0, "negative"), Failure("negative"));
    /// ```
    #[inline]
    pub fn filter_or_else(self, pred: impl FnOnce(&T) -> bool, default_failure: E) -> Self {
        match self {
            Success(value) => {
                if pred(&value) {
                    Success(value)
                } else {
                    Failure(default_failure)
                }
            }
            failure => failure,
        }
    }

    /// Turns a `Failure` whose payload fails `pred` into `Success(default_success)`.
    #[inline]
    pub fn filter_failure_or_else(self, pred: impl FnOnce(&E) -> bool, default_success: T) -> Self {
        match self {
            Failure(error) => {
                if pred(&error) {
                    Failure(error)
                } else {
                    Success(default_success)
                }
            }
            success => success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    type O = Outcome<&'static str, i32>;

    #[test]
    fn inspect_runs_only_on_matching_variant() {
        init_test("inspect_runs_only_on_matching_variant");
        let calls = Cell::new(0);
        let o = O::Success(1).inspect(|_| calls.set(calls.get() + 1));
        assert_eq!(o, Success(1));
        let o = O::Failure("e").inspect(|_| calls.set(calls.get() + 1));
        assert_eq!(o, Failure("e"));
        crate::assert_with_log!(calls.get() == 1, "inspect calls", 1, calls.get());

        let failures = Cell::new(0);
        let _ = O::Failure("e").inspect_failure(|_| failures.set(failures.get() + 1));
        let _ = O::Success(1).inspect_failure(|_| failures.set(failures.get() + 1));
        crate::assert_with_log!(failures.get() == 1, "inspect_failure calls", 1, failures.get());
        crate::test_complete!("inspect_runs_only_on_matching_variant");
    }

    #[test]
    fn quantifiers_are_vacuous_on_other_variant() {
        init_test("quantifiers_are_vacuous_on_other_variant");
        assert!(O::Failure("e").forall(|_| false));
        assert!(O::Success(2).forall(|v| *v == 2));
        assert!(!O::Success(3).forall(|v| *v == 2));
        assert!(O::Success(1).forall_failure(|_| false));
        assert!(!O::Failure("e").forall_failure(|e| e.is_empty()));

        assert!(!O::Failure("e").exists(|_| true));
        assert!(O::Success(2).exists(|v| *v == 2));
        assert!(!O::Success(1).exists_failure(|_| true));
        assert!(O::Failure("e").exists_failure(|e| *e == "e"));
        crate::test_complete!("quantifiers_are_vacuous_on_other_variant");
    }

    #[test]
    fn filter_or_else_replaces_rejected_success() {
        init_test("filter_or_else_replaces_rejected_success");
        assert_eq!(O::Success(4).filter_or_else(|v| *v > 0, "neg"), Success(4));
        assert_eq!(O::Success(-4).filter_or_else(|v| *v > 0, "neg"), Failure("neg"));
        assert_eq!(O::Failure("orig").filter_or_else(|_| false, "neg"), Failure("orig"));
        crate::test_complete!("filter_or_else_replaces_rejected_success");
    }

    #[test]
    fn filter_failure_or_else_replaces_rejected_failure() {
        init_test("filter_failure_or_else_replaces_rejected_failure");
        assert_eq!(
            O::Failure("fatal").filter_failure_or_else(|e| *e == "fatal", 0),
            Failure("fatal")
        );
        assert_eq!(
            O::Failure("minor").filter_failure_or_else(|e| *e == "fatal", 0),
            Success(0)
        );
        assert_eq!(O::Success(5).filter_failure_or_else(|_| false, 0), Success(5));
        crate::test_complete!("filter_failure_or_else_replaces_rejected_failure");
    }
}
