//! Batch operations over collections of outcomes.

use core::iter::FilterMap;

use crate::types::Outcome::{self, Failure, Success};

/// Splits outcomes into success payloads and failure payloads.
///
/// Both buckets keep the relative order of the input. The caller picks the
/// container for each bucket, so a `VecDeque` input can partition into
/// `VecDeque`s.
///
/// ```
/// use outcomes::{Failure, Success, partition_outcomes};
///
/// let batch = [Success(1), Failure("A"), Success(2), Success(3), Failure("B")];
/// let (ok, failed): (Vec<i32>, Vec<&str>) = partition_outcomes(batch);
/// assert_eq!(ok, [1, 2, 3]);
/// assert_eq!(failed, ["A", "B"]);
/// ```
pub fn partition_outcomes<I, E, T, S, F>(outcomes: I) -> (S, F)
where
    I: IntoIterator<Item = Outcome<E, T>>,
    S: Default + Extend<T>,
    F: Default + Extend<E>,
{
    let mut successes = S::default();
    let mut failures = F::default();
    for outcome in outcomes {
        match outcome {
            Success(value) => successes.extend(Some(value)),
            Failure(error) => failures.extend(Some(error)),
        }
    }
    (successes, failures)
}

/// Iterator adapter yielding success payloads.
pub type Successes<I, E, T> = FilterMap<I, fn(Outcome<E, T>) -> Option<T>>;

/// Iterator adapter yielding failure payloads.
pub type Failures<I, E, T> = FilterMap<I, fn(Outcome<E, T>) -> Option<E>>;

/// Extension methods for iterators of outcomes.
pub trait OutcomeIteratorExt<E, T>: Iterator<Item = Outcome<E, T>> + Sized {
    /// See [`partition_outcomes`].
    fn partition_outcomes<S, F>(self) -> (S, F)
    where
        S: Default + Extend<T>,
        F: Default + Extend<E>,
    {
        partition_outcomes(self)
    }

    /// Yields the success payloads, skipping failures.
    fn successes(self) -> Successes<Self, E, T> {
        self.filter_map(Outcome::success as fn(Outcome<E, T>) -> Option<T>)
    }

    /// Yields the failure payloads, skipping successes.
    fn failures(self) -> Failures<Self, E, T> {
        self.filter_map(Outcome::failure as fn(Outcome<E, T>) -> Option<E>)
    }
}

impl<I, E, T> OutcomeIteratorExt<E, T> for I where I: Iterator<Item = Outcome<E, T>> {}

/// Collects success payloads, stopping at the first failure.
///
/// ```
/// use outcomes::{Failure, Outcome, Success};
///
/// let all: Outcome<&str, Vec<i32>> = [Success(1), Success(2)].into_iter().collect();
/// assert_eq!(all, Success(vec![1, 2]));
///
/// let first_bad: Outcome<&str, Vec<i32>> =
///     [Success(1), Failure("x"), Failure("y")].into_iter().collect();
/// assert_eq!(first_bad, Failure("x"));
/// ```
impl<E, T, V> FromIterator<Outcome<E, T>> for Outcome<E, V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<E, T>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Success(value) => Some(value),
                Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();
        match failure {
            Some(error) => Failure(error),
            None => Success(collected),
        }
    }
}
