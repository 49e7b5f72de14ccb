//! Law sheet for the outcome combinator algebra.
//!
//! This module is the formal catalog of every algebraic law the combinators
//! commit to, plus an executable check for each one. The property tests in
//! `tests/algebraic_laws.rs` drive these checks with generated inputs.
//!
//! # Law Sheet
//!
//! ## Functor (Unconditional)
//!
//! | Law | Statement |
//! |-----|-----------|
//! | FUNCTOR-ID | `o.map(id) = o` |
//! | FUNCTOR-COMP | `o.map(f).map(g) = o.map(g ∘ f)` |
//! | FUNCTOR-FAILURE-ID | `o.map_failure(id) = o` |
//!
//! ## Monad (Unconditional)
//!
//! | Law | Statement |
//! |-----|-----------|
//! | MONAD-LEFT-ID | `Success(x).and_then(f) = f(x)` |
//! | MONAD-RIGHT-ID | `o.and_then(Success) = o` |
//! | MONAD-ASSOC | `o.and_then(f).and_then(g) = o.and_then(x ↦ f(x).and_then(g))` |
//! | DUAL-LEFT-ID | `Failure(e).or_else(h) = h(e)` |
//! | DUAL-RIGHT-ID | `o.or_else(Failure) = o` |
//!
//! ## Boolean (Unconditional)
//!
//! | Law | Statement |
//! |-----|-----------|
//! | AND-EAGER | `a.and(b) = a.and_then(_ ↦ b)` |
//! | OR-EAGER | `a.or(b) = a.or_else(_ ↦ b)` |
//!
//! ## Structure
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | FLATTEN-BIND | `o.flatten() = o.and_then(id)` | Unconditional |
//! | TRANSPOSE-INVERSE | `o.transpose().transpose_success() = o` | Unconditional |
//! | TRANSPOSE-ELEMENT | `o.transpose().map(p ↦ p.map(Some)) = Some(o)` | Unless `o = Success(None)` |
//! | PARTITION-ORDER | partitioning keeps relative order per bucket | Unconditional |
//! | CONVERSION-ROUND-TRIP | `V::from_outcome(v.to_outcome()) = v` | Per instance |

use core::convert::identity;

use crate::bridge::collect::partition_outcomes;
use crate::bridge::option::OptionOutcomeExt;
use crate::convert::{FromOutcome, ToOutcome};
use crate::types::Outcome::{self, Failure, Success};

/// Every committed algebraic law, identified by name.
///
/// Each variant maps to a row in the law table above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `o.map(id) = o`.
    FunctorIdentity,
    /// `o.map(f).map(g) = o.map(g ∘ f)`.
    FunctorComposition,
    /// `o.map_failure(id) = o`.
    FunctorFailureIdentity,
    /// `Success(x).and_then(f) = f(x)`.
    MonadLeftIdentity,
    /// `o.and_then(Success) = o`.
    MonadRightIdentity,
    /// `o.and_then(f).and_then(g) = o.and_then(x ↦ f(x).and_then(g))`.
    MonadAssociativity,
    /// `Failure(e).or_else(h) = h(e)`.
    DualLeftIdentity,
    /// `o.or_else(Failure) = o`.
    DualRightIdentity,
    /// `a.and(b) = a.and_then(_ ↦ b)`.
    AndIsEagerAndThen,
    /// `a.or(b) = a.or_else(_ ↦ b)`.
    OrIsEagerOrElse,
    /// `o.flatten() = o.and_then(id)`.
    FlattenIsBindIdentity,
    /// `o.transpose().transpose_success() = o`.
    TransposeInverse,
    /// `o.transpose().map(p ↦ p.map(Some)) = Some(o)` unless `o = Success(None)`.
    TransposeElementwise,
    /// Partition keeps the relative order of each bucket.
    PartitionOrder,
    /// `V::from_outcome(v.to_outcome()) = v` for a registry instance `V`.
    ConversionRoundTrip,
}

/// Whether a law holds for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawClassification {
    /// Holds for all inputs.
    Unconditional,
    /// Holds for all inputs except a named degenerate case.
    ConditionalOnInput,
    /// Holds for each conversion instance that pairs a `ToOutcome` with its
    /// mirroring `FromOutcome`.
    PerInstance,
}

/// A single entry in the law sheet.
#[derive(Debug, Clone)]
pub struct LawEntry {
    /// The law identifier.
    pub law: Law,
    /// How broadly the law applies.
    pub classification: LawClassification,
    /// Human-readable statement of the law.
    pub statement: &'static str,
}

/// The complete law sheet.
#[must_use]
pub fn law_sheet() -> Vec<LawEntry> {
    use LawClassification::{ConditionalOnInput, PerInstance, Unconditional};

    let entry = |law, classification, statement| LawEntry {
        law,
        classification,
        statement,
    };
    vec![
        entry(Law::FunctorIdentity, Unconditional, "o.map(id) = o"),
        entry(
            Law::FunctorComposition,
            Unconditional,
            "o.map(f).map(g) = o.map(g . f)",
        ),
        entry(
            Law::FunctorFailureIdentity,
            Unconditional,
            "o.map_failure(id) = o",
        ),
        entry(
            Law::MonadLeftIdentity,
            Unconditional,
            "Success(x).and_then(f) = f(x)",
        ),
        entry(
            Law::MonadRightIdentity,
            Unconditional,
            "o.and_then(Success) = o",
        ),
        entry(
            Law::MonadAssociativity,
            Unconditional,
            "o.and_then(f).and_then(g) = o.and_then(x -> f(x).and_then(g))",
        ),
        entry(
            Law::DualLeftIdentity,
            Unconditional,
            "Failure(e).or_else(h) = h(e)",
        ),
        entry(
            Law::DualRightIdentity,
            Unconditional,
            "o.or_else(Failure) = o",
        ),
        entry(
            Law::AndIsEagerAndThen,
            Unconditional,
            "a.and(b) = a.and_then(_ -> b)",
        ),
        entry(
            Law::OrIsEagerOrElse,
            Unconditional,
            "a.or(b) = a.or_else(_ -> b)",
        ),
        entry(
            Law::FlattenIsBindIdentity,
            Unconditional,
            "o.flatten() = o.and_then(id)",
        ),
        entry(
            Law::TransposeInverse,
            Unconditional,
            "o.transpose().transpose_success() = o",
        ),
        entry(
            Law::TransposeElementwise,
            ConditionalOnInput,
            "o.transpose().map(p -> p.map(Some)) = Some(o) unless o = Success(None)",
        ),
        entry(
            Law::PartitionOrder,
            Unconditional,
            "partition keeps the relative order of successes and of failures",
        ),
        entry(
            Law::ConversionRoundTrip,
            PerInstance,
            "V::from_outcome(v.to_outcome()) = v",
        ),
    ]
}

/// Laws that hold for every input.
#[must_use]
pub fn unconditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification == LawClassification::Unconditional)
        .collect()
}

/// Laws with a side condition.
#[must_use]
pub fn conditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification != LawClassification::Unconditional)
        .collect()
}

// ============================================================================
// Executable checks
// ============================================================================

/// FUNCTOR-ID.
pub fn functor_identity<E, T>(o: &Outcome<E, T>) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    o.clone().map(identity) == *o
}

/// FUNCTOR-COMP.
pub fn functor_composition<E, T, U, V>(
    o: &Outcome<E, T>,
    f: impl Fn(T) -> U,
    g: impl Fn(U) -> V,
) -> bool
where
    E: Clone + PartialEq,
    T: Clone,
    V: PartialEq,
{
    o.clone().map(&f).map(&g) == o.clone().map(|x| g(f(x)))
}

/// FUNCTOR-FAILURE-ID.
pub fn functor_failure_identity<E, T>(o: &Outcome<E, T>) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    o.clone().map_failure(identity) == *o
}

/// MONAD-LEFT-ID.
pub fn monad_left_identity<E, T, U>(x: T, f: impl Fn(T) -> Outcome<E, U>) -> bool
where
    E: PartialEq,
    T: Clone,
    U: PartialEq,
{
    Outcome::<E, T>::Success(x.clone()).and_then(&f) == f(x)
}

/// MONAD-RIGHT-ID.
pub fn monad_right_identity<E, T>(o: &Outcome<E, T>) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    o.clone().and_then(Success) == *o
}

/// MONAD-ASSOC.
pub fn monad_associativity<E, T, U, V>(
    o: &Outcome<E, T>,
    f: impl Fn(T) -> Outcome<E, U>,
    g: impl Fn(U) -> Outcome<E, V>,
) -> bool
where
    E: Clone + PartialEq,
    T: Clone,
    V: PartialEq,
{
    o.clone().and_then(&f).and_then(&g) == o.clone().and_then(|x| f(x).and_then(&g))
}

/// DUAL-LEFT-ID.
pub fn dual_left_identity<E, T, F>(e: E, h: impl Fn(E) -> Outcome<F, T>) -> bool
where
    E: Clone,
    F: PartialEq,
    T: PartialEq,
{
    Outcome::<E, T>::Failure(e.clone()).or_else(&h) == h(e)
}

/// DUAL-RIGHT-ID.
pub fn dual_right_identity<E, T>(o: &Outcome<E, T>) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    o.clone().or_else(Failure) == *o
}

/// AND-EAGER.
pub fn and_is_eager_and_then<E, T, U>(a: &Outcome<E, T>, b: &Outcome<E, U>) -> bool
where
    E: Clone + PartialEq,
    T: Clone,
    U: Clone + PartialEq,
{
    a.clone().and(b.clone()) == a.clone().and_then(|_| b.clone())
}

/// OR-EAGER.
pub fn or_is_eager_or_else<E, F, T>(a: &Outcome<E, T>, b: &Outcome<F, T>) -> bool
where
    E: Clone,
    F: Clone + PartialEq,
    T: Clone + PartialEq,
{
    a.clone().or(b.clone()) == a.clone().or_else(|_| b.clone())
}

/// FLATTEN-BIND.
pub fn flatten_is_bind_identity<E, T>(o: &Outcome<E, Outcome<E, T>>) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    o.clone().flatten() == o.clone().and_then(identity)
}

/// TRANSPOSE-INVERSE.
pub fn transpose_inverse<E, T>(o: &Outcome<E, Option<T>>) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    o.clone().transpose().transpose_success() == *o
}

/// TRANSPOSE-ELEMENT. Vacuously true for `Success(None)`, where the
/// transpose is `None` instead.
pub fn transpose_elementwise<E, T>(o: &Outcome<E, Option<T>>) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    match o {
        Success(None) => o.clone().transpose().is_none(),
        _ => o.clone().transpose().map(|inner| inner.map(Some)).as_ref() == Some(o),
    }
}

/// PARTITION-ORDER.
pub fn partition_keeps_order<E, T>(outcomes: &[Outcome<E, T>]) -> bool
where
    E: Clone + PartialEq,
    T: Clone + PartialEq,
{
    let (successes, failures): (Vec<T>, Vec<E>) = partition_outcomes(outcomes.iter().cloned());
    let expected_successes: Vec<T> = outcomes
        .iter()
        .filter_map(|o| o.as_ref().success().cloned())
        .collect();
    let expected_failures: Vec<E> = outcomes
        .iter()
        .filter_map(|o| o.as_ref().failure().cloned())
        .collect();
    successes == expected_successes && failures == expected_failures
}

/// CONVERSION-ROUND-TRIP for the instance pair implemented by `V`.
pub fn conversion_round_trip<E, T, V>(value: &V) -> bool
where
    V: ToOutcome<E, T> + FromOutcome<E, T> + Clone + PartialEq,
{
    V::from_outcome(value.clone().to_outcome()) == *value
}

// ============================================================================
// Tests
// ============================================================================
