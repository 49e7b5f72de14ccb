//! Combinators over [`Outcome`](crate::Outcome).
//!
//! This module provides the combinator algebra as inherent methods:
//!
//! - [`transform`]: `map`, `map_failure`, `bimap`, the `map_or` family, `fold` and `flatten`
//! - [`logic`]: `and`, `or` and the monadic `and_then`/`or_else`
//! - [`inspect`]: side-effecting taps, `forall`/`exists` quantifiers and filters
//! - [`transpose`]: swapping an `Option` held in one slot to the outside
//! - [`laws`]: the catalog of algebraic laws with an executable check per law

pub mod inspect;
pub mod laws;
pub mod logic;
pub mod transform;
pub mod transpose;

pub use laws::{Law, LawClassification, LawEntry, law_sheet};
