//! Outcomes: a success-or-failure sum type with a lawful combinator algebra.
//!
//! # Overview
//!
//! [`Outcome<E, T>`](Outcome) is either `Success(T)` or `Failure(E)`. Failures
//! are ordinary data that flow through combinator chains; only the explicit
//! extraction operations (`unwrap`, `expect` and their failure-side mirrors)
//! panic, and only when called on the wrong variant.
//!
//! # Core Guarantees
//!
//! - **Total combinators**: every combinator returns an `Outcome`; none panics
//! - **Lawful**: `map` is a functor, `and_then` a monad with `Success` as unit (see [`combinator::laws`])
//! - **Open conversion**: any type joins the conversion registry by implementing [`ToOutcome`] or [`FromOutcome`]
//! - **Order preserving**: partitioning keeps the relative order of each bucket
//!
//! # Module Structure
//!
//! - [`types`]: `Outcome`, the `Either` union and captured panics
//! - [`combinator`]: transformation, boolean logic, inspection, transposition and the law sheet
//! - [`convert`]: the `ToOutcome`/`FromOutcome` registry and its built-in instances
//! - [`bridge`]: `Option` bridges, collection partitioning and async transposition
//! - [`error`](mod@error): the contract-violation error raised by the panicking extractors
//!
//! # Example
//!
//! ```
//! use outcomes::{Failure, Outcome, Success};
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     input.parse::<i32>().map_err(|e| format!("{input}: {e}")).into()
//! }
//!
//! let total = parse("20").and_then(|a| parse("22").map(|b| a + b));
//! assert_eq!(total, Success(42));
//! assert!(matches!(parse("x"), Failure(_)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

pub mod bridge;
pub mod combinator;
pub mod convert;
pub mod error;
pub mod types;

pub(crate) mod tracing_compat;

#[cfg(test)]
mod test_utils;

pub use bridge::collect::{OutcomeIteratorExt, partition_outcomes};
pub use bridge::future::{TransposeAsync, TransposeAsyncFailure};
pub use bridge::option::{OptionExt, OptionOutcomeExt};
pub use convert::{FromOutcome, ToOutcome};
pub use error::{ContractViolation, Variant};
pub use types::Outcome::{self, Failure, Success};
pub use types::{Caught, Either, PanicPayload};
