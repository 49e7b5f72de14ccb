//! Core data types.
//!
//! - [`outcome`]: the `Outcome<E, T>` sum type, its predicates and extraction
//! - [`either`]: unbiased two-branch union
//! - [`panic`]: captured panics (`Caught<T>`, `PanicPayload`)

pub mod either;
pub mod outcome;
pub mod panic;

pub use either::Either;
pub use outcome::Outcome;
pub use panic::{Caught, PanicPayload};
