//! Bridges between `Outcome` and neighbouring shapes.
//!
//! - [`option`]: lifting `Option` into an outcome and back out of a slot
//! - [`collect`]: partitioning and collecting iterators of outcomes
//! - [`future`]: turning an outcome of a pending computation into a pending outcome

pub mod collect;
pub mod future;
pub mod option;
