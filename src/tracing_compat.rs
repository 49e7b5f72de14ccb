//! Logging facade over `tracing`.
//!
//! With the `tracing-integration` feature the macros are re-exports of the
//! `tracing` macros. Without it they expand to nothing, so call sites carry no
//! cost and no dependency.

#[cfg(feature = "tracing-integration")]
pub(crate) use tracing::{debug, error, trace};

#[cfg(not(feature = "tracing-integration"))]
macro_rules! noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop as debug;
#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop as error;
#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop as trace;
