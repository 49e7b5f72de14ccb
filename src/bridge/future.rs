//! Asynchronous transposition.
//!
//! An `Outcome` holding a pending computation in one slot becomes a pending
//! computation that resolves to an `Outcome`. The returned future completes
//! exactly when the wrapped future completes and adds no buffering. Dropping
//! it drops the wrapped future, so cancellation passes straight through.
//!
//! The reverse direction does not exist: whether a pending `Outcome` is a
//! success is unknown until it resolves.

use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll, ready};

use pin_project::pin_project;

use crate::tracing_compat::trace;
use crate::types::Outcome::{self, Failure, Success};

/// Future for [`Outcome::transpose_async`].
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
#[pin_project]
pub struct TransposeAsync<E, F> {
    #[pin]
    pending: Option<F>,
    failure: Option<E>,
}

impl<E, F: Future> Future for TransposeAsync<E, F> {
    type Output = Outcome<E, F::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        if let Some(future) = this.pending.as_mut().as_pin_mut() {
            let value = ready!(future.poll(cx));
            this.pending.set(None);
            trace!(variant = "success", "pending outcome resolved");
            return Poll::Ready(Success(value));
        }
        let error = this
            .failure
            .take()
            .expect("TransposeAsync polled after completion");
        trace!(variant = "failure", "pending outcome resolved");
        Poll::Ready(Failure(error))
    }
}

/// Future for [`Outcome::transpose_async_failure`].
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
#[pin_project]
pub struct TransposeAsyncFailure<F, T> {
    #[pin]
    pending: Option<F>,
    success: Option<T>,
}

impl<F: Future, T> Future for TransposeAsyncFailure<F, T> {
    type Output = Outcome<F::Output, T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        if let Some(future) = this.pending.as_mut().as_pin_mut() {
            let error = ready!(future.poll(cx));
            this.pending.set(None);
            trace!(variant = "failure", "pending outcome resolved");
            return Poll::Ready(Failure(error));
        }
        let value = this
            .success
            .take()
            .expect("TransposeAsyncFailure polled after completion");
        trace!(variant = "success", "pending outcome resolved");
        Poll::Ready(Success(value))
    }
}

impl<E, F: IntoFuture> Outcome<E, F> {
    /// Turns `Outcome<E, impl Future<Output = T>>` into a future of
    /// `Outcome<E, T>`.
    ///
    /// A `Failure` resolves on the first poll.
    ///
    /// ```
    /// use outcomes::{Failure, Outcome, Success};
    ///
    /// let pending: Outcome<&str, _> = Success(async { 21 * 2 });
    /// assert_eq!(futures_lite::future::block_on(pending.transpose_async()), Success(42));
    /// ```
    pub fn transpose_async(self) -> TransposeAsync<E, F::IntoFuture> {
        match self {
            Success(future) => TransposeAsync {
                pending: Some(future.into_future()),
                failure: None,
            },
            Failure(error) => TransposeAsync {
                pending: None,
                failure: Some(error),
            },
        }
    }
}

impl<F: IntoFuture, T> Outcome<F, T> {
    /// Turns `Outcome<impl Future<Output = E>, T>` into a future of
    /// `Outcome<E, T>`.
    pub fn transpose_async_failure(self) -> TransposeAsyncFailure<F::IntoFuture, T> {
        match self {
            Failure(future) => TransposeAsyncFailure {
                pending: Some(future.into_future()),
                success: None,
            },
            Success(value) => TransposeAsyncFailure {
                pending: None,
                success: Some(value),
            },
        }
    }
}
