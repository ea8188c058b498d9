//! Asynchronous exception-to-outcome adapter.

use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use super::catch_unwind::CatchUnwind;
use crate::catch::{ConfigError, Kinds};
use crate::types::Outcome;

/// Builder for an asynchronous exception-to-outcome wrapper.
///
/// The async twin of [`AsResult`](crate::catch::AsResult): the wrapped
/// function returns a future, and kinds raised while creating or polling that
/// future come back as `Err`.
///
/// # Examples
///
/// ```
/// use result_rail::async_ext::as_async_result;
/// use result_rail::catch::raise;
/// use result_rail::Outcome;
///
/// #[derive(Debug, PartialEq)]
/// struct ValueError;
///
/// async fn bad(_value: i32) -> i32 {
///     raise(ValueError)
/// }
///
/// let wrapped = as_async_result::<ValueError>().kind::<ValueError>().wrap(bad).unwrap();
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// assert_eq!(runtime.block_on(wrapped.call(123)), Outcome::Err(ValueError));
/// ```
#[derive(Debug)]
pub struct AsAsyncResult<E> {
    kinds: Kinds<E>,
}

/// Starts configuring an async wrapper whose caught errors are converted into `E`.
#[inline]
pub fn as_async_result<E>() -> AsAsyncResult<E> {
    AsAsyncResult::new()
}

impl<E> AsAsyncResult<E> {
    /// Creates a builder with no registered kinds.
    #[inline]
    pub fn new() -> Self {
        Self { kinds: Kinds::new() }
    }

    /// Registers `K` as a caught kind. Kinds are tried in registration order.
    #[inline]
    pub fn kind<K>(mut self) -> Self
    where
        K: Into<E> + Send + 'static,
    {
        self.kinds.push::<K>();
        self
    }

    /// Returns the type names of the registered kinds.
    pub fn kind_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.names()
    }

    /// Wraps `op`, a function returning a future.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoErrorKinds`] if no kind was registered.
    pub fn wrap<F>(self, op: F) -> Result<CatchingAsync<F, E>, ConfigError> {
        self.kinds.validate()?;
        Ok(CatchingAsync { op, kinds: self.kinds })
    }
}

impl<E> Default for AsAsyncResult<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// An async function whose configured raised errors come back as `Err`.
pub struct CatchingAsync<F, E> {
    op: F,
    kinds: Kinds<E>,
}

impl<F, E> CatchingAsync<F, E> {
    /// Calls the wrapped function and returns a future of its outcome.
    ///
    /// # Panics
    ///
    /// Re-raises, unchanged, any panic whose payload is not a configured kind,
    /// either here or from the returned future's `poll`.
    pub fn call<A, Fut>(&self, args: A) -> CaughtFuture<Fut, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.op)(args))) {
            Ok(future) => CaughtFuture::running(future, self.kinds.clone()),
            Err(payload) => match self.kinds.classify(payload) {
                Ok(error) => CaughtFuture::caught(error, self.kinds.clone()),
                Err(unmatched) => panic::resume_unwind(unmatched),
            },
        }
    }

    /// Returns the unwrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.op
    }
}

impl<F, E> Debug for CatchingAsync<F, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatchingAsync")
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

pin_project! {
    /// Future returned by [`CatchingAsync::call`].
    ///
    /// # Cancel Safety
    ///
    /// Dropping it drops the wrapped future; nothing is caught or retained.
    #[must_use = "futures do nothing unless polled"]
    pub struct CaughtFuture<Fut, E> {
        #[pin]
        future: Option<CatchUnwind<Fut>>,
        caught: Option<E>,
        kinds: Kinds<E>,
    }
}

impl<Fut, E> CaughtFuture<Fut, E> {
    fn running(future: Fut, kinds: Kinds<E>) -> Self {
        Self { future: Some(CatchUnwind::new(future)), caught: None, kinds }
    }

    fn caught(error: E, kinds: Kinds<E>) -> Self {
        Self { future: None, caught: Some(error), kinds }
    }
}

impl<Fut: Future, E> Future for CaughtFuture<Fut, E> {
    type Output = Outcome<Fut::Output, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(error) = this.caught.take() {
            return Poll::Ready(Outcome::Err(error));
        }

        let polled = match this.future.as_mut().as_pin_mut() {
            Some(future) => match future.poll(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(polled) => polled,
            },
            None => panic!("CaughtFuture polled after completion"),
        };
        this.future.set(None);

        Poll::Ready(match polled {
            Ok(output) => Outcome::Ok(output),
            Err(payload) => this.kinds.recover(payload),
        })
    }
}

impl<Fut: Future, E> FusedFuture for CaughtFuture<Fut, E> {
    fn is_terminated(&self) -> bool {
        self.future.is_none() && self.caught.is_none()
    }
}
