//! Future wrapper that turns a panic inside `poll` into a value.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::catch::Payload;

pin_project! {
    /// Polls the inner future inside `catch_unwind`.
    ///
    /// Resolves to `Ok(output)` or, if polling panicked, to `Err(payload)`.
    #[must_use = "futures do nothing unless polled"]
    pub(crate) struct CatchUnwind<Fut> {
        #[pin]
        future: Fut,
        done: bool,
    }
}

impl<Fut> CatchUnwind<Fut> {
    #[inline]
    pub(crate) fn new(future: Fut) -> Self {
        Self { future, done: false }
    }
}

impl<Fut: Future> Future for CatchUnwind<Fut> {
    type Output = Result<Fut::Output, Payload>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let future = this.future;

        let polled = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(output)) => Ok(output),
            Err(payload) => Err(payload),
        };
        *this.done = true;
        Poll::Ready(polled)
    }
}

impl<Fut: Future> FusedFuture for CatchUnwind<Fut> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
