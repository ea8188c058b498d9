//! Async combinators on [`Outcome`] and [`MultiResult`].
//!
//! Each combinator is an `async fn`: nothing runs until the returned future is
//! polled, and dropping it drops whatever future the closure produced.

use core::future::Future;

use super::catch_unwind::CatchUnwind;
use crate::catch::{catch_panic, caught, Panicked};
use crate::types::{Members, MultiResult, Outcome};

/// Runs the future built by `op`, catching panics both while building it and
/// while polling it.
async fn run_caught<V, U, F, Fut>(value: V, op: F) -> Result<U, Panicked>
where
    F: FnOnce(V) -> Fut,
    Fut: Future<Output = U>,
{
    let future = catch_panic(move || op(value))?;
    CatchUnwind::new(future).await.map_err(caught)
}

impl<T, E> Outcome<T, E> {
    /// Awaits `op` on the success value; an `Err` is passed through without
    /// calling it.
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let doubled = Outcome::<i32, ()>::Ok(21).map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(doubled, Outcome::Ok(42));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(op(value).await),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Awaits `op` on the success value and returns its outcome.
    pub async fn and_then_async<U, F, Fut>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Ok(value) => op(value).await,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Async twin of [`pipe`](Self::pipe): a panic while calling `op` or while
    /// polling its future becomes `Err(Panicked.into())`.
    pub async fn pipe_async<U, F, Fut>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
        E: From<Panicked>,
    {
        match self {
            Outcome::Ok(value) => match run_caught(value, op).await {
                Ok(mapped) => Outcome::Ok(mapped),
                Err(panicked) => Outcome::Err(panicked.into()),
            },
            Outcome::Err(error) => Outcome::Err(error),
        }
    }
}

impl<R: Members> MultiResult<R> {
    /// Async twin of [`map`](Self::map).
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let sum = Outcome::<i32, String>::Ok(2)
    ///     .join(Outcome::Ok(3))
    ///     .map_async(|(a, b)| async move { a + b })
    ///     .await;
    /// assert_eq!(sum, Outcome::Ok(5));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, op: F) -> Outcome<U, R::Error>
    where
        F: FnOnce(R::Values) -> Fut,
        Fut: Future<Output = U>,
        R::Error: From<Panicked>,
    {
        match self.into_results().into_values() {
            Ok(values) => match run_caught(values, op).await {
                Ok(mapped) => Outcome::Ok(mapped),
                Err(panicked) => Outcome::Err(panicked.into()),
            },
            Err((_, error)) => Outcome::Err(error),
        }
    }
}
