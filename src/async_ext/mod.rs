//! Async adapters and combinators (requires the `async` feature).
//!
//! - [`as_async_result()`] is the async exception-to-outcome adapter.
//! - `Outcome::map_async`, `Outcome::and_then_async`, `Outcome::pipe_async` and
//!   `MultiResult::map_async` are defined here as inherent methods.
//! - [`rail_do_async!`](crate::rail_do_async) composes async steps.
//!
//! No runtime is assumed; the futures only suspend where the wrapped futures do.

mod as_async_result;
mod catch_unwind;
mod outcome_async;

pub use as_async_result::{as_async_result, AsAsyncResult, CatchingAsync, CaughtFuture};
