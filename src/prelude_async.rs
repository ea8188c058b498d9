//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async adapter and the async do-notation macro.
//!
//! # Usage
//!
//! ```
//! use result_rail::prelude_async::*;
//!
//! async fn fetch(id: u32) -> Outcome<u32, String> {
//!     Outcome::Ok(id * 10)
//! }
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let out = runtime.block_on(rail_do_async! {
//!     a <- fetch(1);
//!     b <- fetch(a);
//!     yield b
//! });
//! assert_eq!(out, Outcome::Ok(100));
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{as_async_result, AsAsyncResult, CatchingAsync, CaughtFuture};
pub use crate::rail_do_async;
