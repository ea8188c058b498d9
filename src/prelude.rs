//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use result_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rail_do!`]
//! - **Types**: [`Outcome`], [`MultiResult`], [`UnwrapError`], [`FilterError`]
//! - **Traits**: [`Fallible`]
//! - **Functions**: [`branching`], and with `std`, `as_result` and `raise`
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn half(x: i32) -> Outcome<i32, String> {
//!     if x % 2 == 0 {
//!         Outcome::Ok(x / 2)
//!     } else {
//!         Outcome::Err(format!("{x} is odd"))
//!     }
//! }
//!
//! let out = rail_do! {
//!     a <- half(8);
//!     b <- half(a);
//!     yield a + b
//! };
//! assert_eq!(out, Outcome::Ok(6));
//! ```

pub use crate::rail_do;

pub use crate::convert::branching;
pub use crate::traits::Fallible;
pub use crate::types::{FilterError, MultiResult, Outcome, UnwrapError};

#[cfg(feature = "std")]
pub use crate::catch::{as_result, raise, Panicked};
