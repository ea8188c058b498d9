//! Core traits shared by the outcome types.
//!
//! - [`Fallible`]: the capability common to [`Outcome`](crate::Outcome),
//!   [`Result`] and [`MultiResult`](crate::MultiResult): checking the variant
//!   and collapsing into an `Outcome`.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{is_ok, Fallible};
//! use result_rail::Outcome;
//!
//! let parsed: Result<i32, std::num::ParseIntError> = "42".parse();
//! assert!(is_ok(&parsed));
//! assert_eq!(parsed.into_outcome(), Outcome::Ok(42));
//! ```

pub mod fallible;

pub use fallible::{is_err, is_ok, Fallible};
