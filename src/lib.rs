//! Railway-oriented outcomes: an explicit `Ok`/`Err` sum type with a full
//! combinator algebra, joins over several outcomes, do-notation, and adapters
//! that turn raised errors into values.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use result_rail::Outcome;
//!
//! fn sq(x: i32) -> Outcome<i32, i32> {
//!     Outcome::Ok(x * x)
//! }
//!
//! fn to_err(x: i32) -> Outcome<i32, i32> {
//!     Outcome::Err(x)
//! }
//!
//! assert_eq!(Outcome::Ok(2).and_then(sq).and_then(sq), Outcome::Ok(16));
//! assert_eq!(Outcome::Ok(2).and_then(sq).and_then(to_err), Outcome::Err(4));
//! assert_eq!(Outcome::Ok(2).and_then(to_err).and_then(sq), Outcome::Err(2));
//! ```
//!
//! ## Joining
//!
//! ```
//! use result_rail::Outcome;
//!
//! let joined = Outcome::<i32, String>::Ok(123).join(Outcome::<i32, _>::Err("bad".to_string()));
//! assert!(joined.is_err());
//! assert_eq!(joined.to_string(), "MultiResult(Ok(123), Err(bad))");
//! ```
//!
//! ## Catching raised errors
//!
//! ```
//! use result_rail::catch::{as_result, raise};
//! use result_rail::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! struct ValueError;
//!
//! let checked = as_result::<ValueError>()
//!     .kind::<ValueError>()
//!     .wrap(|x: i32| if x < 0 { raise(ValueError) } else { x })
//!     .unwrap();
//!
//! assert_eq!(checked.call(1), Outcome::Ok(1));
//! assert_eq!(checked.call(-1), Outcome::Err(ValueError));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome`, `Result` and `Option`
pub mod convert;
/// Do-notation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits shared by the outcome types
pub mod traits;
/// `Outcome`, `MultiResult` and their error types
pub mod types;

/// Raising typed errors and converting them back into outcomes (requires `std`)
#[cfg(feature = "std")]
pub mod catch;

/// Async adapters and combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::{branching, from_option};
pub use traits::{is_err, is_ok, Fallible};
pub use types::{
    FilterError, Join, Members, MultiResult, Outcome, ParseMultiResultError, ParseOutcomeError,
    UnwrapError,
};

#[cfg(feature = "std")]
pub use catch::{as_result, raise, ConfigError, Panicked};

#[cfg(feature = "async")]
pub use async_ext::as_async_result;
