//! Outcome types and the error values they produce.
//!
//! # Examples
//!
//! ```
//! use result_rail::Outcome;
//!
//! let joined = Outcome::<i32, &str>::Ok(2).join(Outcome::Ok(3));
//! assert_eq!(joined.unwrap(), (2, 3));
//!
//! let failed = Outcome::<i32, &str>::Ok(2).join(Outcome::<i32, _>::Err("x"));
//! assert_eq!(failed.try_unwrap().unwrap_err().result(), &Outcome::Err("x"));
//! ```
pub mod alloc_type;
pub mod filter_error;
pub mod multi_result;
pub mod outcome;
pub mod unwrap_error;

pub use filter_error::*;
pub use multi_result::*;
pub use outcome::*;
pub use unwrap_error::*;
