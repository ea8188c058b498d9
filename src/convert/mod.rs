//! Conversion helpers between `Outcome`, `Result` and `Option`.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::branching;
//! use result_rail::Outcome;
//!
//! fn foo() -> Outcome<i32, String> {
//!     Outcome::Ok(1)
//! }
//!
//! fn bar() -> Outcome<i32, String> {
//!     Outcome::Err("erm..".to_string())
//! }
//!
//! let sum: Outcome<i32, String> = branching(|| Ok(foo().branch()? + bar().branch()?));
//! assert_eq!(sum, Outcome::Err("erm..".to_string()));
//! ```

use crate::types::Outcome;

/// Runs `op`, in which `?` short-circuits on [`Outcome::branch`], and turns its
/// `Result` back into an [`Outcome`].
///
/// # Arguments
///
/// * `op` - The closure body using `?`
#[inline]
pub fn branching<T, E, F>(op: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Outcome::from(op())
}

/// Converts `Some(value)` into `Ok(value)` and `None` into `Err(error)`.
///
/// # Examples
///
/// ```
/// use result_rail::convert::from_option;
/// use result_rail::Outcome;
///
/// assert_eq!(from_option(Some(3), "missing"), Outcome::Ok(3));
/// assert_eq!(from_option(None::<i32>, "missing"), Outcome::Err("missing"));
/// ```
#[inline]
pub fn from_option<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(error),
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Swaps `Outcome<Option<T>, E>` into `Option<Outcome<T, E>>`.
    ///
    /// `Ok(None)` maps to `None`; `Ok(Some(v))` and `Err(e)` keep their variant.
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Outcome::Ok(Some(value)) => Some(Outcome::Ok(value)),
            Outcome::Ok(None) => None,
            Outcome::Err(error) => Some(Outcome::Err(error)),
        }
    }
}
