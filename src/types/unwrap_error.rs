use core::fmt::{Debug, Display};

use crate::types::alloc_type::String;
use crate::types::Outcome;

/// Signal produced when a success-only extractor meets an `Err`, or the reverse.
///
/// Carries the outcome that could not be unwrapped plus a human-readable
/// message. When the `Err` payload is itself an error, it is reported as the
/// [`source`](core::error::Error::source) of this error.
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
/// use std::error::Error;
/// use std::io;
///
/// let failed: Outcome<u8, io::Error> = Outcome::Err(io::Error::other("disk gone"));
/// let error = failed.try_unwrap().unwrap_err();
///
/// assert_eq!(error.message(), "called `Outcome::unwrap()` on an `Err` value");
/// assert_eq!(error.source().unwrap().to_string(), "disk gone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapError<T, E> {
    result: Outcome<T, E>,
    message: String,
}

impl<T, E> UnwrapError<T, E> {
    /// Creates an unwrap error for `result`.
    #[inline]
    pub fn new(result: Outcome<T, E>, message: impl Into<String>) -> Self {
        Self { result, message: message.into() }
    }

    /// Returns the outcome that triggered the failure.
    #[inline]
    pub const fn result(&self) -> &Outcome<T, E> {
        &self.result
    }

    /// Returns the diagnostic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the triggering outcome.
    #[inline]
    pub fn into_result(self) -> Outcome<T, E> {
        self.result
    }
}

impl<T, E> Display for UnwrapError<T, E> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl<T, E> core::error::Error for UnwrapError<T, E>
where
    T: Debug,
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.result {
            Outcome::Err(error) => Some(error),
            Outcome::Ok(_) => None,
        }
    }
}
