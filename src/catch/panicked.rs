use core::any::Any;
use core::fmt::{Debug, Display};

use crate::types::alloc_type::{Box, String};

/// A panic caught by a catching combinator.
///
/// The original payload is kept so callers can downcast it back to the value
/// passed to [`raise`](super::raise) or `panic!`.
pub struct Panicked {
    payload: Box<dyn Any + Send>,
}

impl Panicked {
    /// Wraps a payload returned by `std::panic::catch_unwind`.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a `&str` or `String`.
    pub fn message(&self) -> Option<&str> {
        if let Some(text) = self.payload.downcast_ref::<&'static str>() {
            return Some(*text);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Returns the raw payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Attempts to view the payload as a `K`.
    #[inline]
    pub fn downcast_ref<K: Any>(&self) -> Option<&K> {
        self.payload.downcast_ref::<K>()
    }

    /// Consumes the wrapper, returning the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl Debug for Panicked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Panicked")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl Display for Panicked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {message}"),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

impl core::error::Error for Panicked {}

impl From<Panicked> for String {
    #[inline]
    fn from(panicked: Panicked) -> Self {
        panicked.to_string()
    }
}
