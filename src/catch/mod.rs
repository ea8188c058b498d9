//! Converting raised errors into [`Outcome`] values.
//!
//! A function "raises" by panicking with a typed payload, usually through
//! [`raise`]. [`as_result`] builds a wrapper that runs a function, turns a normal
//! return into `Ok(value)` and a raised payload of one of the configured kinds
//! into `Err(error)`. Payloads of any other type keep unwinding, untouched.
//!
//! # Examples
//!
//! ```
//! use result_rail::catch::{as_result, raise};
//! use result_rail::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! struct ValueError(&'static str);
//!
//! let parse = as_result::<ValueError>()
//!     .kind::<ValueError>()
//!     .wrap(|input: &str| match input.parse::<i32>() {
//!         Ok(value) => value,
//!         Err(_) => raise(ValueError("not a number")),
//!     })
//!     .unwrap();
//!
//! assert_eq!(parse.call("12"), Outcome::Ok(12));
//! assert_eq!(parse.call("twelve"), Outcome::Err(ValueError("not a number")));
//! ```
//!
//! Configuring no kinds at all is rejected when the wrapper is built:
//!
//! ```
//! use result_rail::catch::{as_result, ConfigError};
//!
//! let wrapped = as_result::<String>().wrap(|x: i32| x);
//! assert_eq!(wrapped.err(), Some(ConfigError::NoErrorKinds));
//! ```

use core::any::{self, Any};
use core::fmt::{Debug, Display};
use std::panic::{self, AssertUnwindSafe};

use smallvec::SmallVec;

use crate::types::alloc_type::Box;
use crate::types::Outcome;

mod panicked;

pub use panicked::Panicked;

pub(crate) type Payload = Box<dyn Any + Send>;

/// Raises `error` as a panic payload.
///
/// Pair with [`as_result`] or [`as_async_result`](crate::async_ext::as_async_result)
/// to receive it back as an `Err`.
///
/// # Panics
///
/// Always.
#[track_caller]
pub fn raise<K: Send + 'static>(error: K) -> ! {
    panic::panic_any(error)
}

/// Runs `op`, returning its panic payload as a [`Panicked`] instead of unwinding.
pub(crate) fn catch_panic<R>(op: impl FnOnce() -> R) -> Result<R, Panicked> {
    panic::catch_unwind(AssertUnwindSafe(op)).map_err(caught)
}

pub(crate) fn caught(payload: Payload) -> Panicked {
    let panicked = Panicked::new(payload);
    #[cfg(feature = "tracing")]
    tracing::debug!(panic = %panicked, "converted panic into Err");
    panicked
}

/// Invalid adapter configuration, reported when the wrapper is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
    /// No error kind was registered, so nothing could ever be caught.
    NoErrorKinds,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoErrorKinds => f.write_str("as_result() requires one or more error kinds"),
        }
    }
}

impl core::error::Error for ConfigError {}

struct Kind<E> {
    name: &'static str,
    convert: fn(Payload) -> Result<E, Payload>,
}

impl<E> Clone for Kind<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Kind<E> {}

fn convert_kind<K, E>(payload: Payload) -> Result<E, Payload>
where
    K: Into<E> + Send + 'static,
{
    payload.downcast::<K>().map(|kind| (*kind).into())
}

/// Ordered set of payload types an adapter converts into `E`.
pub(crate) struct Kinds<E> {
    entries: SmallVec<[Kind<E>; 4]>,
}

impl<E> Clone for Kinds<E> {
    fn clone(&self) -> Self {
        Self { entries: self.entries.clone() }
    }
}

impl<E> Kinds<E> {
    pub(crate) fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    pub(crate) fn push<K>(&mut self)
    where
        K: Into<E> + Send + 'static,
    {
        self.entries.push(Kind { name: any::type_name::<K>(), convert: convert_kind::<K, E> });
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|kind| kind.name)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::NoErrorKinds);
        }
        Ok(())
    }

    /// Converts `payload` with the first matching kind, or hands it back.
    pub(crate) fn classify(&self, mut payload: Payload) -> Result<E, Payload> {
        for kind in &self.entries {
            match (kind.convert)(payload) {
                Ok(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(kind = kind.name, "converted raised error into Err");
                    return Ok(error);
                }
                Err(unmatched) => payload = unmatched,
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("re-raising panic of an unconfigured kind");
        Err(payload)
    }

    /// Turns a classified payload into `Err`, resuming the unwind otherwise.
    pub(crate) fn recover<R>(&self, payload: Payload) -> Outcome<R, E> {
        match self.classify(payload) {
            Ok(error) => Outcome::Err(error),
            Err(unmatched) => panic::resume_unwind(unmatched),
        }
    }

    pub(crate) fn catch<R>(&self, op: impl FnOnce() -> R) -> Outcome<R, E> {
        match panic::catch_unwind(AssertUnwindSafe(op)) {
            Ok(value) => Outcome::Ok(value),
            Err(payload) => self.recover(payload),
        }
    }
}

impl<E> Debug for Kinds<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Builder for a synchronous exception-to-outcome wrapper.
///
/// Created by [`as_result`]. Register kinds with [`kind`](Self::kind), then
/// [`wrap`](Self::wrap) a function.
#[derive(Debug)]
pub struct AsResult<E> {
    kinds: Kinds<E>,
}

/// Starts configuring a wrapper whose caught errors are converted into `E`.
#[inline]
pub fn as_result<E>() -> AsResult<E> {
    AsResult::new()
}

impl<E> AsResult<E> {
    /// Creates a builder with no registered kinds.
    #[inline]
    pub fn new() -> Self {
        Self { kinds: Kinds::new() }
    }

    /// Registers `K` as a caught kind. Kinds are tried in registration order.
    #[inline]
    pub fn kind<K>(mut self) -> Self
    where
        K: Into<E> + Send + 'static,
    {
        self.kinds.push::<K>();
        self
    }

    /// Returns the type names of the registered kinds.
    pub fn kind_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.names()
    }

    /// Wraps `op`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoErrorKinds`] if no kind was registered.
    pub fn wrap<F>(self, op: F) -> Result<Catching<F, E>, ConfigError> {
        self.kinds.validate()?;
        Ok(Catching { op, kinds: self.kinds })
    }
}

impl<E> Default for AsResult<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A function whose configured raised errors come back as `Err`.
///
/// Multiple arguments are passed as a tuple.
pub struct Catching<F, E> {
    op: F,
    kinds: Kinds<E>,
}

impl<F, E> Catching<F, E> {
    /// Calls the wrapped function.
    ///
    /// # Panics
    ///
    /// Re-raises, unchanged, any panic whose payload is not a configured kind.
    pub fn call<A, R>(&self, args: A) -> Outcome<R, E>
    where
        F: Fn(A) -> R,
    {
        self.kinds.catch(|| (self.op)(args))
    }

    /// Calls a wrapped `FnMut`.
    ///
    /// # Panics
    ///
    /// Re-raises, unchanged, any panic whose payload is not a configured kind.
    pub fn call_mut<A, R>(&mut self, args: A) -> Outcome<R, E>
    where
        F: FnMut(A) -> R,
    {
        let op = &mut self.op;
        self.kinds.catch(|| op(args))
    }

    /// Returns the unwrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.op
    }
}

impl<F, E> Debug for Catching<F, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Catching")
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}
