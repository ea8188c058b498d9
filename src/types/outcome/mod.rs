//! The [`Outcome`] sum type and its combinator algebra.
//!
//! `Outcome<T, E>` is either `Ok(T)` or `Err(E)`. Every combinator is total over
//! both variants: success-side operations pass failures through untouched and
//! failure-side operations pass successes through untouched.
//!
//! # Examples
//!
//! ```
//! use result_rail::Outcome;
//!
//! fn sq(x: i32) -> Outcome<i32, i32> {
//!     Outcome::Ok(x * x)
//! }
//!
//! assert_eq!(Outcome::<i32, i32>::Ok(2).and_then(sq).and_then(sq).unwrap(), 16);
//! assert_eq!(Outcome::<i32, i32>::Err(3).and_then(sq), Outcome::Err(3));
//! ```
//!
//! There is no way to build an `Outcome` without naming its variant:
//!
//! ```compile_fail
//! use result_rail::Outcome;
//!
//! let _ambiguous: Outcome<i32, i32> = Outcome::default();
//! ```
//!
//! ```compile_fail
//! use result_rail::Outcome;
//!
//! let mut value: Outcome<i32, i32> = Outcome::Ok(1);
//! value.extra = 1;
//! ```

use core::fmt::Debug;

use crate::types::alloc_type::format;
use crate::types::UnwrapError;

mod pipe;
mod traits;

pub use traits::ParseOutcomeError;

/// Either a success value or an error value, never both and never neither.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let ok: Outcome<u8, &str> = Outcome::Ok(7);
/// match ok {
///     Outcome::Ok(value) => assert_eq!(value, 7),
///     Outcome::Err(_) => unreachable!(),
/// }
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// Success value.
    Ok(T),
    /// Error value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is `Ok`.
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is `Ok` and the value satisfies `f`.
    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `f`.
    #[must_use]
    #[inline]
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => f(error),
        }
    }

    /// Converts into `Option<T>`, discarding the error.
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, &str>::Ok("yay").ok(), Some("yay"));
    /// assert_eq!(Outcome::<&str, &str>::Err("nay").ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding the success value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows the payload: `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows the payload.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success value, or an [`UnwrapError`] holding this outcome.
    ///
    /// This is the non-panicking form of [`unwrap`](Self::unwrap).
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("nay");
    /// let error = failed.try_unwrap().unwrap_err();
    /// assert_eq!(error.result(), &Outcome::Err("nay"));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError<T, E>> {
        match self {
            Self::Ok(value) => Ok(value),
            failed => Err(UnwrapError::new(
                failed,
                "called `Outcome::unwrap()` on an `Err` value",
            )),
        }
    }

    /// Returns the error value, or an [`UnwrapError`] holding this outcome.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError<T, E>> {
        match self {
            Self::Err(error) => Ok(error),
            succeeded => Err(UnwrapError::new(
                succeeded,
                "called `Outcome::unwrap_err()` on an `Ok` value",
            )),
        }
    }

    /// Returns the success value, or an [`UnwrapError`] whose message is `message`
    /// followed by the error's `Debug` text.
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError<T, E>>
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => {
                let text = format!("{message}: {error:?}");
                Err(UnwrapError::new(Self::Err(error), text))
            }
        }
    }

    /// Returns the error value, or an [`UnwrapError`] whose message is `message`
    /// followed by the success value's `Debug` text.
    #[inline]
    pub fn try_expect_err(self, message: &str) -> Result<E, UnwrapError<T, E>>
    where
        T: Debug,
    {
        match self {
            Self::Err(error) => Ok(error),
            Self::Ok(value) => {
                let text = format!("{message}: {value:?}");
                Err(UnwrapError::new(Self::Ok(value), text))
            }
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err`, with the error's `Debug` text in the message.
    ///
    /// ```should_panic
    /// use result_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::Err("nay").unwrap();
    /// ```
    ///
    /// The panic payload is the message string, not an [`UnwrapError`], so an
    /// adapter configured for `UnwrapError` lets it through. Only the `try_*`
    /// forms produce an `UnwrapError`; raise it to hand it to an adapter:
    ///
    /// ```
    /// use result_rail::catch::{as_result, raise};
    /// use result_rail::{Outcome, UnwrapError};
    ///
    /// type Failed = UnwrapError<i32, &'static str>;
    ///
    /// let strict = as_result::<Failed>()
    ///     .kind::<Failed>()
    ///     .wrap(|o: Outcome<i32, &'static str>| match o.try_unwrap() {
    ///         Ok(value) => value,
    ///         Err(error) => raise(error),
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(strict.call(Outcome::Ok(1)), Outcome::Ok(1));
    /// assert_eq!(strict.call(Outcome::Err("nay")).unwrap_err().into_result(), Outcome::Err("nay"));
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed("called `Outcome::unwrap()` on an `Err` value", &error),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics on `Ok`, with the value's `Debug` text in the message.
    #[track_caller]
    #[inline]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Self::Err(error) => error,
            Self::Ok(value) => {
                unwrap_failed("called `Outcome::unwrap_err()` on an `Ok` value", &value)
            }
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err` with `message` followed by the error's `Debug` text.
    /// As with [`unwrap`](Self::unwrap), the payload is a message string; use
    /// [`try_expect`](Self::try_expect) for an [`UnwrapError`].
    #[track_caller]
    #[inline]
    pub fn expect(self, message: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(message, &error),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics on `Ok` with `message` followed by the value's `Debug` text.
    #[track_caller]
    #[inline]
    pub fn expect_err(self, message: &str) -> E
    where
        T: Debug,
    {
        match self {
            Self::Err(error) => error,
            Self::Ok(value) => unwrap_failed(message, &value),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let failed: Outcome<String, &str> = Outcome::Err("nay");
    /// assert_eq!(failed.unwrap_or_else(|e| e.to_uppercase()), "NAY");
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => op(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Maps the success value, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(op(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error value, leaving a success untouched.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(op(error)),
        }
    }

    /// Applies `op` to the success value, or returns `default` on error.
    #[inline]
    pub fn map_or<U, F>(self, default: U, op: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => op(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `op` to the success value, or calls `default` on error.
    ///
    /// Unlike [`unwrap_or_else`](Self::unwrap_or_else), `default` does not see the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, op: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => op(value),
            Self::Err(_) => default(),
        }
    }

    /// Chains a fallible step onto a success; an error short-circuits unchanged.
    ///
    /// `and_then` is associative:
    /// `a.and_then(f).and_then(g) == a.and_then(|x| f(x).and_then(g))`.
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => op(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from an error with a fallible step; a success passes through.
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let sq = |x: i32| Outcome::<i32, i32>::Ok(x * x);
    /// assert_eq!(Outcome::<i32, i32>::Err(3).or_else(sq), Outcome::Ok(9));
    /// assert_eq!(Outcome::<i32, i32>::Ok(2).or_else(sq), Outcome::Ok(2));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => op(error),
        }
    }

    /// Returns `other` if this is `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns this success, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Calls `f` with a reference to the success value and returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error value and returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

#[track_caller]
#[cold]
fn unwrap_failed(message: &str, payload: &dyn Debug) -> ! {
    panic!("{message}: {payload:?}")
}
