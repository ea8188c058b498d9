//! Joining independent outcomes into one aggregate.
//!
//! [`MultiResult`] holds a tuple of up to eight [`Outcome`]s that share an
//! error type. It is not an `Outcome` itself but mirrors its API across all
//! members: it is `Ok` only when every member is `Ok`, and whenever a single
//! failure must be reported, the leftmost failing member wins.
//!
//! # Examples
//!
//! ```
//! use result_rail::Outcome;
//!
//! let total = Outcome::<i32, String>::Ok(5)
//!     .join(Outcome::Ok(10))
//!     .map(|(count, step)| (0..count).map(|i| i * step).collect::<Vec<_>>());
//!
//! assert_eq!(total, Outcome::Ok(vec![0, 10, 20, 30, 40]));
//! ```
//!
//! The `Display` form parses back into an equal aggregate:
//!
//! ```
//! use result_rail::{MultiResult, Outcome};
//!
//! let joined = Outcome::<i32, i32>::Ok(123).join(Outcome::<i32, _>::Err(-1));
//! let text = joined.to_string();
//! assert_eq!(text, "MultiResult(Ok(123), Err(-1))");
//! assert_eq!(text.parse::<MultiResult<(Outcome<i32, i32>, Outcome<i32, i32>)>>(), Ok(joined));
//! ```

use core::convert::Infallible;
use core::fmt::{Debug, Display};
use core::str::FromStr;

use crate::types::alloc_type::{format, String};
use crate::types::{Outcome, UnwrapError};

#[cfg(feature = "std")]
use crate::catch::{catch_panic, raise, Panicked};

/// An ordered aggregate of outcomes with a shared error type.
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct MultiResult<R> {
    results: R,
}

/// Tuples of outcomes that can be joined into a [`MultiResult`].
///
/// Implemented for `(Outcome<A, E>,)` up to eight-element tuples.
pub trait Members: Sized {
    /// Shared error type.
    type Error;
    /// Tuple of the success values.
    type Values;
    /// Tuple of `Option`s of the success values.
    type Options;
    /// Tuple of `Option`s of the errors.
    type Errors;

    /// Number of members.
    const LEN: usize;

    /// Returns `true` if every member is `Ok`.
    fn all_ok(&self) -> bool;

    /// Returns every value, or the position and error of the first failure.
    fn into_values(self) -> Result<Self::Values, (usize, Self::Error)>;

    /// Returns every value, or the untouched members if any failed.
    fn try_into_values(self) -> Result<Self::Values, Self>;

    /// Converts each member with [`Outcome::ok`].
    fn into_options(self) -> Self::Options;

    /// Converts each member with [`Outcome::err`].
    fn into_errors(self) -> Self::Errors;

    /// Replaces each failing member with the value at the same position.
    fn fill(self, defaults: Self::Values) -> Self::Values;
}

/// Appends one more outcome to a tuple of outcomes.
pub trait Join<O> {
    /// The tuple with `O` appended.
    type Output;

    /// Appends `next`.
    fn join(self, next: O) -> Self::Output;
}

macro_rules! replace_ty {
    ($_t:ident, $sub:ty) => {
        $sub
    };
}

macro_rules! impl_members {
    ($len:expr; $($idx:tt => $T:ident),+) => {
        impl<E, $($T),+> Members for ($(Outcome<$T, E>,)+) {
            type Error = E;
            type Values = ($($T,)+);
            type Options = ($(Option<$T>,)+);
            type Errors = ($(Option<replace_ty!($T, E)>,)+);

            const LEN: usize = $len;

            #[inline]
            fn all_ok(&self) -> bool {
                true $(&& self.$idx.is_ok())+
            }

            fn into_values(self) -> Result<Self::Values, (usize, E)> {
                Ok(($(
                    match self.$idx {
                        Outcome::Ok(value) => value,
                        Outcome::Err(error) => return Err(($idx, error)),
                    },
                )+))
            }

            #[allow(non_snake_case)]
            fn try_into_values(self) -> Result<Self::Values, Self> {
                match self {
                    ($(Outcome::Ok($T),)+) => Ok(($($T,)+)),
                    members => Err(members),
                }
            }

            #[inline]
            fn into_options(self) -> Self::Options {
                ($(self.$idx.ok(),)+)
            }

            #[inline]
            fn into_errors(self) -> Self::Errors {
                ($(self.$idx.err(),)+)
            }

            #[inline]
            fn fill(self, defaults: Self::Values) -> Self::Values {
                ($(self.$idx.unwrap_or(defaults.$idx),)+)
            }
        }

        impl<E: Display, $($T: Display),+> Display for MultiResult<($(Outcome<$T, E>,)+)> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("MultiResult(")?;
                $(
                    if $idx > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(&self.results.$idx, f)?;
                )+
                f.write_str(")")
            }
        }

        impl<E, $($T),+> FromStr for MultiResult<($(Outcome<$T, E>,)+)>
        where
            E: FromStr,
            <E as FromStr>::Err: Display,
            $($T: FromStr, <$T as FromStr>::Err: Display,)+
        {
            type Err = ParseMultiResultError;

            fn from_str(input: &str) -> Result<Self, ParseMultiResultError> {
                let body = input
                    .trim()
                    .strip_prefix("MultiResult(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .ok_or(ParseMultiResultError::Malformed)?;

                let found = TopLevel::new(body).count();
                if found != $len {
                    return Err(ParseMultiResultError::Arity { expected: $len, found });
                }

                let mut members = TopLevel::new(body);
                Ok(MultiResult::new(($(
                    parse_member::<$T, E>($idx, members.next())?,
                )+)))
            }
        }
    };
}

/// Failure to parse the `MultiResult(..)` textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMultiResultError {
    /// The input is not wrapped in `MultiResult(..)`.
    Malformed,
    /// The number of members does not match the target tuple.
    Arity {
        /// Members of the target type.
        expected: usize,
        /// Members found in the input.
        found: usize,
    },
    /// A member failed to parse as an `Outcome`.
    Member {
        /// Zero-based position of the member.
        position: usize,
        /// The member's parse error, rendered.
        message: String,
    },
}

impl Display for ParseMultiResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed => f.write_str("expected `MultiResult(..)`"),
            Self::Arity { expected, found } => {
                write!(f, "expected {expected} members, found {found}")
            }
            Self::Member { position, message } => {
                write!(f, "invalid member at position {position}: {message}")
            }
        }
    }
}

impl core::error::Error for ParseMultiResultError {}

/// Splits a member list at commas that are not nested inside brackets.
struct TopLevel<'a> {
    rest: Option<&'a str>,
}

impl<'a> TopLevel<'a> {
    fn new(body: &'a str) -> Self {
        Self { rest: Some(body) }
    }
}

impl<'a> Iterator for TopLevel<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let mut depth = 0usize;
        for (index, byte) in rest.bytes().enumerate() {
            match byte {
                b'(' | b'[' | b'{' => depth += 1,
                b')' | b']' | b'}' => depth = depth.saturating_sub(1),
                b',' if depth == 0 => {
                    self.rest = Some(&rest[index + 1..]);
                    return Some(rest[..index].trim());
                }
                _ => {}
            }
        }
        self.rest = None;
        Some(rest.trim())
    }
}

fn parse_member<T, E>(
    position: usize,
    text: Option<&str>,
) -> Result<Outcome<T, E>, ParseMultiResultError>
where
    T: FromStr,
    E: FromStr,
    T::Err: Display,
    E::Err: Display,
{
    let text = text.ok_or(ParseMultiResultError::Malformed)?;
    text.parse::<Outcome<T, E>>().map_err(|error| ParseMultiResultError::Member {
        position,
        message: format!("{error}"),
    })
}

macro_rules! impl_join {
    ($($idx:tt => $T:ident),+; $Z:ident) => {
        impl<E, $($T,)+ $Z> Join<Outcome<$Z, E>> for ($(Outcome<$T, E>,)+) {
            type Output = ($(Outcome<$T, E>,)+ Outcome<$Z, E>);

            #[inline]
            fn join(self, next: Outcome<$Z, E>) -> Self::Output {
                ($(self.$idx,)+ next)
            }
        }
    };
}

impl_members!(1; 0 => A);
impl_members!(2; 0 => A, 1 => B);
impl_members!(3; 0 => A, 1 => B, 2 => C);
impl_members!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_members!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => F);
impl_members!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G);
impl_members!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G, 6 => H);
impl_members!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G, 6 => H, 7 => I);

impl_join!(0 => A; B);
impl_join!(0 => A, 1 => B; C);
impl_join!(0 => A, 1 => B, 2 => C; D);
impl_join!(0 => A, 1 => B, 2 => C, 3 => D; F);
impl_join!(0 => A, 1 => B, 2 => C, 3 => D, 4 => F; G);
impl_join!(0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G; H);
impl_join!(0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G, 6 => H; I);

impl<T, E> Outcome<T, E> {
    /// Joins this outcome with `next` into a two-member [`MultiResult`].
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let joined = Outcome::<i32, &str>::Ok(1)
    ///     .join(Outcome::Ok(2))
    ///     .join(Outcome::Ok(vec![1, 2, 3]));
    /// assert_eq!(joined.unwrap(), (1, 2, vec![1, 2, 3]));
    /// ```
    #[inline]
    pub fn join<U>(self, next: Outcome<U, E>) -> MultiResult<(Self, Outcome<U, E>)> {
        MultiResult::new((self, next))
    }
}

impl<R> MultiResult<R> {
    /// Wraps a tuple of outcomes.
    #[inline]
    pub const fn new(results: R) -> Self {
        Self { results }
    }

    /// Returns the member tuple.
    #[inline]
    pub const fn results(&self) -> &R {
        &self.results
    }

    /// Consumes the aggregate, returning the member tuple.
    #[inline]
    pub fn into_results(self) -> R {
        self.results
    }
}

impl<R: Members> MultiResult<R> {
    /// Returns the number of members.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        R::LEN
    }

    /// Returns `true` if every member is `Ok`.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.results.all_ok()
    }

    /// Returns `true` if at least one member is `Err`.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the per-position success values.
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let joined = Outcome::<&str, &str>::Ok("haha").join(Outcome::<&str, _>::Err("boo"));
    /// assert_eq!(joined.ok(), (Some("haha"), None));
    /// ```
    #[inline]
    pub fn ok(self) -> R::Options {
        self.results.into_options()
    }

    /// Returns the per-position errors.
    #[inline]
    pub fn err(self) -> R::Errors {
        self.results.into_errors()
    }

    /// Appends another outcome.
    #[inline]
    pub fn join<O>(self, next: O) -> MultiResult<R::Output>
    where
        R: Join<O>,
    {
        MultiResult::new(self.results.join(next))
    }

    /// Returns all values, or an [`UnwrapError`] holding the leftmost failing
    /// member.
    pub fn try_unwrap(self) -> Result<R::Values, UnwrapError<Infallible, R::Error>> {
        self.results.into_values().map_err(|(index, error)| {
            UnwrapError::new(
                Outcome::Err(error),
                format!("called `MultiResult::unwrap()` with a failing member at position {index}"),
            )
        })
    }

    /// Like [`try_unwrap`](Self::try_unwrap) but with a caller-supplied message,
    /// followed by the failing member's `Debug` text.
    pub fn try_expect(self, message: &str) -> Result<R::Values, UnwrapError<Infallible, R::Error>>
    where
        R::Error: Debug,
    {
        self.results.into_values().map_err(|(_, error)| {
            let text = format!("{message}: {error:?}");
            UnwrapError::new(Outcome::Err(error), text)
        })
    }

    /// Returns all values.
    ///
    /// # Panics
    ///
    /// Panics if any member is `Err`, reporting the leftmost one.
    /// The payload is a message string; [`try_unwrap`](Self::try_unwrap)
    /// returns the failure as an [`UnwrapError`] instead.
    #[track_caller]
    pub fn unwrap(self) -> R::Values
    where
        R::Error: Debug,
    {
        match self.results.into_values() {
            Ok(values) => values,
            Err((index, error)) => panic!(
                "called `MultiResult::unwrap()` with a failing member at position {index}: {error:?}"
            ),
        }
    }

    /// Returns all values.
    ///
    /// # Panics
    ///
    /// Panics with `message` if any member is `Err`, reporting the leftmost one.
    /// The payload is a message string; see [`try_expect`](Self::try_expect).
    #[track_caller]
    pub fn expect(self, message: &str) -> R::Values
    where
        R::Error: Debug,
    {
        match self.results.into_values() {
            Ok(values) => values,
            Err((_, error)) => panic!("{message}: {error:?}"),
        }
    }

    /// Returns all values, substituting `defaults` position-wise where a member
    /// failed.
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let joined = Outcome::<&str, &str>::Ok("yay")
    ///     .join(Outcome::<&str, _>::Err("nay"))
    ///     .join(Outcome::Ok("foo"));
    /// assert_eq!(joined.unwrap_or(("a", "b", "c")), ("yay", "b", "foo"));
    /// ```
    #[inline]
    pub fn unwrap_or(self, defaults: R::Values) -> R::Values {
        self.results.fill(defaults)
    }

    /// Returns all values, or computes them from the members when any failed.
    pub fn unwrap_or_else<F>(self, op: F) -> R::Values
    where
        F: FnOnce(R) -> R::Values,
    {
        match self.results.try_into_values() {
            Ok(values) => values,
            Err(members) => op(members),
        }
    }

    /// Returns self when fully successful, otherwise the repaired aggregate
    /// produced by `op`.
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.is_ok() {
            self
        } else {
            op(self)
        }
    }

    /// Collapses into a single outcome holding every value, or the leftmost
    /// error.
    #[inline]
    pub fn into_outcome(self) -> Outcome<R::Values, R::Error> {
        match self.results.into_values() {
            Ok(values) => Outcome::Ok(values),
            Err((_, error)) => Outcome::Err(error),
        }
    }
}

#[cfg(feature = "std")]
impl<R: Members> MultiResult<R> {
    /// Returns all values, or raises `ctor(error)` for the leftmost failure.
    ///
    /// # Panics
    ///
    /// Panics with payload `ctor(error)` if any member is `Err`.
    #[track_caller]
    pub fn unwrap_or_raise<K, C>(self, ctor: C) -> R::Values
    where
        C: FnOnce(R::Error) -> K,
        K: Send + 'static,
    {
        match self.results.into_values() {
            Ok(values) => values,
            Err((_, error)) => raise(ctor(error)),
        }
    }

    /// Applies `op` to the value tuple once every member succeeded.
    ///
    /// The leftmost member error is returned unchanged. A panic inside `op` is
    /// caught and returned as `Err(Panicked.into())`.
    pub fn map<U, F>(self, op: F) -> Outcome<U, R::Error>
    where
        F: FnOnce(R::Values) -> U,
        R::Error: From<Panicked>,
    {
        match self.results.into_values() {
            Ok(values) => match catch_panic(move || op(values)) {
                Ok(mapped) => Outcome::Ok(mapped),
                Err(panicked) => Outcome::Err(panicked.into()),
            },
            Err((_, error)) => Outcome::Err(error),
        }
    }

    /// Applies `op` to the value tuple, or returns `default` when a member
    /// failed or `op` panicked.
    pub fn map_or<U, F>(self, default: U, op: F) -> U
    where
        F: FnOnce(R::Values) -> U,
    {
        match self.results.into_values() {
            Ok(values) => catch_panic(move || op(values)).unwrap_or(default),
            Err(_) => default,
        }
    }

    /// Applies `op` to the value tuple, or calls `default` when a member failed
    /// or `op` panicked.
    pub fn map_or_else<U, D, F>(self, default: D, op: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(R::Values) -> U,
    {
        match self.results.into_values() {
            Ok(values) => catch_panic(move || op(values)).unwrap_or_else(|_| default()),
            Err(_) => default(),
        }
    }
}
