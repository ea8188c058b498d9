use core::fmt::{Debug, Display};
use core::str::FromStr;

use super::Outcome;

/// Renders `Ok(<value>)` or `Err(<error>)` using the payload's `Display`.
///
/// The output parses back through [`FromStr`] whenever the payload's own
/// `Display`/`FromStr` pair round-trips.
///
/// ```
/// use result_rail::Outcome;
///
/// let ok: Outcome<i32, i32> = Outcome::Ok(123);
/// assert_eq!(ok.to_string(), "Ok(123)");
/// assert_eq!(ok.to_string().parse::<Outcome<i32, i32>>().unwrap(), ok);
/// ```
impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({value})"),
            Outcome::Err(error) => write!(f, "Err({error})"),
        }
    }
}

/// Failure to parse the `Ok(..)` / `Err(..)` textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcomeError<A, B> {
    /// The input is not wrapped in `Ok(..)` or `Err(..)`.
    Malformed,
    /// The `Ok` payload failed to parse.
    Value(A),
    /// The `Err` payload failed to parse.
    Error(B),
}

impl<A: Display, B: Display> Display for ParseOutcomeError<A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed => f.write_str("expected `Ok(..)` or `Err(..)`"),
            Self::Value(inner) => write!(f, "invalid `Ok` payload: {inner}"),
            Self::Error(inner) => write!(f, "invalid `Err` payload: {inner}"),
        }
    }
}

impl<A, B> core::error::Error for ParseOutcomeError<A, B>
where
    A: Debug + Display,
    B: Debug + Display,
{
}

impl<T, E> FromStr for Outcome<T, E>
where
    T: FromStr,
    E: FromStr,
{
    type Err = ParseOutcomeError<T::Err, E::Err>;

    fn from_str(input: &str) -> Result<Self, ParseOutcomeError<T::Err, E::Err>> {
        let input = input.trim();
        if let Some(payload) = unwrap_variant(input, "Ok(") {
            return payload.parse().map(Outcome::Ok).map_err(ParseOutcomeError::Value);
        }
        if let Some(payload) = unwrap_variant(input, "Err(") {
            return payload.parse().map(Outcome::Err).map_err(ParseOutcomeError::Error);
        }
        Err(ParseOutcomeError::Malformed)
    }
}

fn unwrap_variant<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    input.strip_prefix(prefix)?.strip_suffix(')')
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Converts from a standard [`Result`].
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        result.into()
    }

    /// Converts into a [`Result`] so `?` can short-circuit on it.
    ///
    /// Pairs with [`branching`](crate::convert::branching).
    #[inline]
    pub fn branch(self) -> Result<T, E> {
        self.into_result()
    }

    /// Returns an iterator over the success value, if any.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }
}

/// Yields the success value at most once, so an `Err` produces an empty
/// iteration.
///
/// ```
/// use result_rail::Outcome;
///
/// let values: Vec<i32> = Outcome::<i32, &str>::Ok(4).into_iter().collect();
/// assert_eq!(values, vec![4]);
/// assert_eq!(Outcome::<i32, &str>::Err("x").into_iter().count(), 0);
/// ```
impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects successes until the first `Err`, which is returned unchanged.
///
/// ```
/// use result_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::Ok(1), Outcome::Ok(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Ok(vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> =
///     vec![Outcome::Ok(1), Outcome::Err("a"), Outcome::Err("b")].into_iter().collect();
/// assert_eq!(first_failure, Outcome::Err("a"));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<A, E>>,
    {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
