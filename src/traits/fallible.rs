use crate::types::{Members, MultiResult, Outcome};

/// A value that is either a success or a failure.
///
/// Lets generic code inspect and normalise any of the crate's outcome shapes
/// without caring which one it holds.
pub trait Fallible {
    /// Success payload.
    type Value;
    /// Failure payload.
    type Error;

    /// Returns `true` on success.
    fn is_ok(&self) -> bool;

    /// Returns `true` on failure.
    fn is_err(&self) -> bool {
        !Fallible::is_ok(self)
    }

    /// Converts into an [`Outcome`].
    fn into_outcome(self) -> Outcome<Self::Value, Self::Error>;
}

impl<T, E> Fallible for Outcome<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn is_ok(&self) -> bool {
        Outcome::is_ok(self)
    }

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> Fallible for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn is_ok(&self) -> bool {
        Result::is_ok(self)
    }

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

impl<R: Members> Fallible for MultiResult<R> {
    type Value = R::Values;
    type Error = R::Error;

    #[inline]
    fn is_ok(&self) -> bool {
        MultiResult::is_ok(self)
    }

    #[inline]
    fn into_outcome(self) -> Outcome<R::Values, R::Error> {
        MultiResult::into_outcome(self)
    }
}

/// Returns `true` if `value` holds a success.
///
/// ```
/// use result_rail::traits::is_ok;
/// use result_rail::Outcome;
///
/// assert!(is_ok(&Outcome::<i32, ()>::Ok(1)));
/// assert!(!is_ok(&Outcome::<i32, ()>::Err(())));
/// ```
#[inline]
pub fn is_ok<F: Fallible>(value: &F) -> bool {
    value.is_ok()
}

/// Returns `true` if `value` holds a failure.
#[inline]
pub fn is_err<F: Fallible>(value: &F) -> bool {
    Fallible::is_err(value)
}
