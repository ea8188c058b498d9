use super::Outcome;
use crate::types::FilterError;

#[cfg(feature = "std")]
use crate::catch::{catch_panic, raise, Panicked};

impl<T, E> Outcome<T, E> {
    /// Keeps a success only if `predicate` accepts it.
    ///
    /// A rejected value becomes `Err(FilterError.into())`, tagged with the
    /// predicate's name. Errors pass through without calling `predicate`.
    ///
    /// ```
    /// use result_rail::{FilterError, Outcome};
    ///
    /// fn is_even(x: &i32) -> bool {
    ///     x % 2 == 0
    /// }
    ///
    /// let kept: Outcome<i32, FilterError> = Outcome::Ok(4).filter(is_even);
    /// assert_eq!(kept, Outcome::Ok(4));
    ///
    /// let dropped: Outcome<i32, FilterError> = Outcome::Ok(3).filter(is_even);
    /// assert_eq!(dropped.unwrap_err().function(), "is_even");
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: From<FilterError>,
    {
        match self {
            Outcome::Ok(value) => {
                if predicate(&value) {
                    Outcome::Ok(value)
                } else {
                    Outcome::Err(FilterError::of::<P>().into())
                }
            }
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the success value, turning a panic inside `op` into an `Err`.
    ///
    /// Unlike [`map`](Self::map), which lets a panicking `op` unwind through the
    /// caller, `pipe` catches the panic and stores it as a [`Panicked`] converted
    /// into `E`.
    ///
    /// ```
    /// use result_rail::{Outcome, Panicked};
    ///
    /// let good: Outcome<i32, Panicked> = Outcome::Ok(123).pipe(|v: i32| v + 1);
    /// assert_eq!(good.ok(), Some(124));
    ///
    /// let bad: Outcome<i32, Panicked> = Outcome::Ok(123).pipe(|_: i32| -> i32 { panic!("boom") });
    /// assert_eq!(bad.unwrap_err().message(), Some("boom"));
    /// ```
    #[cfg(feature = "std")]
    pub fn pipe<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<Panicked>,
    {
        match self {
            Outcome::Ok(value) => match catch_panic(move || op(value)) {
                Ok(mapped) => Outcome::Ok(mapped),
                Err(panicked) => Outcome::Err(panicked.into()),
            },
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success value, or raises `ctor(error)` as a panic payload.
    ///
    /// An enclosing [`as_result`](crate::catch::as_result) configured with the
    /// kind `K` turns the raised value back into an `Err`.
    ///
    /// # Panics
    ///
    /// Panics with payload `ctor(error)` on `Err`.
    #[cfg(feature = "std")]
    #[track_caller]
    pub fn unwrap_or_raise<K, C>(self, ctor: C) -> T
    where
        C: FnOnce(E) -> K,
        K: Send + 'static,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => raise(ctor(error)),
        }
    }
}
