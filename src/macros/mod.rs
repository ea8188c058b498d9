//! Do-notation for sequencing dependent [`Outcome`](crate::Outcome) steps.
//!
//! - [`macro@crate::rail_do`] - Runs synchronous steps in order, stopping at the
//!   first `Err`.
//! - [`macro@crate::rail_do_async`] - Builds a future that awaits each step in
//!   order, stopping at the first `Err`.
//!
//! Both accept the same step grammar:
//!
//! | Step | Meaning |
//! |------|---------|
//! | `pattern <- expr;` | Evaluate `expr`; bind its `Ok` value or return its `Err` |
//! | `let pattern = expr;` | Plain binding, never fails |
//! | `yield expr` | Final step, wrapped in `Ok` |
//!
//! The pattern of a `<-` step is an identifier (optionally `mut`), `_`, a
//! tuple or slice pattern, or a struct or tuple-struct pattern named by a single
//! identifier such as `Point { x, y }`. Qualified paths like `geo::Point { .. }`
//! need a `let` step after binding the whole value.
//!
//! A step is only evaluated after every step before it succeeded, so later
//! steps may rely on earlier bindings being valid.
//!
//! # Examples
//!
//! ```
//! use result_rail::{rail_do, Outcome};
//!
//! fn resx(ok: bool) -> Outcome<&'static str, i32> {
//!     if ok { Outcome::Ok("hello") } else { Outcome::Err(1) }
//! }
//!
//! fn resy(ok: bool) -> Outcome<bool, i32> {
//!     if ok { Outcome::Ok(true) } else { Outcome::Err(2) }
//! }
//!
//! let out = rail_do! {
//!     x <- resx(true);
//!     y <- resy(true);
//!     yield x.len() + usize::from(y)
//! };
//! assert_eq!(out, Outcome::Ok(6));
//!
//! let out = rail_do! {
//!     x <- resx(false);
//!     y <- resy(true);
//!     yield x.len() + usize::from(y)
//! };
//! assert_eq!(out, Outcome::Err(1));
//! ```

/// Sequences synchronous [`Outcome`](crate::Outcome) steps, short-circuiting
/// on the first `Err`.
///
/// Expands to nested `match` expressions, so nothing after a failing step is
/// evaluated and the macro itself never suspends.
///
/// # Syntax
///
/// - `pattern <- expr;` - bind the `Ok` value of `expr` (an `Outcome`); see
///   the [module docs](crate::macros) for the accepted patterns
/// - `let pattern = expr;` - plain binding
/// - `yield expr` - the final value, wrapped in `Ok`
///
/// # Examples
///
/// ```
/// use result_rail::{rail_do, Outcome};
///
/// let out: Outcome<(i32, i32), &str> = rail_do! {
///     a <- Outcome::Ok(2);
///     let doubled = a * 2;
///     (b, c) <- Outcome::Ok((doubled, doubled + 1));
///     yield (b, c)
/// };
/// assert_eq!(out, Outcome::Ok((4, 5)));
/// ```
///
/// Steps must be outcomes, not futures; use [`rail_do_async!`](crate::rail_do_async)
/// for those:
///
/// ```compile_fail
/// use result_rail::{rail_do, Outcome};
///
/// async fn fetch() -> Outcome<i32, ()> {
///     Outcome::Ok(1)
/// }
///
/// let _ = rail_do! {
///     x <- fetch();
///     yield x
/// };
/// ```
#[macro_export]
macro_rules! rail_do {
    (yield $value:expr $(;)?) => {
        $crate::Outcome::Ok($value)
    };
    (let $pat:pat = $value:expr; $($rest:tt)+) => {{
        let $pat = $value;
        $crate::rail_do!($($rest)+)
    }};
    (mut $bind:ident <- $step:expr; $($rest:tt)+) => {
        match $step {
            $crate::Outcome::Ok(mut $bind) => $crate::rail_do!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
    ($name:ident { $($fields:tt)* } <- $step:expr; $($rest:tt)+) => {
        match $step {
            $crate::Outcome::Ok($name { $($fields)* }) => $crate::rail_do!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
    ($name:ident ( $($fields:tt)* ) <- $step:expr; $($rest:tt)+) => {
        match $step {
            $crate::Outcome::Ok($name ( $($fields)* )) => $crate::rail_do!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
    ($bind:tt <- $step:expr; $($rest:tt)+) => {
        match $step {
            $crate::Outcome::Ok($bind) => $crate::rail_do!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
}

/// Builds a future sequencing asynchronous [`Outcome`](crate::Outcome) steps.
///
/// Each `pattern <- expr;` step awaits `expr` (anything implementing
/// `IntoFuture<Output = Outcome<_, E>>`). Steps start strictly in order and
/// only after the previous one resolved to `Ok`; the first `Err` resolves the
/// whole future. Dropping the future drops the step in flight.
///
/// # Examples
///
/// ```
/// use result_rail::{rail_do_async, Outcome};
///
/// async fn get_x(ok: bool) -> Outcome<&'static str, i32> {
///     if ok { Outcome::Ok("hello") } else { Outcome::Err(1) }
/// }
///
/// async fn get_y(ok: bool) -> Outcome<bool, i32> {
///     if ok { Outcome::Ok(true) } else { Outcome::Err(2) }
/// }
///
/// # tokio_test_block(async {
/// let out = rail_do_async! {
///     x <- get_x(true);
///     y <- get_y(false);
///     yield x.len() + usize::from(y)
/// }
/// .await;
/// assert_eq!(out, Outcome::Err(2));
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[macro_export]
macro_rules! rail_do_async {
    ($($steps:tt)+) => {
        async move { $crate::__rail_do_async_steps!($($steps)+) }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rail_do_async_steps {
    (yield $value:expr $(;)?) => {
        $crate::Outcome::Ok($value)
    };
    (let $pat:pat = $value:expr; $($rest:tt)+) => {{
        let $pat = $value;
        $crate::__rail_do_async_steps!($($rest)+)
    }};
    (mut $bind:ident <- $step:expr; $($rest:tt)+) => {
        match ($step).await {
            $crate::Outcome::Ok(mut $bind) => $crate::__rail_do_async_steps!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
    ($name:ident { $($fields:tt)* } <- $step:expr; $($rest:tt)+) => {
        match ($step).await {
            $crate::Outcome::Ok($name { $($fields)* }) => $crate::__rail_do_async_steps!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
    ($name:ident ( $($fields:tt)* ) <- $step:expr; $($rest:tt)+) => {
        match ($step).await {
            $crate::Outcome::Ok($name ( $($fields)* )) => $crate::__rail_do_async_steps!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
    ($bind:tt <- $step:expr; $($rest:tt)+) => {
        match ($step).await {
            $crate::Outcome::Ok($bind) => $crate::__rail_do_async_steps!($($rest)+),
            $crate::Outcome::Err(error) => $crate::Outcome::Err(error),
        }
    };
}
