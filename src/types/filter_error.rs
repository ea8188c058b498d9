use core::fmt::Display;

use crate::types::alloc_type::String;

/// Failure produced by [`Outcome::filter`](crate::Outcome::filter) when the
/// predicate rejects a value.
///
/// The predicate is identified by its type name, which for `fn` items is the
/// full path of the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterError {
    predicate: &'static str,
}

impl FilterError {
    /// Creates a filter error naming the predicate type `P`.
    #[inline]
    pub fn of<P: ?Sized>() -> Self {
        Self { predicate: core::any::type_name::<P>() }
    }

    /// Returns the full type name of the rejecting predicate.
    #[inline]
    pub const fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// Returns the last path segment of the predicate name, without generic
    /// arguments.
    ///
    /// For a function `crate::checks::is_even` this is `is_even`, for
    /// `alloc::vec::Vec<i32>::is_empty` it is `is_empty`; closures report
    /// `{{closure}}`.
    pub fn function(&self) -> &'static str {
        let name = self.predicate;
        let bytes = name.as_bytes();
        let mut depth = 0usize;
        let (mut start, mut end) = (0, bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'<' => {
                    if depth == 0 && end == bytes.len() {
                        end = i;
                    }
                    depth += 1;
                }
                // `->` in a fn pointer type
                b'>' if i > 0 && bytes[i - 1] == b'-' => {}
                b'>' => depth = depth.saturating_sub(1),
                b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                    start = i + 2;
                    end = bytes.len();
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }

        &name[start..end]
    }
}

impl Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "value rejected by filter `{}`", self.function())
    }
}

impl core::error::Error for FilterError {}

impl From<FilterError> for String {
    #[inline]
    fn from(error: FilterError) -> Self {
        use core::fmt::Write;

        let mut text = String::new();
        let _ = write!(text, "{error}");
        text
    }
}
