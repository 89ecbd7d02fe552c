//! A small equality assertion for test suites.
//!
//! [`equal`] compares two values and, if they differ, hands a failure message to a [`report::Reporter`], which
//! decides what failing means: [`report::PanicReporter`] stops the current test, while your own reporter can do
//! whatever your harness needs.
//!
//! ```
//! use eqcheck::report::PanicReporter;
//!
//! let t = PanicReporter::new();
//! eqcheck::equal(&t, 2 + 2, 4, "sum");
//! eqcheck::equal!(&t, "a", "a", "", "strings differ: {} vs {}", "a", "a");
//! assert!(!t.failed());
//! ```
#![warn(clippy::all, clippy::pedantic)]
use thiserror::Error;

mod assert;
pub mod print;
pub mod report;
pub mod value;

#[cfg(test)]
mod testutil;

pub use assert::{equal, equal_fmt};

/// Error represents misuse of this crate by the calling test. These are bugs in the caller and surface as panics
/// rather than as reported assertion failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("custom message mode requires a format string, but none was given (use a non-empty name or equal_fmt)")]
    MissingFormat,
}

/// `equal!` asserts that two values are equal, choosing how to build the failure message from its arguments.
///
/// - `equal!(reporter, got, want, name)` reports `"{name} = {got}, want {want}"`, exactly like [`equal`].
/// - `equal!(reporter, got, want, "", fmt, args...)` reports `format!(fmt, args...)` verbatim, exactly like
///   [`equal_fmt`]. Any trailing arguments given alongside a non-empty `name` are ignored.
///
/// ```
/// use eqcheck::report::PanicReporter;
/// use std::panic::{self, AssertUnwindSafe};
///
/// let t = PanicReporter::new();
/// let (got, want) = (false, true);
/// let res = panic::catch_unwind(AssertUnwindSafe(|| {
///     eqcheck::equal!(&t, got, want, "", "got {}, want {}.", got, want);
/// }));
/// assert!(res.is_err());
/// assert_eq!(vec!["got false, want true."], t.failures());
/// ```
#[macro_export]
macro_rules! equal {
    ($reporter:expr, $got:expr, $want:expr, $name:expr $(,)?) => {
        $crate::equal($reporter, $got, $want, $name)
    };
    ($reporter:expr, $got:expr, $want:expr, $name:expr, $($arg:tt)+) => {{
        let name: &str = $name;
        if name.is_empty() {
            $crate::equal_fmt($reporter, $got, $want, ::std::format_args!($($arg)+))
        } else {
            $crate::equal($reporter, $got, $want, name)
        }
    }};
}
