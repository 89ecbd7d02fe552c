use crate::report::Reporter;
use crate::Error;
use std::fmt;

/// `equal` marks `reporter` as failed and stops the current test when `got` and `want` are not equal. The failure
/// message reads `"{name} = {got}, want {want}"`.
///
/// Equal values are a no-op: nothing is reported and `name` is never looked at.
///
/// # Panics
///
/// `name` must not be empty. An empty label asks for a caller-supplied message, which only [`equal_fmt`] (or the
/// [`equal!`](crate::equal!) macro with a format string) can provide, so reaching a failure with one is a bug in the
/// calling test and panics with [`Error::MissingFormat`] instead of reporting.
pub fn equal<R, V>(reporter: &R, got: V, want: V, name: &str)
where
    R: Reporter,
    V: PartialEq + fmt::Display,
{
    if got == want {
        return;
    }

    if name.is_empty() {
        panic!("{}", Error::MissingFormat);
    }

    reporter.fatal(format_args!("{} = {}, want {}", name, got, want));
}

/// `equal_fmt` marks `reporter` as failed and stops the current test when `got` and `want` are not equal, reporting
/// `message` verbatim.
///
/// ```
/// use eqcheck::report::PanicReporter;
///
/// let reporter = PanicReporter::new();
/// let (got, want) = (4, 4);
/// eqcheck::equal_fmt(&reporter, got, want, format_args!("got {}, want {}", got, want));
/// assert!(!reporter.failed());
/// ```
pub fn equal_fmt<R, V>(reporter: &R, got: V, want: V, message: fmt::Arguments<'_>)
where
    R: Reporter,
    V: PartialEq,
{
    if got != want {
        reporter.fatal(message);
    }
}
