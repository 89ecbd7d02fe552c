#![cfg(test)]
#![allow(dead_code)]
pub(crate) mod mock_print;
pub(crate) mod mock_report;

/// Checks that a [`mock_report::RecordingReporter`] saw exactly the given failure messages, and that every one of them
/// was followed by a request to stop.
macro_rules! assert_reported {
    ($reporter: expr, $expected: expr) => {{
        let reporter = &$reporter;
        let expected: &[&str] = $expected;
        let messages = reporter.messages.borrow();
        assert_eq!(
            expected,
            messages.as_slice(),
            "(expected) {:?} != (actual) {:?}",
            expected,
            messages,
        );
        assert_eq!(
            expected.len(),
            reporter.halts.get(),
            "reporter was stopped {} times for {} failures",
            reporter.halts.get(),
            expected.len(),
        );
    }};
}

pub(crate) use assert_reported;
