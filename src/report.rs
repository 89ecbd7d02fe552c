//! `report` defines where assertion failures go.
//!
//! An assertion only decides whether something failed. What happens next is up to the [`Reporter`] it was handed.
use crate::print;
use crate::print::{Printer, StderrPrinter};
use std::cell::RefCell;
use std::fmt;
use termion::color;

const NO_MESSAGE_FAILURE: &str = "test failed";

/// `Reporter` is the collaborator an assertion reports its failures to.
pub trait Reporter {
    /// Mark the current test as failed, recording the given message against it.
    fn fail<S: fmt::Display>(&self, message: S);

    /// Stop executing the current test.
    ///
    /// Real reporters do not return from this; by convention they panic, which unwinds only the thread running the
    /// current test. Test doubles are free to return so the caller can be inspected afterwards.
    fn fail_now(&self);

    /// Record the given message and stop the current test. Equivalent to [`Reporter::fail`] followed by
    /// [`Reporter::fail_now`].
    fn fatal<S: fmt::Display>(&self, message: S) {
        self.fail(message);
        self.fail_now();
    }
}

/// `PanicReporter` keeps failures in memory and panics with all of them once asked to stop.
///
/// # Examples
///
/// ```should_panic
/// use eqcheck::report::PanicReporter;
///
/// let reporter = PanicReporter::new();
/// eqcheck::equal(&reporter, 1 + 1, 3, "sum");
/// // never reached: panics with "sum = 2, want 3"
/// ```
#[derive(Default)]
pub struct PanicReporter {
    failures: RefCell<Vec<String>>,
}

impl PanicReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any failure has been recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.borrow().is_empty()
    }

    /// A copy of the failure messages recorded so far, in the order they were reported.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    fn panic_message(&self) -> String {
        let failures = self.failures.borrow();
        if failures.is_empty() {
            NO_MESSAGE_FAILURE.to_string()
        } else {
            failures.join("\n")
        }
    }
}

impl Reporter for PanicReporter {
    fn fail<S: fmt::Display>(&self, message: S) {
        self.failures.borrow_mut().push(message.to_string());
    }

    fn fail_now(&self) {
        let message = self.panic_message();
        panic!("{}", message);
    }
}

/// `ConsoleReporter` behaves like [`PanicReporter`], but also echoes each failure to a [`Printer`] the moment it is
/// recorded, in red if coloring is enabled.
#[allow(clippy::module_name_repetitions)]
pub struct ConsoleReporter<P: Printer> {
    printer: P,
    colored: bool,
    inner: PanicReporter,
    print_error: RefCell<Option<print::Error>>,
}

impl ConsoleReporter<StderrPrinter> {
    /// Make a `ConsoleReporter` that echoes to stderr. Color is only used if stderr is a terminal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ConsoleReporter<StderrPrinter> {
    fn default() -> Self {
        let printer = StderrPrinter::new();
        let colored = printer.is_tty();

        ConsoleReporter::with_printer(printer).colored(colored)
    }
}

impl<P: Printer> ConsoleReporter<P> {
    /// Make a `ConsoleReporter` that echoes to the given printer, with color enabled.
    pub fn with_printer(printer: P) -> Self {
        Self {
            printer,
            colored: true,
            inner: PanicReporter::new(),
            print_error: RefCell::new(None),
        }
    }

    /// Enable or disable colored output.
    #[must_use]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Whether any failure has been recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.inner.failed()
    }

    /// A copy of the failure messages recorded so far, in the order they were reported.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.inner.failures()
    }

    fn echo(&self, message: &str) {
        let line = format!("{}\n", message);
        let print_res = if self.colored {
            self.printer.colored_print(color::Fg(color::Red), line)
        } else {
            self.printer.print(line)
        };

        match print_res {
            // Nobody is listening anymore; the failure is still recorded, so there is nothing to add.
            Ok(()) | Err(print::Error::BrokenPipe(_)) => {}
            Err(err) => {
                self.print_error.replace(Some(err));
            }
        }
    }
}

impl<P: Printer> Reporter for ConsoleReporter<P> {
    fn fail<S: fmt::Display>(&self, message: S) {
        let message = message.to_string();
        self.echo(&message);
        self.inner.fail(message);
    }

    fn fail_now(&self) {
        let mut message = self.inner.panic_message();
        if let Some(err) = self.print_error.borrow().as_ref() {
            message = format!("{} (failed to echo failure: {})", message, err);
        }

        panic!("{}", message);
    }
}
