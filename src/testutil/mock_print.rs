#![cfg(test)]
use crate::print;
use crate::print::Printer;
use std::cell::RefCell;
use std::fmt;

/// `MockPrinter` keeps everything it is asked to print. Only `print` is implemented, so colored output shows up in
/// `messages` with its escape codes intact.
#[derive(Default)]
pub(crate) struct MockPrinter {
    pub(crate) messages: RefCell<Vec<String>>,
    next_error: RefCell<Option<print::Error>>,
}

impl MockPrinter {
    pub(crate) fn fail_next(&self, error: print::Error) {
        self.next_error.replace(Some(error));
    }
}

impl Printer for &MockPrinter {
    fn print<S: fmt::Display>(&self, msg: S) -> print::Result {
        self.messages.borrow_mut().push(msg.to_string());

        match self.next_error.replace(None) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
