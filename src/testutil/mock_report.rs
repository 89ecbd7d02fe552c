#![cfg(test)]
use crate::report::Reporter;
use std::cell::{Cell, RefCell};
use std::fmt;

/// `RecordingReporter` stands in for a real test harness. It keeps every failure message and counts how many times it
/// was asked to stop, but never actually stops, so tests can inspect what an assertion did.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub(crate) messages: RefCell<Vec<String>>,
    pub(crate) halts: Cell<usize>,
}

impl Reporter for RecordingReporter {
    fn fail<S: fmt::Display>(&self, message: S) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn fail_now(&self) {
        self.halts.set(self.halts.get() + 1);
    }
}
