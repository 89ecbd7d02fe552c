//! `print` provides the output layer used by reporters to echo failure messages.
use std::fmt;
use std::io;
use std::io::Write;
use std::result;
use termion::color::{Color, Fg, Reset};
use thiserror::Error;

pub type Result = result::Result<(), Error>;

/// Error is a wrapper for [`io::Error`] that singles out broken pipes as part of the type.
///
/// A reporter that loses its output stream mid-run has nothing useful left to say, but it must not let that mask the
/// assertion failure it was echoing. Keeping the distinction in the type lets callers drop `BrokenPipe` quietly while
/// still surfacing everything else.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    BrokenPipe(io::Error),
    #[error("{0}")]
    Other(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe => Self::BrokenPipe(err),
            _ => Self::Other(err),
        }
    }
}

/// `Printer` represents an object that can write out human-readable messages, such as by the eprint! macro
pub trait Printer {
    /// Print the given message.
    ///
    /// # Errors
    /// In the event of any i/o error, an error is returned. See [enum@Error] for how broken pipes are reported.
    fn print<S: fmt::Display>(&self, msg: S) -> Result;

    /// Print the given message with the given foreground color.
    ///
    /// Every line is colored on its own, and the color is reset before each line terminator so that a terminal never
    /// carries the color over into whatever is printed next.
    ///
    /// # Errors
    /// In the event of any i/o error, an error is returned. See [enum@Error] for how broken pipes are reported.
    fn colored_print<S: fmt::Display, C: Color>(&self, color: Fg<C>, msg: S) -> Result {
        let msg_string = msg.to_string();
        let colored_msg: String = msg_string
            .split_inclusive('\n')
            .map(|line| {
                let content = line.trim_end_matches(&['\r', '\n'][..]);
                let terminator = &line[content.len()..];
                if content.is_empty() {
                    return terminator.to_string();
                }

                format!(
                    "{color}{content}{reset}{terminator}",
                    color = color,
                    reset = Fg(Reset),
                    content = content,
                    terminator = terminator,
                )
            })
            .collect();

        self.print(colored_msg)
    }
}

/// `StderrPrinter` prints to the process's stderr.
pub struct StderrPrinter;

impl StderrPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether stderr is attached to a terminal, i.e. whether colored output will be legible.
    #[must_use]
    pub fn is_tty(&self) -> bool {
        termion::is_tty(&io::stderr())
    }
}

impl Default for StderrPrinter {
    fn default() -> Self {
        Self {}
    }
}

impl Printer for StderrPrinter {
    fn print<S: fmt::Display>(&self, msg: S) -> Result {
        let mut stderr = io::stderr();
        Ok(write!(stderr, "{}", msg)?)
    }
}
