//! `value` provides display adapters for values that don't have a natural human-readable form.
use std::fmt;

const NIL: &str = "<nil>";

/// `Nilable` renders an [`Option`] the way a failure message wants to read it: the inner value as-is, or `<nil>`
/// if there is none.
///
/// # Examples
///
/// ```
/// use eqcheck::value::Nilable;
///
/// assert_eq!("true", Nilable::from(Some(true)).to_string());
/// assert_eq!("<nil>", Nilable::<bool>::nil().to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nilable<T>(pub Option<T>);

impl<T> Nilable<T> {
    /// A `Nilable` holding nothing.
    #[must_use]
    pub fn nil() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }
}

impl<T> From<Option<T>> for Nilable<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: fmt::Display> fmt::Display for Nilable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NIL),
        }
    }
}
