use std::fmt;

/// A convenient type alias for results in this crate.
pub(crate) type Result<T> = std::result::Result<T, Error>;

/// An error that occurred while capturing a value.
///
/// Errors never reach the caller, they are recorded in the captured value
/// as a [`Value::Error`][crate::Value::Error] leaf.
#[derive(Clone)]
pub(crate) struct Error {
    msg: String,
}

impl Error {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::new(msg.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error").field("msg", &self.msg).finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.msg
    }
}
