use std::result;
use thiserror::Error;

use crate::kind::ValueKind;

#[derive(Error, Debug)]
pub enum Error {
    /// A producer upstream of the interpreter handed over something it should
    /// never have produced. Not recoverable.
    #[error("Internal consistency error: {0}")]
    Internal(String),
    #[error("Kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: ValueKind, found: ValueKind },
    #[error("Evaluation error: {0}")]
    Evaluation(String),
    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }

    pub fn evaluation(message: impl Into<String>) -> Self {
        Error::Evaluation(message.into())
    }

    /// True for failures that signal a defect in the producer rather than in
    /// the program being interpreted.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_) | Error::KindMismatch { .. })
    }
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Generic(e.to_string())
    }
}
