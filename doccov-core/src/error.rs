//! Error types for doccov core.

use std::{error::Error, fmt, io};

/// Error type for doccov core operations.
#[derive(Debug)]
pub enum DocCovError {
    /// An underlying I/O error.
    Io(io::Error),
    /// An entity model or report payload that could not be (de)serialized.
    Json(serde_json::Error),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for DocCovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DocCovError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Other(_) => None,
        }
    }
}

impl From<io::Error> for DocCovError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DocCovError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Convenience result type for doccov core.
pub type Result<T> = std::result::Result<T, DocCovError>;
