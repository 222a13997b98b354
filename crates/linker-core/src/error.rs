//! Error types for Desktop Linker.
//!
//! Discovery never surfaces these: per-file failures are folded into skip
//! outcomes. Shortcut creation returns them so the front end can render feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Desktop Linker library.
#[derive(Debug, Error)]
pub enum LinkerError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Entry errors
    #[error("Invalid desktop entry {path}: {message}")]
    InvalidEntry { path: PathBuf, message: String },

    // Caller preconditions
    #[error("No file or folder selected")]
    NoTargetSelected,

    #[error("No application selected")]
    NoAppSelected,

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Desktop Linker operations.
pub type Result<T> = std::result::Result<T, LinkerError>;

impl From<std::io::Error> for LinkerError {
    fn from(err: std::io::Error) -> Self {
        LinkerError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl LinkerError {
    /// Create an IO error describing the failed action.
    pub(crate) fn io_action(
        action: &str,
        err: std::io::Error,
        path: impl Into<PathBuf>,
    ) -> Self {
        LinkerError::Io {
            message: action.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether the caller failed to supply a target before asking for a shortcut.
    pub fn is_missing_selection(&self) -> bool {
        matches!(self, LinkerError::NoTargetSelected | LinkerError::NoAppSelected)
    }
}
