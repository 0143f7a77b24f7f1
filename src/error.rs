//! Error types for Ordinate.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Ordinate operations.
pub type Result<T> = std::result::Result<T, OrdinateError>;

/// Errors that can occur in Ordinate.
#[derive(Debug, Error)]
pub enum OrdinateError {
    /// Failed to read a data file.
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file.
    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a valid point array.
    #[error("Invalid data file: {0}")]
    Format(#[from] serde_json::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrdinateError {
    /// Create a FileRead error.
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite { path, source }
    }

    /// True for errors caused by malformed file contents rather than I/O.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
