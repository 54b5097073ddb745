//! Error types for zip extraction operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while validating or extracting a zip archive.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Archive file does not exist.
    #[error("archive not found: {path}")]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// File exists but is not a structurally valid zip archive.
    #[error("not a valid zip archive: {path}")]
    InvalidFormat {
        /// The path of the rejected file.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Returns `true` if this error means the input failed the zip format
    /// check.
    ///
    /// Invalid-format failures are the expected, user-facing condition:
    /// callers report them and skip extraction instead of treating them as
    /// fatal I/O failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use zipex_core::ExtractError;
    ///
    /// let err = ExtractError::InvalidFormat {
    ///     path: PathBuf::from("notes.txt"),
    /// };
    /// assert!(err.is_invalid_format());
    ///
    /// let err = ExtractError::NotFound {
    ///     path: PathBuf::from("a.zip"),
    /// };
    /// assert!(!err.is_invalid_format());
    /// ```
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns the archive path this error refers to, if it carries one.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound { path } | Self::InvalidFormat { path } => Some(path),
            Self::Io(_) => None,
        }
    }
}
