//! Error conversion utilities for CLI.
//!
//! Converts zipex-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use zipex_core::ExtractError;

/// Converts `ExtractError` to a user-friendly anyhow error with context
pub fn convert_extract_error(err: ExtractError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractError::NotFound { path } => {
            anyhow!(
                "Archive not found: '{}'\n\
                 HINT: Check the path and try again.",
                path.display()
            )
        }
        ExtractError::InvalidFormat { path } => {
            anyhow!(
                "The file is not a valid zip archive: '{}'\n\
                 HINT: The file may be corrupted or not a zip archive at all.",
                path.display()
            )
        }
        ExtractError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
    }
}
