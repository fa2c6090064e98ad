//! Error types for file-level cil2te operations.
//!
//! The pure text passes (`translate`, `tidy`, `check`) are total; only the
//! command wrappers that touch the filesystem can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a file-level command.
#[derive(Debug, Error)]
pub enum Cil2TeError {
    /// The input path does not carry the extension the command requires.
    #[error("input file must have a .{expected} extension: {}", .path.display())]
    InvalidExtension {
        path: PathBuf,
        expected: &'static str,
    },

    /// The input path could not be opened for reading.
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the command layer.
pub type Cil2TeResult<T> = Result<T, Cil2TeError>;
