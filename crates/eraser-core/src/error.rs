//! Error types for the eraser core library

use thiserror::Error;

/// Main error type for erase operations
#[derive(Error, Debug)]
pub enum Error {
    /// Target path does not exist at validation time
    #[error("File not found: {0}")]
    NotFound(String),

    /// File size is zero; an empty file has nothing to overwrite
    #[error("Size must be > 0: {size} ({path})")]
    InvalidSize {
        /// Path of the offending file
        path: String,
        /// Size reported by the filesystem
        size: u64,
    },

    /// Unrecognized pattern code supplied to the fill step
    #[error("Invalid pattern code: '{0}'")]
    InvalidPattern(char),

    /// IO error during open/seek/write operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the eraser error type
pub type Result<T> = std::result::Result<T, Error>;
