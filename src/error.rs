//! Error types for Gymdesk
//!
//! Uses `thiserror` for library errors. Domain operations (queries and
//! mutations on the store, login) deliberately do not use this type: their
//! failures are ordinary outcomes reported as `bool`/`Option` and logged.
//! `GymdeskError` covers infrastructure failures only.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gymdesk operations
pub type GymdeskResult<T> = Result<T, GymdeskError>;

/// Main error type for Gymdesk operations
#[derive(Error, Debug)]
pub enum GymdeskError {
    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
