//! Error types for GIA
//!
//! Uses `thiserror` for library errors. The store, compiler and renderer are
//! total and never produce these; they come from I/O, config files and CLI
//! arguments.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for GIA operations
pub type GiaResult<T> = Result<T, GiaError>;

/// Main error type for GIA operations
#[derive(Error, Debug)]
pub enum GiaError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Malformed command-line value (e.g. `--db main:mongo`)
    #[error("invalid {argument}: {message}")]
    InvalidArgument { argument: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
