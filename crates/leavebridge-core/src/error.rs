//! Core error types for leavebridge-core.
//!
//! The optimizer itself never fails for inputs inside its documented
//! domain; errors only arise at the I/O rim (scoring-parameter files and
//! caller-supplied input files).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for leavebridge-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load scoring parameters
    #[error("Failed to load scoring parameters from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse scoring parameters
    #[error("Failed to parse scoring parameters from {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
