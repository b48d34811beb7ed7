//! Error types for planar-creepage.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for creepage calculations.
pub type CreepageResult<T> = Result<T, CreepageError>;

/// Errors that can occur while computing a creepage distance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreepageError {
    /// The value does not name one of the seven IPC-2221 classifications.
    #[error("invalid classification '{value}': expected 1-7 or one of B1, B2, B3, B4, A5, A6, A7")]
    InvalidClassification {
        /// The rejected input, as text.
        value: String,
    },

    /// The voltage is negative, NaN, or infinite.
    #[error("invalid voltage {voltage}: must be a finite, non-negative RMS value")]
    InvalidVoltage {
        /// The rejected voltage in volts.
        voltage: f64,
    },
}

impl CreepageError {
    pub(crate) fn invalid_classification(value: impl ToString) -> Self {
        Self::InvalidClassification {
            value: value.to_string(),
        }
    }
}

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}
