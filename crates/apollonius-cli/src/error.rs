//! Error types for the apollonius CLI.

use apollonius_gasket::GasketError;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line
    #[error("{0}")]
    Usage(String),

    /// An argument that should be a number is not
    #[error("invalid {name}: {value:?} is not a number")]
    InvalidNumber { name: &'static str, value: String },

    /// An environment setting is out of range or unparseable
    #[error("invalid {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    /// Gasket generation failed
    #[error(transparent)]
    Gasket(#[from] GasketError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
