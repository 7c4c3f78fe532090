//! Error types for gasket generation.

use thiserror::Error;

/// Result type for gasket operations.
pub type Result<T> = std::result::Result<T, GasketError>;

/// Errors that can occur while seeding or expanding a gasket.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasketError {
    /// The seed parameters do not describe a usable tangent quadruplet.
    #[error("invalid seed: {reason}")]
    InvalidSeed { reason: String },

    /// Expansion hit the hard generation or circle ceiling.
    #[error("resource ceiling reached after {generations} generations with {circles} circles")]
    ResourceExhausted { generations: usize, circles: usize },
}

impl GasketError {
    pub(crate) fn invalid_seed(reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            reason: reason.into(),
        }
    }
}
