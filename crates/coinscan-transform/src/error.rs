//! Error types for coinscan-transform

use thiserror::Error;

/// Errors that can occur during geometric transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] coinscan_core::Error),

    /// Scale factor outside the accepted range
    #[error("invalid scale factor: {0}")]
    InvalidScale(u32),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
