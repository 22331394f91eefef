//! I/O error types
//!
//! Provides a unified error type for image decoding and encoding.
//! Callers see one error type regardless of the underlying format.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image data could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// The raster could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] coinscan_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
