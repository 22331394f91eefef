//! Error types for coinscan-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Coinscan error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sample coordinates out of bounds
    #[error("sample out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Raster shape unexpectedly differs between two stages.
    ///
    /// Every pipeline stage preserves the raster shape, so this is a
    /// programming-error-class fault rather than a user-facing one.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for coinscan operations
pub type Result<T> = std::result::Result<T, Error>;
