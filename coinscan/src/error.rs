//! Pipeline error type
//!
//! Unifies the stage errors behind one type so pipeline callers handle
//! a single error. A pipeline call either returns a complete raster or
//! count, or fails outright; there are no partial results.

use thiserror::Error;

/// Errors surfaced by the pipeline functions
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid configuration, rejected before any raster work
    #[error("configuration error: {0}")]
    Config(#[from] coinscan_core::Error),

    /// Resampling stage error
    #[error("transform error: {0}")]
    Transform(#[from] coinscan_transform::TransformError),

    /// Filtering stage error
    #[error("filter error: {0}")]
    Filter(#[from] coinscan_filter::FilterError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
