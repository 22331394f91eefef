//! Coinscan Core - Basic data structures for the coin-counting pipeline
//!
//! This crate provides the fundamental types used throughout coinscan:
//!
//! - [`Raster`] - flat row-major sample grid, generic over the sample type
//! - [`RgbRaster`] / [`GrayRaster`] / [`BinaryRaster`] / [`LabelRaster`] -
//!   the concrete rasters flowing between pipeline stages
//! - [`PipelineParams`] - immutable per-run configuration
//! - [`Error`] / [`Result`] - the shared error type
//!
//! The grayscale reduction rule and the 256-bin intensity histogram live
//! here as well, since several downstream stages share them.

pub mod error;
pub mod params;
pub mod raster;

pub use error::{Error, Result};
pub use params::PipelineParams;
pub use raster::{
    BinaryRaster, GrayRaster, HISTOGRAM_BINS, LabelRaster, Raster, RgbRaster, to_grayscale,
};
