//! coinscan-transform - Geometric transforms for the coin pipeline
//!
//! This crate provides the resampling stage that runs before any
//! per-pixel processing:
//!
//! - Integer-factor Lanczos downsampling of the input photograph
//! - Composed downsample-and-grayscale entry point for the pipeline

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{reduce, reduce_to_gray};
