//! coinscan-filter - Intensity filtering operations
//!
//! This crate provides the per-pixel filtering stages of the coin
//! pipeline:
//!
//! - Linear contrast stretch around mid-gray (lookup-table based)
//! - Fixed 3x3 weighted smoothing ahead of segmentation
//! - Histogram equalization with a display frame

pub mod contrast;
pub mod convolve;
pub mod equalize;
mod error;

pub use contrast::{ContrastLut, adjust_contrast, contrast_lut};
pub use convolve::{blur, blur_rgb};
pub use equalize::equalize_histogram;
pub use error::{FilterError, FilterResult};
