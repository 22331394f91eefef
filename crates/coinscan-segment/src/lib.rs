//! coinscan-segment - Global thresholding for the coin pipeline
//!
//! Computes a binary foreground/background raster from the preprocessed
//! grayscale raster using Otsu's between-class-variance criterion.

pub mod threshold;

pub use threshold::{compute_otsu_threshold, threshold_otsu, threshold_to_binary};
