//! Grayscale reduction
//!
//! Reduces a 3-channel RGB raster to single-channel intensity using the
//! truncated channel average. Per-channel weighting (luma) is deliberately
//! not used; every channel contributes equally.

use super::{GrayRaster, RgbRaster};

/// Reduce an RGB raster to grayscale.
///
/// Each output sample is `(r + g + b) / 3` with integer truncation.
pub fn to_grayscale(pix: &RgbRaster) -> GrayRaster {
    let gray: Vec<u8> = pix
        .data()
        .iter()
        .map(|&[r, g, b]| ((r as u32 + g as u32 + b as u32) / 3) as u8)
        .collect();

    GrayRaster::from_vec(pix.width(), pix.height(), gray)
        .expect("output buffer matches input dimensions")
}
