//! Histogram equalization
//!
//! Remaps intensities through the rescaled cumulative distribution, then
//! paints a fixed-value frame on the outermost row and column so the
//! equalized raster reads clearly when displayed next to the other
//! stages.

use coinscan_core::{GrayRaster, HISTOGRAM_BINS};
use tracing::warn;

/// Intensity written over the outermost row and column after remapping.
const FRAME_VALUE: u8 = 200;

/// Equalize the histogram of a grayscale raster.
///
/// Builds the 256-bin frequency histogram, rescales its cumulative sum
/// to `[0, 255]` with truncation, and maps every sample through the
/// resulting lookup table. The outermost row and column are then set to
/// 200.
///
/// A degenerate raster whose cumulative distribution has zero range
/// (every sample is 0, so the first and last cumulative counts agree)
/// cannot be rescaled; it is returned unchanged, without the frame.
pub fn equalize_histogram(pix: &GrayRaster) -> GrayRaster {
    let hist = pix.histogram();

    let mut cumulative = [0u64; HISTOGRAM_BINS];
    let mut running = 0u64;
    for (bin, &count) in hist.iter().enumerate() {
        running += count;
        cumulative[bin] = running;
    }

    // The cumulative sum is non-decreasing, so its extremes are the
    // first and last entries.
    let cs_min = cumulative[0];
    let cs_max = cumulative[HISTOGRAM_BINS - 1];
    if cs_max == cs_min {
        warn!("zero-range cumulative histogram, returning raster unchanged");
        return pix.clone();
    }

    let range = cs_max - cs_min;
    let mut lut = [0u8; HISTOGRAM_BINS];
    for (bin, entry) in lut.iter_mut().enumerate() {
        *entry = ((cumulative[bin] - cs_min) * 255 / range) as u8;
    }

    let mapped: Vec<u8> = pix.data().iter().map(|&v| lut[v as usize]).collect();
    let mut out = GrayRaster::from_vec(pix.width(), pix.height(), mapped)
        .expect("output buffer matches input dimensions");

    paint_frame(&mut out);
    out
}

/// Overwrite the outermost row and column with the frame value.
fn paint_frame(pix: &mut GrayRaster) {
    let (w, h) = pix.dimensions();
    for x in 0..w {
        pix.put(x, 0, FRAME_VALUE);
        pix.put(x, h - 1, FRAME_VALUE);
    }
    for y in 0..h {
        pix.put(0, y, FRAME_VALUE);
        pix.put(w - 1, y, FRAME_VALUE);
    }
}
