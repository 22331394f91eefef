//! Intensity histograms
//!
//! The 256-bin frequency histogram is shared by the histogram equalizer
//! and the Otsu segmenter.

use super::Raster;

/// Number of histogram bins for an 8-bit raster.
pub const HISTOGRAM_BINS: usize = 256;

impl Raster<u8> {
    /// Count the occurrences of each intensity value.
    pub fn histogram(&self) -> [u64; HISTOGRAM_BINS] {
        let mut hist = [0u64; HISTOGRAM_BINS];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        hist
    }
}
