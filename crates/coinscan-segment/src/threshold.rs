//! Global binary thresholding
//!
//! Otsu's method: pick the threshold that maximizes the between-class
//! variance of the two hypothesized pixel populations, then binarize.

use coinscan_core::{BinaryRaster, GrayRaster};

/// Compute the Otsu threshold of a grayscale raster.
///
/// For each candidate threshold `t`, the background class holds every
/// sample with value `<= t` and the foreground class the rest.
/// Candidates with an empty class are skipped. The between-class
/// variance is `w_bg * w_fg * (mean_bg - mean_fg)^2`; the comparison is
/// strict, so among tied candidates the lowest threshold wins.
///
/// A raster with a single intensity value has no valid split and yields
/// threshold 0.
pub fn compute_otsu_threshold(pix: &GrayRaster) -> u8 {
    let hist = pix.histogram();
    let total = pix.sample_count() as u64;

    let sum_total: f64 = hist
        .iter()
        .enumerate()
        .map(|(v, &count)| v as f64 * count as f64)
        .sum();

    let mut best_variance = 0.0f64;
    let mut threshold = 0u8;

    let mut weight_bg = 0u64;
    let mut sum_bg = 0.0f64;

    for (t, &count) in hist.iter().enumerate() {
        weight_bg += count;
        if weight_bg == 0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0 {
            break;
        }
        sum_bg += t as f64 * count as f64;

        let mean_bg = sum_bg / weight_bg as f64;
        let mean_fg = (sum_total - sum_bg) / weight_fg as f64;
        let diff = mean_bg - mean_fg;
        let variance = weight_bg as f64 * weight_fg as f64 * diff * diff;

        if variance > best_variance {
            best_variance = variance;
            threshold = t as u8;
        }
    }

    threshold
}

/// Binarize a grayscale raster against a fixed threshold.
///
/// A sample is foreground iff its value is strictly greater than
/// `threshold`.
pub fn threshold_to_binary(pix: &GrayRaster, threshold: u8) -> BinaryRaster {
    let bits: Vec<bool> = pix.data().iter().map(|&v| v > threshold).collect();
    BinaryRaster::from_vec(pix.width(), pix.height(), bits)
        .expect("output buffer matches input dimensions")
}

/// Binarize a grayscale raster with the Otsu threshold.
///
/// Returns the binary raster together with the threshold that produced
/// it.
pub fn threshold_otsu(pix: &GrayRaster) -> (BinaryRaster, u8) {
    let threshold = compute_otsu_threshold(pix);
    (threshold_to_binary(pix, threshold), threshold)
}
