//! Contrast adjustment
//!
//! Linear contrast stretch around the mid-gray point, applied through a
//! 256-entry lookup table.

use crate::error::{FilterError, FilterResult};
use coinscan_core::GrayRaster;

/// A 256-entry lookup table mapping input intensities to output
/// intensities.
pub type ContrastLut = [u8; 256];

/// Mid-gray pivot of the stretch.
const PIVOT: f64 = 128.0;

/// Generate the lookup table for a linear contrast stretch.
///
/// Each entry is `128 + factor * (v - 128)`, truncated toward zero and
/// clamped to `[0, 255]`. A factor above 1 pushes values away from
/// mid-gray; a factor below 1 pulls them toward it.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] unless `factor` is
/// positive and finite.
pub fn contrast_lut(factor: f64) -> FilterResult<ContrastLut> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(FilterError::InvalidParameters(
            "contrast factor must be positive and finite".into(),
        ));
    }

    let mut lut = [0u8; 256];
    for (v, entry) in lut.iter_mut().enumerate() {
        let stretched = (PIVOT + factor * (v as f64 - PIVOT)) as i32;
        *entry = stretched.clamp(0, 255) as u8;
    }
    Ok(lut)
}

/// Apply a linear contrast stretch to a grayscale raster.
///
/// Pure and elementwise; the output raster has the same dimensions as
/// the input.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] for a non-positive or
/// non-finite factor.
pub fn adjust_contrast(pix: &GrayRaster, factor: f64) -> FilterResult<GrayRaster> {
    let lut = contrast_lut(factor)?;
    let mapped: Vec<u8> = pix.data().iter().map(|&v| lut[v as usize]).collect();
    Ok(GrayRaster::from_vec(pix.width(), pix.height(), mapped)
        .expect("output buffer matches input dimensions"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_factor() {
        assert!(contrast_lut(0.0).is_err());
        assert!(contrast_lut(-1.0).is_err());
        assert!(contrast_lut(f64::NAN).is_err());
        assert!(contrast_lut(f64::INFINITY).is_err());
    }

    #[test]
    fn test_pivot_is_fixed() {
        let lut = contrast_lut(1.5).unwrap();
        assert_eq!(lut[128], 128);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 128 + 1.5 * (127 - 128) = 126.5 -> 126
        let lut = contrast_lut(1.5).unwrap();
        assert_eq!(lut[127], 126);
    }

    #[test]
    fn test_clamps_to_range() {
        let lut = contrast_lut(1.5).unwrap();
        // 128 + 1.5 * (0 - 128) = -64 -> clamped to 0
        assert_eq!(lut[0], 0);
        // 128 + 1.5 * (255 - 128) = 318.5 -> clamped to 255
        assert_eq!(lut[255], 255);
        // 128 + 1.5 * (200 - 128) = 236
        assert_eq!(lut[200], 236);
    }

    #[test]
    fn test_identity_factor() {
        let lut = contrast_lut(1.0).unwrap();
        for (v, &out) in lut.iter().enumerate() {
            assert_eq!(out as usize, v);
        }
    }

    #[test]
    fn test_adjust_is_elementwise() {
        let pix = GrayRaster::from_vec(2, 2, vec![0, 100, 128, 255]).unwrap();
        let out = adjust_contrast(&pix, 1.5).unwrap();
        // 128 + 1.5 * (100 - 128) = 86
        assert_eq!(out.data(), &[0, 86, 128, 255]);
    }
}
