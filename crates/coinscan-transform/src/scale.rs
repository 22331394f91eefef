//! Image downsampling
//!
//! The first pipeline stage: resample the input photograph down by an
//! integer factor with a Lanczos filter, then reduce to grayscale.
//! Downsampling before the per-pixel stages keeps the nested-loop scans
//! (blur, morphology) affordable on large photos.

use crate::error::{TransformError, TransformResult};
use coinscan_core::{Error, GrayRaster, RgbRaster, to_grayscale};
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Downsample an RGB raster by an integer factor.
///
/// The output dimensions are `(width / scale, height / scale)` with
/// truncating division. Resampling uses a Lanczos window (3 lobes).
///
/// # Errors
///
/// Returns [`TransformError::InvalidScale`] if `scale` is 0, or a
/// dimension error if the reduced raster would be empty in either axis.
pub fn reduce(pix: &RgbRaster, scale: u32) -> TransformResult<RgbRaster> {
    if scale < 1 {
        return Err(TransformError::InvalidScale(scale));
    }

    let out_w = pix.width() / scale;
    let out_h = pix.height() / scale;
    if out_w == 0 || out_h == 0 {
        return Err(Error::InvalidDimension {
            width: out_w,
            height: out_h,
        }
        .into());
    }

    let flat: Vec<u8> = pix.data().iter().flat_map(|px| px.iter().copied()).collect();
    let img = RgbImage::from_raw(pix.width(), pix.height(), flat)
        .expect("raster buffer matches its dimensions");

    let resized = imageops::resize(&img, out_w, out_h, FilterType::Lanczos3);

    let samples: Vec<[u8; 3]> = resized
        .into_raw()
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    Ok(RgbRaster::from_vec(out_w, out_h, samples)?)
}

/// Downsample an RGB raster and reduce it to grayscale.
///
/// Grayscale reduction happens after resampling, using the truncated
/// channel average. This is the pipeline's entry stage.
///
/// # Errors
///
/// Same conditions as [`reduce`].
pub fn reduce_to_gray(pix: &RgbRaster, scale: u32) -> TransformResult<GrayRaster> {
    let resized = reduce(pix, scale)?;
    Ok(to_grayscale(&resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_scale() {
        let pix = RgbRaster::new(10, 10).unwrap();
        assert!(matches!(
            reduce(&pix, 0),
            Err(TransformError::InvalidScale(0))
        ));
    }

    #[test]
    fn test_rejects_empty_result() {
        let pix = RgbRaster::new(4, 4).unwrap();
        assert!(reduce(&pix, 5).is_err());
    }

    #[test]
    fn test_dimensions_truncate() {
        let pix = RgbRaster::new(9, 7).unwrap();
        let reduced = reduce(&pix, 2).unwrap();
        assert_eq!(reduced.dimensions(), (4, 3));
    }

    #[test]
    fn test_unit_scale_keeps_dimensions() {
        let pix = RgbRaster::new(6, 5).unwrap();
        let reduced = reduce(&pix, 1).unwrap();
        assert_eq!(reduced.dimensions(), (6, 5));
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        // A constant image is a fixed point of any normalized resampler.
        let pix = RgbRaster::filled(16, 16, [100, 150, 200]).unwrap();
        let reduced = reduce(&pix, 2).unwrap();
        assert!(reduced.data().iter().all(|&px| px == [100, 150, 200]));
    }

    #[test]
    fn test_reduce_to_gray() {
        let pix = RgbRaster::filled(8, 8, [10, 20, 40]).unwrap();
        let gray = reduce_to_gray(&pix, 2).unwrap();
        assert_eq!(gray.dimensions(), (4, 4));
        // (10+20+40)/3 = 23.33 -> 23
        assert!(gray.data().iter().all(|&v| v == 23));
    }
}
