//! Smoothing convolution
//!
//! Applies the fixed 3x3 weighted kernel used ahead of segmentation.
//! Border cells are not computed: the output raster is allocated zeroed
//! and only interior cells receive the convolution result, so the
//! outermost row and column of the blurred raster are always 0. The
//! thresholding stage relies on that framing.

use coinscan_core::{GrayRaster, RgbRaster, to_grayscale};

/// The smoothing kernel, row-major. Weights sum to 16.
const KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Sum of the kernel weights.
const KERNEL_SUM: u32 = 16;

/// Blur a grayscale raster with the fixed 3x3 kernel.
///
/// Each interior cell becomes the weighted neighborhood sum divided by
/// 16 with truncation, clamped to `[0, 255]`. Border cells stay 0.
pub fn blur(pix: &GrayRaster) -> GrayRaster {
    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let src = pix.data();
    let mut out = vec![0u8; w * h];

    for y in 1..h - 1 {
        let row = y * w;
        for x in 1..w - 1 {
            let mut sum = 0u32;
            for (ky, kernel_row) in KERNEL.iter().enumerate() {
                let base = (y + ky - 1) * w + x - 1;
                for (kx, &weight) in kernel_row.iter().enumerate() {
                    sum += weight * src[base + kx] as u32;
                }
            }
            out[row + x] = (sum / KERNEL_SUM).min(255) as u8;
        }
    }

    GrayRaster::from_vec(pix.width(), pix.height(), out)
        .expect("output buffer matches input dimensions")
}

/// Blur a 3-channel raster.
///
/// The raster is first reduced to grayscale with the truncated channel
/// average, then blurred like [`blur`].
pub fn blur_rgb(pix: &RgbRaster) -> GrayRaster {
    blur(&to_grayscale(pix))
}
