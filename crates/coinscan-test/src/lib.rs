//! coinscan-test - Test support for the coinscan workspace
//!
//! Provides the regression-test harness used by the `tests/*_reg.rs`
//! integration tests, plus builders for the synthetic rasters the test
//! suite runs the pipeline on:
//!
//! - [`RegParams`] - check tracking with a printed summary
//! - Grayscale/binary/RGB raster builders
//! - [`draw_disk`] for painting coin-like blobs into an RGB raster

mod params;

pub use params::RegParams;

use coinscan_core::{BinaryRaster, GrayRaster, RgbRaster};

/// Build a grayscale raster from a per-sample function of `(x, y)`.
pub fn gray_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> GrayRaster {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    GrayRaster::from_vec(width, height, data).expect("builder dimensions are nonzero")
}

/// Build a binary raster with the given samples set to foreground.
pub fn binary_from_points(width: u32, height: u32, points: &[(u32, u32)]) -> BinaryRaster {
    let mut pix = BinaryRaster::new(width, height).expect("builder dimensions are nonzero");
    for &(x, y) in points {
        pix.put(x, y, true);
    }
    pix
}

/// Set a solid `bw` x `bh` foreground rectangle with top-left `(x0, y0)`.
pub fn binary_block(pix: &mut BinaryRaster, x0: u32, y0: u32, bw: u32, bh: u32) {
    for y in y0..y0 + bh {
        for x in x0..x0 + bw {
            pix.put(x, y, true);
        }
    }
}

/// Paint a filled disk into an RGB raster.
///
/// A sample belongs to the disk if its center distance is at most
/// `radius` (integer squared distance).
pub fn draw_disk(pix: &mut RgbRaster, cx: i64, cy: i64, radius: i64, color: [u8; 3]) {
    let r2 = radius * radius;
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            if dx * dx + dy * dy <= r2 {
                pix.put(x, y, color);
            }
        }
    }
}
