//! Binary morphology regression test
//!
//! Exercises erosion/dilation monotonicity, the two-phase update
//! discipline, and noise suppression under the 5/1 schedule.
//!
//! Run with:
//! ```
//! cargo test -p coinscan-morph --test binmorph_reg
//! ```

use coinscan_core::BinaryRaster;
use coinscan_morph::{dilate, erode, filter_noise};
use coinscan_test::{RegParams, binary_block};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Two solid 14x14 blobs in the left half of a 60x40 raster.
fn blob_raster() -> BinaryRaster {
    let mut pix = BinaryRaster::new(60, 40).unwrap();
    binary_block(&mut pix, 3, 3, 14, 14);
    binary_block(&mut pix, 3, 22, 14, 14);
    pix
}

/// Sprinkle random interior noise into the right half, away from the
/// blobs.
fn add_noise(pix: &mut BinaryRaster, points: u32, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..points {
        let x = rng.random_range(40..58);
        let y = rng.random_range(1..39);
        pix.put(x, y, true);
    }
}

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");

    let pixs = blob_raster();
    let orig_count = pixs.count_foreground();
    eprintln!("Original foreground pixels: {orig_count}");

    // Erosion is anti-extensive, dilation extensive.
    let eroded = erode(&pixs, 1);
    rp.check(
        "erosion does not add pixels",
        eroded.count_foreground() <= orig_count,
    );

    let dilated = dilate(&pixs, 1);
    rp.check(
        "dilation does not remove pixels",
        dilated.count_foreground() >= orig_count,
    );

    // One erosion strips exactly the one-cell boundary layer of each
    // 14x14 blob: 14*14 - 12*12 = 52 pixels per blob.
    rp.compare_values(
        (orig_count - 2 * 52) as f64,
        eroded.count_foreground() as f64,
        0.0,
    );

    // The 5/1 schedule leaves both blobs: 4x4 cores plus the dilated
    // edge ring.
    let filtered = filter_noise(&pixs, 5, 1);
    rp.check("schedule keeps blob pixels", filtered.count_foreground() > 0);

    // Sparse random noise cannot survive five erosions; a surviving
    // cell would need an all-foreground neighborhood 5 cells deep.
    let mut noisy = BinaryRaster::new(60, 40).unwrap();
    add_noise(&mut noisy, 30, 7);
    let scrubbed = erode(&noisy, 5);
    rp.compare_values(0.0, scrubbed.count_foreground() as f64, 0.0);

    // Noise in one region does not disturb blobs in another: filtering
    // blobs-plus-noise equals filtering the blobs alone.
    let mut noisy_blobs = blob_raster();
    add_noise(&mut noisy_blobs, 30, 7);
    let filtered_noisy = filter_noise(&noisy_blobs, 5, 1);
    rp.check("noise fully scrubbed", filtered_noisy == filtered);

    assert!(rp.cleanup());
}
