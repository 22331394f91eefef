//! Connected component regression test
//!
//! Labels a grid of blobs and checks counting and size-class behavior
//! on larger rasters than the unit tests use.
//!
//! Run with:
//! ```
//! cargo test -p coinscan-region --test conncomp_reg
//! ```

use coinscan_core::BinaryRaster;
use coinscan_region::{ConnectivityType, component_sizes, count_coins, label_components};
use coinscan_test::{RegParams, binary_block};

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // A 5x4 grid of 3x3 blocks, spaced 6 cells apart.
    let mut pixs = BinaryRaster::new(40, 30).unwrap();
    for gy in 0..4 {
        for gx in 0..5 {
            binary_block(&mut pixs, 2 + 6 * gx, 2 + 6 * gy, 3, 3);
        }
    }

    let (labeled, count) = label_components(&pixs, ConnectivityType::FourWay);
    eprintln!("Components: {count}");
    rp.compare_values(20.0, count as f64, 0.0);

    // Every component is a 3x3 block.
    let sizes = component_sizes(&labeled, count);
    rp.check("every blob has area 9", sizes.iter().all(|&s| s == 9));
    rp.compare_values(
        pixs.count_foreground() as f64,
        sizes.iter().sum::<u64>() as f64,
        0.0,
    );

    // Labels cover 1..=N exactly once each.
    let mut seen = vec![false; count as usize];
    for &label in labeled.data() {
        if label > 0 {
            seen[label as usize - 1] = true;
        }
    }
    rp.check("labels are 1..=N", seen.iter().all(|&s| s));

    // Equal areas fall into a single size class.
    let equal = count_coins(&pixs, 5);
    rp.compare_values(20.0, equal.num_coins as f64, 0.0);
    rp.compare_values(1.0, equal.size_differences as f64, 0.0);

    // Replace one blob with a much larger one: it differs from the 19
    // others, so the tally lands at 1 + 19 = 20, equal to the count.
    let mut mixed = pixs.clone();
    binary_block(&mut mixed, 2, 2, 5, 5);
    let (_, mixed_count) = label_components(&mixed, ConnectivityType::FourWay);
    rp.compare_values(20.0, mixed_count as f64, 0.0);
    let outlier = count_coins(&mixed, 10);
    rp.compare_values(20.0, outlier.num_coins as f64, 0.0);
    rp.compare_values(20.0, outlier.size_differences as f64, 0.0);

    assert!(rp.cleanup());
}
