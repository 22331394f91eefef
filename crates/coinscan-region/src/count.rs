//! Coin counting
//!
//! Counts the 4-connected foreground components of a filtered binary
//! raster and tallies how many distinct size classes they fall into.

use crate::conncomp::{ConnectivityType, component_sizes, label_components};
use coinscan_core::BinaryRaster;

/// Result of one counting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinCount {
    /// Number of distinct 4-connected foreground components.
    pub num_coins: u32,
    /// Size-class tally, clamped to `num_coins`.
    pub size_differences: u32,
}

/// Count coins and classify their size differences.
///
/// Components are labeled with 4-way connectivity and their pixel areas
/// compared pairwise. The tally starts at 1 and is incremented for
/// every unordered pair whose area difference is at least
/// `size_threshold`, then clamped to the component count. With no
/// components the clamp yields 0; a single component yields 1.
pub fn count_coins(pix: &BinaryRaster, size_threshold: u32) -> CoinCount {
    let (labeled, num_coins) = label_components(pix, ConnectivityType::FourWay);
    let areas = component_sizes(&labeled, num_coins);

    let mut tally = 1u64;
    for i in 0..areas.len() {
        for j in i + 1..areas.len() {
            if areas[i].abs_diff(areas[j]) >= size_threshold as u64 {
                tally += 1;
            }
        }
    }

    if tally > num_coins as u64 {
        tally = num_coins as u64;
    }

    CoinCount {
        num_coins,
        size_differences: tally as u32,
    }
}
