//! Coinscan - coin detection and size-class counting
//!
//! Coinscan detects coin-like blobs in a photograph and reports how
//! many distinct size classes they fall into. The processing chain is
//! a fixed sequence of raster transforms:
//!
//! 1. Downsampling and grayscale reduction
//! 2. Linear contrast stretch
//! 3. 3x3 weighted blur
//! 4. Otsu thresholding to a binary raster
//! 5. Erosion/dilation noise suppression
//! 6. Connected-component counting with a size-class tally
//!
//! # Example
//!
//! ```
//! use coinscan::{PipelineParams, RgbRaster};
//! use coinscan::pipeline::process;
//!
//! // A blank photograph holds no coins.
//! let image = RgbRaster::new(64, 64).unwrap();
//! let count = process(&image, &PipelineParams::default()).unwrap();
//! assert_eq!(count.num_coins, 0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use coinscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use coinscan_filter as filter;
pub use coinscan_io as io;
pub use coinscan_morph as morph;
pub use coinscan_region as region;
pub use coinscan_segment as segment;
pub use coinscan_transform as transform;

mod error;
pub mod pipeline;

pub use coinscan_region::CoinCount;
pub use error::{PipelineError, PipelineResult};
