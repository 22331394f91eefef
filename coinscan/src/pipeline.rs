//! The coin-counting pipeline
//!
//! The four public stages, applied strictly in order, each consuming
//! the previous stage's output raster:
//!
//! 1. [`preprocess`] - downsample, grayscale, contrast stretch, blur
//! 2. [`segment`] - Otsu threshold to a binary raster
//! 3. [`filter_noise`] - erode/dilate noise suppression
//! 4. [`count_coins`] - component labeling and size-class tally
//!
//! [`process`] runs all four on one photograph. Data flows strictly
//! forward; every stage allocates a fresh raster, so there is no shared
//! mutable state and the pipeline is fully synchronous. A caller that
//! wants cancellation runs it on a worker task and abandons the result.
//!
//! Histogram equalization ([`coinscan_filter::equalize_histogram`]) is
//! deliberately not part of [`preprocess`]: segmentation consumes the
//! blurred raster directly. The equalizer remains available for
//! inspection surfaces that want to display it.

use crate::error::PipelineResult;
use coinscan_core::{BinaryRaster, GrayRaster, PipelineParams, RgbRaster};
use coinscan_filter::{adjust_contrast, blur};
use coinscan_region::CoinCount;
use coinscan_segment::threshold_otsu;
use coinscan_transform::reduce_to_gray;
use tracing::debug;

/// Preprocess a photograph for segmentation.
///
/// Validates the configuration, downsamples by `params.scale` with
/// grayscale reduction, stretches contrast by `params.contrast_factor`,
/// and blurs. Every raster downstream of this call has the reduced
/// dimensions.
///
/// # Errors
///
/// Configuration errors are rejected before any raster work; the
/// resampling stage fails if the reduced raster would be empty.
pub fn preprocess(image: &RgbRaster, params: &PipelineParams) -> PipelineResult<GrayRaster> {
    params.validate()?;

    let gray = reduce_to_gray(image, params.scale)?;
    debug!(
        width = gray.width(),
        height = gray.height(),
        scale = params.scale,
        "reduced to grayscale"
    );

    let adjusted = adjust_contrast(&gray, params.contrast_factor)?;
    let blurred = blur(&adjusted);
    debug!("contrast stretched and blurred");

    Ok(blurred)
}

/// Segment a preprocessed raster into foreground and background.
pub fn segment(pix: &GrayRaster) -> BinaryRaster {
    let (binary, threshold) = threshold_otsu(pix);
    debug!(
        threshold,
        foreground = binary.count_foreground(),
        "binarized"
    );
    binary
}

/// Suppress noise blobs with the configured erosion/dilation schedule.
pub fn filter_noise(pix: &BinaryRaster, params: &PipelineParams) -> BinaryRaster {
    coinscan_morph::filter_noise(pix, params.erosions, params.dilations)
}

/// Count coins and size classes on a filtered binary raster.
pub fn count_coins(pix: &BinaryRaster, params: &PipelineParams) -> CoinCount {
    let count = coinscan_region::count_coins(pix, params.size_threshold);
    debug!(
        coins = count.num_coins,
        size_differences = count.size_differences,
        "counted components"
    );
    count
}

/// Run the whole pipeline on one photograph.
///
/// # Errors
///
/// Same conditions as [`preprocess`]; the later stages have no failure
/// modes.
pub fn process(image: &RgbRaster, params: &PipelineParams) -> PipelineResult<CoinCount> {
    let preprocessed = preprocess(image, params)?;
    let segmented = segment(&preprocessed);
    let filtered = filter_noise(&segmented, params);
    Ok(count_coins(&filtered, params))
}
