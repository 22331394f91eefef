//! Pipeline parameters
//!
//! The tuning values for one pipeline run, passed by value into each
//! stage. There is no global configuration state; callers construct a
//! `PipelineParams`, optionally adjust fields, and hand it to the
//! pipeline functions.

use crate::error::{Error, Result};

/// Immutable configuration for one pipeline invocation.
///
/// The defaults are the reference tuning for coin photographs; the
/// erosion/dilation schedule in particular is load-bearing for count
/// accuracy and should only be changed deliberately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineParams {
    /// Integer downsampling factor applied before grayscale reduction.
    /// Must be at least 1.
    pub scale: u32,
    /// Linear contrast stretch factor around mid-gray. Must be positive
    /// and finite.
    pub contrast_factor: f64,
    /// Minimum pixel-area difference for two components to count as
    /// different size classes. Must be at least 1.
    pub size_threshold: u32,
    /// Erosion iterations in the noise filter.
    pub erosions: u32,
    /// Dilation iterations in the noise filter.
    pub dilations: u32,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            scale: 2,
            contrast_factor: 1.5,
            size_threshold: 50,
            erosions: 5,
            dilations: 1,
        }
    }
}

impl PipelineParams {
    /// Validate the configuration before any raster work begins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a zero scale, a
    /// non-positive or non-finite contrast factor, or a zero size
    /// threshold.
    pub fn validate(&self) -> Result<()> {
        if self.scale < 1 {
            return Err(Error::InvalidParameter(
                "scale factor must be at least 1".into(),
            ));
        }
        if !self.contrast_factor.is_finite() || self.contrast_factor <= 0.0 {
            return Err(Error::InvalidParameter(
                "contrast factor must be positive and finite".into(),
            ));
        }
        if self.size_threshold < 1 {
            return Err(Error::InvalidParameter(
                "size threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
