//! coinscan-morph - Binary morphology for the coin pipeline
//!
//! This crate provides binary erosion and dilation over 4-neighbor
//! adjacency, and the erode-then-dilate noise filter applied between
//! segmentation and counting.

pub mod binary;

pub use binary::{dilate, erode, filter_noise};
