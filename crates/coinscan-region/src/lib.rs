//! coinscan-region - Component analysis for the coin pipeline
//!
//! This crate provides the counting stage:
//!
//! - Two-pass union-find labeling of connected foreground components
//! - Per-component pixel areas
//! - The size-class tally reported alongside the coin count

pub mod conncomp;
pub mod count;

pub use conncomp::{ConnectivityType, component_sizes, label_components};
pub use count::{CoinCount, count_coins};
