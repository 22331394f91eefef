//! coinscan-io - Image codec for the coin pipeline
//!
//! Decodes photographs (files or uploaded byte buffers) into RGB
//! rasters and encodes pipeline rasters back into displayable PNGs.
//! This is the only crate that touches image file formats; the rest of
//! the pipeline works on in-memory rasters.

pub mod codec;
mod error;

pub use codec::{
    decode_rgb, encode_binary_png, encode_labels_png, encode_rgb_png, read_rgb, write_binary,
    write_gray, write_labels,
};
pub use error::{IoError, IoResult};
