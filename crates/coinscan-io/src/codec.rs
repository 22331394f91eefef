//! Raster decoding and encoding
//!
//! The codec boundary of the pipeline: decode a photograph (from a file
//! or an uploaded byte buffer) into an RGB raster, and encode the
//! intermediate rasters back into displayable PNGs. Nothing here needs
//! raster internals beyond the documented shapes.

use crate::error::{IoError, IoResult};
use coinscan_core::{BinaryRaster, GrayRaster, LabelRaster, RgbRaster};
use image::{DynamicImage, GrayImage, ImageReader, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Read an image file into an RGB raster.
///
/// Any format the decoder recognizes is accepted; the result is always
/// reduced to 3-channel 8-bit.
pub fn read_rgb<P: AsRef<Path>>(path: P) -> IoResult<RgbRaster> {
    let img = ImageReader::open(path)?
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;
    rgb_raster_from(img)
}

/// Decode an in-memory image (e.g. an uploaded file) into an RGB raster.
pub fn decode_rgb(bytes: &[u8]) -> IoResult<RgbRaster> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;
    rgb_raster_from(img)
}

fn rgb_raster_from(img: DynamicImage) -> IoResult<RgbRaster> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let samples: Vec<[u8; 3]> = rgb
        .into_raw()
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();
    Ok(RgbRaster::from_vec(width, height, samples)?)
}

/// Write a grayscale raster to a file; the format follows the extension.
pub fn write_gray<P: AsRef<Path>>(pix: &GrayRaster, path: P) -> IoResult<()> {
    gray_image_from(pix)
        .save(path)
        .map_err(|e| IoError::Encode(e.to_string()))
}

/// Write a binary raster to a file, foreground white on black.
pub fn write_binary<P: AsRef<Path>>(pix: &BinaryRaster, path: P) -> IoResult<()> {
    binary_image_from(pix)
        .save(path)
        .map_err(|e| IoError::Encode(e.to_string()))
}

/// Write a labeled raster to a file, each label at a distinct gray level.
pub fn write_labels<P: AsRef<Path>>(labels: &LabelRaster, path: P) -> IoResult<()> {
    label_image_from(labels)
        .save(path)
        .map_err(|e| IoError::Encode(e.to_string()))
}

/// Encode a binary raster as PNG bytes, foreground white on black.
pub fn encode_binary_png(pix: &BinaryRaster) -> IoResult<Vec<u8>> {
    encode_png(binary_image_from(pix))
}

/// Encode a labeled raster as PNG bytes.
///
/// Labels are spread over the gray range as `label * 255 / max_label`,
/// so each component renders at its own brightness. An unlabeled raster
/// encodes as all black.
pub fn encode_labels_png(labels: &LabelRaster) -> IoResult<Vec<u8>> {
    encode_png(label_image_from(labels))
}

/// Encode the original RGB raster as PNG bytes for display.
pub fn encode_rgb_png(pix: &RgbRaster) -> IoResult<Vec<u8>> {
    let flat: Vec<u8> = pix.data().iter().flat_map(|px| px.iter().copied()).collect();
    let img = RgbImage::from_raw(pix.width(), pix.height(), flat)
        .expect("raster buffer matches its dimensions");
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(bytes)
}

fn gray_image_from(pix: &GrayRaster) -> GrayImage {
    GrayImage::from_raw(pix.width(), pix.height(), pix.data().to_vec())
        .expect("raster buffer matches its dimensions")
}

fn binary_image_from(pix: &BinaryRaster) -> GrayImage {
    let bytes: Vec<u8> = pix
        .data()
        .iter()
        .map(|&fg| if fg { 255 } else { 0 })
        .collect();
    GrayImage::from_raw(pix.width(), pix.height(), bytes)
        .expect("raster buffer matches its dimensions")
}

fn label_image_from(labels: &LabelRaster) -> GrayImage {
    let max = labels.data().iter().copied().max().unwrap_or(0) as u64;
    let bytes: Vec<u8> = labels
        .data()
        .iter()
        .map(|&label| {
            if max == 0 {
                0
            } else {
                (label as u64 * 255 / max) as u8
            }
        })
        .collect();
    GrayImage::from_raw(labels.width(), labels.height(), bytes)
        .expect("raster buffer matches its dimensions")
}

fn encode_png(img: GrayImage) -> IoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(bytes)
}
