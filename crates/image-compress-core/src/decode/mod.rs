//! Image decoding for the compression pipeline.
//!
//! This module provides:
//! - Decoding encoded bytes (JPEG, PNG, TIFF, WebP) to an RGB [`PixelBuffer`]
//! - Header-only validity checks that stop before the pixel data
//! - Reading the EXIF orientation tag without decoding pixels
//!
//! Orientation is reported separately from the pixels so the caller can decide
//! whether correcting it is worth a decode at all.

mod reader;
mod types;

pub use reader::{decode_image, probe_image, read_orientation};
pub use types::{DecodeError, Orientation, PixelBuffer};
