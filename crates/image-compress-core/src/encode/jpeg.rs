//! Lossy JPEG encoding.
//!
//! Thin wrapper around the `image` crate's baseline JPEG encoder. Output is
//! deterministic for a given buffer and quality, which the quality search
//! relies on when it measures candidate sizes.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

/// Why a buffer could not be turned into JPEG bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("pixel buffer holds {actual} bytes but {expected} are needed for RGB8")]
    InvalidPixelData { expected: usize, actual: usize },

    #[error("cannot encode an empty {width}x{height} raster")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("jpeg encoder failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGB8 raster as baseline JPEG.
///
/// # Arguments
///
/// * `pixels` - RGB8 data, row-major, 3 bytes per pixel
/// * `width` - Raster width in pixels
/// * `height` - Raster height in pixels
/// * `quality` - JPEG quality; values outside 1-100 are clamped
///
/// # Returns
///
/// JPEG bytes without EXIF metadata. The same input always yields the same
/// bytes.
///
/// # Errors
///
/// `InvalidDimensions` for a zero width or height, `InvalidPixelData` when
/// `pixels` is not exactly `width * height * 3` bytes long.
///
/// # Example
///
/// ```
/// use image_compress_core::encode::encode_jpeg;
///
/// let grey = vec![128u8; 64 * 48 * 3];
/// let jpeg = encode_jpeg(&grey, 64, 48, 80).unwrap();
/// assert!(jpeg.starts_with(&[0xFF, 0xD8]));
/// ```
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    check_raster(pixels, width, height)?;

    let mut out = Vec::with_capacity(pixels.len() / 4);
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out)
}

fn check_raster(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
