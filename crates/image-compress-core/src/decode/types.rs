//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("Image data is empty")]
    Empty,

    /// The file format is not recognized or no decoder is compiled in for it.
    #[error("Invalid or unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The decoder refused the image because it exceeds its memory limits.
    #[error("Image exceeds decoder limits: {0}")]
    TooLarge(String),
}

/// Rotation recorded in EXIF metadata at capture time.
///
/// Only the four pure rotations are recognized. Mirrored EXIF values
/// (2, 4, 5, 7) and anything out of range are treated as [`Orientation::Normal`].
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Upright, no transformation needed (EXIF 1).
    #[default]
    Normal,
    /// Rotate 90 degrees clockwise to display upright (EXIF 6).
    Rotate90,
    /// Rotate 180 degrees (EXIF 3).
    Rotate180,
    /// Rotate 270 degrees clockwise, i.e. 90 counter-clockwise (EXIF 8).
    Rotate270,
}

impl Orientation {
    /// Clockwise rotation in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Normal => 0,
            Orientation::Rotate90 => 90,
            Orientation::Rotate180 => 180,
            Orientation::Rotate270 => 270,
        }
    }

    /// Returns true if correcting this orientation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Orientation::Rotate90 | Orientation::Rotate270)
    }
}

/// Raw EXIF orientation value.
impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90,
            8 => Orientation::Rotate270,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded RGB raster.
///
/// Owned by a single compression request. Transforms produce new buffers
/// rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelBuffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Read the RGB value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        self.pixels
            .get(idx..idx + 3)
            .map(|p| [p[0], p[1], p[2]])
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Hand the pixels to the `image` crate as an `RgbImage`.
    ///
    /// # Errors
    ///
    /// `DecodeError::CorruptedFile` if the pixel data does not cover
    /// `width * height * 3` bytes.
    pub fn into_rgb_image(self) -> Result<image::RgbImage, DecodeError> {
        let (width, height, len) = (self.width, self.height, self.pixels.len());
        image::RgbImage::from_raw(width, height, self.pixels).ok_or_else(|| {
            DecodeError::CorruptedFile(format!(
                "{len} pixel bytes do not fit a {width}x{height} RGB raster"
            ))
        })
    }
}
