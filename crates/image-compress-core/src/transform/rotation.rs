//! Lossless quarter-turn rotation.
//!
//! EXIF orientation only ever asks for multiples of 90 degrees, so every
//! output pixel is copied from exactly one source pixel. The copying is done
//! by `image::imageops`; this module only picks the turn.

use image::imageops;

use crate::decode::{DecodeError, Orientation, PixelBuffer};

/// A clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterTurn {
    /// 90 degrees clockwise.
    Cw90,
    /// 180 degrees.
    Cw180,
    /// 270 degrees clockwise (90 counter-clockwise).
    Cw270,
}

impl QuarterTurn {
    /// The rotation that makes an image with this orientation upright.
    pub fn for_orientation(orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::Normal => None,
            Orientation::Rotate90 => Some(QuarterTurn::Cw90),
            Orientation::Rotate180 => Some(QuarterTurn::Cw180),
            Orientation::Rotate270 => Some(QuarterTurn::Cw270),
        }
    }
}

/// Rotate an image clockwise by a quarter turn.
///
/// # Errors
///
/// `DecodeError::CorruptedFile` if the buffer's pixel data does not match
/// its dimensions.
pub fn rotate(image: PixelBuffer, turn: QuarterTurn) -> Result<PixelBuffer, DecodeError> {
    let rgb = image.into_rgb_image()?;
    let rotated = match turn {
        QuarterTurn::Cw90 => imageops::rotate90(&rgb),
        QuarterTurn::Cw180 => imageops::rotate180(&rgb),
        QuarterTurn::Cw270 => imageops::rotate270(&rgb),
    };
    Ok(PixelBuffer::from_rgb_image(rotated))
}

/// Apply the rotation needed to display an image with `orientation` upright.
///
/// `Orientation::Normal` passes the buffer through unchanged.
pub fn apply_orientation(
    image: PixelBuffer,
    orientation: Orientation,
) -> Result<PixelBuffer, DecodeError> {
    match QuarterTurn::for_orientation(orientation) {
        Some(turn) => rotate(image, turn),
        None => Ok(image),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
