//! Orientation normalizer.
//!
//! Decodes an image and rotates its pixels upright according to the EXIF
//! orientation tag, so the encoder never bakes in sensor rotation. Missing or
//! unreadable metadata counts as upright; only a pixel decode failure is an
//! error.

use tracing::debug;

use crate::codec::ImageCodec;
use crate::decode::{DecodeError, Orientation, PixelBuffer};
use crate::transform::apply_orientation;

/// Decode `bytes` and return an upright buffer with the orientation that was
/// corrected.
///
/// # Errors
///
/// Returns the codec's `DecodeError` when the pixel data cannot be decoded,
/// and `DecodeError::CorruptedFile` when it decodes to an empty raster.
pub fn normalize<C: ImageCodec + ?Sized>(
    codec: &C,
    bytes: &[u8],
) -> Result<(PixelBuffer, Orientation), DecodeError> {
    let orientation = codec.read_orientation(bytes);
    let upright = normalize_with(codec, bytes, orientation)?;
    Ok((upright, orientation))
}

/// Like [`normalize`], for callers that have already read the orientation.
pub fn normalize_with<C: ImageCodec + ?Sized>(
    codec: &C,
    bytes: &[u8],
    orientation: Orientation,
) -> Result<PixelBuffer, DecodeError> {
    let decoded = codec.decode(bytes)?;
    if decoded.is_empty() {
        return Err(DecodeError::CorruptedFile(format!(
            "decoded a {}x{} image with no pixels",
            decoded.width, decoded.height
        )));
    }

    debug!(
        width = decoded.width,
        height = decoded.height,
        rotation = orientation.degrees(),
        "decoded image"
    );

    apply_orientation(decoded, orientation)
}
