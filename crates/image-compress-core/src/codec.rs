//! Image codec collaborator.
//!
//! The [`ImageCodec`] trait is the only thing the compression pipeline knows
//! about pixels and bytes: probe, decode, lossy encode at a quality, and
//! read the orientation tag. The production implementation is [`JpegCodec`]; tests
//! swap in scripted codecs to control encoded sizes exactly.

use crate::decode::{self, DecodeError, Orientation, PixelBuffer};
use crate::encode::{encode_jpeg, EncodeError};
use crate::search::Quality;

/// Codec operations the compression pipeline depends on.
///
/// Implementations must be deterministic: encoding the same buffer at the
/// same quality yields the same bytes. `Sync` lets one codec serve concurrent
/// requests.
pub trait ImageCodec: Sync {
    /// Cheap validity check: fails when `bytes` are not an image this codec
    /// could decode. Must not decode pixel data.
    fn probe(&self, bytes: &[u8]) -> Result<(), DecodeError>;

    /// Decode encoded bytes to an RGB buffer, without orientation correction.
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError>;

    /// Encode a buffer lossily at `quality`.
    fn encode_lossy(&self, buffer: &PixelBuffer, quality: Quality) -> Result<Vec<u8>, EncodeError>;

    /// Read the orientation tag. Absent or unreadable metadata is `Normal`.
    fn read_orientation(&self, bytes: &[u8]) -> Orientation;
}

/// Decodes any format compiled into the `image` crate and encodes JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec;

impl JpegCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for JpegCodec {
    fn probe(&self, bytes: &[u8]) -> Result<(), DecodeError> {
        decode::probe_image(bytes).map(|_| ())
    }

    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        decode::decode_image(bytes)
    }

    fn encode_lossy(&self, buffer: &PixelBuffer, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        encode_jpeg(&buffer.pixels, buffer.width, buffer.height, quality.value())
    }

    fn read_orientation(&self, bytes: &[u8]) -> Orientation {
        decode::read_orientation(bytes)
    }
}
