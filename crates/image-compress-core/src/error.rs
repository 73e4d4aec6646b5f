//! Error taxonomy for a compression request.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Everything that can stop [`crate::compress`] from returning bytes.
///
/// Input problems are reported before any work starts; a failed search
/// carries enough detail to tell the caller how close it got.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// Missing or empty image, zero target size, or invalid options.
    #[error("Invalid argument: {0}")]
    Input(String),

    /// The codec could not decode the image at all.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    /// No quality within the search bounds met the target size.
    #[error(
        "Cannot compress image under {}KB: last attempt was {}KB after {attempts} attempts",
        .requested_max_size_bytes / 1024,
        .last_size_bytes / 1024
    )]
    Bound {
        last_size_bytes: usize,
        attempts: u32,
        requested_max_size_bytes: usize,
    },

    /// The encoder rejected the buffer.
    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),
}

impl CompressionError {
    /// Stable, machine-readable code for bindings layers.
    pub fn code(&self) -> &'static str {
        match self {
            CompressionError::Input(_) => "INVALID_ARGUMENT",
            CompressionError::Decode(_) => "DECODE_FAILED",
            CompressionError::Bound { .. } => "COMPRESSION_FAILED",
            CompressionError::Encode(_) => "ENCODE_FAILED",
        }
    }
}
