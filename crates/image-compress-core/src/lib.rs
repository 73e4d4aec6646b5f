//! Image Compress Core - size-bounded JPEG re-encoding
//!
//! Takes an encoded image and a byte budget and returns JPEG bytes that fit
//! the budget. Images already within the budget come back untouched. Larger
//! images are decoded, rotated upright per their EXIF orientation tag, and
//! re-encoded at the highest quality a short downward search finds that fits.
//!
//! # Module Structure
//!
//! - `decode` - Image decoding and EXIF orientation reading
//! - `transform` - Quarter-turn pixel rotation
//! - `encode` - JPEG encoding at a given quality
//! - `codec` - The decode/encode seam used by the pipeline
//! - `normalize` - Decode plus upright rotation
//! - `search` - Bounded quality search
//! - `compress` - Request pipeline tying it together
//! - `options` / `config` - Caller options and tuning
//!
//! # Usage
//!
//! ```ignore
//! use image_compress_core::{compress_with_options, CompressOptions};
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let small = compress_with_options(&bytes, &CompressOptions::from_kb(200))?;
//! assert!(small.len() <= 200 * 1024);
//! ```

pub mod codec;
pub mod compress;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod options;
pub mod search;
pub mod transform;

#[cfg(test)]
mod test_helpers;

pub use codec::{ImageCodec, JpegCodec};
pub use compress::{
    compress, compress_with, compress_with_options, Compressed, CompressionMethod,
    CompressionRequest,
};
pub use config::{CompressConfig, FastPathPolicy, SearchConfig};
pub use decode::{DecodeError, Orientation, PixelBuffer};
pub use encode::EncodeError;
pub use error::CompressionError;
pub use normalize::{normalize, normalize_with};
pub use options::CompressOptions;
pub use search::{initial_quality, search_quality, CompressionOutcome, Quality};
