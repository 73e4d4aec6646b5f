//! Request pipeline: validate, fast path, normalize, search.
//!
//! ```text
//! bytes ──validate──▶ fits already? ──yes──▶ header ok? ──▶ original bytes
//!                          │ no
//!                          ▼
//!                      normalize ──▶ PixelBuffer ──▶ search_quality ──▶ bytes | Bound error
//! ```

use tracing::{debug, info, warn};

use crate::codec::{ImageCodec, JpegCodec};
use crate::config::{CompressConfig, FastPathPolicy};
use crate::decode::Orientation;
use crate::error::CompressionError;
use crate::normalize::normalize_with;
use crate::options::CompressOptions;
use crate::search::{search_quality, CompressionOutcome, Quality};

/// One compression call: the encoded input and the byte budget.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRequest<'a> {
    image: &'a [u8],
    max_size_bytes: usize,
}

impl<'a> CompressionRequest<'a> {
    /// Validate and build a request.
    ///
    /// # Errors
    ///
    /// `CompressionError::Input` if `image` is empty or `max_size_bytes` is
    /// zero.
    pub fn new(image: &'a [u8], max_size_bytes: usize) -> Result<Self, CompressionError> {
        if image.is_empty() {
            return Err(CompressionError::Input("image bytes are empty".to_string()));
        }
        if max_size_bytes == 0 {
            return Err(CompressionError::Input(
                "max size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            image,
            max_size_bytes,
        })
    }

    /// Build a request from caller options.
    pub fn from_options(
        image: &'a [u8],
        options: &CompressOptions,
    ) -> Result<Self, CompressionError> {
        Self::new(image, options.max_size_bytes()?)
    }

    pub fn image(&self) -> &'a [u8] {
        self.image
    }

    pub fn max_size_bytes(&self) -> usize {
        self.max_size_bytes
    }

    pub fn original_size(&self) -> usize {
        self.image.len()
    }
}

/// How the returned bytes were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    /// The input already fit and was returned untouched.
    Passthrough,
    /// The input was decoded, oriented upright and re-encoded.
    Reencoded {
        quality: Quality,
        attempts: u32,
        orientation: Orientation,
    },
}

/// Bytes that fit the request's budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    pub bytes: Vec<u8>,
    pub method: CompressionMethod,
}

/// Compress an image so that its encoded size is at most `max_size_bytes`.
///
/// Uses [`JpegCodec`] and the default [`CompressConfig`].
///
/// # Arguments
///
/// * `image` - Encoded image bytes (JPEG, PNG, TIFF or WebP)
/// * `max_size_bytes` - Largest acceptable output size in bytes
///
/// # Returns
///
/// The original bytes when they already fit and parse as an image. Otherwise
/// an upright JPEG re-encoded at the highest quality the search found that
/// fits.
///
/// # Errors
///
/// * `Input` - empty image or zero target
/// * `Decode` - the bytes are not a decodable image
/// * `Bound` - no quality down to the floor fits the target
/// * `Encode` - the encoder rejected the decoded raster
///
/// # Example
///
/// ```ignore
/// use image_compress_core::compress;
///
/// let photo = std::fs::read("photo.jpg")?;
/// let small = compress(&photo, 500 * 1024)?;
/// assert!(small.len() <= 500 * 1024);
/// ```
pub fn compress(image: &[u8], max_size_bytes: usize) -> Result<Vec<u8>, CompressionError> {
    let request = CompressionRequest::new(image, max_size_bytes)?;
    compress_with(&JpegCodec, &request, &CompressConfig::default()).map(|c| c.bytes)
}

/// Compress an image to the target described by caller options.
///
/// `maxSizeInKB` wins when present; otherwise the target is `maxSizeLevel`
/// MiB, defaulting to 1. Behaves like [`compress`] once the target is known.
///
/// # Example
///
/// ```ignore
/// use image_compress_core::{compress_with_options, CompressOptions};
///
/// let photo = std::fs::read("photo.jpg")?;
/// let small = compress_with_options(&photo, &CompressOptions::from_kb(200))?;
/// assert!(small.len() <= 200 * 1024);
/// ```
pub fn compress_with_options(
    image: &[u8],
    options: &CompressOptions,
) -> Result<Vec<u8>, CompressionError> {
    let request = CompressionRequest::from_options(image, options)?;
    compress_with(&JpegCodec, &request, &CompressConfig::default()).map(|c| c.bytes)
}

/// Run the full pipeline with an explicit codec and configuration.
///
/// Stages, in order:
///
/// 1. `config.validate()`
/// 2. Fast path: input no larger than the target (and upright, under
///    [`FastPathPolicy::UprightOnly`]) is header-checked with
///    [`ImageCodec::probe`] and returned as is. No pixels are decoded.
/// 3. Decode and rotate upright ([`normalize_with`]). The orientation tag is
///    read at most once per call.
/// 4. [`search_quality`] on the upright raster.
///
/// # Returns
///
/// [`Compressed`] with the output bytes and how they were produced.
///
/// # Errors
///
/// As for [`compress`]; `Input` also covers an invalid `config`.
pub fn compress_with<C: ImageCodec + ?Sized>(
    codec: &C,
    request: &CompressionRequest<'_>,
    config: &CompressConfig,
) -> Result<Compressed, CompressionError> {
    config.validate()?;

    let image = request.image();
    let original_size = request.original_size();
    let max_size = request.max_size_bytes();

    let mut known_orientation = None;
    if original_size <= max_size {
        let eligible = match config.fast_path {
            FastPathPolicy::RawBytes => true,
            FastPathPolicy::UprightOnly => {
                let orientation = codec.read_orientation(image);
                known_orientation = Some(orientation);
                orientation == Orientation::Normal
            }
        };

        if eligible {
            codec.probe(image)?;
            debug!(original_size, max_size, "image already fits, returning original");
            return Ok(Compressed {
                bytes: image.to_vec(),
                method: CompressionMethod::Passthrough,
            });
        }
    }

    let orientation = known_orientation.unwrap_or_else(|| codec.read_orientation(image));
    let buffer = normalize_with(codec, image, orientation)?;

    match search_quality(codec, &buffer, original_size, max_size, &config.search)? {
        CompressionOutcome::Success {
            bytes,
            quality,
            attempts,
        } => {
            info!(
                original_size,
                size = bytes.len(),
                max_size,
                quality = quality.value(),
                attempts,
                "compressed image"
            );
            Ok(Compressed {
                bytes,
                method: CompressionMethod::Reencoded {
                    quality,
                    attempts,
                    orientation,
                },
            })
        }
        CompressionOutcome::Failure {
            last_size_bytes,
            attempts,
            requested_max_size_bytes,
        } => {
            warn!(
                original_size,
                last_size_bytes, max_size, attempts, "could not meet target size"
            );
            Err(CompressionError::Bound {
                last_size_bytes,
                attempts,
                requested_max_size_bytes,
            })
        }
    }
}
