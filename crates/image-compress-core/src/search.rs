//! Bounded quality search.
//!
//! Finds a JPEG quality whose output fits a byte budget using as few encodes
//! as practical:
//!
//! 1. Seed the quality from the size ratio:
//!    `q0 = clamp(round(max_size / original_size * overshoot * 100), floor, ceiling)`.
//! 2. Encode at `q` and measure. Done if the result fits.
//! 3. Otherwise step `q` down by `step` (never below `floor`) and retry.
//!
//! The search stops after an attempt at the floor or once `max_attempts`
//! encodes have been made, whichever comes first. Encoded size is only
//! roughly monotone in quality, so the search walks down linearly from an
//! informed seed instead of bisecting.

use tracing::debug;

use crate::codec::ImageCodec;
use crate::config::SearchConfig;
use crate::decode::PixelBuffer;
use crate::error::CompressionError;

/// Lossy encoding quality on the 1-100 JPEG scale. Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Next quality down, saturating at `floor`.
    fn step_down(self, step: u8, floor: u8) -> Self {
        Self::new(self.0.saturating_sub(step).max(floor))
    }
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionOutcome {
    /// `bytes.len()` is within the requested maximum.
    Success {
        bytes: Vec<u8>,
        quality: Quality,
        attempts: u32,
    },
    /// Every permitted attempt was too large. The oversized bytes are dropped.
    Failure {
        last_size_bytes: usize,
        attempts: u32,
        requested_max_size_bytes: usize,
    },
}

impl CompressionOutcome {
    /// Number of encodes the search made.
    pub fn attempts(&self) -> u32 {
        match self {
            CompressionOutcome::Success { attempts, .. }
            | CompressionOutcome::Failure { attempts, .. } => *attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompressionOutcome::Success { .. })
    }
}

impl From<CompressionOutcome> for Result<Vec<u8>, CompressionError> {
    fn from(outcome: CompressionOutcome) -> Self {
        match outcome {
            CompressionOutcome::Success { bytes, .. } => Ok(bytes),
            CompressionOutcome::Failure {
                last_size_bytes,
                attempts,
                requested_max_size_bytes,
            } => Err(CompressionError::Bound {
                last_size_bytes,
                attempts,
                requested_max_size_bytes,
            }),
        }
    }
}

/// Seed quality for a search.
///
/// `original_size` must be non-zero; callers validate input first.
pub fn initial_quality(original_size: usize, max_size: usize, config: &SearchConfig) -> Quality {
    let ratio = max_size as f64 / original_size.max(1) as f64;
    let estimate = (ratio * config.overshoot * 100.0).round();
    let clamped = estimate.clamp(config.floor as f64, config.ceiling as f64);
    Quality::new(clamped as u8)
}

/// Search for a quality whose encoded size is at most `max_size` bytes.
///
/// Always performs at least one encode. The fast path for inputs that
/// already fit lives in the pipeline, not here.
///
/// # Arguments
///
/// * `codec` - Encoder used for every attempt
/// * `buffer` - Upright raster to encode
/// * `original_size` - Byte length of the encoded input; only seeds the
///   first quality
/// * `max_size` - Largest acceptable output in bytes
/// * `config` - Floor, ceiling, step, attempt budget and overshoot
///
/// # Returns
///
/// [`CompressionOutcome::Success`] with the first candidate that fits, or
/// [`CompressionOutcome::Failure`] with the size of the last attempt once
/// the floor or the attempt budget is reached.
///
/// # Errors
///
/// `CompressionError::Input` for a zero size or an invalid config, and
/// `CompressionError::Encode` if the codec rejects the buffer. Running out
/// of attempts is not an error here.
///
/// # Example
///
/// ```ignore
/// use image_compress_core::{normalize, search_quality, JpegCodec, SearchConfig};
///
/// let (upright, _) = normalize(&JpegCodec, &photo)?;
/// let outcome = search_quality(&JpegCodec, &upright, photo.len(), 200 * 1024, &SearchConfig::default())?;
/// println!("{} attempts", outcome.attempts());
/// ```
pub fn search_quality<C: ImageCodec + ?Sized>(
    codec: &C,
    buffer: &PixelBuffer,
    original_size: usize,
    max_size: usize,
    config: &SearchConfig,
) -> Result<CompressionOutcome, CompressionError> {
    config.validate()?;
    if original_size == 0 {
        return Err(CompressionError::Input(
            "original size must be greater than zero".to_string(),
        ));
    }
    if max_size == 0 {
        return Err(CompressionError::Input(
            "max size must be greater than zero".to_string(),
        ));
    }

    let mut quality = initial_quality(original_size, max_size, config);
    let mut attempts = 0u32;

    loop {
        let candidate = codec.encode_lossy(buffer, quality)?;
        attempts += 1;

        debug!(
            quality = quality.value(),
            size = candidate.len(),
            max_size,
            attempt = attempts,
            "encoded candidate"
        );

        if candidate.len() <= max_size {
            return Ok(CompressionOutcome::Success {
                bytes: candidate,
                quality,
                attempts,
            });
        }

        if quality.value() <= config.floor || attempts >= config.max_attempts {
            return Ok(CompressionOutcome::Failure {
                last_size_bytes: candidate.len(),
                attempts,
                requested_max_size_bytes: max_size,
            });
        }

        quality = quality.step_down(config.step, config.floor);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
