//! Caller-facing size options.
//!
//! Callers express the target either in kilobytes or as a coarse "level" of
//! whole mebibytes. The options are parsed once into [`CompressOptions`] and
//! resolved to a byte count before the pipeline runs.

use serde::{Deserialize, Serialize};

use crate::error::CompressionError;

/// Bytes per `maxSizeInKB` unit.
pub const KIB: usize = 1024;

/// Bytes per `maxSizeLevel` unit.
pub const MIB: usize = 1_048_576;

/// Level used when neither option is given.
pub const DEFAULT_LEVEL: u32 = 1;

/// Target size as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressOptions {
    /// Target in kilobytes. Takes precedence over `max_size_level`.
    #[serde(rename = "maxSizeInKB", default)]
    pub max_size_in_kb: Option<u32>,
    /// Target in mebibytes; defaults to [`DEFAULT_LEVEL`].
    #[serde(default)]
    pub max_size_level: Option<u32>,
}

impl CompressOptions {
    pub fn from_kb(kb: u32) -> Self {
        Self {
            max_size_in_kb: Some(kb),
            max_size_level: None,
        }
    }

    pub fn from_level(level: u32) -> Self {
        Self {
            max_size_in_kb: None,
            max_size_level: Some(level),
        }
    }

    /// Resolve to a byte count.
    ///
    /// A zero result is returned as-is; the pipeline rejects it.
    ///
    /// # Errors
    ///
    /// `CompressionError::Input` if the byte count overflows `usize`.
    pub fn max_size_bytes(&self) -> Result<usize, CompressionError> {
        let (value, unit, name) = match self.max_size_in_kb {
            Some(kb) => (kb, KIB, "maxSizeInKB"),
            None => (
                self.max_size_level.unwrap_or(DEFAULT_LEVEL),
                MIB,
                "maxSizeLevel",
            ),
        };

        (value as usize).checked_mul(unit).ok_or_else(|| {
            CompressionError::Input(format!("{name} {value} is too large"))
        })
    }
}
