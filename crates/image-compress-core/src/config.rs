//! Tuning for the compression pipeline.
//!
//! Every constant that used to drift between platform ports (quality floor,
//! step, attempt budget, overshoot factor) lives in [`SearchConfig`], with a
//! single canonical default. Both structs deserialize from camelCase keys so
//! they can be passed straight through a bindings layer.

use serde::{Deserialize, Serialize};

use crate::error::CompressionError;

/// Parameters of the bounded quality search, on the 1-100 JPEG quality scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Lowest quality ever encoded at.
    pub floor: u8,
    /// Highest quality the initial estimate may pick.
    pub ceiling: u8,
    /// Quality decrement between attempts.
    pub step: u8,
    /// Maximum number of encode attempts per request.
    pub max_attempts: u32,
    /// Multiplier applied to the size ratio when seeding the quality.
    pub overshoot: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            floor: 10,
            ceiling: 100,
            step: 5,
            max_attempts: 12,
            overshoot: 1.2,
        }
    }
}

impl SearchConfig {
    /// Check that the search is well-defined and guaranteed to terminate.
    pub fn validate(&self) -> Result<(), CompressionError> {
        if self.floor == 0 {
            return Err(invalid("floor must be at least 1"));
        }
        if self.ceiling > 100 {
            return Err(invalid("ceiling must be at most 100"));
        }
        if self.floor > self.ceiling {
            return Err(invalid(format!(
                "floor ({}) must not exceed ceiling ({})",
                self.floor, self.ceiling
            )));
        }
        if self.step == 0 {
            return Err(invalid("step must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be at least 1"));
        }
        if !self.overshoot.is_finite() || self.overshoot <= 0.0 {
            return Err(invalid(format!(
                "overshoot must be a positive number, got {}",
                self.overshoot
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> CompressionError {
    CompressionError::Input(format!("invalid search config: {}", message.into()))
}

/// When the original bytes may be returned without re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FastPathPolicy {
    /// Return the input untouched whenever its byte length fits the target.
    /// Nothing is decoded, so a small image tagged with a rotation keeps
    /// its tag and its stored pixel order.
    #[default]
    RawBytes,
    /// Same length check, but only for images whose orientation tag is
    /// `Normal`. Small rotated images are re-encoded upright.
    UprightOnly,
}

/// Full configuration of one compression call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompressConfig {
    pub search: SearchConfig,
    pub fast_path: FastPathPolicy,
}

impl CompressConfig {
    pub fn validate(&self) -> Result<(), CompressionError> {
        self.search.validate()
    }
}
