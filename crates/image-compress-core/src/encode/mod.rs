//! Image encoding for the compression pipeline.
//!
//! The pipeline produces a single lossy format, JPEG, at a caller-chosen
//! quality. See [`encode_jpeg`].

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
