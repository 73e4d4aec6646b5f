//! Pixel transforms applied before re-encoding.
//!
//! Only orientation correction lives here: rotating by a multiple of 90
//! degrees so that the encoder never bakes in sensor rotation.
//!
//! # Coordinate System
//!
//! - Rotations are clockwise
//! - Origin is the top-left corner

mod rotation;

pub use rotation::{apply_orientation, rotate, QuarterTurn};
