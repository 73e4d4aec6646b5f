//! Compression WASM bindings.
//!
//! # Functions
//!
//! - [`compress_image`] - Re-encode an image to fit a byte budget
//! - [`read_orientation`] - Report the EXIF rotation of an image
//!
//! # Example
//!
//! ```typescript
//! import { compress_image } from '@image-compress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! try {
//!   const small = compress_image(bytes, { maxSizeInKB: 200 });
//!   await upload(new Blob([small], { type: 'image/jpeg' }));
//! } catch (e) {
//!   // e.message is "<CODE>: <details>", e.g. "COMPRESSION_FAILED: ..."
//! }
//! ```

use image_compress_core::{compress_with_options, CompressOptions, CompressionError};
use wasm_bindgen::prelude::*;

/// Compress an image so its encoded size is at most the requested target.
///
/// # Arguments
///
/// * `image` - Encoded image bytes (JPEG, PNG, WebP or TIFF)
/// * `options` - `{ maxSizeInKB?: number, maxSizeLevel?: number }`. When
///   `maxSizeInKB` is present it wins; otherwise the target is
///   `maxSizeLevel` MiB (default 1). `undefined` and `null` mean defaults.
///
/// # Returns
///
/// A `Uint8Array` no larger than the target. Images already within the
/// target are returned byte-for-byte; anything else comes back as an upright
/// JPEG.
///
/// # Errors
///
/// Throws an `Error` whose message starts with one of `INVALID_ARGUMENT`,
/// `DECODE_FAILED`, `COMPRESSION_FAILED` or `ENCODE_FAILED`.
#[wasm_bindgen]
pub fn compress_image(image: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options = parse_options(options)?;
    compress_with_options(image, &options).map_err(|e| to_js_error(&e))
}

/// EXIF rotation of `image` in quarter turns clockwise (0-3).
///
/// Missing or unreadable metadata reports 0.
#[wasm_bindgen]
pub fn read_orientation(image: &[u8]) -> u8 {
    quarter_turns(image)
}

fn parse_options(options: JsValue) -> Result<CompressOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(CompressOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| {
        let err = CompressionError::Input(format!("invalid options: {}", e));
        to_js_error(&err)
    })
}

fn to_js_error(err: &CompressionError) -> JsValue {
    js_sys::Error::new(&error_message(err)).into()
}

/// `"<CODE>: <message>"` form used for thrown errors.
pub(crate) fn error_message(err: &CompressionError) -> String {
    format!("{}: {}", err.code(), err)
}

fn quarter_turns(image: &[u8]) -> u8 {
    let orientation = image_compress_core::decode::read_orientation(image);
    (orientation.degrees() / 90) as u8
}
