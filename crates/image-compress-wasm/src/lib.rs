//! Image Compress WASM - WebAssembly bindings for image-compress
//!
//! This crate exposes the image-compress-core pipeline to JavaScript and
//! TypeScript callers. It only converts arguments and errors; all decisions
//! are made in the core crate.
//!
//! # Module Structure
//!
//! - `compress` - Size-bounded compression and orientation bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_image } from '@image-compress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const small = compress_image(bytes, { maxSizeLevel: 2 });
//! console.log(`${bytes.byteLength} -> ${small.byteLength} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;

pub use compress::{compress_image, read_orientation};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
