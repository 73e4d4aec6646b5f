//! Shared fixtures for unit tests.
//!
//! Images are synthesized in memory so tests need no files on disk. JPEGs
//! carrying an orientation tag get a hand-built EXIF APP1 segment spliced in
//! right after the SOI marker.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::codec::ImageCodec;
use crate::decode::{DecodeError, Orientation, PixelBuffer};
use crate::encode::{encode_jpeg, EncodeError};
use crate::search::Quality;

// Minimal valid JPEG bytes (1x1 pixel, no EXIF)
pub const MINIMAL_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
    0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
    0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
    0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
    0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
    0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
    0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
    0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
    0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
    0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
    0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
    0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
    0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
    0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
    0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
    0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
    0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
    0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
    0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
    0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
    0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
];

/// Smooth RGB gradient; compresses well.
pub fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(128);
        }
    }
    PixelBuffer::new(width, height, pixels)
}

/// Deterministic pseudo-random noise; compresses badly at any quality.
pub fn noise_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut state: u32 = 0x2545_F491;
    let pixels = (0..(width as usize) * (height as usize) * 3)
        .map(|_| {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    PixelBuffer::new(width, height, pixels)
}

/// Encode a buffer as a plain JPEG.
pub fn jpeg_bytes(buffer: &PixelBuffer, quality: u8) -> Vec<u8> {
    encode_jpeg(&buffer.pixels, buffer.width, buffer.height, quality).unwrap()
}

/// Encode a buffer as a JPEG carrying EXIF orientation `value`.
pub fn jpeg_with_orientation(buffer: &PixelBuffer, value: u16) -> Vec<u8> {
    let jpeg = jpeg_bytes(buffer, 90);
    assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

    let [hi, lo] = value.to_be_bytes();
    let app1: [u8; 36] = [
        0xFF, 0xE1, 0x00, 0x22, // APP1, length 34
        b'E', b'x', b'i', b'f', 0x00, 0x00, // Exif header
        b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // TIFF header, IFD0 at 8
        0x00, 0x01, // one entry
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, hi, lo, 0x00, 0x00, // Orientation
        0x00, 0x00, 0x00, 0x00, // no next IFD
    ];

    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    out.extend_from_slice(&jpeg[0..2]);
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Codec double that returns a fixed buffer and scripted encode sizes.
///
/// Records every quality it is asked to encode at. Uses Mutex so it stays
/// Sync like the real codec.
pub struct ScriptedCodec {
    buffer: PixelBuffer,
    orientation: Orientation,
    size_at: Box<dyn Fn(u8) -> usize + Send + Sync>,
    pub qualities: Mutex<Vec<u8>>,
}

impl ScriptedCodec {
    /// Encoded size is `size_at(quality)`.
    pub fn new(size_at: impl Fn(u8) -> usize + Send + Sync + 'static) -> Self {
        Self {
            buffer: gradient_buffer(4, 4),
            orientation: Orientation::Normal,
            size_at: Box::new(size_at),
            qualities: Mutex::new(Vec::new()),
        }
    }

    /// Buffer returned from `decode`.
    pub fn with_buffer(mut self, buffer: PixelBuffer) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn attempts(&self) -> usize {
        self.qualities.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<u8> {
        self.qualities.lock().unwrap().clone()
    }
}

impl ImageCodec for ScriptedCodec {
    fn probe(&self, bytes: &[u8]) -> Result<(), DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(())
    }

    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(self.buffer.clone())
    }

    fn encode_lossy(&self, _buffer: &PixelBuffer, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        self.qualities.lock().unwrap().push(quality.value());
        Ok(vec![0u8; (self.size_at)(quality.value())])
    }

    fn read_orientation(&self, _bytes: &[u8]) -> Orientation {
        self.orientation
    }
}

/// Wraps a real codec and counts calls.
pub struct CountingCodec<C> {
    pub inner: C,
    pub encodes: Mutex<Vec<u8>>,
    pub probes: AtomicUsize,
    pub decodes: AtomicUsize,
    pub orientation_reads: AtomicUsize,
}

impl<C> CountingCodec<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            encodes: Mutex::new(Vec::new()),
            probes: AtomicUsize::new(0),
            decodes: AtomicUsize::new(0),
            orientation_reads: AtomicUsize::new(0),
        }
    }

    /// Number of encode calls.
    pub fn attempts(&self) -> usize {
        self.encodes.lock().unwrap().len()
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn decodes(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }

    pub fn orientation_reads(&self) -> usize {
        self.orientation_reads.load(Ordering::SeqCst)
    }
}

impl<C: ImageCodec> ImageCodec for CountingCodec<C> {
    fn probe(&self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.inner.probe(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        self.inner.decode(bytes)
    }

    fn encode_lossy(&self, buffer: &PixelBuffer, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        self.encodes.lock().unwrap().push(quality.value());
        self.inner.encode_lossy(buffer, quality)
    }

    fn read_orientation(&self, bytes: &[u8]) -> Orientation {
        self.orientation_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_orientation(bytes)
    }
}
