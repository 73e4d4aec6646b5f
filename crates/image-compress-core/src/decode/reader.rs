//! Image decoding and EXIF orientation lookup.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{ImageError, ImageReader};

use super::{DecodeError, Orientation, PixelBuffer};

/// Decode image bytes to an RGB pixel buffer, exactly as stored.
///
/// The format is sniffed from the content, so any decoder compiled into the
/// `image` crate (JPEG, PNG, TIFF, WebP) is accepted. EXIF orientation is
/// *not* applied here; see [`crate::normalize`].
///
/// # Errors
///
/// Returns `DecodeError::Empty` for empty input,
/// `DecodeError::UnsupportedFormat` when the format is not recognized and
/// `DecodeError::CorruptedFile` when the data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let img = sniff(bytes)?.decode().map_err(map_image_error)?;
    Ok(PixelBuffer::from_rgb_image(img.into_rgb8()))
}

/// Check that `bytes` look like a decodable image without decoding pixels.
///
/// Only the format signature and the header up to the dimensions are read.
/// Damage further into the pixel data goes unnoticed here.
///
/// # Errors
///
/// Same variants as [`decode_image`].
pub fn probe_image(bytes: &[u8]) -> Result<(u32, u32), DecodeError> {
    sniff(bytes)?.into_dimensions().map_err(map_image_error)
}

fn sniff(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat(
            "unrecognized image signature".to_string(),
        ));
    }
    Ok(reader)
}

fn map_image_error(e: ImageError) -> DecodeError {
    match e {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat(e.to_string()),
        ImageError::Limits(_) => DecodeError::TooLarge(e.to_string()),
        _ => DecodeError::CorruptedFile(e.to_string()),
    }
}

/// Read the EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or the orientation
/// cannot be determined. Never fails.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}
