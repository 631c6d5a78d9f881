//! Image decoding from bytes and files.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode an image from raw file bytes.
///
/// The format is guessed from the file contents, so any format the `image`
/// crate is built with (JPEG, PNG) is accepted regardless of extension.
/// Grayscale and RGBA inputs are normalized to RGB8.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image format, or `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgb_img = img.into_rgb8();
    Ok(DecodedImage::from_rgb_image(rgb_img))
}

/// Read an image file from disk and decode it.
///
/// # Errors
///
/// Returns `DecodeError::Io` with the offending path if the file cannot be
/// read, or a decoding error if its contents are not a valid image.
pub fn load_image(path: &Path) -> Result<DecodedImage, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes)
}
