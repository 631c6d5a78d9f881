//! JPEG encoding for augmented output files.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder,
//! with configurable quality for balancing file size against fidelity of the
//! augmented copies.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use crate::decode::DecodedImage;

use super::EncodeError;

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - RGB image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if the pixel buffer is
/// inconsistent with the dimensions or encoding fails.
///
/// # Example
///
/// ```ignore
/// use auglite_core::decode::DecodedImage;
/// use auglite_core::encode::encode_jpeg;
///
/// let image = DecodedImage::from_value(100, 100, 128);
/// let jpeg = encode_jpeg(&image, 90).unwrap();
/// assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
/// ```
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    // Validate pixel data length
    let expected_len = (image.width as usize) * (image.height as usize) * 3;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an image and write it to a JPEG file.
///
/// # Errors
///
/// Returns an encoding error for invalid input, or `EncodeError::Io` with
/// the offending path if the file cannot be written.
pub fn write_jpeg(image: &DecodedImage, path: &Path, quality: u8) -> Result<(), EncodeError> {
    let bytes = encode_jpeg(image, quality)?;
    std::fs::write(path, bytes).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
