//! Shear-only affine warp with constant fill.
//!
//! The shear slants the image along the x axis without rotating it. Unlike
//! rotation, the output canvas keeps the size of the input, so content that
//! slants out of frame is lost and the vacated region is filled with white.
//!
//! The affine matrix is used as the output→input map, so for shear angle s:
//! ```text
//! src_x = dst_x - sin(s) * dst_y
//! src_y = cos(s) * dst_y
//! ```

use crate::decode::DecodedImage;

use super::sample::sample_bilinear;
use super::FILL_VALUE;

/// Apply a shear warp to an image.
///
/// Positive angles slant content to the right going down the image, negative
/// angles to the left. A shear of 0 degrees returns the image unchanged.
/// The output has the same dimensions as the input; pixels with no source
/// coverage are filled with [`FILL_VALUE`] (white).
///
/// # Example
///
/// ```ignore
/// use auglite_core::transform::shear;
///
/// let sheared = shear(&image, -20.0);
/// assert_eq!(sheared.width, image.width);
/// ```
pub fn shear(image: &DecodedImage, angle_degrees: f64) -> DecodedImage {
    // Fast path: no shear needed
    if angle_degrees.abs() < 0.001 {
        return image.clone();
    }

    let angle_rad = angle_degrees.to_radians();
    let sin = angle_rad.sin();
    let cos = angle_rad.cos();

    let (w, h) = (image.width, image.height);
    let mut output = vec![0u8; (w * h * 3) as usize];

    for dst_y in 0..h {
        let src_y = cos * dst_y as f64;
        let x_offset = sin * dst_y as f64;

        for dst_x in 0..w {
            let src_x = dst_x as f64 - x_offset;

            let pixel = sample_bilinear(image, src_x, src_y, FILL_VALUE);

            let dst_idx = ((dst_y * w + dst_x) * 3) as usize;
            output[dst_idx..dst_idx + 3].copy_from_slice(&pixel);
        }
    }

    DecodedImage {
        width: w,
        height: h,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
