//! Image rotation with canvas expansion and constant fill.
//!
//! Rotation uses inverse mapping: for each pixel in the output image, the
//! source position that contributes to it is computed and sampled with
//! bilinear interpolation. The output canvas is the bounding box of the
//! rotated image, and regions with no source pixel are filled with white.
//!
//! For rotation by angle θ (counter-clockwise positive), the inverse
//! transform is:
//! ```text
//! src_x = (dst_x - dst_cx) * cos(θ) - (dst_y - dst_cy) * sin(θ) + src_cx
//! src_y = (dst_x - dst_cx) * sin(θ) + (dst_y - dst_cy) * cos(θ) + src_cy
//! ```

use crate::decode::DecodedImage;

use super::sample::sample_bilinear;
use super::FILL_VALUE;

/// Compute the dimensions of the bounding box for a rotated image.
///
/// When an image is rotated, the corners extend beyond the original bounds.
/// This function calculates the minimum bounding box that contains the
/// entire rotated image.
///
/// # Arguments
///
/// * `width` - Original image width
/// * `height` - Original image height
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Returns
///
/// Tuple of (new_width, new_height) for the rotated bounding box.
///
/// # Example
///
/// ```
/// use auglite_core::transform::compute_rotated_bounds;
///
/// // 90-degree rotation swaps dimensions
/// let (w, h) = compute_rotated_bounds(100, 50, 90.0);
/// assert_eq!(w, 50);
/// assert_eq!(h, 100);
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    // Normalize angle to handle 360, 720, etc.
    let angle_normalized = angle_degrees % 360.0;
    let abs_angle = angle_normalized.abs();

    // Fast path: no rotation needed (including near-zero and multiples of 360)
    if abs_angle < 0.001 || (360.0 - abs_angle).abs() < 0.001 {
        return (width, height);
    }

    // Fast path: exact 90/270 degree rotations (swap dimensions)
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return (height, width);
    }

    // Fast path: exact 180 degree rotation (same dimensions)
    if (abs_angle - 180.0).abs() < 0.001 {
        return (width, height);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    // The bounding box of a rotated rectangle is:
    // new_w = |w*cos| + |h*sin|
    // new_h = |w*sin| + |h*cos|
    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image around its center, expanding the canvas to fit.
///
/// Positive angles rotate counter-clockwise. The output canvas is the
/// bounding box of the rotated image, and pixels with no source coverage
/// are filled with [`FILL_VALUE`] (white).
///
/// # Example
///
/// ```ignore
/// use auglite_core::transform::rotate;
///
/// let rotated = rotate(&image, 90.0);
/// assert_eq!(rotated.width, image.height);
/// ```
pub fn rotate(image: &DecodedImage, angle_degrees: f64) -> DecodedImage {
    // Fast path: no rotation needed
    if angle_degrees.abs() < 0.001 {
        return image.clone();
    }

    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Pixel-center convention: right-angle rotations land exactly on the
    // source grid and stay lossless.
    let src_cx = (image.width as f64 - 1.0) / 2.0;
    let src_cy = (image.height as f64 - 1.0) / 2.0;
    let dst_cx = (dst_w as f64 - 1.0) / 2.0;
    let dst_cy = (dst_h as f64 - 1.0) / 2.0;

    let mut output = vec![0u8; (dst_w * dst_h * 3) as usize];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Translate destination point to origin at center
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            // Apply inverse rotation to find source coordinates
            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let pixel = sample_bilinear(image, src_x, src_y, FILL_VALUE);

            let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
            output[dst_idx..dst_idx + 3].copy_from_slice(&pixel);
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
