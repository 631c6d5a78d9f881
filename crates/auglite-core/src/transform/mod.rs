//! Geometric transforms for augmentation: rotation and shear.
//!
//! Both transforms use inverse mapping: for each pixel in the output image,
//! the corresponding source position is computed and sampled with bilinear
//! interpolation. Regions of the output with no source pixel are filled with
//! constant white.
//!
//! # Transform Order
//!
//! The augmentation pipeline applies transforms in this order:
//! 1. Rotation (canvas expanded to the rotated bounding box)
//! 2. Shear (canvas size preserved)
//!
//! # Coordinate System
//!
//! - Angles are in degrees, positive rotation = counter-clockwise
//! - Origin is the top-left corner, y grows downward

mod rotation;
mod sample;
mod shear;

pub use rotation::{compute_rotated_bounds, rotate};
pub use shear::shear;

/// Pixel value used for regions introduced by a transform that have no
/// corresponding source pixel (constant white).
pub const FILL_VALUE: u8 = 255;
