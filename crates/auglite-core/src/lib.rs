//! Auglite Core - Image augmentation library
//!
//! This crate provides the core functionality for the Auglite data
//! augmenter: decoding dataset images, geometric transforms (rotation and
//! shear), JPEG encoding, CSV manifest parsing, and the pipeline that ties
//! them together.
//!
//! # Pipeline
//!
//! 1. `manifest` — read the CSV listing of image identifiers
//! 2. `decode` — load each referenced image as an RGB8 buffer
//! 3. `transform` — rotate (canvas expanded, white fill), then shear
//! 4. `encode` — write each surviving combination as a JPEG file
//!
//! The `augment` module drives the whole run from an [`AugmentConfig`].

pub mod augment;
pub mod decode;
pub mod encode;
pub mod manifest;
pub mod transform;

pub use augment::{run, AugmentConfig, AugmentError, AugmentReport};
pub use decode::{DecodeError, DecodedImage};
pub use encode::EncodeError;
pub use manifest::{load_manifest, stem, ManifestEntry, ManifestError};
pub use transform::{compute_rotated_bounds, rotate, shear, FILL_VALUE};
