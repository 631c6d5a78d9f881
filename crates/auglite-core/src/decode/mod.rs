//! Image decoding for the augmentation pipeline.
//!
//! This module provides functionality for:
//! - Decoding dataset images (JPEG, PNG) from bytes or files
//! - Normalizing everything to RGB8 pixel buffers
//!
//! All operations are synchronous; the pipeline loads one image at a time.
//!
//! # Examples
//!
//! ```ignore
//! use auglite_core::decode::load_image;
//!
//! let image = load_image(std::path::Path::new("train_images/42.jpg")).unwrap();
//! println!("Loaded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, load_image};
pub use types::{DecodeError, DecodedImage};
