//! CSV manifest parsing.
//!
//! The manifest lists the images to augment, one per row, under an `image`
//! column. A second column carries the class label; it is parsed (so a
//! malformed manifest fails up front) but never used by the pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default manifest file name, as produced by the dataset export.
pub const DEFAULT_MANIFEST_FILE: &str = "train_onelabel.csv";

/// Errors that can occur while reading the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file is missing or unreadable.
    #[error("Manifest not found at {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest has no column with the expected name.
    #[error("Manifest at {} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// The CSV itself could not be parsed.
    #[error("Malformed manifest at {}: {source}", path.display())]
    Malformed { path: PathBuf, source: csv::Error },
}

/// One manifest row: an image identifier and its associated label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Image filename, relative to the image directory.
    pub image: String,
    /// Class label. Read for validation, unused downstream.
    pub label: String,
}

/// Load the manifest, preserving row order.
///
/// The header row is required and must contain an `image` column; the first
/// other column is taken as the label. Rows with a different number of
/// fields than the header fail the whole load.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let file = std::fs::File::open(path).map_err(|source| ManifestError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| ManifestError::Malformed {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let image_idx = headers
        .iter()
        .position(|h| h == "image")
        .ok_or(ManifestError::MissingColumn {
            path: path.to_path_buf(),
            column: "image",
        })?;

    // Label is whatever column isn't the image identifier.
    let label_idx = (0..headers.len()).find(|&i| i != image_idx);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ManifestError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        entries.push(ManifestEntry {
            image: record.get(image_idx).unwrap_or_default().to_string(),
            label: label_idx
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string(),
        });
    }

    Ok(entries)
}

/// Strip the extension from an image identifier by dropping its last four
/// characters.
///
/// The manifest stores identifiers with fixed-width extensions (".jpg",
/// ".png"), so the derived output stem is the identifier minus exactly four
/// characters. Identifiers shorter than that collapse to an empty stem.
pub fn stem(identifier: &str) -> &str {
    match identifier.char_indices().rev().nth(3) {
        Some((idx, _)) => &identifier[..idx],
        None => "",
    }
}
