//! The augmentation pipeline: manifest → load → rotate → shear → write.
//!
//! For every processed manifest entry, each configured rotation of the image
//! is produced, then each configured shear of that rotation, skipping only
//! the identity combination (rotation 0, shear 0). Each surviving
//! combination is written as `<stem>_<rotation>_<shear>.jpg` in the output
//! directory.
//!
//! The pipeline is strictly sequential and fails fast: the first missing or
//! unreadable image, or the first unwritable output, aborts the whole run
//! with the row and path that caused it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{load_image, DecodeError};
use crate::encode::{write_jpeg, EncodeError};
use crate::manifest::{self, ManifestError};
use crate::transform::{rotate, shear};

/// How often to log progress, in processed manifest entries.
const PROGRESS_INTERVAL: usize = 100;

/// Errors that can abort an augmentation run.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// The rotation list is empty.
    #[error("No rotation angles configured")]
    NoRotations,

    /// The shear list is empty.
    #[error("No shear angles configured")]
    NoShears,

    /// The manifest could not be loaded.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// An image referenced by the manifest could not be loaded.
    #[error("Row {row} ({}): {source}", path.display())]
    Load {
        row: usize,
        path: PathBuf,
        source: DecodeError,
    },

    /// An augmented output file could not be written.
    #[error("Row {row}: {source}")]
    Write { row: usize, source: EncodeError },
}

/// Configuration for an augmentation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentConfig {
    /// Path to the CSV manifest.
    pub manifest_path: PathBuf,
    /// Directory containing the source images named by the manifest.
    pub image_dir: PathBuf,
    /// Directory the augmented files are written to.
    pub output_dir: PathBuf,
    /// Rotation angles in degrees, applied in order.
    pub rotations: Vec<i32>,
    /// Shear angles in degrees, applied in order to each rotation.
    pub shears: Vec<i32>,
    /// Optional cap on the number of manifest entries processed.
    pub limit: Option<usize>,
    /// JPEG quality for the output files (1-100).
    pub quality: u8,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(manifest::DEFAULT_MANIFEST_FILE),
            image_dir: PathBuf::from("train_images"),
            output_dir: PathBuf::from("."),
            rotations: vec![0, 90, 180, 270],
            shears: vec![-20, 0, 20],
            limit: None,
            quality: 90,
        }
    }
}

impl AugmentConfig {
    /// Create a new AugmentConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the angle lists are usable.
    pub fn validate(&self) -> Result<(), AugmentError> {
        if self.rotations.is_empty() {
            return Err(AugmentError::NoRotations);
        }
        if self.shears.is_empty() {
            return Err(AugmentError::NoShears);
        }
        Ok(())
    }
}

/// Summary of a completed augmentation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AugmentReport {
    /// Manifest entries that were fully processed.
    pub images_processed: usize,
    /// Augmented files written to the output directory.
    pub files_written: usize,
}

/// Run the augmentation pipeline.
///
/// Loads the manifest, then for each entry (up to `limit`) produces one
/// output file per (rotation, shear) combination other than (0, 0).
///
/// # Errors
///
/// Fails before touching any image if the configuration is invalid or the
/// manifest is missing; otherwise fails on the first unreadable image or
/// unwritable output.
pub fn run(config: &AugmentConfig) -> Result<AugmentReport, AugmentError> {
    config.validate()?;

    let entries = manifest::load_manifest(&config.manifest_path)?;
    let take = config.limit.unwrap_or(entries.len());

    let mut report = AugmentReport::default();

    for (row, entry) in entries.iter().take(take).enumerate() {
        let image_path = config.image_dir.join(&entry.image);
        let image = load_image(&image_path).map_err(|source| AugmentError::Load {
            row,
            path: image_path.clone(),
            source,
        })?;

        let stem = manifest::stem(&entry.image);

        for &deg in &config.rotations {
            let rotated = rotate(&image, deg as f64);

            for &sh in &config.shears {
                if deg == 0 && sh == 0 {
                    continue;
                }

                let sheared = shear(&rotated, sh as f64);

                let file_name = format!("{stem}_{deg}_{sh}.jpg");
                let out_path = config.output_dir.join(&file_name);
                write_jpeg(&sheared, &out_path, config.quality)
                    .map_err(|source| AugmentError::Write { row, source })?;

                log::debug!("Wrote {}", out_path.display());
                report.files_written += 1;
            }
        }

        report.images_processed += 1;
        if report.images_processed % PROGRESS_INTERVAL == 0 {
            log::info!("Progress: {} images processed", report.images_processed);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodedImage;
    use std::collections::BTreeSet;
    use std::path::Path;

    /// Write a small gradient image so JPEG artifacts are visible but
    /// deterministic fixtures stay cheap.
    fn write_fixture_image(dir: &Path, name: &str) {
        let image = DecodedImage::from_rgb_image(image::RgbImage::from_fn(16, 16, |x, y| {
            image::Rgb([(x * 16) as u8, (y * 16) as u8, 0])
        }));
        write_jpeg(&image, &dir.join(name), 90).unwrap();
    }

    fn write_manifest(dir: &Path, rows: &[&str]) -> PathBuf {
        let path = dir.join(manifest::DEFAULT_MANIFEST_FILE);
        let mut contents = String::from("image,class\n");
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn output_names(dir: &Path) -> BTreeSet<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn test_config(images: &Path, output: &Path, manifest_path: PathBuf) -> AugmentConfig {
        AugmentConfig {
            manifest_path,
            image_dir: images.to_path_buf(),
            output_dir: output.to_path_buf(),
            ..AugmentConfig::new()
        }
    }

    #[test]
    fn test_one_image_two_rotations_yields_five_files() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_fixture_image(images.path(), "A.jpg");
        let manifest_path = write_manifest(images.path(), &["A.jpg,3"]);

        let mut config = test_config(images.path(), output.path(), manifest_path);
        config.rotations = vec![0, 90];
        config.shears = vec![-20, 0, 20];

        let report = run(&config).unwrap();
        assert_eq!(report.images_processed, 1);
        assert_eq!(report.files_written, 5);

        let expected: BTreeSet<String> = ["A_0_-20.jpg", "A_0_20.jpg", "A_90_-20.jpg", "A_90_0.jpg", "A_90_20.jpg"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(output_names(output.path()), expected);
    }

    #[test]
    fn test_identity_combination_never_written() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_fixture_image(images.path(), "A.jpg");
        let manifest_path = write_manifest(images.path(), &["A.jpg,3"]);

        let config = test_config(images.path(), output.path(), manifest_path);
        let report = run(&config).unwrap();

        // Default 4 rotations x 3 shears, minus the skipped identity
        assert_eq!(report.files_written, 11);
        assert!(!output_names(output.path()).contains("A_0_0.jpg"));
    }

    #[test]
    fn test_limit_processes_only_first_entries() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_fixture_image(images.path(), "A.jpg");
        write_fixture_image(images.path(), "B.jpg");
        // C.jpg is listed but never created: the run only succeeds if the
        // limit stops before reaching it.
        let manifest_path = write_manifest(images.path(), &["A.jpg,1", "B.jpg,2", "C.jpg,3"]);

        let mut config = test_config(images.path(), output.path(), manifest_path);
        config.limit = Some(2);

        let report = run(&config).unwrap();
        assert_eq!(report.images_processed, 2);

        let names = output_names(output.path());
        assert!(names.iter().all(|n| n.starts_with("A_") || n.starts_with("B_")));
    }

    #[test]
    fn test_missing_manifest_fails_before_any_output() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_fixture_image(images.path(), "A.jpg");

        let config = test_config(
            images.path(),
            output.path(),
            images.path().join("absent.csv"),
        );

        let result = run(&config);
        assert!(matches!(
            result,
            Err(AugmentError::Manifest(ManifestError::NotFound { .. }))
        ));
        assert!(output_names(output.path()).is_empty());
    }

    #[test]
    fn test_missing_image_fails_with_row_context() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_fixture_image(images.path(), "A.jpg");
        let manifest_path = write_manifest(images.path(), &["A.jpg,1", "B.jpg,2"]);

        let config = test_config(images.path(), output.path(), manifest_path);
        let result = run(&config);

        match result {
            Err(AugmentError::Load { row, path, .. }) => {
                assert_eq!(row, 1);
                assert!(path.ends_with("B.jpg"));
            }
            other => panic!("Expected Load error, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_rotations_rejected_up_front() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let mut config = test_config(
            images.path(),
            output.path(),
            images.path().join("absent.csv"),
        );
        config.rotations = vec![];

        // Validation runs before the manifest is touched
        assert!(matches!(run(&config), Err(AugmentError::NoRotations)));
    }

    #[test]
    fn test_empty_shears_rejected_up_front() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let mut config = test_config(
            images.path(),
            output.path(),
            images.path().join("absent.csv"),
        );
        config.shears = vec![];

        assert!(matches!(run(&config), Err(AugmentError::NoShears)));
    }

    #[test]
    fn test_outputs_are_valid_jpeg() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_fixture_image(images.path(), "A.jpg");
        let manifest_path = write_manifest(images.path(), &["A.jpg,1"]);

        let mut config = test_config(images.path(), output.path(), manifest_path);
        config.rotations = vec![90];
        config.shears = vec![0];

        run(&config).unwrap();

        let bytes = std::fs::read(output.path().join("A_90_0.jpg")).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);

        // 90-degree rotation of a square image keeps its dimensions
        let decoded = crate::decode::decode_image(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 16));
    }

    #[test]
    fn test_outputs_go_to_output_dir_not_image_dir() {
        let images = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_fixture_image(images.path(), "A.jpg");
        let manifest_path = write_manifest(images.path(), &["A.jpg,1"]);

        let mut config = test_config(images.path(), output.path(), manifest_path);
        config.rotations = vec![180];
        config.shears = vec![0];

        run(&config).unwrap();

        assert!(output.path().join("A_180_0.jpg").exists());
        assert!(!images.path().join("A_180_0.jpg").exists());
    }
}
