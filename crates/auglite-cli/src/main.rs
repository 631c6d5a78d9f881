//! Command-line front end for the Auglite image augmenter.
//!
//! Reads a CSV manifest of image filenames, applies every configured
//! (rotation, shear) combination except the identity to each image, and
//! writes the results as JPEG files.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use auglite_core::augment::{run, AugmentConfig};
use auglite_core::manifest::DEFAULT_MANIFEST_FILE;

#[derive(Parser)]
#[command(name = "auglite")]
#[command(about = "Rotation and shear augmentation for image datasets")]
#[command(version)]
struct Args {
    /// Directory containing the manifest file
    #[arg(long, default_value = "")]
    file_dir: PathBuf,

    /// Directory containing the source images
    #[arg(long, default_value = "train_images")]
    image_dir: PathBuf,

    /// Directory the augmented files are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Rotation angles in degrees
    #[arg(long, value_delimiter = ',', default_values_t = [0, 90, 180, 270])]
    rotations: Vec<i32>,

    /// Shear angles in degrees
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [-20, 0, 20]
    )]
    shears: Vec<i32>,

    /// Process only the first N manifest entries
    #[arg(long)]
    limit: Option<usize>,

    /// JPEG quality for the output files (1-100)
    #[arg(long, default_value_t = 90)]
    quality: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = AugmentConfig {
        manifest_path: args.file_dir.join(DEFAULT_MANIFEST_FILE),
        image_dir: args.image_dir,
        output_dir: args.output_dir,
        rotations: args.rotations,
        shears: args.shears,
        limit: args.limit,
        quality: args.quality,
    };

    let report = run(&config).context("augmentation run failed")?;

    log::info!(
        "Processed {} images, wrote {} augmented files",
        report.images_processed,
        report.files_written
    );

    Ok(())
}
