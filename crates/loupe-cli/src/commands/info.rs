use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use loupe_core::io::image_io::load_image;

use crate::summary::print_image_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    print_image_summary(&args.file, &image);
    Ok(())
}
