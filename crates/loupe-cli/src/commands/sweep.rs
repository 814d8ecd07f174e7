use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use loupe_core::geometry::Axis;
use loupe_core::io::image_io::save_png;
use loupe_core::render::upscale_nearest;
use loupe_core::viewport::PageDirection;

use super::{check_zoom, load_config, open_viewer, parse_size};

#[derive(Args)]
pub struct SweepArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output directory for the page images
    #[arg(short = 'd', long, default_value = "pages")]
    pub out_dir: PathBuf,

    /// Integer zoom factor
    #[arg(long, default_value = "1")]
    pub zoom: u32,

    /// Viewer surface size in screen pixels
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub container: (u32, u32),

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Distinct origins visited when paging from 0 to `max_origin` in steps of
/// `visible`.
fn page_count(max_origin: u32, visible: u32) -> u32 {
    1 + max_origin.div_ceil(visible.max(1))
}

pub fn run(args: &SweepArgs) -> Result<()> {
    check_zoom(args.zoom, args.container)?;
    let config = load_config(args.config.as_deref())?;
    let mut viewer = open_viewer(&args.file, args.container, config)?;
    viewer.on_zoom_button(args.zoom);

    let vp = viewer.viewport();
    let zoom = vp.zoom();
    let cols = page_count(vp.max_origin_x(), vp.visible_width());
    let rows = page_count(vp.max_origin_y(), vp.visible_height());
    let total = cols as u64 * rows as u64;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    println!(
        "Sweep: {} at {}x zoom, {} x {} pages",
        args.file.display(),
        zoom,
        cols,
        rows
    );

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Rendering [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let stem = args
        .file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page");

    viewer.on_scroll(Axis::Vertical, 0);
    for row in 0..rows {
        viewer.on_scroll(Axis::Horizontal, 0);
        for col in 0..cols {
            let path = page_path(&args.out_dir, stem, row, col);
            let frame = viewer.on_paint()?.context("Nothing to render")?;
            let page = upscale_nearest(frame.buffer, zoom)?;
            save_png(&page, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            pb.inc(1);
            viewer.on_page(Axis::Horizontal, PageDirection::Forward);
        }
        viewer.on_page(Axis::Vertical, PageDirection::Forward);
    }
    pb.finish();

    println!("Saved {} pages to {}", total, args.out_dir.display());
    Ok(())
}

fn page_path(dir: &Path, stem: &str, row: u32, col: u32) -> PathBuf {
    dir.join(format!("{stem}_r{row:03}_c{col:03}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_covers_clamped_last_page() {
        assert_eq!(page_count(0, 400), 1);
        assert_eq!(page_count(600, 400), 3);
        assert_eq!(page_count(800, 400), 3);
        assert_eq!(page_count(801, 400), 4);
    }
}
