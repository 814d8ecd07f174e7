use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use loupe_core::geometry::{Axis, ScreenPoint};
use loupe_core::io::image_io::save_image;
use loupe_core::render::{extract_region, upscale_nearest};

use super::{check_zoom, load_config, open_viewer, parse_pair, parse_point, parse_size};
use crate::summary::print_render_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file (PNG, TIFF, PBM, ...)
    pub file: PathBuf,

    /// Output image file (.png, or .pbm for unexpanded 1bpp with --raw)
    #[arg(short, long, default_value = "view.png")]
    pub output: PathBuf,

    /// Integer zoom factor
    #[arg(long, default_value = "1")]
    pub zoom: u32,

    /// Viewer surface size in screen pixels
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub container: (u32, u32),

    /// Screen point kept fixed while zooming (defaults to the center)
    #[arg(long, value_parser = parse_point)]
    pub anchor: Option<(i32, i32)>,

    /// Scrollbar values in [0, 100000]
    #[arg(long, value_parser = parse_pair, conflicts_with = "origin")]
    pub scroll: Option<(u32, u32)>,

    /// Top-left image pixel of the view
    #[arg(long, value_parser = parse_pair)]
    pub origin: Option<(u32, u32)>,

    /// Write the unscaled source region instead of the zoomed view
    #[arg(long)]
    pub raw: bool,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    check_zoom(args.zoom, args.container)?;
    let config = load_config(args.config.as_deref())?;
    let mut viewer = open_viewer(&args.file, args.container, config)?;

    match args.anchor {
        Some((x, y)) => viewer.zoom_at(args.zoom, ScreenPoint::new(x, y)),
        None => viewer.on_zoom_button(args.zoom),
    }
    if let Some((x, y)) = args.scroll {
        viewer.on_scroll(Axis::Horizontal, x);
        viewer.on_scroll(Axis::Vertical, y);
    }
    if let Some((x, y)) = args.origin {
        let (ox, oy) = viewer.viewport().origin();
        viewer.on_pan(x as i64 - ox as i64, y as i64 - oy as i64);
    }

    let zoom = viewer.viewport().zoom();
    let (source_rect, dest_rect, zoomed) = {
        let frame = viewer.on_paint()?.context("Nothing to render")?;
        let zoomed = if args.raw {
            None
        } else {
            Some(upscale_nearest(frame.buffer, zoom)?)
        };
        (frame.source_rect, frame.dest_rect, zoomed)
    };
    let output = match zoomed {
        Some(buffer) => buffer,
        // Raw output is cut from the image itself so 1bpp stays packed.
        None => extract_region(viewer.image().context("Nothing to render")?, source_rect)?,
    };

    save_image(&output, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_render_summary(
        &args.file,
        &args.output,
        viewer.viewport(),
        source_rect,
        dest_rect,
    );
    Ok(())
}
