pub mod config;
pub mod info;
pub mod render;
pub mod sweep;

use std::path::Path;

use anyhow::{bail, Context, Result};
use loupe_core::config::ViewerConfig;
use loupe_core::io::image_io::load_image;
use loupe_core::viewer::Viewer;

/// Parse `WxH`, e.g. `800x600`.
pub fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse().map_err(|_| format!("invalid width in '{s}'"))?;
    let h = h.trim().parse().map_err(|_| format!("invalid height in '{s}'"))?;
    Ok((w, h))
}

/// Parse `X,Y` into unsigned coordinates.
pub fn parse_pair(s: &str) -> std::result::Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in '{s}'"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in '{s}'"))?;
    Ok((x, y))
}

/// Parse `X,Y` into signed screen coordinates.
pub fn parse_point(s: &str) -> std::result::Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in '{s}'"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in '{s}'"))?;
    Ok((x, y))
}

pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(p) => ViewerConfig::load(p)
            .with_context(|| format!("Failed to read config from {}", p.display())),
        None => Ok(ViewerConfig::default()),
    }
}

/// Reject zoom levels whose destination rectangle would outgrow the container.
/// Up to the larger container side, `visible * zoom` stays within it.
pub fn check_zoom(zoom: u32, container: (u32, u32)) -> Result<()> {
    let limit = container.0.max(container.1).max(1);
    if zoom > limit {
        bail!("Zoom {zoom} exceeds the largest container side ({limit})");
    }
    Ok(())
}

/// Build a viewer sized to `container` with `file` loaded.
pub fn open_viewer(file: &Path, container: (u32, u32), config: ViewerConfig) -> Result<Viewer> {
    if container.0 == 0 || container.1 == 0 {
        bail!("Container size must be non-zero, got {}x{}", container.0, container.1);
    }
    let image = load_image(file).with_context(|| format!("Failed to load {}", file.display()))?;
    let mut viewer = Viewer::new(config);
    viewer.on_resize(container.0, container.1);
    viewer.load_image(image);
    Ok(viewer)
}
