use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_WHEEL_ZOOM, DEFAULT_WHEEL_PAN_STEP_PX};
use crate::error::Result;

/// Where wheel zoom keeps the image fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomAnchor {
    /// Under the mouse cursor.
    #[default]
    Cursor,
    /// At the center of the container.
    Center,
}

impl fmt::Display for ZoomAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cursor => write!(f, "Cursor"),
            Self::Center => write!(f, "Center"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Keep the renderable buffer between paints while its size is stable.
    #[serde(default = "default_true")]
    pub reuse_buffer: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { reuse_buffer: true }
    }
}

/// Input and render tuning for a [`Viewer`](crate::viewer::Viewer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Wheel pan distance per notch, in screen pixels. Divided by the zoom
    /// factor and floored to at least one image pixel.
    #[serde(default = "default_wheel_pan_step_px")]
    pub wheel_pan_step_px: u32,
    /// Highest zoom reachable with the wheel. Zoom buttons are not capped.
    #[serde(default = "default_max_wheel_zoom")]
    pub max_wheel_zoom: u32,
    #[serde(default)]
    pub wheel_zoom_anchor: ZoomAnchor,
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_wheel_pan_step_px() -> u32 {
    DEFAULT_WHEEL_PAN_STEP_PX
}
fn default_max_wheel_zoom() -> u32 {
    DEFAULT_MAX_WHEEL_ZOOM
}
fn default_true() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            wheel_pan_step_px: DEFAULT_WHEEL_PAN_STEP_PX,
            max_wheel_zoom: DEFAULT_MAX_WHEEL_ZOOM,
            wheel_zoom_anchor: ZoomAnchor::default(),
            render: RenderConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
