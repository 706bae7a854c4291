//! Texture defaults and the JSON config consumed by the `ripple` binary.

use crate::color::{default_color, Rgba};
use crate::error::{RippleError, RippleResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Addressing outside `[0, 1]` texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    #[default]
    Clamp,
    Repeat,
}

/// Sampling used when the host scales the texture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Point,
    #[default]
    Bilinear,
}

/// Hints attached to every freshly allocated buffer. The rasterizer never
/// reads them; they travel with the surface for the host's benefit.
/// Pixel format is always RGBA32 without mipmaps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    pub name: String,
    pub wrap_mode: WrapMode,
    pub filter_mode: FilterMode,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            name: "tex_circle".to_string(),
            wrap_mode: WrapMode::Clamp,
            filter_mode: FilterMode::Bilinear,
        }
    }
}

/// Top-level configuration: texture hints plus the default circle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub texture: TextureSettings,
    /// Fill color as `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    pub width: u32,
    pub height: u32,
    pub radius: i32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            texture: TextureSettings::default(),
            color: default_color().to_hex(false),
            width: 128,
            height: 128,
            radius: 48,
        }
    }
}

impl RippleConfig {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> RippleResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| RippleError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parsed fill color, or the default tint if `color` is malformed.
    pub fn fill_color(&self) -> Rgba {
        Rgba::from_hex(&self.color).unwrap_or_else(|| {
            log::warn!("invalid color {:?} in config, using default", self.color);
            default_color()
        })
    }
}
