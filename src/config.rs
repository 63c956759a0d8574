//! JSON startup configuration.
//!
//! Stored at `%APPDATA%/DesktopLyric/config.json` (current directory when
//! `APPDATA` is unset). Holds the initial style and interaction flags only;
//! the window position is never persisted here.
//!
//! Colors are written as `#RRGGBB` / `#RRGGBBAA`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::constants::*;
use crate::model::{Argb, InteractionMode, OverlayStyle};

/// Serializable config structure for JSON persistence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    pub font_size: u32,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: u32,
    pub draggable: bool,
    pub mouse_transparent: bool,
    pub debug_logging: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE_PX,
            fill_color: Argb(DEFAULT_FILL_COLOR).to_hex(),
            stroke_color: Argb(DEFAULT_STROKE_COLOR).to_hex(),
            stroke_width: DEFAULT_STROKE_WIDTH_PX,
            draggable: true,
            mouse_transparent: false,
            debug_logging: false,
        }
    }
}

impl OverlayConfig {
    /// Style with invalid colors replaced by defaults and sizes clamped.
    pub fn style(&self) -> OverlayStyle {
        let color = |hex: &str, fallback: u32| {
            Argb::parse_hex(hex).unwrap_or_else(|| {
                tracing::warn!(value = hex, "invalid color in config; using default");
                Argb(fallback)
            })
        };
        let mut style = OverlayStyle {
            font_size_px: self.font_size,
            fill_color: color(&self.fill_color, DEFAULT_FILL_COLOR),
            stroke_color: color(&self.stroke_color, DEFAULT_STROKE_COLOR),
            stroke_width_px: self.stroke_width,
        };
        style.validate();
        style
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        InteractionMode {
            draggable: self.draggable,
            mouse_transparent: self.mouse_transparent,
        }
    }
}

/// Get config file path: %APPDATA%/DesktopLyric/config.json
pub fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join("DesktopLyric").join("config.json")
}

/// Load config from `path`, returning defaults if missing or invalid.
pub fn load_from(path: &Path) -> OverlayConfig {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "invalid config, using defaults: {}", e);
            OverlayConfig::default()
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => OverlayConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "could not read config, using defaults: {}", e);
            OverlayConfig::default()
        }
    }
}

/// Load config from the default location.
pub fn load() -> OverlayConfig {
    load_from(&config_path())
}

/// Write `config` to `path`, creating parent directories.
pub fn save_to(path: &Path, config: &OverlayConfig) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config).map_err(io::Error::other)?;
    fs::write(path, json)
}
