use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::StudioResult;

/// Logical size of the player figure surface.
pub const FIGURE_CANVAS: Canvas = Canvas::new(400, 600);
/// Logical size of the compositor surface; fixed regardless of the resolution label.
pub const COMPOSITE_CANVAS: Canvas = Canvas::new(3840, 2160);
/// Default number of generated images kept in the recent gallery.
pub const DEFAULT_GALLERY_CAPACITY: usize = 6;

/// Host-level settings shared by the CLI and library callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Explicit font file used for labels; system fonts are used when unset.
    pub font_path: Option<PathBuf>,
    /// Output pixel size of the figure surface.
    pub figure_surface: Canvas,
    /// Output pixel size of the compositor surface.
    pub composite_surface: Canvas,
    /// Capacity of the recent generations gallery.
    pub gallery_capacity: usize,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            figure_surface: FIGURE_CANVAS,
            composite_surface: COMPOSITE_CANVAS,
            gallery_capacity: DEFAULT_GALLERY_CAPACITY,
        }
    }
}

impl StudioConfig {
    /// Load a JSON config file; missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> StudioResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()
    }

    /// Apply `PITCHSTUDIO_*` environment overrides. Unparseable or zero values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(p) = std::env::var_os("PITCHSTUDIO_FONT_PATH").filter(|v| !v.is_empty()) {
            self.font_path = Some(PathBuf::from(p));
        }
        if let Some(w) = env_u32("PITCHSTUDIO_COMPOSITE_WIDTH") {
            self.composite_surface.width = w;
        }
        if let Some(h) = env_u32("PITCHSTUDIO_COMPOSITE_HEIGHT") {
            self.composite_surface.height = h;
        }
        if let Some(c) = std::env::var("PITCHSTUDIO_GALLERY_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            self.gallery_capacity = c;
        }
        self
    }

    /// Reject surfaces the rasterizer cannot allocate.
    pub fn validate(self) -> StudioResult<Self> {
        self.figure_surface.validate()?;
        self.composite_surface.validate()?;
        Ok(self)
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|&n| n > 0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
