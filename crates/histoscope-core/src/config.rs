use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_MICRONS_PER_PIXEL};
use crate::error::{HistoscopeError, Result};

/// Per-slide configuration, loaded from an optional `histoscope.toml`
/// next to the slide asset. Missing fields fall back to the defaults
/// of the reference slide (4x4 grid, 40x magnification).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Identifier used in patch paths (`/slides/{slide_id}/patches/...`).
    pub slide_id: String,
    /// Human-readable name shown in the header.
    pub display_name: String,
    /// File extension of patch tiles, including the dot.
    pub patch_extension: String,
    pub grid_rows: u32,
    pub grid_cols: u32,
    /// Physical scale for measurement display.
    pub microns_per_pixel: f32,
    pub magnification: String,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            slide_id: "Image".to_string(),
            display_name: "Sample_Tissue_H&E_40x.svs".to_string(),
            patch_extension: ".jpg".to_string(),
            grid_rows: DEFAULT_GRID_ROWS,
            grid_cols: DEFAULT_GRID_COLS,
            microns_per_pixel: DEFAULT_MICRONS_PER_PIXEL,
            magnification: "40x".to_string(),
        }
    }
}

impl SlideConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SlideConfig =
            toml::from_str(s).map_err(|e| HistoscopeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(HistoscopeError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_rows, self.grid_cols
            )));
        }
        if self.microns_per_pixel <= 0.0 {
            return Err(HistoscopeError::InvalidConfig(format!(
                "microns_per_pixel must be positive, got {}",
                self.microns_per_pixel
            )));
        }
        Ok(())
    }
}
