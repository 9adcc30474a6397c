use std::time::Duration;

use tracing::debug;

use crate::config::SlideConfig;
use crate::consts::LOCAL_FETCH_LATENCY_MS;
use crate::error::{HistoscopeError, Result};

/// Produces a fetchable reference for a grid cell's high-resolution
/// patch. Implementations run on the worker thread; the async boundary
/// is the channel between worker and UI, so the trait itself is
/// synchronous. A failure is "no data", never fatal — the consumer
/// substitutes a placeholder.
pub trait PatchSource: Send {
    fn fetch(&self, row: u32, col: u32) -> Result<String>;
}

/// Stub source that builds a local path of the form
/// `/slides/{slide_id}/patches/Tile_R{row}_C{col}{ext}` and simulates
/// network latency. A production source (HTTP, object store) replaces
/// this without touching the consumer.
pub struct LocalPatchSource {
    slide_id: String,
    extension: String,
    rows: u32,
    cols: u32,
    latency: Duration,
}

impl LocalPatchSource {
    pub fn new(config: &SlideConfig) -> Self {
        Self {
            slide_id: config.slide_id.clone(),
            extension: config.patch_extension.clone(),
            rows: config.grid_rows,
            cols: config.grid_cols,
            latency: Duration::from_millis(LOCAL_FETCH_LATENCY_MS),
        }
    }

    /// Zero-latency variant for tests.
    pub fn with_latency(config: &SlideConfig, latency: Duration) -> Self {
        Self {
            latency,
            ..Self::new(config)
        }
    }

    pub fn patch_path(&self, row: u32, col: u32) -> String {
        format!(
            "/slides/{}/patches/Tile_R{}_C{}{}",
            self.slide_id, row, col, self.extension
        )
    }
}

impl PatchSource for LocalPatchSource {
    fn fetch(&self, row: u32, col: u32) -> Result<String> {
        if row >= self.rows || col >= self.cols {
            return Err(HistoscopeError::PatchOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let url = self.patch_path(row, col);
        debug!(%url, "fetching patch");

        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        Ok(url)
    }
}
