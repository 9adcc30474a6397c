use std::path::PathBuf;

use histoscope_core::config::SlideConfig;
use image::RgbaImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Open a slide image, picking up a sibling `histoscope.toml` if
    /// one exists.
    OpenSlide { path: PathBuf },

    /// Fetch the patch for a grid cell. `seq` ties the result back to
    /// the selection that requested it.
    FetchPatch { seq: u64, row: u32, col: u32 },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    SlideOpened {
        path: PathBuf,
        config: SlideConfig,
        image: RgbaImage,
    },

    /// Patch fetch resolved. `image` is the decoded tile if the
    /// reference pointed at readable data; `None` degrades to the
    /// placeholder rendering.
    PatchReady {
        seq: u64,
        url: String,
        image: Option<RgbaImage>,
    },

    /// Patch fetch rejected; the selection falls back to the
    /// placeholder reference.
    PatchFailed { seq: u64, message: String },

    Error { message: String },
    Log { message: String },
}
