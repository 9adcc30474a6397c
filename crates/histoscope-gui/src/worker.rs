use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Context;
use histoscope_core::config::SlideConfig;
use histoscope_core::patch::{LocalPatchSource, PatchSource};
use image::RgbaImage;
use tracing::info;

use crate::messages::{WorkerCommand, WorkerResult};

/// Slide context living on the worker thread.
struct WorkerState {
    source: LocalPatchSource,
    /// Directory the patch paths resolve against (the slide's folder).
    slide_dir: Option<PathBuf>,
}

impl WorkerState {
    fn new() -> Self {
        Self {
            source: LocalPatchSource::new(&SlideConfig::default()),
            slide_dir: None,
        }
    }
}

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("histoscope-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut state = WorkerState::new();

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::OpenSlide { path } => handle_open_slide(&mut state, path, &result_tx, &ctx),
            WorkerCommand::FetchPatch { seq, row, col } => {
                handle_fetch_patch(&state, seq, row, col, &result_tx, &ctx)
            }
        }
    }
}

fn handle_open_slide(
    state: &mut WorkerState,
    path: PathBuf,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let config = sibling_config(&path, tx, ctx);

    match decode_image(&path) {
        Ok(image) => {
            info!(path = %path.display(), "slide opened");
            state.slide_dir = path.parent().map(Path::to_path_buf);
            state.source = LocalPatchSource::new(&config);
            send(
                tx,
                ctx,
                WorkerResult::SlideOpened {
                    path,
                    config,
                    image,
                },
            );
        }
        Err(err) => send(
            tx,
            ctx,
            WorkerResult::Error {
                message: format!("{err:#}"),
            },
        ),
    }
}

/// Load `histoscope.toml` next to the slide, falling back to defaults.
/// A malformed config is reported but never blocks opening the slide.
fn sibling_config(
    slide_path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) -> SlideConfig {
    let Some(config_path) = slide_path.parent().map(|d| d.join("histoscope.toml")) else {
        return SlideConfig::default();
    };
    if !config_path.exists() {
        return SlideConfig::default();
    }

    match SlideConfig::load(&config_path) {
        Ok(config) => {
            send(
                tx,
                ctx,
                WorkerResult::Log {
                    message: format!("Loaded config: {}", config_path.display()),
                },
            );
            config
        }
        Err(err) => {
            send(
                tx,
                ctx,
                WorkerResult::Log {
                    message: format!("Ignoring bad config {}: {err}", config_path.display()),
                },
            );
            SlideConfig::default()
        }
    }
}

fn handle_fetch_patch(
    state: &WorkerState,
    seq: u64,
    row: u32,
    col: u32,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match state.source.fetch(row, col) {
        Ok(url) => {
            // The reference scheme is rooted at the slide's directory;
            // a missing or unreadable tile is "no data", not an error.
            let image = state
                .slide_dir
                .as_ref()
                .map(|dir| dir.join(url.trim_start_matches('/')))
                .and_then(|p| decode_image(&p).ok());
            send(tx, ctx, WorkerResult::PatchReady { seq, url, image });
        }
        Err(err) => send(
            tx,
            ctx,
            WorkerResult::PatchFailed {
                seq,
                message: err.to_string(),
            },
        ),
    }
}

fn decode_image(path: &Path) -> anyhow::Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("decoding {}", path.display()))?;
    Ok(img.to_rgba8())
}
