use std::path::PathBuf;
use std::sync::mpsc;

use histoscope_core::config::SlideConfig;
use histoscope_core::error::HistoscopeError;
use histoscope_core::session::ViewportSession;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::worker;

/// Shell-only UI state (everything with interaction semantics lives in
/// the core session).
#[derive(Default)]
pub struct UiState {
    pub log_messages: Vec<String>,
    /// Buffer for the pending text-annotation dialog.
    pub text_input: String,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

pub struct HistoscopeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: ViewportSession,
    pub ui_state: UiState,
    pub show_about: bool,

    pub slide_path: Option<PathBuf>,
    pub slide_texture: Option<egui::TextureHandle>,
    /// Decoded tile for the current selection, if any.
    pub patch_texture: Option<egui::TextureHandle>,
}

impl HistoscopeApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            session: ViewportSession::new(SlideConfig::default()),
            ui_state: UiState::default(),
            show_about: false,
            slide_path: None,
            slide_texture: None,
            patch_texture: None,
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Select a grid cell and kick off its patch fetch.
    pub fn select_cell(&mut self, row: u32, col: u32) {
        match self.session.select_cell(row, col) {
            Ok(req) => {
                self.patch_texture = None;
                self.send_command(WorkerCommand::FetchPatch {
                    seq: req.seq,
                    row: req.row,
                    col: req.col,
                });
            }
            Err(err) => self.ui_state.add_log(format!("ERROR: {err}")),
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::SlideOpened {
                    path,
                    config,
                    image,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}, grid {}x{})",
                        path.display(),
                        image.width(),
                        image.height(),
                        config.grid_rows,
                        config.grid_cols
                    ));
                    self.session = ViewportSession::new(config);
                    self.patch_texture = None;
                    self.slide_texture = Some(ctx.load_texture(
                        "slide",
                        rgba_to_color_image(&image),
                        egui::TextureOptions::LINEAR,
                    ));
                    self.slide_path = Some(path);
                }
                WorkerResult::PatchReady { seq, url, image } => {
                    // The session drops stale results; only a result for
                    // the live selection touches the preview texture.
                    if self.session.apply_fetch_result(seq, Ok(url.clone())) {
                        self.patch_texture = image.map(|img| {
                            ctx.load_texture(
                                "patch",
                                rgba_to_color_image(&img),
                                egui::TextureOptions::LINEAR,
                            )
                        });
                        if self.patch_texture.is_none() {
                            self.ui_state.add_log(format!("No tile data at {url}"));
                        }
                    }
                }
                WorkerResult::PatchFailed { seq, message } => {
                    let applied = self
                        .session
                        .apply_fetch_result(seq, Err(HistoscopeError::PatchUnavailable(message.clone())));
                    if applied {
                        self.patch_texture = None;
                        self.ui_state
                            .add_log(format!("Patch fetch failed: {message}"));
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }
}

impl eframe::App for HistoscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::text_dialog::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Histoscope")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Histoscope");
                        ui.label("Whole-Slide Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
