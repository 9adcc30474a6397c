use histoscope_core::viewport::ViewMode;

use crate::app::HistoscopeApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut HistoscopeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Slide...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_slide(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if app.session.viewport().mode != ViewMode::PatchFullscreen {
                    let label = if app.session.grid().visible {
                        "Hide Grid"
                    } else {
                        "Show Grid"
                    };
                    if ui.button(label).clicked() {
                        ui.close();
                        app.session.toggle_grid();
                    }
                }

                if ui.button("Rotate 90°").clicked() {
                    ui.close();
                    app.session.rotate_cw();
                }

                if ui.button("Reset View").clicked() {
                    ui.close();
                    app.session.reset();
                    app.patch_texture = None;
                    app.ui_state.add_log("View reset".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_slide(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_slide(app: &mut HistoscopeApp) {
    let cmd_tx = app.cmd_tx.clone();
    let start_dir = app
        .slide_path
        .as_ref()
        .and_then(|p| p.parent().map(std::path::Path::to_path_buf));
    std::thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Slide images", &["jpg", "jpeg", "png", "webp"])
            .add_filter("All files", &["*"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            let _ = cmd_tx.send(WorkerCommand::OpenSlide { path });
        }
    });
}
