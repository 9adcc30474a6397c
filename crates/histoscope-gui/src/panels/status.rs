use crate::app::HistoscopeApp;

pub fn show(ctx: &egui::Context, app: &mut HistoscopeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 3 empty lines to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(&app.session.config().display_name);
            ui.separator();
            ui.label(format!("Zoom: {}%", app.session.viewport().zoom_percent));
            ui.separator();
            ui.label(format!(
                "Rotation: {}°",
                app.session.viewport().rotation_normalized()
            ));
            ui.separator();
            ui.label(format!(
                "{} annotation(s), {} measurement(s)",
                app.session.annotations().annotations().len(),
                app.session.measurements().measurements().len()
            ));
        });

        ui.add_space(2.0);
    });
}
