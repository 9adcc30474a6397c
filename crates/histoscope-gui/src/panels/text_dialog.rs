use crate::app::HistoscopeApp;

/// Modal input for a pending text annotation. Replaces a blocking
/// prompt: the placement point stays pending until the user submits
/// or cancels, and an empty submission places nothing.
pub fn show(ctx: &egui::Context, app: &mut HistoscopeApp) {
    if app.session.annotations().pending_text().is_none() {
        if !app.ui_state.text_input.is_empty() {
            app.ui_state.text_input.clear();
        }
        return;
    }

    egui::Window::new("Text Annotation")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let edit = ui.text_edit_singleline(&mut app.ui_state.text_input);
            edit.request_focus();

            let submitted =
                edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("Add").clicked() || submitted {
                    let content = app.ui_state.text_input.trim().to_string();
                    app.session.submit_text(&content);
                    app.ui_state.text_input.clear();
                }
                if ui.button("Cancel").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    app.session.cancel_text();
                    app.ui_state.text_input.clear();
                }
            });
        });
}
