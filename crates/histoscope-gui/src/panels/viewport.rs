use histoscope_core::annotate::AnnotationShape;
use histoscope_core::geom::{Offset, Point};
use histoscope_core::measure::measurement_hue;
use histoscope_core::transform;
use histoscope_core::viewport::ViewMode;

use crate::app::HistoscopeApp;
use crate::convert::hsl_color;

pub fn show(ctx: &egui::Context, app: &mut HistoscopeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        match app.session.viewport().mode {
            ViewMode::PatchFullscreen => show_patch_fullscreen(ui, app, rect),
            ViewMode::Slide => show_slide(ui, app, rect),
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

// ---------------------------------------------------------------------------
// Slide mode
// ---------------------------------------------------------------------------

fn show_slide(ui: &mut egui::Ui, app: &mut HistoscopeApp, rect: egui::Rect) {
    let Some(texture) = app.slide_texture.clone() else {
        show_placeholder(ui);
        return;
    };

    let image_size = egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32);
    let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

    handle_wheel_zoom(ui, &response, app);

    let img_rect = compute_img_rect(rect, image_size, app);

    if app.session.tool_armed() {
        handle_tool_input(ui, &response, app, img_rect);
    } else {
        handle_pan(&response, app);
    }

    draw_slide(ui, &texture, img_rect, app);

    if app.session.grid().visible {
        draw_grid(ui, &response, app, img_rect);
    }

    draw_annotations(ui, app, img_rect);
    draw_measurements(ui, app, img_rect);
    draw_zoom_badge(ui, rect, app);
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a slide image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

/// Wheel zoom steps the slider; suppressed by the session while a
/// placement or measurement tool is armed so scrolling never fights
/// drawing.
fn handle_wheel_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut HistoscopeApp) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta != 0.0 && response.hovered() {
        app.session.wheel_zoom(scroll_delta);
    }
}

fn handle_pan(response: &egui::Response, app: &mut HistoscopeApp) {
    if response.dragged_by(egui::PointerButton::Primary) {
        let d = response.drag_delta();
        app.session.pan_by(Offset::new(d.x, d.y));
    }
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &HistoscopeApp) -> egui::Rect {
    let scaled = image_size * app.session.viewport().scale();
    let pan = app.session.viewport().pan;
    let center = rect.center() + egui::vec2(pan.x, pan.y);
    egui::Rect::from_center_size(center, scaled)
}

/// Feed pointer events to the armed tool in slide-space coordinates.
/// The overlay frame is the unrotated image rect, so shapes stay in
/// unrotated slide space while the image itself rotates.
fn handle_tool_input(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut HistoscopeApp,
    img_rect: egui::Rect,
) {
    let zoom = app.session.viewport().zoom_percent;
    let origin = Point::new(img_rect.left(), img_rect.top());

    let (pressed, down, released, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });

    if let Some(pos) = pos {
        let slide_pos = transform::to_slide_space(Point::new(pos.x, pos.y), origin, zoom);
        if pressed && response.hovered() {
            app.session.pointer_press(slide_pos);
        } else if down {
            app.session.pointer_move(slide_pos);
        }
    }
    if released {
        app.session.pointer_release();
    }
}

fn draw_slide(
    ui: &egui::Ui,
    texture: &egui::TextureHandle,
    img_rect: egui::Rect,
    app: &HistoscopeApp,
) {
    let rotation = app.session.viewport().rotation_normalized();
    let sized = egui::load::SizedTexture::new(texture.id(), img_rect.size());
    let image = egui::Image::from_texture(sized);

    if rotation == 0 {
        image.paint_at(ui, img_rect);
    } else {
        image
            .rotate((rotation as f32).to_radians(), egui::Vec2::splat(0.5))
            .paint_at(ui, img_rect);
    }
}

// ---------------------------------------------------------------------------
// Grid overlay
// ---------------------------------------------------------------------------

fn draw_grid(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut HistoscopeApp,
    img_rect: egui::Rect,
) {
    let rows = app.session.grid().rows();
    let cols = app.session.grid().cols();
    let cell = egui::vec2(
        img_rect.width() / cols as f32,
        img_rect.height() / rows as f32,
    );
    let selected = app
        .session
        .grid()
        .selection()
        .map(|s| (s.row, s.col));

    let painter = ui.painter();
    let accent = ui.visuals().selection.bg_fill;

    for row in 0..rows {
        for col in 0..cols {
            let min = img_rect.min + egui::vec2(col as f32 * cell.x, row as f32 * cell.y);
            let cell_rect = egui::Rect::from_min_size(min, cell);

            if selected == Some((row, col)) {
                painter.rect_filled(cell_rect, 0.0, accent.linear_multiply(0.35));
                painter.rect_stroke(
                    cell_rect,
                    0.0,
                    egui::Stroke::new(2.0, accent),
                    egui::StrokeKind::Middle,
                );
            } else {
                painter.rect_stroke(
                    cell_rect,
                    0.0,
                    egui::Stroke::new(1.0, egui::Color32::from_black_alpha(80)),
                    egui::StrokeKind::Middle,
                );
            }
        }
    }

    // Cell clicks select a patch; tools take priority over the grid.
    if response.clicked() && !app.session.tool_armed() {
        if let Some(pos) = response.interact_pointer_pos() {
            if img_rect.contains(pos) {
                let col = ((pos.x - img_rect.left()) / cell.x) as u32;
                let row = ((pos.y - img_rect.top()) / cell.y) as u32;
                app.select_cell(row.min(rows - 1), col.min(cols - 1));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Annotation and measurement overlays
// ---------------------------------------------------------------------------

fn to_screen(p: Point, img_rect: egui::Rect, zoom: u32) -> egui::Pos2 {
    let origin = Point::new(img_rect.left(), img_rect.top());
    let s = transform::to_screen_space(p, origin, zoom);
    egui::pos2(s.x, s.y)
}

fn draw_annotations(ui: &egui::Ui, app: &HistoscopeApp, img_rect: egui::Rect) {
    if !app.session.annotations().is_visible() {
        return;
    }

    let zoom = app.session.viewport().zoom_percent;
    let scale = app.session.viewport().scale();

    for a in app.session.annotations().annotations() {
        let rgb = a.color.rgb();
        let color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        draw_shape(ui, &a.shape, to_screen(a.origin, img_rect, zoom), scale, color);
    }

    // Shape under the pointer, not yet committed.
    if let Some((origin, shape)) = app.session.annotations().in_progress() {
        let rgb = app.session.annotations().color().rgb();
        let color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]).gamma_multiply(0.6);
        draw_shape(ui, &shape, to_screen(origin, img_rect, zoom), scale, color);
    }
}

fn draw_shape(
    ui: &egui::Ui,
    shape: &AnnotationShape,
    pos: egui::Pos2,
    scale: f32,
    color: egui::Color32,
) {
    let painter = ui.painter();
    let fill = color.gamma_multiply(0.15);
    let stroke = egui::Stroke::new(2.0, color);

    match shape {
        AnnotationShape::Point => {
            painter.circle_filled(pos, 5.0, fill);
            painter.circle_stroke(pos, 5.0, stroke);
        }
        AnnotationShape::Circle { radius } => {
            let r = radius * scale;
            painter.circle_filled(pos, r, fill);
            painter.circle_stroke(pos, r, stroke);
        }
        AnnotationShape::Rectangle { width, height } => {
            let rect =
                egui::Rect::from_min_size(pos, egui::vec2(width * scale, height * scale));
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Middle);
        }
        AnnotationShape::Text { content } => {
            let galley = painter.layout_no_wrap(
                content.clone(),
                egui::FontId::proportional(13.0),
                color,
            );
            let bg = egui::Rect::from_min_size(pos, galley.size()).expand(3.0);
            painter.rect_filled(bg, 3.0, egui::Color32::from_black_alpha(160));
            painter.rect_stroke(bg, 3.0, egui::Stroke::new(1.0, color), egui::StrokeKind::Middle);
            painter.galley(pos, galley, color);
        }
    }
}

fn draw_measurements(ui: &egui::Ui, app: &HistoscopeApp, img_rect: egui::Rect) {
    if !app.session.annotations().is_visible() {
        return;
    }

    let zoom = app.session.viewport().zoom_percent;
    let painter = ui.painter();

    for (index, m) in app.session.measurements().measurements().iter().enumerate() {
        let color = hsl_color(measurement_hue(index));
        let start = to_screen(m.start, img_rect, zoom);
        let end = to_screen(m.end, img_rect, zoom);

        painter.extend(egui::Shape::dashed_line(
            &[start, end],
            egui::Stroke::new(2.0, color),
            4.0,
            2.0,
        ));
        for endpoint in [start, end] {
            painter.circle_filled(endpoint, 4.0, color);
            painter.circle_stroke(endpoint, 4.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
        }

        let label = app.session.format_measurement(m);
        let mid = egui::pos2((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        let galley = painter.layout_no_wrap(label, egui::FontId::proportional(11.0), color);
        let bg = egui::Rect::from_center_size(mid, galley.size()).expand(4.0);
        painter.rect_filled(bg, 4.0, egui::Color32::from_black_alpha(200));
        painter.rect_stroke(bg, 4.0, egui::Stroke::new(1.0, color), egui::StrokeKind::Middle);
        painter.galley(bg.min + egui::vec2(4.0, 4.0), galley, color);
    }

    // First click of an in-progress measurement.
    if let Some(start) = app.session.measurements().pending_start() {
        let pos = to_screen(start, img_rect, zoom);
        let next = hsl_color(measurement_hue(
            app.session.measurements().measurements().len(),
        ));
        painter.circle_filled(pos, 4.0, next);
        painter.circle_stroke(pos, 4.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
    }
}

fn draw_zoom_badge(ui: &egui::Ui, rect: egui::Rect, app: &HistoscopeApp) {
    let painter = ui.painter();
    let text = format!("Zoom Level  {}%", app.session.viewport().zoom_percent);
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(220),
    );
    let bg = egui::Rect::from_min_size(rect.left_top() + egui::vec2(12.0, 12.0), galley.size())
        .expand(6.0);
    painter.rect_filled(bg, 6.0, egui::Color32::from_black_alpha(160));
    painter.galley(bg.min + egui::vec2(6.0, 6.0), galley, egui::Color32::WHITE);
}

// ---------------------------------------------------------------------------
// Patch-fullscreen mode
// ---------------------------------------------------------------------------

fn show_patch_fullscreen(ui: &mut egui::Ui, app: &mut HistoscopeApp, rect: egui::Rect) {
    let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

    handle_wheel_zoom(ui, &response, app);
    handle_pan(&response, app);

    if let Some(texture) = app.patch_texture.clone() {
        let size = egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32);
        let img_rect = compute_img_rect(rect, size, app);
        egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), img_rect.size()))
            .paint_at(ui, img_rect);
    } else {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No tissue data for this region",
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(120),
        );
    }

    draw_zoom_badge(ui, rect, app);

    // Close control returns to the slide view.
    let close_rect = egui::Rect::from_min_size(
        rect.right_top() + egui::vec2(-44.0, 12.0),
        egui::vec2(32.0, 32.0),
    );
    if ui.put(close_rect, egui::Button::new("✕")).clicked() {
        app.session.exit_patch_fullscreen();
    }
}
