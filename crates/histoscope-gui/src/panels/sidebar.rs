use histoscope_core::annotate::{AnnotationColor, AnnotationShape, AnnotationTool};
use histoscope_core::geom::Size;
use histoscope_core::measure::measurement_hue;
use histoscope_core::navigator;
use histoscope_core::viewport::ViewMode;

use crate::app::HistoscopeApp;
use crate::convert::hsl_color;

pub fn show(ctx: &egui::Context, app: &mut HistoscopeApp) {
    egui::SidePanel::right("controls")
        .default_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                selected_region(ui, app);
                ui.separator();
                zoom_controls(ui, app);
                ui.separator();
                view_controls(ui, app);
                ui.separator();
                annotation_tools(ui, app);
                ui.separator();
                measurement_panel(ui, app);
                ui.separator();
                navigator_panel(ui, app);
            });
        });
}

// ---------------------------------------------------------------------------
// Selected region card
// ---------------------------------------------------------------------------

fn selected_region(ui: &mut egui::Ui, app: &mut HistoscopeApp) {
    let Some((row, col, has_url)) = app
        .session
        .grid()
        .selection()
        .map(|s| (s.row, s.col, s.url.is_some()))
    else {
        return;
    };

    ui.horizontal(|ui| {
        ui.strong("Selected Region");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").clicked() {
                app.session.clear_selection();
                app.patch_texture = None;
            }
        });
    });
    ui.label(format!("Row {row}, Column {col}"));

    if app.session.grid().is_loading() {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label("Loading patch...");
        });
    } else if let Some(texture) = &app.patch_texture {
        let size = egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32);
        let width = ui.available_width().min(260.0);
        let scaled = egui::vec2(width, width * size.y / size.x.max(1.0));
        ui.add(
            egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), scaled))
                .corner_radius(4.0),
        );
    } else if has_url {
        ui.label(egui::RichText::new("No tissue data").color(egui::Color32::from_gray(120)));
    }

    let in_fullscreen = app.session.viewport().mode == ViewMode::PatchFullscreen;
    let label = if in_fullscreen {
        "Exit Fullscreen"
    } else {
        "View Fullscreen"
    };
    if ui.button(label).clicked() {
        if in_fullscreen {
            app.session.exit_patch_fullscreen();
        } else if let Err(err) = app.session.enter_patch_fullscreen() {
            app.ui_state.add_log(format!("Error: {err}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Zoom and view controls
// ---------------------------------------------------------------------------

fn zoom_controls(ui: &mut egui::Ui, app: &mut HistoscopeApp) {
    ui.strong("Zoom");
    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.session.viewport().can_zoom_out(), egui::Button::new("−"))
            .clicked()
        {
            app.session.zoom_out();
        }

        let (min, max) = app.session.viewport().mode.zoom_range();
        let mut zoom = app.session.viewport().zoom_percent;
        let slider = egui::Slider::new(&mut zoom, min..=max)
            .step_by(25.0)
            .suffix("%");
        if ui.add(slider).changed() {
            app.session.set_zoom(zoom);
        }

        if ui
            .add_enabled(app.session.viewport().can_zoom_in(), egui::Button::new("+"))
            .clicked()
        {
            app.session.zoom_in();
        }
    });
}

fn view_controls(ui: &mut egui::Ui, app: &mut HistoscopeApp) {
    ui.strong("View");
    ui.horizontal(|ui| {
        if ui.button("Rotate 90°").clicked() {
            app.session.rotate_cw();
        }
        if ui.button("Reset View").clicked() {
            app.session.reset();
            app.patch_texture = None;
            app.ui_state.add_log("View reset".to_string());
        }
    });

    // Grid has no meaning over a single fullscreen patch.
    if app.session.viewport().mode != ViewMode::PatchFullscreen {
        let label = if app.session.grid().visible {
            "Hide Grid"
        } else {
            "Show Grid"
        };
        if ui.button(label).clicked() {
            app.session.toggle_grid();
        }
    }
}

// ---------------------------------------------------------------------------
// Annotations
// ---------------------------------------------------------------------------

fn annotation_tools(ui: &mut egui::Ui, app: &mut HistoscopeApp) {
    ui.horizontal(|ui| {
        ui.strong("Annotations");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.session.annotations().is_visible() {
                "Hide"
            } else {
                "Show"
            };
            if ui.small_button(label).clicked() {
                app.session.toggle_annotation_visibility();
            }
        });
    });

    let active = app.session.annotations().active_tool();
    ui.horizontal_wrapped(|ui| {
        for (tool, label) in [
            (AnnotationTool::Point, "Point"),
            (AnnotationTool::Circle, "Circle"),
            (AnnotationTool::Rectangle, "Rectangle"),
            (AnnotationTool::Text, "Text"),
        ] {
            if ui.selectable_label(active == Some(tool), label).clicked() {
                app.session.select_annotation_tool(Some(tool));
            }
        }
    });

    let selected_color = app.session.annotations().color();
    ui.horizontal(|ui| {
        for &color in AnnotationColor::ALL {
            let rgb = color.rgb();
            let fill = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
            let stroke = if color == selected_color {
                egui::Stroke::new(2.0, ui.visuals().strong_text_color())
            } else {
                egui::Stroke::NONE
            };
            let swatch = egui::Button::new("    ").fill(fill).stroke(stroke);
            if ui.add(swatch).clicked() {
                app.session.set_annotation_color(color);
            }
        }
    });

    if active.is_some() {
        ui.small("Click or drag on the slide to place an annotation");
    }

    let count = app.session.annotations().annotations().len();
    ui.horizontal(|ui| {
        ui.label(format!("{count} annotation(s)"));
        if count > 0 && ui.small_button("Clear").clicked() {
            app.session.clear_annotations();
        }
    });

    let mut delete = None;
    for a in app.session.annotations().annotations() {
        let rgb = a.color.rgb();
        let dot = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        let id = a.id;
        let summary = shape_summary(&a.shape);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("●").color(dot));
            ui.label(summary);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    delete = Some(id);
                }
            });
        });
    }
    if let Some(id) = delete {
        app.session.delete_annotation(id);
    }
}

fn shape_summary(shape: &AnnotationShape) -> String {
    match shape {
        AnnotationShape::Point => "Point".to_string(),
        AnnotationShape::Circle { radius } => format!("Circle, r = {radius:.0} px"),
        AnnotationShape::Rectangle { width, height } => {
            format!("Rectangle, {width:.0} × {height:.0} px")
        }
        AnnotationShape::Text { content } => format!("\"{content}\""),
    }
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

fn measurement_panel(ui: &mut egui::Ui, app: &mut HistoscopeApp) {
    ui.strong("Measurement");

    let active = app.session.measurements().is_active();
    let label = if active { "Measuring..." } else { "Measure" };
    if ui.selectable_label(active, label).clicked() {
        app.session.toggle_measurement();
    }
    if active {
        ui.small("Click two points on the slide to measure distance");
    }

    let measurements = app.session.measurements().measurements();
    if measurements.is_empty() {
        ui.small("No measurements yet");
    } else {
        for (index, m) in measurements.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("●").color(hsl_color(measurement_hue(index))),
                );
                ui.label(format!("#{}", index + 1));
                ui.label(app.session.format_measurement(m));
            });
        }
        if ui.small_button("Clear All").clicked() {
            app.session.clear_measurements();
        }
    }

    ui.small(format!(
        "Scale: {} µm/px  ·  {}",
        app.session.config().microns_per_pixel,
        app.session.config().magnification
    ));
}

// ---------------------------------------------------------------------------
// Navigator thumbnail
// ---------------------------------------------------------------------------

fn navigator_panel(ui: &mut egui::Ui, app: &mut HistoscopeApp) {
    ui.strong("Navigator");

    let Some(texture) = app.slide_texture.clone() else {
        ui.small("Open a slide to navigate");
        return;
    };

    let tex_size = egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32);
    let width = ui.available_width().min(260.0);
    let thumb = egui::vec2(width, width * tex_size.y / tex_size.x.max(1.0));

    let (response, painter) = ui.allocate_painter(thumb, egui::Sense::click());
    let rect = response.rect;

    painter.image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    let view = navigator::view_rect(
        app.session.viewport().zoom_percent,
        app.session.viewport().pan,
        Size::new(rect.width(), rect.height()),
    );
    let view_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(view.x, view.y),
        egui::vec2(view.width, view.height),
    );
    let accent = ui.visuals().selection.bg_fill;
    painter.rect_filled(view_rect, 0.0, accent.linear_multiply(0.25));
    painter.rect_stroke(
        view_rect,
        0.0,
        egui::Stroke::new(2.0, accent),
        egui::StrokeKind::Middle,
    );
    painter.text(
        rect.left_bottom() + egui::vec2(4.0, -4.0),
        egui::Align2::LEFT_BOTTOM,
        format!("{}%", app.session.viewport().zoom_percent),
        egui::FontId::proportional(11.0),
        egui::Color32::WHITE,
    );

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let click = histoscope_core::geom::Point::new(pos.x - rect.left(), pos.y - rect.top());
            let pan = navigator::click_to_pan(click, Size::new(rect.width(), rect.height()));
            app.session.set_pan(pan);
        }
    }
    ui.small("Click to navigate");
}
