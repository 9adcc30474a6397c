use histoscope_core::annotate::AnnotationTool;
use histoscope_core::config::SlideConfig;
use histoscope_core::error::HistoscopeError;
use histoscope_core::geom::{Offset, Point};
use histoscope_core::session::ViewportSession;
use histoscope_core::viewport::ViewMode;

fn session() -> ViewportSession {
    ViewportSession::new(SlideConfig::default())
}

// ---------------------------------------------------------------------------
// Tool mutual exclusion
// ---------------------------------------------------------------------------

#[test]
fn test_annotation_tool_cancels_armed_measurement() {
    let mut s = session();
    s.toggle_measurement();
    s.pointer_press(Point::new(10.0, 10.0)); // pending first point

    s.select_annotation_tool(Some(AnnotationTool::Circle));
    assert!(!s.measurements().is_active());
    assert_eq!(s.measurements().pending_start(), None);

    // The next press anchors a circle, not a measurement endpoint.
    s.pointer_press(Point::new(20.0, 20.0));
    s.pointer_move(Point::new(60.0, 20.0));
    assert!(s.pointer_release().is_some());
    assert!(s.measurements().measurements().is_empty());
    assert_eq!(s.annotations().annotations().len(), 1);
}

#[test]
fn test_measurement_toggle_disarms_annotation_tool() {
    let mut s = session();
    s.select_annotation_tool(Some(AnnotationTool::Rectangle));
    s.toggle_measurement();

    assert!(s.measurements().is_active());
    assert_eq!(s.annotations().active_tool(), None);
}

#[test]
fn test_measurement_toggle_off_keeps_annotation_idle() {
    let mut s = session();
    s.toggle_measurement();
    s.toggle_measurement();
    assert!(!s.tool_armed());
}

#[test]
fn test_at_most_one_tool_armed() {
    let mut s = session();
    s.select_annotation_tool(Some(AnnotationTool::Point));
    assert!(s.annotations().active_tool().is_some() && !s.measurements().is_active());

    s.toggle_measurement();
    assert!(s.annotations().active_tool().is_none() && s.measurements().is_active());
}

// ---------------------------------------------------------------------------
// Wheel zoom and pan gating
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_zoom_suppressed_while_tool_armed() {
    let mut s = session();
    s.select_annotation_tool(Some(AnnotationTool::Circle));
    s.wheel_zoom(10.0);
    assert_eq!(s.viewport().zoom_percent, 100);

    s.select_annotation_tool(None);
    s.wheel_zoom(10.0);
    assert_eq!(s.viewport().zoom_percent, 125);
}

#[test]
fn test_wheel_zoom_suppressed_while_measuring() {
    let mut s = session();
    s.toggle_measurement();
    s.wheel_zoom(-10.0);
    assert_eq!(s.viewport().zoom_percent, 100);
}

#[test]
fn test_pan_requires_zoom_above_100() {
    let mut s = session();
    assert!(!s.pan_by(Offset::new(10.0, 10.0)));
    assert_eq!(s.viewport().pan, Offset::ZERO);

    s.zoom_in();
    assert!(s.pan_by(Offset::new(10.0, 10.0)));
    assert_eq!(s.viewport().pan, Offset::new(10.0, 10.0));
}

#[test]
fn test_pan_suppressed_while_tool_armed() {
    let mut s = session();
    s.zoom_in();
    s.select_annotation_tool(Some(AnnotationTool::Rectangle));
    assert!(!s.pan_by(Offset::new(10.0, 10.0)));
}

#[test]
fn test_navigator_set_pan_bypasses_zoom_gate_but_clamps() {
    let mut s = session();
    s.set_pan(Offset::new(700.0, -700.0));
    assert_eq!(s.viewport().pan, Offset::new(500.0, -500.0));
}

// ---------------------------------------------------------------------------
// Patch selection and fullscreen
// ---------------------------------------------------------------------------

#[test]
fn test_fullscreen_requires_selection() {
    let mut s = session();
    assert!(matches!(
        s.enter_patch_fullscreen(),
        Err(HistoscopeError::NoPatchSelected)
    ));

    let req = s.select_cell(1, 2).unwrap();
    s.apply_fetch_result(req.seq, Ok("/p.jpg".into()));
    s.enter_patch_fullscreen().unwrap();
    assert_eq!(s.viewport().mode, ViewMode::PatchFullscreen);
}

#[test]
fn test_fullscreen_entry_resets_rotation() {
    let mut s = session();
    s.rotate_cw();
    let req = s.select_cell(0, 0).unwrap();
    s.apply_fetch_result(req.seq, Ok("/p.jpg".into()));
    s.enter_patch_fullscreen().unwrap();
    assert_eq!(s.viewport().rotation_deg, 0);
}

#[test]
fn test_clearing_selection_exits_fullscreen() {
    let mut s = session();
    let req = s.select_cell(0, 0).unwrap();
    s.apply_fetch_result(req.seq, Ok("/p.jpg".into()));
    s.enter_patch_fullscreen().unwrap();

    s.clear_selection();
    assert_eq!(s.viewport().mode, ViewMode::Slide);
    assert!(s.grid().selection().is_none());
}

#[test]
fn test_stale_fetch_routed_through_session() {
    let mut s = session();
    let first = s.select_cell(2, 1).unwrap();
    let second = s.select_cell(0, 0).unwrap();

    assert!(!s.apply_fetch_result(first.seq, Ok("/stale.jpg".into())));
    assert!(s.apply_fetch_result(second.seq, Ok("/fresh.jpg".into())));

    let sel = s.grid().selection().unwrap();
    assert_eq!((sel.row, sel.col), (0, 0));
    assert_eq!(sel.url.as_deref(), Some("/fresh.jpg"));
}

// ---------------------------------------------------------------------------
// Reset policy
// ---------------------------------------------------------------------------

#[test]
fn test_reset_restores_transform_and_clears_annotations() {
    let mut s = session();
    s.set_zoom(300);
    s.rotate_cw();
    s.pan_by(Offset::new(40.0, 40.0));
    s.select_annotation_tool(Some(AnnotationTool::Point));
    s.pointer_press(Point::new(1.0, 1.0));
    s.select_annotation_tool(None);
    let req = s.select_cell(1, 1).unwrap();
    s.apply_fetch_result(req.seq, Ok("/p.jpg".into()));

    s.reset();

    assert_eq!(s.viewport().zoom_percent, 100);
    assert_eq!(s.viewport().rotation_deg, 0);
    assert_eq!(s.viewport().pan, Offset::ZERO);
    assert!(s.grid().selection().is_none());
    assert!(s.annotations().annotations().is_empty());
}

#[test]
fn test_reset_keeps_measurements() {
    let mut s = session();
    s.toggle_measurement();
    s.pointer_press(Point::new(0.0, 0.0));
    s.pointer_press(Point::new(100.0, 0.0));
    s.toggle_measurement();

    s.reset();
    assert_eq!(s.measurements().measurements().len(), 1);
}

#[test]
fn test_measurement_formatting_uses_slide_scale() {
    let mut s = session();
    s.toggle_measurement();
    s.pointer_press(Point::new(0.0, 0.0));
    s.pointer_press(Point::new(100.0, 0.0));

    let m = &s.measurements().measurements()[0];
    assert_eq!(s.format_measurement(m), "25.0 µm");
}

#[test]
fn test_grid_dimensions_follow_config() {
    let config = SlideConfig {
        grid_rows: 10,
        grid_cols: 10,
        ..SlideConfig::default()
    };
    let mut s = ViewportSession::new(config);
    assert!(s.select_cell(9, 9).is_ok());
    assert!(s.select_cell(10, 0).is_err());
}
