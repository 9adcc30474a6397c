use approx::assert_relative_eq;
use histoscope_core::geom::{Offset, Point, Size};
use histoscope_core::navigator::{click_to_pan, view_rect};

const THUMB: Size = Size::new(150.0, 100.0);

// ---------------------------------------------------------------------------
// Viewport rectangle
// ---------------------------------------------------------------------------

#[test]
fn test_rect_at_100_percent_covers_thumbnail() {
    let r = view_rect(100, Offset::ZERO, THUMB);
    assert_relative_eq!(r.x, 0.0);
    assert_relative_eq!(r.y, 0.0);
    assert_relative_eq!(r.width, 150.0);
    assert_relative_eq!(r.height, 100.0);
}

#[test]
fn test_rect_shrinks_with_inverse_zoom() {
    let r = view_rect(200, Offset::ZERO, THUMB);
    assert_relative_eq!(r.width, 75.0);
    assert_relative_eq!(r.height, 50.0);
    // Centered when pan is zero.
    assert_relative_eq!(r.x, 37.5);
    assert_relative_eq!(r.y, 25.0);
}

#[test]
fn test_positive_pan_moves_rect_toward_origin() {
    let centered = view_rect(200, Offset::ZERO, THUMB);
    let panned = view_rect(200, Offset::new(100.0, 0.0), THUMB);
    // pan 100 of 500 max -> shifted by a fifth of the half-width.
    assert_relative_eq!(panned.x, centered.x - 15.0);
    assert_relative_eq!(panned.y, centered.y);
}

#[test]
fn test_rect_clamped_inside_thumbnail() {
    let r = view_rect(200, Offset::new(500.0, 500.0), THUMB);
    assert!(r.x >= 0.0);
    assert!(r.y >= 0.0);

    let r = view_rect(200, Offset::new(-500.0, -500.0), THUMB);
    assert!(r.x + 75.0 <= 150.0 + 1e-3);
    assert!(r.y + 50.0 <= 100.0 + 1e-3);
}

#[test]
fn test_rect_has_minimum_visible_size() {
    let r = view_rect(500, Offset::ZERO, THUMB);
    assert!(r.width >= 20.0);
    assert!(r.height >= 15.0);
}

// ---------------------------------------------------------------------------
// Click-to-recenter
// ---------------------------------------------------------------------------

#[test]
fn test_center_click_is_zero_pan() {
    let pan = click_to_pan(Point::new(75.0, 50.0), THUMB);
    assert_relative_eq!(pan.x, 0.0);
    assert_relative_eq!(pan.y, 0.0);
}

#[test]
fn test_corner_click_hits_max_pan() {
    let pan = click_to_pan(Point::new(0.0, 0.0), THUMB);
    assert_relative_eq!(pan.x, 500.0);
    assert_relative_eq!(pan.y, 500.0);

    let pan = click_to_pan(Point::new(150.0, 100.0), THUMB);
    assert_relative_eq!(pan.x, -500.0);
    assert_relative_eq!(pan.y, -500.0);
}

#[test]
fn test_click_pan_scales_linearly() {
    // Halfway between center and left edge.
    let pan = click_to_pan(Point::new(37.5, 50.0), THUMB);
    assert_relative_eq!(pan.x, 250.0);
    assert_relative_eq!(pan.y, 0.0);
}
