use approx::assert_relative_eq;
use histoscope_core::geom::Point;
use histoscope_core::transform::{scale_factor, to_screen_space, to_slide_space};

#[test]
fn test_scale_factor_is_linear_in_percent() {
    assert_relative_eq!(scale_factor(100), 1.0);
    assert_relative_eq!(scale_factor(25), 0.25);
    assert_relative_eq!(scale_factor(400), 4.0);
}

#[test]
fn test_identity_at_100_percent_with_zero_origin() {
    let p = to_slide_space(Point::new(42.0, 17.0), Point::new(0.0, 0.0), 100);
    assert_relative_eq!(p.x, 42.0);
    assert_relative_eq!(p.y, 17.0);
}

#[test]
fn test_origin_is_subtracted_before_scaling() {
    let p = to_slide_space(Point::new(150.0, 220.0), Point::new(100.0, 200.0), 100);
    assert_relative_eq!(p.x, 50.0);
    assert_relative_eq!(p.y, 20.0);
}

#[test]
fn test_zoom_divides_screen_distances() {
    // At 200%, a 100 px screen offset is 50 slide px.
    let p = to_slide_space(Point::new(100.0, 0.0), Point::new(0.0, 0.0), 200);
    assert_relative_eq!(p.x, 50.0);
    assert_relative_eq!(p.y, 0.0);
}

#[test]
fn test_round_trip_screen_slide_screen() {
    let origin = Point::new(33.0, -12.0);
    let screen = Point::new(410.5, 266.25);
    let slide = to_slide_space(screen, origin, 175);
    let back = to_screen_space(slide, origin, 175);
    assert_relative_eq!(back.x, screen.x, epsilon = 1e-3);
    assert_relative_eq!(back.y, screen.y, epsilon = 1e-3);
}

#[test]
fn test_stable_under_repeated_calls() {
    let screen = Point::new(123.4, 567.8);
    let origin = Point::new(10.0, 20.0);
    let first = to_slide_space(screen, origin, 325);
    for _ in 0..10 {
        assert_eq!(to_slide_space(screen, origin, 325), first);
    }
}
