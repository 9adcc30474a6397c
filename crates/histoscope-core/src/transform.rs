use crate::geom::Point;

/// Linear scale factor for a zoom slider value (100% -> 1.0).
pub fn scale_factor(zoom_percent: u32) -> f32 {
    zoom_percent as f32 / 100.0
}

/// Map a pointer position in screen coordinates to slide-space
/// coordinates, given the on-screen origin of the rendered slide and
/// the current zoom.
///
/// Rotation is intentionally not part of this mapping: annotations and
/// measurements are recorded in the unrotated slide frame, and the
/// overlay is painted in that same frame while only the image itself
/// rotates.
pub fn to_slide_space(screen: Point, origin: Point, zoom_percent: u32) -> Point {
    let scale = scale_factor(zoom_percent);
    Point::new((screen.x - origin.x) / scale, (screen.y - origin.y) / scale)
}

/// Inverse of [`to_slide_space`], used when painting stored shapes.
pub fn to_screen_space(slide: Point, origin: Point, zoom_percent: u32) -> Point {
    let scale = scale_factor(zoom_percent);
    Point::new(slide.x * scale + origin.x, slide.y * scale + origin.y)
}
