use crate::consts::{MAX_PAN, NAVIGATOR_MIN_RECT_HEIGHT, NAVIGATOR_MIN_RECT_WIDTH};
use crate::geom::{Offset, Point, Size};

/// Viewport rectangle in navigator thumbnail coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Derive the visible-region rectangle from the main viewport's zoom
/// and pan. The rectangle shrinks with the inverse zoom; pan is
/// normalized against the shared maximum-pan bound so the navigator
/// and the drag gesture stay dimensionally consistent.
pub fn view_rect(zoom_percent: u32, pan: Offset, thumbnail: Size) -> ViewRect {
    let inverse = 100.0 / zoom_percent as f32;
    let width = thumbnail.width * inverse;
    let height = thumbnail.height * inverse;

    let norm_x = pan.x / MAX_PAN * (thumbnail.width / 2.0);
    let norm_y = pan.y / MAX_PAN * (thumbnail.height / 2.0);

    let x = (thumbnail.width - width) / 2.0 - norm_x;
    let y = (thumbnail.height - height) / 2.0 - norm_y;

    ViewRect {
        x: x.min(thumbnail.width - width).max(0.0),
        y: y.min(thumbnail.height - height).max(0.0),
        width: width.max(NAVIGATOR_MIN_RECT_WIDTH),
        height: height.max(NAVIGATOR_MIN_RECT_HEIGHT),
    }
}

/// Pan offset that centers the main view on the clicked thumbnail
/// point. The caller feeds this through the same pan setter the drag
/// gesture uses; the navigator holds no state of its own.
pub fn click_to_pan(click: Point, thumbnail: Size) -> Offset {
    let center_x = thumbnail.width / 2.0;
    let center_y = thumbnail.height / 2.0;

    Offset::new(
        (center_x - click.x) / center_x * MAX_PAN,
        (center_y - click.y) / center_y * MAX_PAN,
    )
}
