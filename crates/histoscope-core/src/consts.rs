/// Zoom step (in percent points) for the +/- buttons and wheel zoom.
pub const ZOOM_STEP: u32 = 25;

/// Zoom range while viewing the full slide.
pub const SLIDE_ZOOM_MIN: u32 = 25;
pub const SLIDE_ZOOM_MAX: u32 = 400;

/// Upper zoom bound while a patch is shown fullscreen.
pub const PATCH_ZOOM_MAX: u32 = 500;

/// Zoom after reset.
pub const DEFAULT_ZOOM: u32 = 100;

/// Maximum pan offset magnitude per axis, in screen pixels. The
/// navigator normalizes its viewport rectangle against the same bound.
pub const MAX_PAN: f32 = 500.0;

/// Default grid overlay dimensions.
pub const DEFAULT_GRID_ROWS: u32 = 4;
pub const DEFAULT_GRID_COLS: u32 = 4;

/// Minimum extent (radius, or rectangle side) for a drag to commit as
/// an annotation. Anything smaller is treated as an accidental click.
pub const MIN_SHAPE_EXTENT: f32 = 5.0;

/// Physical scale at 40x optical magnification.
pub const DEFAULT_MICRONS_PER_PIXEL: f32 = 0.25;

/// Distances at or above this many micrometers display in millimeters.
pub const MM_DISPLAY_THRESHOLD_MICRONS: f32 = 1000.0;

/// Substitute patch reference when a fetch fails. The viewer renders
/// this instead of surfacing the failure.
pub const PLACEHOLDER_PATCH: &str = "https://placehold.co/400x400?text=No+Tissue+Data";

/// Hue step (degrees) between consecutive measurement display colors.
pub const MEASUREMENT_HUE_STEP: u32 = 60;

/// Minimum rendered size of the navigator viewport rectangle.
pub const NAVIGATOR_MIN_RECT_WIDTH: f32 = 20.0;
pub const NAVIGATOR_MIN_RECT_HEIGHT: f32 = 15.0;

/// Simulated latency for the stub local patch source, in milliseconds.
pub const LOCAL_FETCH_LATENCY_MS: u64 = 300;
