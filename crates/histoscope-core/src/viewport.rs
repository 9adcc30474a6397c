use crate::consts::{
    DEFAULT_ZOOM, MAX_PAN, PATCH_ZOOM_MAX, SLIDE_ZOOM_MAX, SLIDE_ZOOM_MIN, ZOOM_STEP,
};
use crate::geom::Offset;

/// What the main viewport is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Slide,
    /// A single selected patch fills the viewport. Allows a deeper
    /// zoom range; the grid toggle is hidden while active.
    PatchFullscreen,
}

impl ViewMode {
    /// Inclusive zoom bounds for this mode, in percent.
    pub fn zoom_range(&self) -> (u32, u32) {
        match self {
            ViewMode::Slide => (SLIDE_ZOOM_MIN, SLIDE_ZOOM_MAX),
            ViewMode::PatchFullscreen => (SLIDE_ZOOM_MIN, PATCH_ZOOM_MAX),
        }
    }
}

/// Zoom, rotation, and pan of the main viewport. Mutated only through
/// its operations; the session layer gates wheel zoom and panning on
/// the tool invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub zoom_percent: u32,
    /// Accumulates without bound; render consumers reduce mod 360.
    pub rotation_deg: i32,
    pub pan: Offset,
    pub mode: ViewMode,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom_percent: DEFAULT_ZOOM,
            rotation_deg: 0,
            pan: Offset::ZERO,
            mode: ViewMode::Slide,
        }
    }
}

impl ViewportState {
    /// Linear scale factor for rendering (100% -> 1.0).
    pub fn scale(&self) -> f32 {
        self.zoom_percent as f32 / 100.0
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom_percent < self.mode.zoom_range().1
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_percent > self.mode.zoom_range().0
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom_percent.saturating_add(ZOOM_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom_percent.saturating_sub(ZOOM_STEP));
    }

    /// Clamp into the current mode's range; out-of-range input is a
    /// clamp, never an error.
    pub fn set_zoom(&mut self, zoom_percent: u32) {
        let (min, max) = self.mode.zoom_range();
        self.zoom_percent = zoom_percent.clamp(min, max);
    }

    /// Step zoom from a scroll delta: positive delta zooms in.
    pub fn wheel_zoom(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.zoom_in();
        } else if delta_y < 0.0 {
            self.zoom_out();
        }
    }

    pub fn rotate_cw(&mut self) {
        self.rotation_deg += 90;
    }

    /// Rotation reduced into [0, 360) for rendering.
    pub fn rotation_normalized(&self) -> i32 {
        self.rotation_deg.rem_euclid(360)
    }

    /// Additive pan during a drag gesture, clamped per axis.
    pub fn pan_by(&mut self, delta: Offset) {
        self.set_pan(self.pan + delta);
    }

    /// Absolute pan (navigator click path), same clamp as dragging.
    pub fn set_pan(&mut self, pan: Offset) {
        self.pan = pan.clamped(MAX_PAN);
    }

    /// Switch modes, re-clamping zoom into the new range. Entering
    /// patch-fullscreen resets rotation to upright.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if mode == ViewMode::PatchFullscreen && self.mode != ViewMode::PatchFullscreen {
            self.rotation_deg = 0;
        }
        self.mode = mode;
        self.set_zoom(self.zoom_percent);
    }

    pub fn reset(&mut self) {
        *self = ViewportState::default();
    }
}
