use tracing::info;

use crate::annotate::{AnnotationColor, AnnotationId, AnnotationState, AnnotationTool};
use crate::config::SlideConfig;
use crate::error::{HistoscopeError, Result};
use crate::geom::{Offset, Point};
use crate::grid::{GridState, PatchRequest};
use crate::measure::{self, Measurement, MeasurementState};
use crate::viewport::{ViewMode, ViewportState};

/// The one aggregate owning all interaction state of a viewer
/// instance: viewport transform, grid selection, annotations, and
/// measurements. Cross-component invariants live here:
///
/// - at most one tool (annotation or measurement) is armed at a time;
/// - wheel zoom is suppressed while a tool is armed;
/// - drag panning requires zoom > 100% and no armed tool;
/// - a stale patch fetch never overwrites a newer selection;
/// - reset restores the default transform, drops the selected patch,
///   and clears annotations (but not measurements).
#[derive(Debug)]
pub struct ViewportSession {
    config: SlideConfig,
    viewport: ViewportState,
    grid: GridState,
    annotations: AnnotationState,
    measurements: MeasurementState,
}

impl ViewportSession {
    pub fn new(config: SlideConfig) -> Self {
        let grid = GridState::new(config.grid_rows, config.grid_cols);
        Self {
            config,
            viewport: ViewportState::default(),
            grid,
            annotations: AnnotationState::new(),
            measurements: MeasurementState::default(),
        }
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn annotations(&self) -> &AnnotationState {
        &self.annotations
    }

    pub fn measurements(&self) -> &MeasurementState {
        &self.measurements
    }

    /// True while any placement or measurement tool is armed; gates
    /// wheel zoom and panning so scroll/drag never fight drawing.
    pub fn tool_armed(&self) -> bool {
        self.annotations.active_tool().is_some() || self.measurements.is_active()
    }

    // ----- viewport operations -------------------------------------

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn set_zoom(&mut self, zoom_percent: u32) {
        self.viewport.set_zoom(zoom_percent);
    }

    pub fn wheel_zoom(&mut self, delta_y: f32) {
        if self.tool_armed() {
            return;
        }
        self.viewport.wheel_zoom(delta_y);
    }

    pub fn rotate_cw(&mut self) {
        self.viewport.rotate_cw();
    }

    /// Drag-gesture panning. Applies only above 100% zoom with no
    /// armed tool; returns whether the delta was applied.
    pub fn pan_by(&mut self, delta: Offset) -> bool {
        if self.viewport.zoom_percent <= 100 || self.tool_armed() {
            return false;
        }
        self.viewport.pan_by(delta);
        true
    }

    /// Navigator re-centering; same clamped setter the drag uses.
    pub fn set_pan(&mut self, pan: Offset) {
        self.viewport.set_pan(pan);
    }

    /// Restore the default transform, drop the selected patch (leaving
    /// patch-fullscreen if active), and clear annotations. Explicit
    /// policy: measurements survive a view reset.
    pub fn reset(&mut self) {
        info!("resetting viewer session");
        self.viewport.reset();
        self.grid.clear_selection();
        self.annotations.clear();
    }

    // ----- grid / patch operations ---------------------------------

    pub fn toggle_grid(&mut self) {
        self.grid.toggle();
    }

    pub fn select_cell(&mut self, row: u32, col: u32) -> Result<PatchRequest> {
        self.grid.select_cell(row, col)
    }

    pub fn apply_fetch_result(&mut self, seq: u64, outcome: Result<String>) -> bool {
        self.grid.apply_fetch_result(seq, outcome)
    }

    /// Close the selected-region card. Also leaves patch-fullscreen,
    /// which cannot outlive its selection.
    pub fn clear_selection(&mut self) {
        self.grid.clear_selection();
        if self.viewport.mode == ViewMode::PatchFullscreen {
            self.viewport.set_mode(ViewMode::Slide);
        }
    }

    pub fn enter_patch_fullscreen(&mut self) -> Result<()> {
        if self.grid.selection().is_none() {
            return Err(HistoscopeError::NoPatchSelected);
        }
        self.viewport.set_mode(ViewMode::PatchFullscreen);
        Ok(())
    }

    pub fn exit_patch_fullscreen(&mut self) {
        self.viewport.set_mode(ViewMode::Slide);
    }

    // ----- tool selection (mutual exclusion) -----------------------

    /// Arm or disarm an annotation tool. Arming one cancels the
    /// measurement tool, including its pending start point.
    pub fn select_annotation_tool(&mut self, tool: Option<AnnotationTool>) {
        if tool.is_some() {
            self.measurements.set_active(false);
        }
        self.annotations.select_tool(tool);
    }

    /// Toggle the measurement tool. Arming it disarms any annotation
    /// tool and discards an in-progress placement.
    pub fn toggle_measurement(&mut self) {
        if !self.measurements.is_active() {
            self.annotations.select_tool(None);
        }
        self.measurements.toggle();
    }

    // ----- pointer routing -----------------------------------------

    /// Route a press in slide-space to whichever tool is armed. A
    /// press with no armed tool does nothing (the shell treats it as
    /// the start of a pan or a grid click).
    pub fn pointer_press(&mut self, pos: Point) {
        if self.measurements.is_active() {
            self.measurements.click(pos);
        } else {
            self.annotations.pointer_press(pos);
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        self.annotations.pointer_move(pos);
    }

    pub fn pointer_release(&mut self) -> Option<AnnotationId> {
        self.annotations.pointer_release()
    }

    // ----- annotation passthroughs ---------------------------------

    pub fn submit_text(&mut self, content: &str) -> Option<AnnotationId> {
        self.annotations.submit_text(content)
    }

    pub fn cancel_text(&mut self) {
        self.annotations.cancel_text();
    }

    pub fn set_annotation_color(&mut self, color: AnnotationColor) {
        self.annotations.set_color(color);
    }

    pub fn delete_annotation(&mut self, id: AnnotationId) -> bool {
        self.annotations.delete(id)
    }

    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
    }

    pub fn toggle_annotation_visibility(&mut self) {
        self.annotations.toggle_visibility();
    }

    // ----- measurement passthroughs --------------------------------

    pub fn clear_measurements(&mut self) {
        self.measurements.clear();
    }

    /// Format a measurement with this slide's physical scale.
    pub fn format_measurement(&self, m: &Measurement) -> String {
        measure::format_distance(m.distance_px, self.config.microns_per_pixel)
    }
}
