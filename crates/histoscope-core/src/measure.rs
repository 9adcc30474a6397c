use tracing::debug;

use crate::consts::{MEASUREMENT_HUE_STEP, MM_DISPLAY_THRESHOLD_MICRONS};
use crate::geom::Point;

/// A completed two-point measurement in slide-space. `distance_px` is
/// snapshotted at creation and never recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub id: u64,
    pub start: Point,
    pub end: Point,
    pub distance_px: f32,
}

/// Two-click distance tool. While active, clicks alternate between
/// recording a pending start point and committing a measurement; the
/// tool stays armed for repeated measurements until toggled off.
#[derive(Debug, Default)]
pub struct MeasurementState {
    active: bool,
    pending_start: Option<Point>,
    measurements: Vec<Measurement>,
    next_id: u64,
}

impl MeasurementState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending_start(&self) -> Option<Point> {
        self.pending_start
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn toggle(&mut self) {
        self.set_active(!self.active);
    }

    /// Turning the tool off discards an unpaired start point without
    /// creating a measurement.
    pub fn set_active(&mut self, active: bool) {
        if !active && self.pending_start.is_some() {
            debug!("discarding pending measurement start");
        }
        self.active = active;
        if !active {
            self.pending_start = None;
        }
    }

    /// Register a click. First click arms the pending start; the
    /// second commits and returns the new measurement, re-arming for
    /// the next pair.
    pub fn click(&mut self, pos: Point) -> Option<&Measurement> {
        if !self.active {
            return None;
        }

        match self.pending_start.take() {
            None => {
                self.pending_start = Some(pos);
                None
            }
            Some(start) => {
                self.next_id += 1;
                self.measurements.push(Measurement {
                    id: self.next_id,
                    start,
                    end: pos,
                    distance_px: start.distance_to(pos),
                });
                self.measurements.last()
            }
        }
    }

    /// Measurements are only bulk-cleared; there is no per-item
    /// delete, unlike annotations.
    pub fn clear(&mut self) {
        self.measurements.clear();
    }
}

/// Human-readable physical distance: millimeters with two decimals at
/// or above 1000 um, micrometers with one decimal below.
pub fn format_distance(pixels: f32, microns_per_pixel: f32) -> String {
    let microns = pixels * microns_per_pixel;
    if microns >= MM_DISPLAY_THRESHOLD_MICRONS {
        format!("{:.2} mm", microns / 1000.0)
    } else {
        format!("{microns:.1} µm")
    }
}

/// Display hue for the nth measurement, cycling every six entries.
pub fn measurement_hue(index: usize) -> f32 {
    ((index as u32 * MEASUREMENT_HUE_STEP) % 360) as f32
}
