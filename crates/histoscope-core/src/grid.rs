use tracing::{debug, warn};

use crate::consts::PLACEHOLDER_PATCH;
use crate::error::{HistoscopeError, Result};

/// The single materialized grid selection. `url` stays `None` while
/// the fetch is pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedPatch {
    pub row: u32,
    pub col: u32,
    pub url: Option<String>,
}

/// Token handed to the worker for one fetch. The sequence number lets
/// a late result be matched against the selection that requested it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatchRequest {
    pub seq: u64,
    pub row: u32,
    pub col: u32,
}

/// Grid overlay visibility plus the at-most-one selected patch.
#[derive(Debug)]
pub struct GridState {
    rows: u32,
    cols: u32,
    pub visible: bool,
    selection: Option<SelectedPatch>,
    loading: bool,
    fetch_seq: u64,
}

impl GridState {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            visible: false,
            selection: None,
            loading: false,
            fetch_seq: 0,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn selection(&self) -> Option<&SelectedPatch> {
        self.selection.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Select a cell and start a fetch. Replaces any prior selection;
    /// re-selecting the same cell re-fetches. The returned request
    /// supersedes all earlier ones.
    pub fn select_cell(&mut self, row: u32, col: u32) -> Result<PatchRequest> {
        if row >= self.rows || col >= self.cols {
            return Err(HistoscopeError::PatchOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        self.fetch_seq += 1;
        self.selection = Some(SelectedPatch {
            row,
            col,
            url: None,
        });
        self.loading = true;

        Ok(PatchRequest {
            seq: self.fetch_seq,
            row,
            col,
        })
    }

    /// Resolve a fetch. Results from superseded requests are dropped
    /// so a stale response never overwrites a newer selection. A
    /// failed fetch degrades to the placeholder reference.
    ///
    /// Returns whether the result was applied.
    pub fn apply_fetch_result(&mut self, seq: u64, outcome: Result<String>) -> bool {
        if seq != self.fetch_seq {
            debug!(seq, current = self.fetch_seq, "dropping stale patch result");
            return false;
        }

        let Some(selection) = self.selection.as_mut() else {
            return false;
        };

        match outcome {
            Ok(url) => selection.url = Some(url),
            Err(err) => {
                warn!(%err, "patch fetch failed, using placeholder");
                selection.url = Some(PLACEHOLDER_PATCH.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Drop the selection. Bumps the sequence so an in-flight fetch
    /// for the old selection resolves into nothing.
    pub fn clear_selection(&mut self) {
        self.fetch_seq += 1;
        self.selection = None;
        self.loading = false;
    }
}
