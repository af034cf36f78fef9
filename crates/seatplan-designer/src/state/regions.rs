//! Region commands: freehand drawing and removal.

use seatplan_core::error::Result;
use seatplan_core::geometry::{smooth, Point};

use crate::venue::RegionKind;

use super::PlannerState;

impl PlannerState {
    /// Adds a drawn region to the active view's venue.
    ///
    /// Validation happens before any mutation, so an invalid polygon
    /// rejects the command without touching state or history.
    pub fn draw_region(&mut self, kind: RegionKind, points: Vec<Point>) -> Result<u64> {
        let before = self.snapshot();
        let view = self.view();
        let id = self.view_state_mut(view).venue.add_region(kind, points)?;
        self.commit(before);
        Ok(id)
    }

    /// Adds a freehand-drawn region, smoothing the raw pointer trail
    /// with one round of corner cutting before validation.
    pub fn draw_region_freehand(&mut self, kind: RegionKind, raw: &[Point]) -> Result<u64> {
        self.draw_region(kind, smooth(raw))
    }

    /// Removes a region. Returns whether one was removed; removing a
    /// missing region is a no-op that records no history.
    pub fn remove_region(&mut self, id: u64) -> bool {
        if self.venue().region(id).is_none() {
            return false;
        }
        let before = self.snapshot();
        let view = self.view();
        self.view_state_mut(view).venue.remove_region(id);
        self.commit(before);
        true
    }
}
