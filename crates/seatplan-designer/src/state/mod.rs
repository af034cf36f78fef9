//! Planner state: the command surface consumed by the presentation
//! layer.
//!
//! One `PlannerState` owns both logical views (ceremony and banquet),
//! each with its own floor plan, venue space, and undo history. Every
//! mutating command follows the same protocol: deep-copy the current
//! layout, apply the change to a working copy, and only on success
//! install the result and record the pre-mutation snapshot. A rejected
//! command therefore leaves the live state untouched and pushes no
//! history.
//!
//! This module is split into submodules:
//! - `tables`: add, move, resize, delete, duplicate
//! - `regions`: freehand region drawing and removal
//! - `guests`: guest directory and seat assignment
//! - `templates`: template application
//! - `history`: undo/redo
//! - `file_io`: plan documents, save/load, autosave debounce

mod file_io;
mod guests;
mod history;
mod regions;
mod tables;
mod templates;

pub use file_io::{AutosaveTimer, PlanFile, ViewConfig, ViewDocument};

use seatplan_core::constants::DEFAULT_SEAT_SPACING;
use seatplan_core::geometry::Bounds;

use crate::assignment::Guest;
use crate::history::{LayoutSnapshot, PlanHistory, PlanView};
use crate::plan::FloorPlan;
use crate::venue::VenueSpace;
use crate::viewport::Viewport;

/// Floor plan plus venue for one logical view.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub plan: FloorPlan,
    pub venue: VenueSpace,
}

/// The engine's top-level state.
#[derive(Debug, Clone)]
pub struct PlannerState {
    view: PlanView,
    ceremony: ViewState,
    banquet: ViewState,
    history: PlanHistory,
    pub viewport: Viewport,
    /// Venue units of table perimeter per auto-capacity seat.
    pub seat_spacing: f64,
    guests: Vec<Guest>,
    autosave: AutosaveTimer,
}

impl PlannerState {
    /// Creates an empty planner with default venues for both views.
    pub fn new() -> Self {
        Self {
            view: PlanView::Ceremony,
            ceremony: ViewState::default(),
            banquet: ViewState::default(),
            history: PlanHistory::default(),
            viewport: Viewport::default(),
            seat_spacing: DEFAULT_SEAT_SPACING,
            guests: Vec::new(),
            autosave: AutosaveTimer::new(),
        }
    }

    /// The active logical view.
    pub fn view(&self) -> PlanView {
        self.view
    }

    /// Switches the active view. Undo stacks are per view and stay
    /// untouched.
    pub fn set_view(&mut self, view: PlanView) {
        self.view = view;
    }

    pub(crate) fn view_state(&self, view: PlanView) -> &ViewState {
        match view {
            PlanView::Ceremony => &self.ceremony,
            PlanView::Banquet => &self.banquet,
        }
    }

    pub(crate) fn view_state_mut(&mut self, view: PlanView) -> &mut ViewState {
        match view {
            PlanView::Ceremony => &mut self.ceremony,
            PlanView::Banquet => &mut self.banquet,
        }
    }

    /// The active view's floor plan.
    pub fn plan(&self) -> &FloorPlan {
        &self.view_state(self.view).plan
    }

    /// The active view's venue space.
    pub fn venue(&self) -> &VenueSpace {
        &self.view_state(self.view).venue
    }

    /// A specific view's floor plan, regardless of the active view.
    pub fn plan_for(&self, view: PlanView) -> &FloorPlan {
        &self.view_state(view).plan
    }

    /// A specific view's venue space, regardless of the active view.
    pub fn venue_for(&self, view: PlanView) -> &VenueSpace {
        &self.view_state(view).venue
    }

    /// Canvas bounds of the active view.
    pub fn canvas_bounds(&self) -> Bounds {
        self.venue().bounds()
    }

    pub(crate) fn history_mut(&mut self) -> &mut PlanHistory {
        &mut self.history
    }

    pub(crate) fn history(&self) -> &PlanHistory {
        &self.history
    }

    /// Deep copy of the active view's layout.
    pub(crate) fn snapshot(&self) -> LayoutSnapshot {
        let state = self.view_state(self.view);
        LayoutSnapshot {
            tables: state.plan.tables().to_vec(),
            regions: state.venue.regions().to_vec(),
        }
    }

    /// Replaces the active view's layout from a snapshot.
    pub(crate) fn restore(&mut self, snapshot: LayoutSnapshot) {
        let view = self.view;
        let state = self.view_state_mut(view);
        state.plan.replace_tables(snapshot.tables);
        state.venue.replace_regions(snapshot.regions);
    }

    /// Records a committed command: pushes the pre-mutation snapshot to
    /// the active view's history and arms the autosave debounce.
    pub(crate) fn commit(&mut self, before: LayoutSnapshot) {
        let view = self.view;
        self.history.stack_mut(view).record(before);
        self.autosave.mark_dirty(std::time::Instant::now());
    }

    /// Recomputes the view transform so every table is visible.
    ///
    /// Presentation helper, not a geometry invariant: falls back to the
    /// canvas bounds when the plan is empty.
    pub fn fit_to_content(&mut self) {
        let bounds = self
            .plan()
            .iter()
            .map(|t| t.footprint())
            .reduce(|a, b| a.union(&b))
            .unwrap_or_else(|| self.canvas_bounds());
        self.viewport.fit_to_content(&bounds);
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}
