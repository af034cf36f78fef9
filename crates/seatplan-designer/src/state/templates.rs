//! Template application against the active view.

use tracing::debug;

use seatplan_core::constants::MAX_SEATS_PER_TABLE;
use seatplan_core::error::{Error, LayoutError, Result};

use crate::resolver;
use crate::templates::{self, TemplateParams, TemplateStrategy};

use super::PlannerState;

impl PlannerState {
    /// Replaces the active view's tables with a generated layout,
    /// returning how many tables were placed.
    ///
    /// Strategies only produce layouts that already satisfy the
    /// placement invariants; this re-validates anyway before the commit
    /// and rejects a layout that somehow violates them, leaving the
    /// previous plan live.
    pub fn apply_template(&mut self, strategy: TemplateStrategy, seats_per_table: u32) -> Result<usize> {
        if seats_per_table > MAX_SEATS_PER_TABLE {
            return Err(LayoutError::InvalidCapacity {
                requested: seats_per_table,
                max: MAX_SEATS_PER_TABLE,
            }
            .into());
        }

        let params = TemplateParams {
            venue: self.venue(),
            guests: &self.guests,
            seats_per_table,
        };
        let tables = templates::generate(strategy, &params);

        let mut work = crate::plan::FloorPlan::new();
        work.replace_tables(tables);
        if !resolver::validate_plan(&work, &self.canvas_bounds()) {
            return Err(Error::other("generated layout failed placement validation"));
        }

        let before = self.snapshot();
        let count = work.len();
        let view = self.view();
        self.view_state_mut(view).plan = work;
        self.commit(before);
        debug!(view = view.as_str(), tables = count, "applied template");
        Ok(count)
    }
}
