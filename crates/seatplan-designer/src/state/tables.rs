//! Table commands: add, move, resize, delete, duplicate.
//!
//! Each command works on a deep copy of the active plan and installs it
//! only after the resolver clears both placement invariants, so a
//! rejected command never leaves a half-applied layout behind.

use tracing::debug;
use uuid::Uuid;

use seatplan_core::constants::MAX_SEATS_PER_TABLE;
use seatplan_core::error::{LayoutError, Result};
use seatplan_core::geometry::Point;

use crate::model::{Table, TablePatch, TableShape};
use crate::resolver;

use super::PlannerState;

/// Offset applied to a duplicated table before collision resolution.
const DUPLICATE_OFFSET: f64 = 30.0;

impl PlannerState {
    /// Adds a table centered at `(x, y)`, returning its id.
    ///
    /// The new table is clamped onto the canvas and nudged clear of any
    /// existing table before the command commits.
    pub fn add_table(&mut self, shape: TableShape, x: f64, y: f64, seats_count: u32) -> Result<u64> {
        if seats_count > MAX_SEATS_PER_TABLE {
            return Err(LayoutError::InvalidCapacity {
                requested: seats_count,
                max: MAX_SEATS_PER_TABLE,
            }
            .into());
        }

        let before = self.snapshot();
        let canvas = self.canvas_bounds();
        let mut work = self.plan().clone();
        let id = work.generate_id();
        work.insert(Table::new(id, format!("Table {id}"), shape, x, y, seats_count));
        resolver::resolve_overlaps(&mut work, id, &canvas)?;

        let view = self.view();
        self.view_state_mut(view).plan = work;
        self.commit(before);
        debug!(table = id, "added table");
        Ok(id)
    }

    /// Commits a completed drag: moves a table to `to` and resolves
    /// collisions.
    ///
    /// Intermediate drag positions are ephemeral presentation state;
    /// one call per finished drag yields exactly one history entry.
    pub fn move_table(&mut self, id: u64, to: Point) -> Result<()> {
        let before = self.snapshot();
        let canvas = self.canvas_bounds();
        let mut work = self.plan().clone();
        {
            let table = work
                .get_mut(id)
                .ok_or(LayoutError::TableNotFound { table_id: id })?;
            table.x = to.x;
            table.y = to.y;
        }
        resolver::resolve_overlaps(&mut work, id, &canvas)?;

        let view = self.view();
        self.view_state_mut(view).plan = work;
        self.commit(before);
        Ok(())
    }

    /// Applies a patch to a table, returning guests evicted by a
    /// shrinking seat list.
    pub fn resize_table(&mut self, id: u64, patch: &TablePatch) -> Result<Vec<Uuid>> {
        let before = self.snapshot();
        let canvas = self.canvas_bounds();
        let seat_spacing = self.seat_spacing;
        let mut work = self.plan().clone();
        let evicted = {
            let table = work
                .get_mut(id)
                .ok_or(LayoutError::TableNotFound { table_id: id })?;
            table.apply_patch(patch, seat_spacing)?
        };
        // A grown footprint can collide or poke past the canvas edge.
        resolver::resolve_overlaps(&mut work, id, &canvas)?;

        let view = self.view();
        self.view_state_mut(view).plan = work;
        self.commit(before);
        Ok(evicted)
    }

    /// Deletes a table.
    pub fn delete_table(&mut self, id: u64) -> Result<()> {
        if self.plan().get(id).is_none() {
            return Err(LayoutError::TableNotFound { table_id: id }.into());
        }
        let before = self.snapshot();
        let view = self.view();
        self.view_state_mut(view).plan.remove(id);
        self.commit(before);
        debug!(table = id, "deleted table");
        Ok(())
    }

    /// Duplicates a table next to the original, returning the new id.
    ///
    /// The copy keeps shape and seat configuration but no guest
    /// assignments.
    pub fn duplicate_table(&mut self, id: u64) -> Result<u64> {
        let source = self
            .plan()
            .get(id)
            .cloned()
            .ok_or(LayoutError::TableNotFound { table_id: id })?;

        let before = self.snapshot();
        let canvas = self.canvas_bounds();
        let mut work = self.plan().clone();
        let new_id = work.generate_id();
        work.insert(source.duplicated(new_id, DUPLICATE_OFFSET, DUPLICATE_OFFSET));
        resolver::resolve_overlaps(&mut work, new_id, &canvas)?;

        let view = self.view();
        self.view_state_mut(view).plan = work;
        self.commit(before);
        debug!(source = id, copy = new_id, "duplicated table");
        Ok(new_id)
    }
}
