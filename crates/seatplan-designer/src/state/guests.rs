//! Guest directory and seat assignment commands.

use uuid::Uuid;

use seatplan_core::error::Result;

use crate::assignment::{self, Guest};

use super::PlannerState;

impl PlannerState {
    /// Replaces the cached guest directory.
    ///
    /// The directory belongs to an external collaborator; the engine
    /// never mutates it and keeps no history for it.
    pub fn set_guest_directory(&mut self, guests: Vec<Guest>) {
        self.guests = guests;
    }

    /// The cached guest directory.
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Guests not currently seated in the active view's plan.
    pub fn unseated_guests(&self) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|g| assignment::find_guest_seat(self.plan(), g.id).is_none())
            .collect()
    }

    /// Seats a guest at a table, returning the seat index.
    pub fn assign_guest(&mut self, table_id: u64, guest_id: Uuid) -> Result<u32> {
        let before = self.snapshot();
        let view = self.view();
        let seat = assignment::assign_guest(&mut self.view_state_mut(view).plan, table_id, guest_id)?;
        self.commit(before);
        Ok(seat)
    }

    /// Removes a guest from a table. Idempotent; only an actual change
    /// records history.
    pub fn unassign_guest(&mut self, table_id: u64, guest_id: Uuid) -> Result<bool> {
        let before = self.snapshot();
        let view = self.view();
        let freed = assignment::unassign_guest(&mut self.view_state_mut(view).plan, table_id, guest_id)?;
        if freed {
            self.commit(before);
        }
        Ok(freed)
    }

    /// Clears every assignment at a table, returning the freed count.
    pub fn unassign_all(&mut self, table_id: u64) -> Result<u32> {
        let before = self.snapshot();
        let view = self.view();
        let freed = assignment::unassign_all(&mut self.view_state_mut(view).plan, table_id)?;
        if freed > 0 {
            self.commit(before);
        }
        Ok(freed)
    }

    /// Toggles a seat's enabled flag; disabling an occupied seat evicts
    /// its guest, which is returned.
    pub fn toggle_seat_enabled(&mut self, table_id: u64, seat_index: u32) -> Result<Option<Uuid>> {
        let before = self.snapshot();
        let view = self.view();
        let evicted =
            assignment::toggle_seat_enabled(&mut self.view_state_mut(view).plan, table_id, seat_index)?;
        self.commit(before);
        Ok(evicted)
    }
}
