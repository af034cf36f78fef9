//! Guest seating: capacity checks and seat assignment.
//!
//! The guest directory itself is owned by an external collaborator; the
//! engine only stores `guest_id` references on seats and enforces the
//! one-seat-per-guest invariant across the whole plan.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use seatplan_core::error::AssignmentError;

use crate::plan::FloorPlan;

/// RSVP state of a guest, as reported by the guest directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

/// A read-only guest record from the external directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    pub rsvp_status: RsvpStatus,
    /// Companions arriving with this guest (plus-ones, children).
    pub companions: u32,
}

impl Guest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rsvp_status: RsvpStatus::Pending,
            companions: 0,
        }
    }

    /// Seats this guest's party needs.
    pub fn party_size(&self) -> u32 {
        1 + self.companions
    }
}

/// Finds the seat a guest currently occupies, anywhere in the plan.
pub fn find_guest_seat(plan: &FloorPlan, guest_id: Uuid) -> Option<(u64, u32)> {
    for table in plan.iter() {
        for seat in &table.seats {
            if seat.guest_id == Some(guest_id) {
                return Some((table.id, seat.index));
            }
        }
    }
    None
}

/// Seats a guest at the first unoccupied enabled seat of a table
/// (lowest seat index), returning the seat index.
///
/// Fails with `CapacityExceeded` when every enabled seat is taken, and
/// with `AlreadyAssigned` when the guest occupies a seat anywhere else
/// in the plan; an existing assignment is never silently moved, the
/// caller must unassign first.
pub fn assign_guest(plan: &mut FloorPlan, table_id: u64, guest_id: Uuid) -> Result<u32, AssignmentError> {
    if let Some((seated_at, seat_index)) = find_guest_seat(plan, guest_id) {
        if seated_at == table_id {
            // Re-assigning to the same table is a no-op success.
            return Ok(seat_index);
        }
        return Err(AssignmentError::AlreadyAssigned {
            guest_id,
            table_id: seated_at,
        });
    }

    let table = plan
        .get_mut(table_id)
        .ok_or(AssignmentError::TableNotFound { table_id })?;

    let Some(seat) = table
        .seats
        .iter_mut()
        .find(|s| s.enabled && s.guest_id.is_none())
    else {
        return Err(AssignmentError::CapacityExceeded {
            table_id,
            seats: table.enabled_seat_count(),
        });
    };

    seat.guest_id = Some(guest_id);
    Ok(seat.index)
}

/// Removes a guest from a table. Idempotent: unassigning a guest who is
/// not seated there is a no-op success. Returns whether a seat was
/// actually freed.
pub fn unassign_guest(plan: &mut FloorPlan, table_id: u64, guest_id: Uuid) -> Result<bool, AssignmentError> {
    let table = plan
        .get_mut(table_id)
        .ok_or(AssignmentError::TableNotFound { table_id })?;
    for seat in &mut table.seats {
        if seat.guest_id == Some(guest_id) {
            seat.guest_id = None;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Clears every assignment at a table, returning how many seats were
/// freed. Idempotent.
pub fn unassign_all(plan: &mut FloorPlan, table_id: u64) -> Result<u32, AssignmentError> {
    let table = plan
        .get_mut(table_id)
        .ok_or(AssignmentError::TableNotFound { table_id })?;
    let mut freed = 0;
    for seat in &mut table.seats {
        if seat.guest_id.take().is_some() {
            freed += 1;
        }
    }
    Ok(freed)
}

/// Toggles a seat's enabled flag.
///
/// Disabling a seat that currently holds a guest unassigns that guest;
/// the eviction is returned rather than silently swallowed.
pub fn toggle_seat_enabled(
    plan: &mut FloorPlan,
    table_id: u64,
    seat_index: u32,
) -> Result<Option<Uuid>, AssignmentError> {
    let table = plan
        .get_mut(table_id)
        .ok_or(AssignmentError::TableNotFound { table_id })?;
    let seat = table
        .seats
        .iter_mut()
        .find(|s| s.index == seat_index)
        .ok_or(AssignmentError::SeatNotFound { table_id, seat_index })?;

    seat.enabled = !seat.enabled;
    if !seat.enabled {
        Ok(seat.guest_id.take())
    } else {
        Ok(None)
    }
}

/// Reports guests that appear on more than one seat.
///
/// The assignment operations never produce duplicates; this exists as a
/// consistency check over externally loaded plans.
pub fn assignment_conflicts(plan: &FloorPlan) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::new();
    let mut conflicts = Vec::new();
    for table in plan.iter() {
        for seat in &table.seats {
            if let Some(guest) = seat.guest_id {
                if !seen.insert(guest) && !conflicts.contains(&guest) {
                    conflicts.push(guest);
                }
            }
        }
    }
    conflicts
}
