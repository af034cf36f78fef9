use seatplan_designer::state::PlannerState;
use seatplan_designer::{Guest, PlanView, RegionKind, TablePatch, TableShape};

use seatplan_core::geometry::Point;

fn round() -> TableShape {
    TableShape::Round { diameter: 120.0 }
}

#[test]
fn test_planner_state_new() {
    let state = PlannerState::new();
    assert_eq!(state.view(), PlanView::Ceremony);
    assert!(state.plan().is_empty());
    assert!(state.venue().regions().is_empty());
    assert!(!state.can_undo());
    assert!(!state.is_dirty());
}

#[test]
fn test_add_table() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();

    let table = state.plan().get(id).unwrap();
    assert_eq!(table.seats_count(), 8);
    assert_eq!(table.x, 400.0);
    assert!(state.can_undo());
    assert!(state.is_dirty());
}

#[test]
fn test_add_table_rejects_absurd_capacity() {
    let mut state = PlannerState::new();
    let err = state.add_table(round(), 400.0, 300.0, 99).unwrap_err();
    assert!(err.is_layout_error());
    assert!(state.plan().is_empty());
    // Rejected command records no history.
    assert!(!state.can_undo());
}

#[test]
fn test_add_table_clamps_to_canvas() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), -500.0, 300.0, 8).unwrap();
    let table = state.plan().get(id).unwrap();
    assert!(table.footprint().contained_in(&state.canvas_bounds()));
}

#[test]
fn test_move_table_commits_once() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();

    state.move_table(id, Point::new(700.0, 500.0)).unwrap();
    let table = state.plan().get(id).unwrap();
    assert_eq!((table.x, table.y), (700.0, 500.0));

    // One drag commit, one history entry: a single undo restores the
    // original position.
    assert!(state.undo());
    let table = state.plan().get(id).unwrap();
    assert_eq!((table.x, table.y), (400.0, 300.0));
}

#[test]
fn test_move_missing_table() {
    let mut state = PlannerState::new();
    assert!(state.move_table(42, Point::new(0.0, 0.0)).is_err());
}

#[test]
fn test_resize_table_reports_evictions() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 4).unwrap();
    let guest = Guest::new("Ana");
    state.set_guest_directory(vec![guest.clone()]);
    state.assign_guest(id, guest.id).unwrap();

    // Shrinking below the occupied seat evicts the guest... but seat 0
    // survives a shrink to 2.
    let patch = TablePatch {
        seats_count: Some(2),
        ..Default::default()
    };
    let evicted = state.resize_table(id, &patch).unwrap();
    assert!(evicted.is_empty());

    // Shrinking to zero seats is allowed and evicts.
    let patch = TablePatch {
        seats_count: Some(0),
        ..Default::default()
    };
    let evicted = state.resize_table(id, &patch).unwrap();
    assert_eq!(evicted, vec![guest.id]);
}

#[test]
fn test_resize_rejection_leaves_plan_untouched() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();
    let undo_before = state.can_undo();

    let patch = TablePatch {
        seats_count: Some(200),
        ..Default::default()
    };
    assert!(state.resize_table(id, &patch).is_err());
    assert_eq!(state.plan().get(id).unwrap().seats_count(), 8);
    assert_eq!(state.can_undo(), undo_before);
}

#[test]
fn test_delete_and_duplicate() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();

    let copy = state.duplicate_table(id).unwrap();
    assert_eq!(state.plan().len(), 2);
    assert_ne!(copy, id);

    state.delete_table(id).unwrap();
    assert_eq!(state.plan().len(), 1);
    assert!(state.plan().get(copy).is_some());
}

#[test]
fn test_duplicate_does_not_copy_guests() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();
    let guest = Guest::new("Bea");
    state.set_guest_directory(vec![guest.clone()]);
    state.assign_guest(id, guest.id).unwrap();

    let copy = state.duplicate_table(id).unwrap();
    assert_eq!(state.plan().get(copy).unwrap().occupied_count(), 0);
    // The guest is still seated exactly once.
    assert!(seatplan_designer::assignment_conflicts(state.plan()).is_empty());
}

#[test]
fn test_views_are_independent() {
    let mut state = PlannerState::new();
    state.add_table(round(), 400.0, 300.0, 8).unwrap();
    assert_eq!(state.plan().len(), 1);

    state.set_view(PlanView::Banquet);
    assert!(state.plan().is_empty());
    state.add_table(round(), 600.0, 600.0, 10).unwrap();
    state.add_table(round(), 900.0, 600.0, 10).unwrap();
    assert_eq!(state.plan().len(), 2);

    state.set_view(PlanView::Ceremony);
    assert_eq!(state.plan().len(), 1);
}

#[test]
fn test_draw_region_and_remove() {
    let mut state = PlannerState::new();
    let id = state
        .draw_region(
            RegionKind::Obstacle,
            vec![
                Point::new(100.0, 100.0),
                Point::new(300.0, 100.0),
                Point::new(300.0, 300.0),
                Point::new(100.0, 300.0),
            ],
        )
        .unwrap();
    assert_eq!(state.venue().regions().len(), 1);

    assert!(state.remove_region(id));
    assert!(state.venue().regions().is_empty());
    assert!(!state.remove_region(id));

    // Both mutations are undoable.
    assert!(state.undo());
    assert_eq!(state.venue().regions().len(), 1);
    assert!(state.undo());
    assert!(state.venue().regions().is_empty());
}

#[test]
fn test_invalid_region_rejected_without_history() {
    let mut state = PlannerState::new();
    let bowtie = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    ];
    assert!(state.draw_region(RegionKind::Obstacle, bowtie).is_err());
    assert!(state.venue().regions().is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_freehand_region_is_smoothed() {
    let mut state = PlannerState::new();
    let raw = vec![
        Point::new(100.0, 100.0),
        Point::new(400.0, 120.0),
        Point::new(380.0, 400.0),
        Point::new(90.0, 380.0),
    ];
    let id = state.draw_region_freehand(RegionKind::Perimeter, &raw).unwrap();
    let region = state.venue().region(id).unwrap();
    assert!(region.points.len() > raw.len());
}

#[test]
fn test_unseated_guests_pool() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();
    let ana = Guest::new("Ana");
    let bea = Guest::new("Bea");
    state.set_guest_directory(vec![ana.clone(), bea.clone()]);
    assert_eq!(state.unseated_guests().len(), 2);

    state.assign_guest(id, ana.id).unwrap();
    let unseated = state.unseated_guests();
    assert_eq!(unseated.len(), 1);
    assert_eq!(unseated[0].id, bea.id);
}

#[test]
fn test_unassign_noop_records_no_history() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();
    let guest = Guest::new("Cleo");

    assert!(!state.unassign_guest(id, guest.id).unwrap());
    // Only the add_table entry exists.
    assert!(state.undo());
    assert!(!state.can_undo());
}

#[test]
fn test_toggle_seat_evicts_through_state() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 2).unwrap();
    let guest = Guest::new("Dan");
    state.set_guest_directory(vec![guest.clone()]);
    state.assign_guest(id, guest.id).unwrap();

    let evicted = state.toggle_seat_enabled(id, 0).unwrap();
    assert_eq!(evicted, Some(guest.id));
    assert_eq!(state.plan().get(id).unwrap().enabled_seat_count(), 1);

    // Undo restores both the seat flag and the assignment.
    assert!(state.undo());
    let table = state.plan().get(id).unwrap();
    assert!(table.seats[0].enabled);
    assert_eq!(table.seats[0].guest_id, Some(guest.id));
}
