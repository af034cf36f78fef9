use seatplan_designer::state::PlannerState;
use seatplan_designer::{PlanView, TableShape};

use seatplan_core::constants::HISTORY_DEPTH;
use seatplan_core::geometry::Point;

fn round() -> TableShape {
    TableShape::Round { diameter: 120.0 }
}

#[test]
fn test_undo_redo_round_trip() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 8).unwrap();
    assert_eq!(state.plan().len(), 1);

    state.duplicate_table(id).unwrap();
    assert_eq!(state.plan().len(), 2);

    assert!(state.undo());
    assert_eq!(state.plan().len(), 1);

    assert!(state.redo());
    assert_eq!(state.plan().len(), 2);
}

#[test]
fn test_undo_exhausts_to_noop() {
    let mut state = PlannerState::new();
    state.add_table(round(), 400.0, 300.0, 8).unwrap();
    assert!(state.undo());
    assert!(!state.undo());
    assert!(state.plan().is_empty());
}

#[test]
fn test_history_bounded_to_depth() {
    let mut state = PlannerState::new();
    // 60 sequential mutating commands on one view.
    for i in 0..60 {
        let x = 100.0 + (i % 10) as f64 * 160.0;
        let y = 100.0 + (i / 10) as f64 * 180.0;
        state.add_table(round(), x, y, 4).unwrap();
    }
    assert_eq!(state.plan().len(), 60);

    let mut undos = 0;
    while state.undo() {
        undos += 1;
    }
    assert_eq!(undos, HISTORY_DEPTH);
    // The 10 oldest commands fell out of the window.
    assert_eq!(state.plan().len(), 10);
}

#[test]
fn test_new_command_discards_redo_branch() {
    let mut state = PlannerState::new();
    let a = state.add_table(round(), 300.0, 300.0, 8).unwrap();
    state.add_table(round(), 700.0, 300.0, 8).unwrap();

    assert!(state.undo());
    assert!(state.can_redo());

    state.move_table(a, Point::new(500.0, 500.0)).unwrap();
    assert!(!state.can_redo());
}

#[test]
fn test_histories_do_not_interleave_across_views() {
    let mut state = PlannerState::new();
    state.add_table(round(), 400.0, 300.0, 8).unwrap();

    state.set_view(PlanView::Banquet);
    assert!(!state.can_undo());
    state.add_table(round(), 600.0, 600.0, 8).unwrap();
    assert!(state.undo());
    assert!(state.plan().is_empty());

    // Ceremony history is untouched by banquet activity.
    state.set_view(PlanView::Ceremony);
    assert_eq!(state.plan().len(), 1);
    assert!(state.can_undo());
    assert!(state.undo());
    assert!(state.plan().is_empty());
}

#[test]
fn test_undo_restores_assignments() {
    let mut state = PlannerState::new();
    let id = state.add_table(round(), 400.0, 300.0, 4).unwrap();
    let guest = seatplan_designer::Guest::new("Eva");
    state.assign_guest(id, guest.id).unwrap();

    state.unassign_all(id).unwrap();
    assert_eq!(state.plan().get(id).unwrap().occupied_count(), 0);

    assert!(state.undo());
    assert_eq!(state.plan().get(id).unwrap().occupied_count(), 1);
}
