use seatplan_designer::state::PlannerState;
use seatplan_designer::{tables_overlap, validate_plan, TableShape, TemplateStrategy};

use seatplan_core::geometry::{distance, Point};

fn round(diameter: f64) -> TableShape {
    TableShape::Round { diameter }
}

#[test]
fn test_overlap_nudge_scenario() {
    // Two circles of diameter 60 placed with centers 10 units apart.
    let mut state = PlannerState::new();
    let first = state.add_table(round(60.0), 500.0, 400.0, 6).unwrap();
    let second = state.add_table(round(60.0), 510.0, 400.0, 6).unwrap();

    let a = state.plan().get(first).unwrap();
    let b = state.plan().get(second).unwrap();
    assert!(distance(a.center(), b.center()) >= 60.0);
    let canvas = state.canvas_bounds();
    assert!(a.footprint().contained_in(&canvas));
    assert!(b.footprint().contained_in(&canvas));
}

#[test]
fn test_unresolvable_overlap_restores_pre_command_state() {
    // A venue barely bigger than one table leaves nowhere to nudge.
    let mut state = PlannerState::new();
    state.load_from_file("/nonexistent/plan.json").unwrap();
    // Shrink the hall by resizing through the document boundary.
    let mut doc = state.to_document();
    doc.ceremony.config.width = 150.0;
    doc.ceremony.config.height = 150.0;
    state.apply_document(doc);

    let first = state.add_table(round(120.0), 75.0, 75.0, 6).unwrap();
    let err = state.add_table(round(120.0), 75.0, 75.0, 6).unwrap_err();
    assert!(err.is_layout_error());

    // The failed command left exactly one table, unmoved.
    assert_eq!(state.plan().len(), 1);
    let table = state.plan().get(first).unwrap();
    assert_eq!((table.x, table.y), (75.0, 75.0));
}

#[test]
fn test_committed_layouts_hold_both_invariants() {
    let mut state = PlannerState::new();
    for i in 0..8 {
        let x = 200.0 + (i % 4) as f64 * 300.0;
        let y = 250.0 + (i / 4) as f64 * 400.0;
        state.add_table(round(120.0), x, y, 8).unwrap();
    }
    // Pile a few tables onto occupied spots and drag one off-canvas;
    // the resolver must keep the plan legal after every command.
    state.add_table(round(120.0), 200.0, 250.0, 8).unwrap();
    state.add_table(round(140.0), 500.0, 250.0, 8).unwrap();
    let dragged = state.plan().tables()[0].id;
    state.move_table(dragged, Point::new(-300.0, 2000.0)).unwrap();

    let canvas = state.canvas_bounds();
    let tables = state.plan().tables();
    for (i, a) in tables.iter().enumerate() {
        assert!(a.footprint().contained_in(&canvas), "table {} off canvas", a.id);
        for b in &tables[i + 1..] {
            assert!(!tables_overlap(a, b, 0.0), "tables {} and {} overlap", a.id, b.id);
        }
    }
}

#[test]
fn test_template_apply_replaces_plan_and_validates() {
    let mut state = PlannerState::new();
    state.add_table(round(120.0), 400.0, 300.0, 8).unwrap();

    let placed = state
        .apply_template(TemplateStrategy::Grid { rows: 2, cols: 3 }, 8)
        .unwrap();
    assert_eq!(placed, 6);
    assert_eq!(state.plan().len(), 6);
    assert!(validate_plan(state.plan(), &state.canvas_bounds()));

    // Template application is one undoable command.
    assert!(state.undo());
    assert_eq!(state.plan().len(), 1);
}

#[test]
fn test_template_rejects_bad_seat_count() {
    let mut state = PlannerState::new();
    let err = state
        .apply_template(TemplateStrategy::Grid { rows: 2, cols: 2 }, 100)
        .unwrap_err();
    assert!(err.is_layout_error());
    assert!(state.plan().is_empty());
}

#[test]
fn test_circular_template_through_state() {
    let mut state = PlannerState::new();
    let placed = state
        .apply_template(TemplateStrategy::Circular { count: 6 }, 10)
        .unwrap();
    assert_eq!(placed, 6);

    let center = Point::new(state.venue().width / 2.0, state.venue().height / 2.0);
    let radii: Vec<f64> = state
        .plan()
        .iter()
        .map(|t| distance(t.center(), center))
        .collect();
    let mean = radii.iter().sum::<f64>() / radii.len() as f64;
    for r in radii {
        assert!((r - mean).abs() <= mean * 0.25);
    }
}
