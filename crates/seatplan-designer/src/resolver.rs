//! Collision and containment resolution for table placement.
//!
//! Two invariants are re-checked after every add, move, resize, and
//! template application:
//!
//! 1. No two table footprints overlap.
//! 2. Every table footprint lies fully inside the canvas.
//!
//! Overlaps are cleared by nudging the offending table along the vector
//! between the two centers, with a bounded iteration budget; commands
//! whose overlap cannot be cleared are rejected and the caller restores
//! the pre-command state. All math is in venue units; the view
//! transform never participates.

use tracing::debug;

use seatplan_core::constants::MAX_RESOLVE_ITERATIONS;
use seatplan_core::error::LayoutError;
use seatplan_core::geometry::Bounds;

use crate::model::{Table, TableShape};
use crate::plan::FloorPlan;

/// Nudge distance for footprint pairs without a closed-form separation.
const NUDGE_STEP: f64 = 10.0;

/// Clearance slack added when separating circles, so the pair ends up
/// strictly apart instead of exactly touching.
const SEPARATION_SLACK: f64 = 0.5;

/// Tests whether two tables' bounding shapes overlap.
///
/// Circle pairs are tested exactly on center distance; rectangular and
/// mixed pairs fall back to the bounding-box approximation. `clearance`
/// widens the test: template placement demands a walkway between
/// tables, while the hard invariant uses zero.
pub fn tables_overlap(a: &Table, b: &Table, clearance: f64) -> bool {
    match (a.shape, b.shape) {
        (TableShape::Round { diameter: da }, TableShape::Round { diameter: db }) => {
            let dist = a.center().distance_to(&b.center());
            dist < da / 2.0 + db / 2.0 + clearance
        }
        _ => a.footprint().inflated(clearance).intersects(&b.footprint()),
    }
}

/// Moves a single table the minimum distance needed to bring its full
/// footprint inside `canvas`. Tables already inside are untouched.
fn clamp_table_in_place(table: &mut Table, canvas: &Bounds) {
    // A footprint wider than the canvas pins to the min edge; choosing
    // one edge keeps repeated clamping stable.
    let axis_shift = |min: f64, max: f64, lo: f64, hi: f64| -> f64 {
        if max - min >= hi - lo || min < lo {
            lo - min
        } else if max > hi {
            hi - max
        } else {
            0.0
        }
    };
    let fp = table.footprint();
    table.x += axis_shift(fp.min_x, fp.max_x, canvas.min_x, canvas.max_x);
    table.y += axis_shift(fp.min_y, fp.max_y, canvas.min_y, canvas.max_y);
}

/// Clamps every table fully inside the canvas.
///
/// Pure function: tables already within bounds come back structurally
/// unchanged, and applying the clamp twice yields the same result as
/// applying it once. Clamping operates on the full footprint
/// (`center ± half extent`), not just the center.
pub fn clamp_tables_within_canvas(tables: &[Table], canvas: &Bounds) -> Vec<Table> {
    tables
        .iter()
        .map(|t| {
            if t.footprint().contained_in(canvas) {
                t.clone()
            } else {
                let mut clamped = t.clone();
                clamp_table_in_place(&mut clamped, canvas);
                clamped
            }
        })
        .collect()
}

/// Clears any overlap between the moved table and the rest of the plan,
/// keeping the moved table inside the canvas.
///
/// The moved table is pushed along the center-to-center vector away
/// from whichever table it overlaps, one partner at a time, until the
/// plan is overlap-free or the iteration budget runs out. On budget
/// exhaustion the command must be rejected: the plan passed in is a
/// working copy and the pre-command state stays live.
pub fn resolve_overlaps(plan: &mut FloorPlan, moved_id: u64, canvas: &Bounds) -> Result<(), LayoutError> {
    for iteration in 0..MAX_RESOLVE_ITERATIONS {
        let moved = {
            let Some(moved) = plan.get_mut(moved_id) else {
                return Err(LayoutError::TableNotFound { table_id: moved_id });
            };
            clamp_table_in_place(moved, canvas);
            moved.clone()
        };

        let Some(partner) = plan
            .iter()
            .find(|t| t.id != moved_id && tables_overlap(t, &moved, 0.0))
            .cloned()
        else {
            return Ok(());
        };

        let dist = moved.center().distance_to(&partner.center());
        let (dir_x, dir_y) = if dist < 1e-9 {
            (1.0, 0.0)
        } else {
            ((moved.x - partner.x) / dist, (moved.y - partner.y) / dist)
        };

        let push = match (moved.shape, partner.shape) {
            (TableShape::Round { diameter: da }, TableShape::Round { diameter: db }) => {
                da / 2.0 + db / 2.0 - dist + SEPARATION_SLACK
            }
            _ => NUDGE_STEP,
        };

        debug!(
            table = moved_id,
            against = partner.id,
            iteration,
            push,
            "nudging table to clear overlap"
        );

        if let Some(moved) = plan.get_mut(moved_id) {
            moved.x += dir_x * push;
            moved.y += dir_y * push;
        }
    }

    Err(LayoutError::UnresolvableOverlap { table_id: moved_id })
}

/// Checks the hard invariants over a whole plan: pairwise no-overlap
/// and canvas containment. Used as defense in depth before committing a
/// generated layout.
pub fn validate_plan(plan: &FloorPlan, canvas: &Bounds) -> bool {
    let tables = plan.tables();
    for (i, a) in tables.iter().enumerate() {
        if !a.footprint().contained_in(canvas) {
            return false;
        }
        for b in &tables[i + 1..] {
            if tables_overlap(a, b, 0.0) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableShape;

    fn round(id: u64, x: f64, y: f64, diameter: f64) -> Table {
        Table::new(id, format!("Table {id}"), TableShape::Round { diameter }, x, y, 8)
    }

    #[test]
    fn test_overlap_circle_pair() {
        let a = round(1, 0.0, 0.0, 60.0);
        let b = round(2, 50.0, 0.0, 60.0);
        assert!(tables_overlap(&a, &b, 0.0));
        let c = round(3, 61.0, 0.0, 60.0);
        assert!(!tables_overlap(&a, &c, 0.0));
        // Clearance widens the test.
        assert!(tables_overlap(&a, &c, 10.0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let canvas = Bounds::new(0.0, 0.0, 1800.0, 1200.0);
        let tables = vec![round(1, -40.0, 600.0, 120.0), round(2, 900.0, 1500.0, 120.0)];
        let once = clamp_tables_within_canvas(&tables, &canvas);
        let twice = clamp_tables_within_canvas(&once, &canvas);
        assert_eq!(once, twice);
        for t in &once {
            assert!(t.footprint().contained_in(&canvas));
        }
    }

    #[test]
    fn test_clamp_leaves_inside_tables_unchanged() {
        let canvas = Bounds::new(0.0, 0.0, 1800.0, 1200.0);
        let tables = vec![round(1, 400.0, 400.0, 120.0)];
        let clamped = clamp_tables_within_canvas(&tables, &canvas);
        assert_eq!(clamped, tables);
    }

    #[test]
    fn test_resolver_missing_table() {
        let mut plan = FloorPlan::new();
        let canvas = Bounds::new(0.0, 0.0, 1800.0, 1200.0);
        let err = resolve_overlaps(&mut plan, 99, &canvas).unwrap_err();
        assert!(matches!(err, LayoutError::TableNotFound { table_id: 99 }));
    }
}
