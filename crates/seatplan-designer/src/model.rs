//! Tables and seats: the entity model of a floor plan.
//!
//! Seat positions are never stored. They are derived on demand from the
//! table's shape parameters, so a table's seat ring is always consistent
//! with its current size, count, and rotation; only the guest binding
//! and the per-seat enabled override persist.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use seatplan_core::constants::{MAX_SEATS_PER_TABLE, SEAT_RING_GAP};
use seatplan_core::error::LayoutError;
use seatplan_core::geometry::{rotate_point, Bounds, Point};

/// The physical footprint of a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableShape {
    /// Round table described by its diameter.
    Round { diameter: f64 },
    /// Rectangular table described by its width and height.
    Rect { width: f64, height: f64 },
}

impl TableShape {
    /// Half extents of the unrotated footprint.
    pub fn half_extents(&self) -> (f64, f64) {
        match self {
            TableShape::Round { diameter } => (diameter / 2.0, diameter / 2.0),
            TableShape::Rect { width, height } => (width / 2.0, height / 2.0),
        }
    }

    /// Edge length of the footprint outline.
    pub fn perimeter(&self) -> f64 {
        match self {
            TableShape::Round { diameter } => std::f64::consts::PI * diameter,
            TableShape::Rect { width, height } => 2.0 * (width + height),
        }
    }
}

/// One chair at a table.
///
/// The position is derived from the owning table; only the assignment
/// and the enabled override are state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub index: u32,
    pub guest_id: Option<Uuid>,
    pub enabled: bool,
}

impl Seat {
    fn new(index: u32) -> Self {
        Self {
            index,
            guest_id: None,
            enabled: true,
        }
    }
}

/// A table on the floor plan, centered at `(x, y)` in venue units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: u64,
    pub name: String,
    pub shape: TableShape,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees around the table center.
    pub rotation: f64,
    pub auto_capacity: bool,
    pub enabled: bool,
    pub seats: Vec<Seat>,
}

/// A partial update applied to a table by the resize command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablePatch {
    pub name: Option<String>,
    pub shape: Option<TableShape>,
    pub rotation: Option<f64>,
    pub seats_count: Option<u32>,
    pub auto_capacity: Option<bool>,
    pub enabled: Option<bool>,
}

impl Table {
    /// Creates a table with `seats_count` fresh seats.
    pub fn new(id: u64, name: impl Into<String>, shape: TableShape, x: f64, y: f64, seats_count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            shape,
            x,
            y,
            rotation: 0.0,
            auto_capacity: false,
            enabled: true,
            seats: (0..seats_count).map(Seat::new).collect(),
        }
    }

    /// Center of the table.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Number of seats, enabled or not.
    pub fn seats_count(&self) -> u32 {
        self.seats.len() as u32
    }

    /// Number of seats a guest can actually occupy.
    pub fn enabled_seat_count(&self) -> u32 {
        self.seats.iter().filter(|s| s.enabled).count() as u32
    }

    /// Number of occupied seats.
    pub fn occupied_count(&self) -> u32 {
        self.seats.iter().filter(|s| s.guest_id.is_some()).count() as u32
    }

    /// Full bounding box of the table footprint, accounting for rotation.
    pub fn footprint(&self) -> Bounds {
        match self.shape {
            TableShape::Round { diameter } => {
                let r = diameter / 2.0;
                Bounds::new(self.x - r, self.y - r, self.x + r, self.y + r)
            }
            TableShape::Rect { width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                if self.rotation.abs() < 1e-6 {
                    return Bounds::new(self.x - hw, self.y - hh, self.x + hw, self.y + hh);
                }
                let center = self.center();
                let corners = [
                    Point::new(self.x - hw, self.y - hh),
                    Point::new(self.x + hw, self.y - hh),
                    Point::new(self.x + hw, self.y + hh),
                    Point::new(self.x - hw, self.y + hh),
                ];
                let mut bounds: Option<Bounds> = None;
                for c in corners {
                    let p = rotate_point(c, center, self.rotation);
                    match &mut bounds {
                        Some(b) => b.expand_to_include(&p),
                        None => bounds = Some(Bounds::new(p.x, p.y, p.x, p.y)),
                    }
                }
                bounds.unwrap_or_else(|| Bounds::new(self.x, self.y, self.x, self.y))
            }
        }
    }

    /// Computes the seat positions for this table.
    ///
    /// Round tables spread seats evenly on a ring just outside the
    /// table edge, starting at the top. Rectangular tables walk the
    /// expanded outline clockwise from the top-left corner, so seats
    /// land on each edge in proportion to its length. Both honor the
    /// table rotation. Deterministic: equal shape parameters always
    /// produce equal coordinates.
    pub fn seat_positions(&self) -> SmallVec<[Point; 16]> {
        let n = self.seats.len();
        let mut out = SmallVec::new();
        if n == 0 {
            return out;
        }
        let center = self.center();

        match self.shape {
            TableShape::Round { diameter } => {
                let r = diameter / 2.0 + SEAT_RING_GAP;
                let step = std::f64::consts::TAU / n as f64;
                for i in 0..n {
                    let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * step;
                    let p = Point::new(self.x + r * angle.cos(), self.y + r * angle.sin());
                    out.push(rotate_point(p, center, self.rotation));
                }
            }
            TableShape::Rect { width, height } => {
                let w = width + 2.0 * SEAT_RING_GAP;
                let h = height + 2.0 * SEAT_RING_GAP;
                let perimeter = 2.0 * (w + h);
                let (hw, hh) = (w / 2.0, h / 2.0);
                for i in 0..n {
                    let t = (i as f64 + 0.5) * perimeter / n as f64;
                    // Clockwise from the top-left corner: top, right,
                    // bottom, left.
                    let local = if t < w {
                        Point::new(-hw + t, -hh)
                    } else if t < w + h {
                        Point::new(hw, -hh + (t - w))
                    } else if t < 2.0 * w + h {
                        Point::new(hw - (t - w - h), hh)
                    } else {
                        Point::new(-hw, hh - (t - 2.0 * w - h))
                    };
                    let p = Point::new(self.x + local.x, self.y + local.y);
                    out.push(rotate_point(p, center, self.rotation));
                }
            }
        }
        out
    }

    /// Resizes the seat list to `count`, keeping assignments and
    /// enabled overrides by seat index. Guests on truncated seats are
    /// returned so the caller can report the evictions.
    pub fn rebuild_seats(&mut self, count: u32) -> Vec<Uuid> {
        let count = count as usize;
        let mut evicted = Vec::new();
        if self.seats.len() > count {
            for seat in self.seats.drain(count..) {
                if let Some(guest) = seat.guest_id {
                    evicted.push(guest);
                }
            }
        } else {
            while self.seats.len() < count {
                self.seats.push(Seat::new(self.seats.len() as u32));
            }
        }
        evicted
    }

    /// Applies a patch to this table.
    ///
    /// When `auto_capacity` ends up set, the seat count is recomputed
    /// from the table perimeter and `seat_spacing` (venue units of edge
    /// per seat); an explicit `seats_count` is otherwise honored up to
    /// the structural maximum. Returns the guests evicted by a
    /// shrinking seat list.
    pub fn apply_patch(&mut self, patch: &TablePatch, seat_spacing: f64) -> Result<Vec<Uuid>, LayoutError> {
        if let Some(count) = patch.seats_count {
            if count > MAX_SEATS_PER_TABLE {
                return Err(LayoutError::InvalidCapacity {
                    requested: count,
                    max: MAX_SEATS_PER_TABLE,
                });
            }
        }

        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(shape) = patch.shape {
            self.shape = shape;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(auto) = patch.auto_capacity {
            self.auto_capacity = auto;
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }

        let new_count = if self.auto_capacity {
            let fitted = (self.shape.perimeter() / seat_spacing).floor() as u32;
            fitted.clamp(1, MAX_SEATS_PER_TABLE)
        } else {
            patch.seats_count.unwrap_or_else(|| self.seats_count())
        };

        Ok(self.rebuild_seats(new_count))
    }

    /// Clones this table under a new id, dropping guest assignments.
    ///
    /// Guests stay unique across the plan, so a copy never carries the
    /// original's occupants.
    pub fn duplicated(&self, new_id: u64, dx: f64, dy: f64) -> Table {
        let mut copy = self.clone();
        copy.id = new_id;
        copy.x += dx;
        copy.y += dy;
        for seat in &mut copy.seats {
            seat.guest_id = None;
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_table(seats: u32) -> Table {
        Table::new(1, "Table 1", TableShape::Round { diameter: 120.0 }, 500.0, 400.0, seats)
    }

    #[test]
    fn test_seat_positions_deterministic() {
        let table = round_table(8);
        assert_eq!(table.seat_positions(), table.seat_positions());
    }

    #[test]
    fn test_round_seats_on_ring() {
        let table = round_table(6);
        let r = 60.0 + SEAT_RING_GAP;
        for p in table.seat_positions() {
            assert!((p.distance_to(&table.center()) - r).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rect_seats_proportional_to_edges() {
        let table = Table::new(
            2,
            "Head table",
            TableShape::Rect { width: 200.0, height: 50.0 },
            300.0,
            300.0,
            10,
        );
        let positions = table.seat_positions();
        assert_eq!(positions.len(), 10);
        // The long edges must hold more seats than the short ones.
        let hh = 25.0 + SEAT_RING_GAP;
        let on_long_edges = positions
            .iter()
            .filter(|p| (p.y - (300.0 - hh)).abs() < 1e-6 || (p.y - (300.0 + hh)).abs() < 1e-6)
            .count();
        assert!(on_long_edges > positions.len() / 2);
    }

    #[test]
    fn test_rebuild_preserves_assignments_by_index() {
        let mut table = round_table(4);
        let guest = Uuid::new_v4();
        table.seats[1].guest_id = Some(guest);
        table.seats[2].enabled = false;

        let evicted = table.rebuild_seats(6);
        assert!(evicted.is_empty());
        assert_eq!(table.seats[1].guest_id, Some(guest));
        assert!(!table.seats[2].enabled);
        assert_eq!(table.seats_count(), 6);
    }

    #[test]
    fn test_rebuild_reports_evicted_guests() {
        let mut table = round_table(4);
        let guest = Uuid::new_v4();
        table.seats[3].guest_id = Some(guest);

        let evicted = table.rebuild_seats(2);
        assert_eq!(evicted, vec![guest]);
        assert_eq!(table.seats_count(), 2);
    }

    #[test]
    fn test_patch_rejects_over_capacity() {
        let mut table = round_table(8);
        let patch = TablePatch {
            seats_count: Some(MAX_SEATS_PER_TABLE + 1),
            ..Default::default()
        };
        let err = table.apply_patch(&patch, 60.0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidCapacity { .. }));
        // Rejected patch leaves the table untouched.
        assert_eq!(table.seats_count(), 8);
    }

    #[test]
    fn test_auto_capacity_tracks_perimeter() {
        let mut table = round_table(2);
        let patch = TablePatch {
            auto_capacity: Some(true),
            ..Default::default()
        };
        table.apply_patch(&patch, 60.0).unwrap();
        let expected = (std::f64::consts::PI * 120.0 / 60.0).floor() as u32;
        assert_eq!(table.seats_count(), expected);
    }

    #[test]
    fn test_footprint_accounts_for_rotation() {
        let mut table = Table::new(
            3,
            "Rect",
            TableShape::Rect { width: 100.0, height: 40.0 },
            0.0,
            0.0,
            4,
        );
        let flat = table.footprint();
        table.rotation = 90.0;
        let turned = table.footprint();
        assert!((turned.width() - flat.height()).abs() < 1e-6);
        assert!((turned.height() - flat.width()).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_drops_guests() {
        let mut table = round_table(4);
        table.seats[0].guest_id = Some(Uuid::new_v4());
        let copy = table.duplicated(9, 30.0, 30.0);
        assert_eq!(copy.id, 9);
        assert!(copy.seats.iter().all(|s| s.guest_id.is_none()));
        assert_eq!(copy.seats_count(), 4);
    }
}
