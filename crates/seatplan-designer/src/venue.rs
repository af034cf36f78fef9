//! Venue space: hall dimensions and drawn area regions.
//!
//! Regions are polygonal zones drawn over the floor plan. Obstacles
//! (and the free-drawn perimeter) block table placement; doors, stages,
//! dance floors, and bars are advisory markers the resolver ignores.

use serde::{Deserialize, Serialize};
use tracing::warn;

use seatplan_core::constants::{DEFAULT_HALL_HEIGHT, DEFAULT_HALL_WIDTH};
use seatplan_core::error::LayoutError;
use seatplan_core::geometry::{
    path_from_points, polygon_self_intersects, segments_intersect, Bounds, PathCommand, Point,
};

/// Kind of a drawn area region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Obstacle,
    Door,
    Stage,
    DanceFloor,
    Bar,
    /// Free-drawn hall outline overriding the rectangular perimeter.
    Perimeter,
}

impl RegionKind {
    /// Whether tables must stay out of this region.
    pub fn blocks_placement(&self) -> bool {
        matches!(self, RegionKind::Obstacle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Obstacle => "obstacle",
            RegionKind::Door => "door",
            RegionKind::Stage => "stage",
            RegionKind::DanceFloor => "dance_floor",
            RegionKind::Bar => "bar",
            RegionKind::Perimeter => "perimeter",
        }
    }
}

/// A polygonal zone on the floor plan.
///
/// Points are stored without the closing duplicate of the first point;
/// closure is implicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRegion {
    pub id: u64,
    pub kind: RegionKind,
    pub points: Vec<Point>,
}

impl AreaRegion {
    /// Bounding box of the polygon.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.points).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Closed path descriptor handed to the rendering layer.
    pub fn path(&self) -> Vec<PathCommand> {
        path_from_points(&self.points, true)
    }

    /// Ray-casting point-in-polygon test.
    pub fn contains_point(&self, p: &Point) -> bool {
        let pts = &self.points;
        let n = pts.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (pts[i], pts[j]);
            if (a.y > p.y) != (b.y > p.y)
                && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Tests whether the polygon overlaps an axis-aligned box.
    ///
    /// Checks polygon vertices inside the box, box corners inside the
    /// polygon, and edge crossings, after a cheap bounding-box reject.
    pub fn intersects_bounds(&self, rect: &Bounds) -> bool {
        if self.points.len() < 3 || !self.bounds().intersects(rect) {
            return false;
        }
        if self.points.iter().any(|p| rect.contains_point(p)) {
            return true;
        }
        let corners = [
            Point::new(rect.min_x, rect.min_y),
            Point::new(rect.max_x, rect.min_y),
            Point::new(rect.max_x, rect.max_y),
            Point::new(rect.min_x, rect.max_y),
        ];
        if corners.iter().any(|c| self.contains_point(c)) {
            return true;
        }
        let n = self.points.len();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            for k in 0..4 {
                if segments_intersect(a, b, corners[k], corners[(k + 1) % 4]) {
                    return true;
                }
            }
        }
        false
    }
}

/// The venue: canvas dimensions plus the drawn regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSpace {
    pub width: f64,
    pub height: f64,
    /// Minimum walkway width requested for this hall, when configured.
    pub aisle_min: Option<f64>,
    regions: Vec<AreaRegion>,
    next_region_id: u64,
}

impl VenueSpace {
    /// Creates a venue with the given canvas dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            aisle_min: None,
            regions: Vec::new(),
            next_region_id: 1,
        }
    }

    /// Canvas bounds `[0, width] × [0, height]`.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    /// Validates and adds a drawn region, returning its id.
    ///
    /// Polygons with fewer than 3 points or a self-crossing outline are
    /// rejected with `InvalidGeometry`.
    pub fn add_region(&mut self, kind: RegionKind, points: Vec<Point>) -> Result<u64, LayoutError> {
        if points.len() < 3 {
            warn!(kind = kind.as_str(), points = points.len(), "rejected degenerate region");
            return Err(LayoutError::InvalidGeometry {
                reason: format!("polygon needs at least 3 points, got {}", points.len()),
            });
        }
        if polygon_self_intersects(&points) {
            warn!(kind = kind.as_str(), "rejected self-intersecting region");
            return Err(LayoutError::InvalidGeometry {
                reason: "polygon outline crosses itself".to_string(),
            });
        }
        let id = self.next_region_id;
        self.next_region_id += 1;
        self.regions.push(AreaRegion { id, kind, points });
        Ok(id)
    }

    /// Removes a region by id. Returns the removed region when present.
    pub fn remove_region(&mut self, id: u64) -> Option<AreaRegion> {
        let idx = self.regions.iter().position(|r| r.id == id)?;
        Some(self.regions.remove(idx))
    }

    /// Gets a region by id.
    pub fn region(&self, id: u64) -> Option<&AreaRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// All regions in draw order.
    pub fn regions(&self) -> &[AreaRegion] {
        &self.regions
    }

    /// Replaces the region set (snapshot restore, document load).
    pub fn replace_regions(&mut self, regions: Vec<AreaRegion>) {
        self.next_region_id = regions
            .iter()
            .map(|r| r.id + 1)
            .max()
            .unwrap_or(1)
            .max(self.next_region_id);
        self.regions = regions;
    }

    /// Tests whether a point lies inside any region of the given kind.
    pub fn point_in_region_kind(&self, p: &Point, kind: RegionKind) -> bool {
        self.regions
            .iter()
            .filter(|r| r.kind == kind)
            .any(|r| r.contains_point(p))
    }

    /// Tests whether a footprint overlaps any placement-blocking
    /// region. This is the soft constraint consumed by the template
    /// generator; manual drags are not checked against it.
    pub fn blocks_placement(&self, footprint: &Bounds) -> bool {
        self.regions
            .iter()
            .filter(|r| r.kind.blocks_placement())
            .any(|r| r.intersects_bounds(footprint))
    }
}

impl Default for VenueSpace {
    fn default() -> Self {
        Self::new(DEFAULT_HALL_WIDTH, DEFAULT_HALL_HEIGHT)
    }
}
