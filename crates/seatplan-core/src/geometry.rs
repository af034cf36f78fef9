//! 2D geometry primitives for floor-plan layout.
//!
//! Everything here works in venue units with a top-left origin, matching
//! the coordinate system of the stored floor plans. Screen mapping is a
//! viewport concern and never leaks into these functions.

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Rotates a point around a center by an angle in degrees.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    if angle_deg.abs() < 1e-6 {
        return p;
    }
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos_a - dy * sin_a,
        y: center.y + dx * sin_a + dy * cos_a,
    }
}

/// Signed orientation of the triple (a, b, c).
///
/// Positive for counter-clockwise, negative for clockwise, zero for
/// collinear (within [`EPSILON`]).
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Tests whether the segments `p1p2` and `p3p4` properly intersect.
///
/// Uses the CCW orientation test. Touching endpoints and collinear
/// overlap do NOT count as an intersection: the orientation comparisons
/// are strict, so two segments that merely share a vertex report false.
/// This keeps adjacent edges of a drawn polygon from producing false
/// positives at their shared vertices.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);

    if d1.abs() < EPSILON || d2.abs() < EPSILON || d3.abs() < EPSILON || d4.abs() < EPSILON {
        return false;
    }

    (d1 > 0.0) != (d2 > 0.0) && (d3 > 0.0) != (d4 > 0.0)
}

/// Tests whether a drawn polygon outline crosses itself.
///
/// `points` is the open outline (no closing duplicate of the first
/// point); the closing segment back to the start is implied. Every pair
/// of non-adjacent segments is tested, skipping pairs that share a
/// vertex (consecutive segments, and the first/last segment of the
/// ring). Outlines with fewer than 4 points cannot cross and return
/// false.
pub fn polygon_self_intersects(points: &[Point]) -> bool {
    let n = points.len();
    if n < 4 {
        return false;
    }

    // Segment i runs from points[i] to points[(i + 1) % n]; the last
    // one is the implicit closing edge.
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            let a1 = points[i];
            let a2 = points[(i + 1) % n];
            let b1 = points[j];
            let b2 = points[(j + 1) % n];
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    false
}

/// One iteration of Chaikin corner cutting over an open polyline.
///
/// Each edge is replaced by two points at 25% and 75% interpolation.
/// Repeated application converges toward a smooth curve; outlines with
/// fewer than 3 points are returned as-is.
pub fn smooth(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(points[0]);
    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        out.push(Point::new(
            a.x * 0.75 + b.x * 0.25,
            a.y * 0.75 + b.y * 0.25,
        ));
        out.push(Point::new(
            a.x * 0.25 + b.x * 0.75,
            a.y * 0.25 + b.y * 0.75,
        ));
    }
    out.push(points[points.len() - 1]);
    out
}

/// A presentation-agnostic path command.
///
/// The renderer (canvas, SVG, anything else) decides how to paint
/// these; the engine only describes the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Renders an ordered point list into path commands.
///
/// Emits a `MoveTo` for the first point and `LineTo` for the rest;
/// `closed` appends a `Close`. An empty point list yields an empty
/// path.
pub fn path_from_points(points: &[Point], closed: bool) -> Vec<PathCommand> {
    let mut path = Vec::with_capacity(points.len() + 1);
    let Some(first) = points.first() else {
        return path;
    };
    path.push(PathCommand::MoveTo(*first));
    for p in points.iter().skip(1) {
        path.push(PathCommand::LineTo(*p));
    }
    if closed {
        path.push(PathCommand::Close);
    }
    path
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds from min/max corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Computes the bounds of a point set. Returns `None` when empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Bounds::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            b.expand_to_include(p);
        }
        Some(b)
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grows the box to include a point.
    pub fn expand_to_include(&mut self, p: &Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Returns this box grown by a margin on every side.
    pub fn inflated(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Merges with another box.
    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Tests whether a point lies inside (edges inclusive).
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Tests whether this box overlaps another (touching edges do not
    /// count).
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.max_x <= other.min_x
            || self.min_x >= other.max_x
            || self.max_y <= other.min_y
            || self.min_y >= other.max_y)
    }

    /// Tests whether this box lies entirely inside another.
    pub fn contained_in(&self, outer: &Bounds) -> bool {
        self.min_x >= outer.min_x
            && self.min_y >= outer.min_y
            && self.max_x <= outer.max_x
            && self.max_y <= outer.max_y
    }
}
