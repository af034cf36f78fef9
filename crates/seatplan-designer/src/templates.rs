//! Template strategies that generate a full table layout for a view.
//!
//! Every strategy works against the venue passed in: candidate
//! positions that would land a table on an obstacle region are skipped,
//! and all produced layouts satisfy the resolver invariants (pairwise
//! separation, canvas containment) by construction. The planner state
//! re-validates before committing anyway.

use tracing::{debug, warn};

use seatplan_core::constants::{
    AISLE_WIDTH, GUESTS_PER_TABLE, MIN_TABLE_GAP, TEMPLATE_MARGIN_X, TEMPLATE_MARGIN_Y,
    TEMPLATE_SPACING, TEMPLATE_TABLE_DIAMETER,
};
use seatplan_core::geometry::Point;

use crate::assignment::Guest;
use crate::model::{Table, TableShape};
use crate::resolver::tables_overlap;
use crate::venue::{RegionKind, VenueSpace};

/// A named layout-generation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateStrategy {
    /// Regular rows × columns grid.
    Grid { rows: u32, cols: u32 },
    /// Tables evenly spaced on a ring around the usable-area centroid.
    Circular { count: u32 },
    /// Two column banks split by a central walkway.
    Aisle { count: u32 },
    /// Tables along the top, right, and bottom edges.
    UShape { count: u32 },
    /// Table count and capacity derived from the guest list.
    Suggested,
}

/// Inputs shared by every strategy.
pub struct TemplateParams<'a> {
    pub venue: &'a VenueSpace,
    /// Guest directory; only the suggested strategy reads it.
    pub guests: &'a [Guest],
    pub seats_per_table: u32,
}

/// Generates a table layout for the given strategy.
pub fn generate(strategy: TemplateStrategy, params: &TemplateParams) -> Vec<Table> {
    match strategy {
        TemplateStrategy::Grid { rows, cols } => generate_grid(rows, cols, params),
        TemplateStrategy::Circular { count } => generate_circular(count, params),
        TemplateStrategy::Aisle { count } => generate_aisle(count, params),
        TemplateStrategy::UShape { count } => generate_ushape(count, params),
        TemplateStrategy::Suggested => generate_suggested(params),
    }
}

/// Builds the standard template table at a candidate position.
fn template_table(index: usize, at: Point, seats: u32) -> Table {
    Table::new(
        index as u64,
        format!("Table {index}"),
        TableShape::Round {
            diameter: TEMPLATE_TABLE_DIAMETER,
        },
        at.x,
        at.y,
        seats,
    )
}

/// True when a template table centered at `at` fits the venue: fully on
/// the canvas and clear of obstacle regions.
fn candidate_fits(at: Point, venue: &VenueSpace) -> bool {
    let probe = template_table(0, at, 0);
    let fp = probe.footprint();
    fp.contained_in(&venue.bounds()) && !venue.blocks_placement(&fp)
}

/// Near-square grid dimensions for a table count.
fn grid_dimensions(total: u32) -> (u32, u32) {
    if total == 0 {
        return (0, 0);
    }
    let cols = (total as f64).sqrt().ceil() as u32;
    let rows = total.div_ceil(cols);
    (rows, cols)
}

/// Candidate centers for a rows × columns grid, centered in the hall.
///
/// Spacing starts at the preferred template spacing and shrinks to fit
/// the hall, but never below the minimum table gap.
fn grid_positions(rows: u32, cols: u32, venue: &VenueSpace) -> Vec<Point> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let d = TEMPLATE_TABLE_DIAMETER;
    let avail_w = venue.width - 2.0 * TEMPLATE_MARGIN_X;
    let avail_h = venue.height - 2.0 * TEMPLATE_MARGIN_Y;

    let fit_spacing = |count: u32, avail: f64| -> f64 {
        let total = count as f64 * d + (count as f64 - 1.0) * TEMPLATE_SPACING;
        if total > avail && count > 1 {
            ((avail - count as f64 * d) / (count as f64 - 1.0)).max(MIN_TABLE_GAP)
        } else {
            TEMPLATE_SPACING
        }
    };
    let spacing_x = fit_spacing(cols, avail_w);
    let spacing_y = fit_spacing(rows, avail_h);

    let span_x = cols as f64 * d + (cols as f64 - 1.0) * spacing_x;
    let span_y = rows as f64 * d + (rows as f64 - 1.0) * spacing_y;
    let start_x = TEMPLATE_MARGIN_X + (avail_w - span_x) / 2.0;
    let start_y = TEMPLATE_MARGIN_Y + (avail_h - span_y) / 2.0;

    let mut positions = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            positions.push(Point::new(
                start_x + d / 2.0 + col as f64 * (d + spacing_x),
                start_y + d / 2.0 + row as f64 * (d + spacing_y),
            ));
        }
    }
    positions
}

/// Grid strategy: obstacle cells are skipped, not relocated.
fn generate_grid(rows: u32, cols: u32, params: &TemplateParams) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut skipped = 0usize;
    for at in grid_positions(rows, cols, params.venue) {
        if !candidate_fits(at, params.venue) {
            skipped += 1;
            continue;
        }
        tables.push(template_table(tables.len() + 1, at, params.seats_per_table));
    }
    if skipped > 0 {
        warn!(skipped, "grid template skipped blocked cells");
    }
    tables
}

/// Centroid of the usable area: the free-drawn perimeter outline when
/// one exists, otherwise the canvas center.
fn usable_centroid(venue: &VenueSpace) -> Point {
    let perimeter = venue
        .regions()
        .iter()
        .find(|r| r.kind == RegionKind::Perimeter);
    match perimeter {
        Some(region) if !region.points.is_empty() => {
            let n = region.points.len() as f64;
            let (sx, sy) = region
                .points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            Point::new(sx / n, sy / n)
        }
        _ => Point::new(venue.width / 2.0, venue.height / 2.0),
    }
}

/// Candidate centers on a ring around the usable-area centroid.
///
/// The radius grows with the table count so adjacent tables keep the
/// minimum gap on the circumference, capped at 40% of the smaller hall
/// dimension.
fn ring_positions(count: u32, venue: &VenueSpace) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let d = TEMPLATE_TABLE_DIAMETER;
    let center = usable_centroid(venue);
    let circumference = count as f64 * (d + MIN_TABLE_GAP);
    let radius = (circumference / std::f64::consts::TAU)
        .min(venue.width.min(venue.height) * 0.4);

    let step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            // Start from the top of the ring.
            let angle = i as f64 * step - std::f64::consts::FRAC_PI_2;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Circular strategy.
fn generate_circular(count: u32, params: &TemplateParams) -> Vec<Table> {
    let mut tables = Vec::new();
    for at in ring_positions(count, params.venue) {
        if !candidate_fits(at, params.venue) {
            continue;
        }
        tables.push(template_table(tables.len() + 1, at, params.seats_per_table));
    }
    tables
}

/// Aisle strategy: column banks left and right of a central walkway.
fn generate_aisle(count: u32, params: &TemplateParams) -> Vec<Table> {
    if count == 0 {
        return Vec::new();
    }
    let venue = params.venue;
    let d = TEMPLATE_TABLE_DIAMETER;
    let (rows, _) = grid_dimensions(count);
    let cols_per_side = count.div_ceil(rows).div_ceil(2).max(1);

    let side_width = (venue.width - 2.0 * TEMPLATE_MARGIN_X - AISLE_WIDTH) / 2.0;
    let spacing_x = if cols_per_side > 1 {
        ((side_width - d) / cols_per_side as f64).max(MIN_TABLE_GAP)
    } else {
        TEMPLATE_SPACING
    };
    let spacing_y = if rows > 1 {
        ((venue.height - 2.0 * TEMPLATE_MARGIN_Y - rows as f64 * d) / rows as f64)
            .max(MIN_TABLE_GAP)
    } else {
        TEMPLATE_SPACING
    };

    let per_row = cols_per_side * 2;
    let mut tables = Vec::new();
    for i in 0..count {
        let row = i / per_row;
        let left_side = i % per_row < cols_per_side;
        let col = (i % cols_per_side) as f64;

        let x = if left_side {
            TEMPLATE_MARGIN_X + d / 2.0 + col * (d + spacing_x)
        } else {
            TEMPLATE_MARGIN_X + side_width + AISLE_WIDTH + d / 2.0 + col * (d + spacing_x)
        };
        let y = TEMPLATE_MARGIN_Y + d / 2.0 + row as f64 * (d + spacing_y);

        let at = Point::new(x, y);
        if !candidate_fits(at, venue) {
            continue;
        }
        tables.push(template_table(tables.len() + 1, at, params.seats_per_table));
    }
    tables
}

/// U-shape strategy: top edge left-to-right, right edge downward, then
/// bottom edge right-to-left.
fn generate_ushape(count: u32, params: &TemplateParams) -> Vec<Table> {
    if count == 0 {
        return Vec::new();
    }
    let venue = params.venue;
    let d = TEMPLATE_TABLE_DIAMETER;
    let margin = TEMPLATE_MARGIN_X;
    let per_side = count.div_ceil(3).max(1);

    let spacing_x = ((venue.width - 2.0 * margin - d) / per_side as f64).max(MIN_TABLE_GAP);
    let spacing_y = ((venue.height - 2.0 * margin - d) / 3.0).max(MIN_TABLE_GAP);

    let mut positions = Vec::with_capacity(count as usize);
    for i in 0..per_side.min(count) {
        positions.push(Point::new(
            margin + d / 2.0 + i as f64 * spacing_x,
            margin + d / 2.0,
        ));
    }
    let right_count = (count - positions.len() as u32).div_ceil(2);
    for i in 0..right_count {
        positions.push(Point::new(
            venue.width - margin - d / 2.0,
            margin + d / 2.0 + (i as f64 + 1.0) * spacing_y,
        ));
    }
    let bottom_count = count as usize - positions.len();
    for i in 0..bottom_count {
        positions.push(Point::new(
            venue.width - margin - d / 2.0 - i as f64 * spacing_x,
            venue.height - margin - d / 2.0,
        ));
    }

    let mut tables = Vec::new();
    for at in positions {
        if !candidate_fits(at, venue) {
            continue;
        }
        if tables
            .iter()
            .any(|t| tables_overlap(t, &template_table(0, at, 0), 0.0))
        {
            // Edge runs can meet at the corners on small halls.
            continue;
        }
        tables.push(template_table(tables.len() + 1, at, params.seats_per_table));
    }
    tables
}

/// Every lattice candidate across the whole canvas, row-major.
fn lattice_positions(venue: &VenueSpace) -> Vec<Point> {
    let d = TEMPLATE_TABLE_DIAMETER;
    let step = d + MIN_TABLE_GAP;
    let mut positions = Vec::new();
    let mut y = d / 2.0 + MIN_TABLE_GAP / 2.0;
    while y + d / 2.0 <= venue.height {
        let mut x = d / 2.0 + MIN_TABLE_GAP / 2.0;
        while x + d / 2.0 <= venue.width {
            positions.push(Point::new(x, y));
            x += step;
        }
        y += step;
    }
    positions
}

/// Suggested strategy: table count from the guest list, grid candidates
/// first, then the ring, then a whole-canvas lattice sweep. On
/// exhaustion of the primary pattern the remaining tables are appended
/// from the sweep with relaxed spacing rather than failing outright.
fn generate_suggested(params: &TemplateParams) -> Vec<Table> {
    let venue = params.venue;
    let total_guests: u32 = params.guests.iter().map(Guest::party_size).sum();
    if total_guests == 0 {
        return Vec::new();
    }
    let count = total_guests.div_ceil(GUESTS_PER_TABLE).max(1);
    let seats = GUESTS_PER_TABLE;
    debug!(guests = total_guests, tables = count, "suggesting layout from guest list");

    let (rows, cols) = grid_dimensions(count);
    let mut candidates = grid_positions(rows, cols, venue);
    candidates.extend(ring_positions(count, venue));
    candidates.extend(lattice_positions(venue));

    let mut tables: Vec<Table> = Vec::with_capacity(count as usize);
    let place = |tables: &mut Vec<Table>, at: Point, clearance: f64, venue: &VenueSpace| -> bool {
        if !candidate_fits(at, venue) {
            return false;
        }
        let candidate = template_table(tables.len() + 1, at, seats);
        if tables.iter().any(|t| tables_overlap(t, &candidate, clearance)) {
            return false;
        }
        tables.push(candidate);
        true
    };

    for at in &candidates {
        if tables.len() as u32 == count {
            break;
        }
        place(&mut tables, *at, MIN_TABLE_GAP, venue);
    }

    if (tables.len() as u32) < count {
        // Overflow pass: relax the walkway clearance, keep the hard
        // no-overlap invariant.
        warn!(
            placed = tables.len(),
            wanted = count,
            "primary pattern exhausted, appending overflow tables"
        );
        for at in lattice_positions(venue) {
            if tables.len() as u32 == count {
                break;
            }
            place(&mut tables, at, 0.0, venue);
        }
    }

    if (tables.len() as u32) < count {
        warn!(
            placed = tables.len(),
            wanted = count,
            "venue has no room for the full suggested layout"
        );
    }
    tables
}
