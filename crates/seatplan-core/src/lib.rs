//! # Seatplan Core
//!
//! Core types for the seatplan layout engine: 2D geometry primitives,
//! error types, and the shared constants used by the designer crate.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{AssignmentError, Error, LayoutError, PersistenceError, Result};
pub use geometry::{
    distance, path_from_points, polygon_self_intersects, rotate_point, segments_intersect, smooth,
    Bounds, PathCommand, Point,
};
