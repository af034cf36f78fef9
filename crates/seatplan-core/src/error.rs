//! Error handling for the seatplan engine.
//!
//! Provides error types for each layer of the engine:
//! - Layout errors (geometry/capacity/collision)
//! - Assignment errors (seating guests)
//! - Persistence errors (saving and loading plans)
//!
//! All error types use `thiserror`. Rejected commands never partially
//! apply: the plan is left exactly as it was before the failing command,
//! and no history entry is recorded for it.

use thiserror::Error;

/// Layout error type
///
/// Represents errors raised while placing or reshaping geometry:
/// invalid drawn regions, seat counts outside structural bounds, and
/// collisions the resolver could not clear.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A drawn polygon is degenerate or self-intersecting
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// Why the polygon was rejected.
        reason: String,
    },

    /// Requested seat count is outside structural bounds
    #[error("Invalid capacity: requested {requested}, maximum {max}")]
    InvalidCapacity {
        /// The seat count that was requested.
        requested: u32,
        /// The structural maximum per table.
        max: u32,
    },

    /// Collision resolution did not converge within its iteration budget
    #[error("Could not resolve overlap for table {table_id}")]
    UnresolvableOverlap {
        /// The table whose placement could not be cleared.
        table_id: u64,
    },

    /// Referenced table does not exist in the plan
    #[error("Table {table_id} not found")]
    TableNotFound {
        /// The missing table id.
        table_id: u64,
    },
}

/// Assignment error type
///
/// Represents errors raised while seating guests at tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignmentError {
    /// All enabled seats at the table are already occupied
    #[error("Table {table_id} is full ({seats} enabled seats)")]
    CapacityExceeded {
        /// The full table.
        table_id: u64,
        /// Its enabled seat count.
        seats: u32,
    },

    /// The guest already occupies a seat elsewhere in the plan
    #[error("Guest {guest_id} is already seated at table {table_id}")]
    AlreadyAssigned {
        /// The guest that is already seated.
        guest_id: uuid::Uuid,
        /// The table they currently occupy.
        table_id: u64,
    },

    /// Referenced table does not exist in the plan
    #[error("Table {table_id} not found")]
    TableNotFound {
        /// The missing table id.
        table_id: u64,
    },

    /// Referenced seat index does not exist at the table
    #[error("Seat {seat_index} not found at table {table_id}")]
    SeatNotFound {
        /// The table that was addressed.
        table_id: u64,
        /// The out-of-range seat index.
        seat_index: u32,
    },
}

/// Persistence error type
///
/// Non-fatal to the in-memory engine: the command already succeeded
/// locally and is in history. Failures are surfaced upward so the UI
/// can offer a retry.
#[derive(Error, Debug, Clone)]
pub enum PersistenceError {
    /// Writing the plan document failed
    #[error("Failed to save plan: {reason}")]
    SaveFailed {
        /// Why the save failed.
        reason: String,
    },

    /// Reading the plan document failed
    #[error("Failed to load plan: {reason}")]
    LoadFailed {
        /// Why the load failed.
        reason: String,
    },
}

/// Main error type for the seatplan engine
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Assignment error
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is an assignment error
    pub fn is_assignment_error(&self) -> bool {
        matches!(self, Error::Assignment(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
