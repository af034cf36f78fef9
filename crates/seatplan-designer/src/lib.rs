//! # Seatplan Designer
//!
//! This crate is the seating-plan layout engine: it places tables and
//! seats inside a bounded venue, resolves them against drawn obstacle
//! regions, keeps every table on the canvas, assigns guests to seats
//! under capacity constraints, and supports undo/redo over all of it.
//!
//! ## Core Components
//!
//! ### Layout Elements
//! - **Tables/Seats**: Round and rectangular tables with derived seat rings
//! - **Venue**: Hall dimensions plus drawn area regions (obstacles, doors,
//!   stages, dance floors, bars, free-drawn perimeters)
//! - **Templates**: Grid, circular, aisle, U-shape, and guest-driven layouts
//! - **Viewport**: Zoom/pan mapping between venue units and screen pixels
//!
//! ### Invariant Maintenance
//! - **Resolver**: No-overlap nudging and canvas containment clamping
//! - **Assignment**: Per-table capacity and one-seat-per-guest uniqueness
//! - **History**: Snapshot undo/redo, bounded, kept per logical view
//!
//! ## Architecture
//!
//! ```text
//! PlannerState (command surface)
//!   ├── FloorPlan per view (tables and seats)
//!   ├── VenueSpace per view (canvas + regions)
//!   ├── PlanHistory (snapshot stacks per view)
//!   └── Viewport (presentation transform)
//!
//! Resolver (overlap + containment, checked on every placement command)
//! Templates (layout generation, obstacle-aware)
//! Assignment (guest seating over the floor plan)
//! File I/O (plan document boundary + autosave debounce)
//! ```
//!
//! All commands run synchronously on the caller's thread; a rejected
//! command leaves the plan exactly as it was and records no history.
//!
//! ## Usage
//!
//! ```rust
//! use seatplan_designer::{PlannerState, TableShape};
//!
//! let mut state = PlannerState::new();
//! let id = state
//!     .add_table(TableShape::Round { diameter: 120.0 }, 400.0, 300.0, 8)
//!     .unwrap();
//! state.undo();
//! assert!(state.plan().get(id).is_none());
//! ```

pub mod assignment;
pub mod history;
pub mod model;
pub mod plan;
pub mod resolver;
pub mod state;
pub mod templates;
pub mod venue;
pub mod viewport;

pub use assignment::{
    assign_guest, assignment_conflicts, find_guest_seat, toggle_seat_enabled, unassign_all,
    unassign_guest, Guest, RsvpStatus,
};
pub use history::{HistoryStack, LayoutSnapshot, PlanHistory, PlanView};
pub use model::{Seat, Table, TablePatch, TableShape};
pub use plan::FloorPlan;
pub use resolver::{clamp_tables_within_canvas, resolve_overlaps, tables_overlap, validate_plan};
pub use state::{AutosaveTimer, PlanFile, PlannerState, ViewConfig, ViewDocument, ViewState};
pub use templates::{generate, TemplateParams, TemplateStrategy};
pub use venue::{AreaRegion, RegionKind, VenueSpace};
pub use viewport::Viewport;
