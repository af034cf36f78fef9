//! Snapshot-based undo/redo, kept separately per logical view.
//!
//! Every mutating command deep-copies the pre-mutation layout into the
//! view's stack before it commits. Restoring a snapshot replaces the
//! live layout wholesale, so there is no command inversion logic and no
//! shared references between history and live state.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use seatplan_core::constants::HISTORY_DEPTH;

use crate::model::Table;
use crate::venue::AreaRegion;

/// The two independent seating contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanView {
    #[default]
    Ceremony,
    Banquet,
}

impl PlanView {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanView::Ceremony => "ceremony",
            PlanView::Banquet => "banquet",
        }
    }
}

/// An immutable deep copy of one view's layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub tables: Vec<Table>,
    pub regions: Vec<AreaRegion>,
}

/// Bounded undo/redo stack for one view.
///
/// Recording a snapshot discards any redo tail (standard undo-branch
/// semantics) and evicts the oldest entry once the depth cap is
/// exceeded.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    undo: VecDeque<LayoutSnapshot>,
    redo: Vec<LayoutSnapshot>,
    max_depth: usize,
}

impl HistoryStack {
    /// Creates an empty stack bounded to `max_depth` undo entries.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Records the pre-mutation snapshot of a committed command.
    pub fn record(&mut self, snapshot: LayoutSnapshot) {
        self.redo.clear();
        self.undo.push_back(snapshot);
        while self.undo.len() > self.max_depth {
            self.undo.pop_front();
        }
    }

    /// Steps back, exchanging `current` for the previous snapshot.
    /// Returns `None` at the earliest entry (no-op).
    pub fn undo(&mut self, current: LayoutSnapshot) -> Option<LayoutSnapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Steps forward, exchanging `current` for the next snapshot.
    /// Returns `None` at the latest entry (no-op).
    pub fn redo(&mut self, current: LayoutSnapshot) -> Option<LayoutSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        while self.undo.len() > self.max_depth {
            self.undo.pop_front();
        }
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drops all history (document load, new plan).
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(HISTORY_DEPTH)
    }
}

/// Undo history keyed per logical view. Switching views never shares or
/// interleaves stacks.
#[derive(Debug, Clone, Default)]
pub struct PlanHistory {
    ceremony: HistoryStack,
    banquet: HistoryStack,
}

impl PlanHistory {
    pub fn stack(&self, view: PlanView) -> &HistoryStack {
        match view {
            PlanView::Ceremony => &self.ceremony,
            PlanView::Banquet => &self.banquet,
        }
    }

    pub fn stack_mut(&mut self, view: PlanView) -> &mut HistoryStack {
        match view {
            PlanView::Ceremony => &mut self.ceremony,
            PlanView::Banquet => &mut self.banquet,
        }
    }

    pub fn clear(&mut self) {
        self.ceremony.clear();
        self.banquet.clear();
    }
}
