//! Plan documents, save/load, and the autosave debounce.
//!
//! The engine is persistence-agnostic: it emits and consumes a plain
//! serde document at this boundary. Saving is fire-and-forget from the
//! engine's perspective; a failed save never touches in-memory state
//! and is surfaced upward so the storage collaborator can retry.

use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use seatplan_core::constants::AUTOSAVE_DEBOUNCE_MS;
use seatplan_core::error::PersistenceError;

use crate::history::PlanView;
use crate::model::Table;
use crate::venue::{AreaRegion, VenueSpace};

use super::{PlannerState, ViewState};

/// Debounce tracker for autosaving.
///
/// Pure scheduling: the engine marks the plan dirty on every commit and
/// the embedding event loop polls [`due`] to decide when to flush. The
/// in-memory invariants never depend on it.
///
/// [`due`]: AutosaveTimer::due
#[derive(Debug, Clone, Default)]
pub struct AutosaveTimer {
    dirty_at: Option<Instant>,
}

impl AutosaveTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the plan dirty, restarting the inactivity window.
    pub fn mark_dirty(&mut self, now: Instant) {
        self.dirty_at = Some(now);
    }

    /// Whether unsaved changes exist.
    pub fn is_dirty(&self) -> bool {
        self.dirty_at.is_some()
    }

    /// Whether the inactivity window has elapsed since the last change.
    pub fn due(&self, now: Instant) -> bool {
        match self.dirty_at {
            Some(at) => now.duration_since(at) >= Duration::from_millis(AUTOSAVE_DEBOUNCE_MS),
            None => false,
        }
    }

    /// Clears the dirty flag after a successful flush.
    pub fn clear(&mut self) {
        self.dirty_at = None;
    }
}

/// Hall configuration stored with each view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle_min: Option<f64>,
}

/// One view's persisted layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDocument {
    pub config: ViewConfig,
    pub tables: Vec<Table>,
    pub regions: Vec<AreaRegion>,
}

impl ViewDocument {
    fn from_view(state: &ViewState) -> Self {
        Self {
            config: ViewConfig {
                width: state.venue.width,
                height: state.venue.height,
                aisle_min: state.venue.aisle_min,
            },
            tables: state.plan.tables().to_vec(),
            regions: state.venue.regions().to_vec(),
        }
    }

    fn into_view(self) -> ViewState {
        let mut venue = VenueSpace::new(self.config.width, self.config.height);
        venue.aisle_min = self.config.aisle_min;
        venue.replace_regions(self.regions);
        let mut state = ViewState {
            plan: Default::default(),
            venue,
        };
        state.plan.replace_tables(self.tables);
        state
    }
}

/// The full plan document exchanged with the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    pub ceremony: ViewDocument,
    pub banquet: ViewDocument,
    pub updated_at: String,
}

impl PlannerState {
    /// Serializes both views into a plan document.
    pub fn to_document(&self) -> PlanFile {
        PlanFile {
            ceremony: ViewDocument::from_view(self.view_state(PlanView::Ceremony)),
            banquet: ViewDocument::from_view(self.view_state(PlanView::Banquet)),
            updated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Replaces both views from a plan document and drops all history.
    pub fn apply_document(&mut self, file: PlanFile) {
        *self.view_state_mut(PlanView::Ceremony) = file.ceremony.into_view();
        *self.view_state_mut(PlanView::Banquet) = file.banquet.into_view();
        self.history_mut().clear();
        self.autosave.clear();
    }

    /// Saves the plan document as JSON.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.to_document())?;
        std::fs::write(&path, json)?;
        self.autosave.clear();
        debug!(path = %path.as_ref().display(), "saved plan");
        Ok(())
    }

    /// Loads a plan document from JSON.
    ///
    /// A missing file means no prior plan exists: both views reset to
    /// empty layouts with default venue dimensions.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no saved plan, starting empty");
            *self.view_state_mut(PlanView::Ceremony) = ViewState::default();
            *self.view_state_mut(PlanView::Banquet) = ViewState::default();
            self.history_mut().clear();
            self.autosave.clear();
            return Ok(());
        }
        let json = std::fs::read_to_string(path)?;
        let file: PlanFile = serde_json::from_str(&json)?;
        self.apply_document(file);
        Ok(())
    }

    /// Whether unsaved changes exist.
    pub fn is_dirty(&self) -> bool {
        self.autosave.is_dirty()
    }

    /// Whether the autosave debounce window has elapsed.
    pub fn autosave_due(&self, now: Instant) -> bool {
        self.autosave.due(now)
    }

    /// Flushes a due autosave to the given path.
    ///
    /// On failure the plan stays dirty (the debounce will fire again)
    /// and the error is surfaced as a `PersistenceError`; in-memory
    /// state is already committed and unaffected either way.
    pub fn flush_autosave(
        &mut self,
        path: impl AsRef<std::path::Path>,
    ) -> std::result::Result<(), PersistenceError> {
        self.save_to_file(&path).map_err(|e| {
            warn!(error = %e, "autosave failed");
            PersistenceError::SaveFailed {
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autosave_debounce_window() {
        let mut timer = AutosaveTimer::new();
        let start = Instant::now();
        assert!(!timer.due(start));

        timer.mark_dirty(start);
        assert!(timer.is_dirty());
        assert!(!timer.due(start + Duration::from_millis(AUTOSAVE_DEBOUNCE_MS - 1)));
        assert!(timer.due(start + Duration::from_millis(AUTOSAVE_DEBOUNCE_MS)));
    }

    #[test]
    fn test_new_mutation_restarts_window() {
        let mut timer = AutosaveTimer::new();
        let start = Instant::now();
        timer.mark_dirty(start);
        let later = start + Duration::from_millis(500);
        timer.mark_dirty(later);
        assert!(!timer.due(start + Duration::from_millis(AUTOSAVE_DEBOUNCE_MS)));
        assert!(timer.due(later + Duration::from_millis(AUTOSAVE_DEBOUNCE_MS)));
    }

    #[test]
    fn test_clear_disarms() {
        let mut timer = AutosaveTimer::new();
        let start = Instant::now();
        timer.mark_dirty(start);
        timer.clear();
        assert!(!timer.is_dirty());
        assert!(!timer.due(start + Duration::from_secs(10)));
    }
}
