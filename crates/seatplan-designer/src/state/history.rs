//! Undo/redo over the active view.

use super::PlannerState;

impl PlannerState {
    /// Steps the active view back one snapshot. Returns whether
    /// anything changed; undoing past the earliest entry is a no-op.
    pub fn undo(&mut self) -> bool {
        let view = self.view();
        let current = self.snapshot();
        match self.history_mut().stack_mut(view).undo(current) {
            Some(previous) => {
                self.restore(previous);
                self.autosave.mark_dirty(std::time::Instant::now());
                true
            }
            None => false,
        }
    }

    /// Steps the active view forward one snapshot. Returns whether
    /// anything changed; redoing past the latest entry is a no-op.
    pub fn redo(&mut self) -> bool {
        let view = self.view();
        let current = self.snapshot();
        match self.history_mut().stack_mut(view).redo(current) {
            Some(next) => {
                self.restore(next);
                self.autosave.mark_dirty(std::time::Instant::now());
                true
            }
            None => false,
        }
    }

    /// Whether the active view has anything to undo.
    pub fn can_undo(&self) -> bool {
        self.history().stack(self.view()).can_undo()
    }

    /// Whether the active view has anything to redo.
    pub fn can_redo(&self) -> bool {
        self.history().stack(self.view()).can_redo()
    }
}
