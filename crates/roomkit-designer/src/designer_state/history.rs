//! Undo/redo for designer state.

use super::DesignerState;

impl DesignerState {
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Description of the edit the next undo would revert.
    pub fn undo_description(&self) -> Option<&str> {
        self.history.next_undo_description()
    }

    /// Reverts the last recorded edit.
    pub fn undo(&mut self) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let current = self.model_snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.room = previous.room;
                self.objects = previous.objects;
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone edit.
    pub fn redo(&mut self) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let current = self.model_snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.room = next.room;
                self.objects = next.objects;
                self.is_modified = true;
                true
            }
            None => false,
        }
    }
}
