//! Undo/redo history of model edits.
//!
//! Both models are copy-on-write, so a history entry is just a pair of
//! shared snapshots.

use std::collections::VecDeque;

use crate::object_store::ObjectStore;
use crate::room::RoomPolygon;

/// Room and objects at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSnapshot {
    pub room: RoomPolygon,
    pub objects: ObjectStore,
}

/// A labelled history entry.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub description: String,
    pub snapshot: ModelSnapshot,
}

/// Bounded undo/redo stacks.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    max_depth: usize,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records the state *before* an edit. Clears the redo stack.
    pub fn record(&mut self, description: impl Into<String>, before: ModelSnapshot) {
        if self.undo_stack.len() == self.max_depth {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(HistoryEntry {
            description: description.into(),
            snapshot: before,
        });
        self.redo_stack.clear();
    }

    /// Swaps `current` for the previous snapshot.
    pub fn undo(&mut self, current: ModelSnapshot) -> Option<ModelSnapshot> {
        let entry = self.undo_stack.pop_back()?;
        self.redo_stack.push(HistoryEntry {
            description: entry.description.clone(),
            snapshot: current,
        });
        Some(entry.snapshot)
    }

    /// Swaps `current` for the next snapshot.
    pub fn redo(&mut self, current: ModelSnapshot) -> Option<ModelSnapshot> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push_back(HistoryEntry {
            description: entry.description.clone(),
            snapshot: current,
        });
        Some(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Description of the edit the next undo would revert.
    pub fn next_undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|e| e.description.as_str())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}
