//! Room outline edits for designer state.

use roomkit_core::GeometryError;

use super::DesignerState;
use crate::geometry::Point;
use crate::room::RoomPreset;

impl DesignerState {
    /// Moves a room corner. Out-of-range or non-finite input is ignored.
    pub fn set_room_point(&mut self, index: usize, position: Point) -> bool {
        let before = self.model_snapshot();
        self.room.set_point_at(index, position);
        self.commit("Move room corner", before)
    }

    /// Deletes a corner unless the room is already a triangle.
    pub fn delete_room_point(&mut self, index: usize) -> bool {
        let before = self.model_snapshot();
        self.room.delete_at(index);
        self.commit("Delete room corner", before)
    }

    /// Adds a corner in the middle of edge `index`, returning its index.
    pub fn split_room_edge(&mut self, index: usize) -> Result<usize, GeometryError> {
        let before = self.model_snapshot();
        let inserted = self.room.split_edge(index)?;
        self.commit("Add room corner", before);
        Ok(inserted)
    }

    /// Replaces the outline with a preset shape. Objects are untouched.
    pub fn apply_room_preset(&mut self, preset: RoomPreset) -> bool {
        let before = self.model_snapshot();
        self.room.apply_preset(preset);
        let changed = self.commit(&format!("Apply {}", preset), before);
        if changed {
            tracing::info!("Applied {}", preset);
        }
        changed
    }
}
