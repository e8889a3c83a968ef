//! User intents the designer state understands.
//!
//! UI layers translate their events into these and hand them to
//! [`DesignerState::apply`](crate::DesignerState::apply).

use std::fmt;

use roomkit_core::CatalogId;

use crate::geometry::Point;
use crate::object::ObjectId;
use crate::room::RoomPreset;
use crate::view::{ViewLayer, ViewMode};

#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    /// Place a new instance of a catalog item at the origin.
    AddItem(CatalogId),
    RemoveObject(ObjectId),
    RemoveSelected,
    Select(ObjectId),
    DeselectAll,
    /// Move an object to a store-space position, unsnapped.
    MoveObject { id: ObjectId, position: Point },
    /// Rotate the selected object by the configured step; `clockwise` picks
    /// the sign.
    RotateSelected { clockwise: bool },
    RotateObject { id: ObjectId, delta_degrees: f64 },
    /// Replace the selected object with another variant of its item.
    SwapSelectedVariant(CatalogId),
    SetRoomPoint { index: usize, position: Point },
    DeleteRoomPoint(usize),
    SplitRoomEdge(usize),
    ApplyPreset(RoomPreset),
    /// Step the grid cell size one allowed value toward `requested_cm`.
    StepGrid { requested_cm: u32 },
    SetLayer(ViewLayer),
    SetViewMode(ViewMode),
    ToggleViewMode,
    /// Replace all objects with the records of a scene export document.
    ImportScene(String),
    ClearObjects,
    /// Start a new project in the current room: no objects, no history.
    ResetProject,
    Undo,
    Redo,
}

impl fmt::Display for DesignerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignerCommand::AddItem(id) => write!(f, "Add item {}", id),
            DesignerCommand::RemoveObject(_) | DesignerCommand::RemoveSelected => {
                write!(f, "Remove object")
            }
            DesignerCommand::Select(_) => write!(f, "Select object"),
            DesignerCommand::DeselectAll => write!(f, "Deselect all"),
            DesignerCommand::MoveObject { .. } => write!(f, "Move object"),
            DesignerCommand::RotateSelected { .. } | DesignerCommand::RotateObject { .. } => {
                write!(f, "Rotate object")
            }
            DesignerCommand::SwapSelectedVariant(id) => write!(f, "Apply variant {}", id),
            DesignerCommand::SetRoomPoint { .. } => write!(f, "Move room corner"),
            DesignerCommand::DeleteRoomPoint(_) => write!(f, "Delete room corner"),
            DesignerCommand::SplitRoomEdge(_) => write!(f, "Add room corner"),
            DesignerCommand::ApplyPreset(preset) => write!(f, "Apply {}", preset),
            DesignerCommand::StepGrid { .. } => write!(f, "Change grid size"),
            DesignerCommand::SetLayer(layer) => write!(f, "Switch to {} layer", layer),
            DesignerCommand::SetViewMode(mode) => write!(f, "Switch to {} view", mode),
            DesignerCommand::ToggleViewMode => write!(f, "Toggle view"),
            DesignerCommand::ImportScene(_) => write!(f, "Import scene"),
            DesignerCommand::ClearObjects => write!(f, "Clear objects"),
            DesignerCommand::ResetProject => write!(f, "New project"),
            DesignerCommand::Undo => write!(f, "Undo"),
            DesignerCommand::Redo => write!(f, "Redo"),
        }
    }
}

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// State changed.
    Applied,
    /// Valid command with nothing to do (unknown id, boundary reached, ...).
    Unchanged,
    /// Refused; the reason is meant for the user.
    Rejected(String),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }

    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Unchanged
        }
    }
}
