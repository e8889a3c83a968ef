//! Designer state manager for UI integration.
//!
//! Owns the canonical models and the transient view/gesture state, and
//! applies [`DesignerCommand`]s. This module is split into submodules:
//! - `objects`: placing, selecting, rotating and swapping objects
//! - `room`: room outline edits
//! - `interaction`: pointer, drag, wheel and touch handling
//! - `view`: view mode, layers, grid and derived scene/plan data
//! - `file_io`: project save/load and scene import/export
//! - `history`: undo/redo

mod file_io;
mod history;
mod interaction;
mod objects;
mod room;
mod view;

pub use interaction::{DragSession, DragTarget, PointerTarget};
pub use objects::{CartLine, CartSummary};
pub use view::{PlanObject, PlanView, SceneDescription};

use roomkit_core::Catalog;

use crate::camera::CameraState;
use crate::commands::{CommandOutcome, DesignerCommand};
use crate::gesture::GestureState;
use crate::history::{History, ModelSnapshot};
use crate::object_store::ObjectStore;
use crate::room::RoomPolygon;
use crate::scene::DEFAULT_WALL_HEIGHT_M;
use crate::transform::GridConfig;
use crate::view::{ViewLayer, ViewMode, INACTIVE_LAYER_OPACITY};
use crate::viewport::{Viewport, INITIAL_SCALE, WHEEL_ZOOM_FACTOR};

/// Tunables the UI exposes through settings.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorOptions {
    pub rotation_step_degrees: f64,
    pub wall_height_m: f64,
    pub inactive_layer_opacity: f32,
    pub wheel_zoom_factor: f64,
    pub initial_zoom: f64,
    pub history_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            rotation_step_degrees: 5.0,
            wall_height_m: DEFAULT_WALL_HEIGHT_M,
            inactive_layer_opacity: INACTIVE_LAYER_OPACITY,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            initial_zoom: INITIAL_SCALE,
            history_limit: 100,
        }
    }
}

/// Designer state for UI integration
#[derive(Clone, Debug)]
pub struct DesignerState {
    pub room: RoomPolygon,
    pub objects: ObjectStore,
    pub grid: GridConfig,
    pub view_mode: ViewMode,
    pub active_layer: ViewLayer,
    pub viewport: Viewport,
    pub gestures: GestureState,
    pub camera: CameraState,
    pub options: EditorOptions,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub project_name: String,
    pub(crate) drag: Option<DragSession>,
    pub(crate) history: History,
}

impl DesignerState {
    /// Creates a new designer state.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        let mut viewport = Viewport::default();
        viewport.set_scale(options.initial_zoom);
        Self {
            room: RoomPolygon::default(),
            objects: ObjectStore::new(),
            grid: GridConfig::default(),
            view_mode: ViewMode::default(),
            active_layer: ViewLayer::default(),
            viewport,
            gestures: GestureState::new(),
            camera: CameraState::default(),
            history: History::new(options.history_limit),
            options,
            current_file_path: None,
            is_modified: false,
            project_name: "Untitled".to_string(),
            drag: None,
        }
    }

    pub(crate) fn model_snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            room: self.room.clone(),
            objects: self.objects.clone(),
        }
    }

    /// Records `before` in history if the models changed since it was taken.
    pub(crate) fn commit(&mut self, description: &str, before: ModelSnapshot) -> bool {
        if before == self.model_snapshot() {
            return false;
        }
        self.history.record(description, before);
        self.is_modified = true;
        true
    }

    /// Applies a user command.
    pub fn apply(&mut self, command: DesignerCommand, catalog: &Catalog) -> CommandOutcome {
        let description = command.to_string();
        let outcome = match command {
            DesignerCommand::AddItem(id) => match self.add_item(catalog, id) {
                Ok(_) => CommandOutcome::Applied,
                Err(e) => CommandOutcome::Rejected(e.to_string()),
            },
            DesignerCommand::RemoveObject(id) => {
                CommandOutcome::from_changed(self.remove_object(id))
            }
            DesignerCommand::RemoveSelected => CommandOutcome::from_changed(self.remove_selected()),
            DesignerCommand::Select(id) => CommandOutcome::from_changed(self.select_object(id)),
            DesignerCommand::DeselectAll => CommandOutcome::from_changed(self.deselect_all()),
            DesignerCommand::MoveObject { id, position } => {
                CommandOutcome::from_changed(self.move_object(id, position))
            }
            DesignerCommand::RotateSelected { clockwise } => {
                CommandOutcome::from_changed(self.rotate_selected(clockwise))
            }
            DesignerCommand::RotateObject { id, delta_degrees } => {
                CommandOutcome::from_changed(self.rotate_object(id, delta_degrees))
            }
            DesignerCommand::SwapSelectedVariant(id) => self.swap_selected_variant(catalog, id),
            DesignerCommand::SetRoomPoint { index, position } => {
                CommandOutcome::from_changed(self.set_room_point(index, position))
            }
            DesignerCommand::DeleteRoomPoint(index) => {
                CommandOutcome::from_changed(self.delete_room_point(index))
            }
            DesignerCommand::SplitRoomEdge(index) => match self.split_room_edge(index) {
                Ok(_) => CommandOutcome::Applied,
                Err(e) => CommandOutcome::Rejected(e.to_string()),
            },
            DesignerCommand::ApplyPreset(preset) => {
                CommandOutcome::from_changed(self.apply_room_preset(preset))
            }
            DesignerCommand::StepGrid { requested_cm } => {
                let before = self.grid;
                self.step_grid(requested_cm);
                CommandOutcome::from_changed(before != self.grid)
            }
            DesignerCommand::SetLayer(layer) => CommandOutcome::from_changed(self.set_layer(layer)),
            DesignerCommand::SetViewMode(mode) => {
                CommandOutcome::from_changed(self.set_view_mode(mode))
            }
            DesignerCommand::ToggleViewMode => {
                self.toggle_view_mode();
                CommandOutcome::Applied
            }
            DesignerCommand::ImportScene(json) => match self.import_scene(&json) {
                Ok(_) => CommandOutcome::Applied,
                Err(e) => CommandOutcome::Rejected(e.to_string()),
            },
            DesignerCommand::ClearObjects => CommandOutcome::from_changed(self.clear_objects()),
            DesignerCommand::ResetProject => {
                self.reset_project();
                CommandOutcome::Applied
            }
            DesignerCommand::Undo => CommandOutcome::from_changed(self.undo()),
            DesignerCommand::Redo => CommandOutcome::from_changed(self.redo()),
        };
        if let CommandOutcome::Rejected(reason) = &outcome {
            tracing::warn!("{} rejected: {}", description, reason);
        }
        outcome
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
