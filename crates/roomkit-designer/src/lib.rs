//! # RoomKit Designer
//!
//! This crate provides the room layout editing engine: a polygonal room
//! outline, furniture placed from a product catalog, and the derived views
//! of both, a 2D plan and a 3D preview scene.
//!
//! ## Core Components
//!
//! ### Models
//! - **Room**: Ordered, implicitly closed outline in meters with presets
//! - **Objects**: Placed catalog items with single selection
//! - **History**: Undo/redo over copy-on-write snapshots
//!
//! ### Views
//! - **Transform**: Store (m), render (mm) and world (dm) spaces, grid snapping
//! - **Viewport**: 2D zoom/pan with zoom-to-cursor
//! - **Gestures**: Drag, wheel and pinch handling with per-frame coalescing
//! - **Camera**: Persisted 3D camera pose and orbit controls
//! - **Scene**: Walls, floor and ceiling meshes plus resolved objects
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (explicit, passed down)
//!   ├── RoomPolygon ─┐
//!   ├── ObjectStore ─┴── History (snapshots)
//!   ├── Viewport + GestureState (2D plan)
//!   └── CameraState (3D preview)
//!
//! Derived on demand:
//!   PlanView (render units)   SceneDescription (world units)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomkit_designer::{AllAssetsReady, DesignerCommand, DesignerState};
//!
//! let mut state = DesignerState::new();
//! state.apply(DesignerCommand::AddItem(42), &catalog);
//! let scene = state.derive_scene(&catalog, &AllAssetsReady);
//! ```

pub mod camera;
pub mod commands;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod object;
pub mod object_store;
pub mod room;
pub mod scene;
pub mod serialization;
pub mod transform;
pub mod view;
pub mod viewport;

// Integration modules
pub mod designer_state;

pub use camera::{CameraPose, CameraState, OrbitCamera};
pub use commands::{CommandOutcome, DesignerCommand};
pub use geometry::Point;
pub use gesture::{GestureState, PendingTransform};
pub use history::{History, ModelSnapshot};
pub use object::{ObjectId, PlacedObject};
pub use object_store::ObjectStore;
pub use room::{Edge, Label, RoomAnnotations, RoomPolygon, RoomPreset};
pub use scene::{
    resolve_objects, AllAssetsReady, AssetState, AssetStatus, ResolvedObject, RoomShell,
    Surface, WorldGrid,
};
pub use serialization::{export_scene, import_scene, ProjectFile, ProjectMetadata, SceneRecord};
pub use transform::GridConfig;
pub use view::{LayerPresentation, ViewLayer, ViewMode};
pub use viewport::{GridLine, Viewport};

// State and integration
pub use designer_state::{
    CartLine, CartSummary, DesignerState, DragSession, DragTarget, EditorOptions, PlanObject,
    PlanView, PointerTarget, SceneDescription,
};
