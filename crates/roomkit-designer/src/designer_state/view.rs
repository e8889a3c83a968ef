//! View mode, layers, grid and derived view data for designer state.

use lyon::path::Path;
use roomkit_core::Catalog;

use super::DesignerState;
use crate::camera::{CameraPose, OrbitCamera};
use crate::geometry::Point;
use crate::object::ObjectId;
use crate::room::RoomAnnotations;
use crate::scene::{resolve_objects, AssetStatus, ResolvedObject, RoomShell, WorldGrid};
use crate::transform::{
    render_rotation_degrees, store_point_to_render, store_to_render, store_to_world,
};
use crate::view::{LayerPresentation, ViewLayer, ViewMode};
use crate::viewport::GridLine;

/// Everything the 3D preview needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub shell: Option<RoomShell>,
    pub objects: Vec<ResolvedObject>,
    pub grid: WorldGrid,
    pub camera: CameraPose,
}

/// An object as drawn in the 2D plan, in render units.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanObject {
    pub id: ObjectId,
    pub origin: Point,
    pub width: f64,
    pub depth: f64,
    pub rotation_degrees: f64,
    pub corners: [Point; 4],
    pub selected: bool,
    pub presentation: LayerPresentation,
}

/// Render-space data for the 2D plan.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub room: Vec<Point>,
    /// Closed room outline ready for filling and stroking.
    pub outline: Path,
    pub annotations: RoomAnnotations,
    pub grid_lines: Vec<GridLine>,
    pub objects: Vec<PlanObject>,
}

impl DesignerState {
    /// Switches between plan and preview. A drag still in progress is
    /// abandoned, leaving the models as they were before it began.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.cancel_drag();
        self.gestures.reset();
        self.view_mode = mode;
        tracing::debug!("View mode: {}", mode);
        true
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.set_view_mode(self.view_mode.toggled());
        self.view_mode
    }

    /// Changes which layer is interactive in the plan.
    pub fn set_layer(&mut self, layer: ViewLayer) -> bool {
        if self.active_layer == layer {
            return false;
        }
        self.active_layer = layer;
        if let Some(selected) = self.objects.selected() {
            if selected.layer() != layer {
                self.objects.deselect_all();
            }
        }
        true
    }

    pub fn layer_presentation(&self, layer: ViewLayer) -> LayerPresentation {
        LayerPresentation::for_layer(layer, self.active_layer, self.options.inactive_layer_opacity)
    }

    /// Steps the grid cell size toward `requested_cm`, returning the new size.
    pub fn step_grid(&mut self, requested_cm: u32) -> u32 {
        let size = self.grid.step_toward(requested_cm);
        tracing::debug!("Grid cell size: {} cm", size);
        size
    }

    /// Orbits the preview camera around its target. Only while previewing.
    pub fn orbit_camera(&mut self, delta_azimuth: f32, delta_polar: f32) -> bool {
        self.drive_camera(|orbit| orbit.orbit(delta_azimuth, delta_polar))
    }

    /// Wheel dolly in the preview; factors above 1 move closer.
    pub fn dolly_camera(&mut self, factor: f32) -> bool {
        self.drive_camera(|orbit| orbit.dolly(factor))
    }

    /// Pans the preview camera target in screen pixels.
    pub fn pan_camera(&mut self, delta_x: f32, delta_y: f32) -> bool {
        self.drive_camera(|orbit| orbit.pan(delta_x, delta_y))
    }

    fn drive_camera(&mut self, control: impl FnOnce(&mut OrbitCamera)) -> bool {
        if self.view_mode != ViewMode::Previewing3D {
            return false;
        }
        let mut orbit = OrbitCamera::from_pose(&self.camera.restore());
        control(&mut orbit);
        self.camera.sync_from_orbit(&orbit);
        true
    }

    /// Derives the 3D preview scene from the current models.
    pub fn derive_scene(&self, catalog: &Catalog, assets: &dyn AssetStatus) -> SceneDescription {
        let objects = self.objects.snapshot();
        SceneDescription {
            shell: RoomShell::generate(
                self.room.points(),
                store_to_world(self.options.wall_height_m),
            ),
            objects: resolve_objects(&objects, catalog, assets),
            grid: WorldGrid::from_config(&self.grid),
            camera: self.camera.restore(),
        }
    }

    /// Derives the 2D plan for the current viewport.
    pub fn plan_view(&self) -> PlanView {
        let objects = self
            .objects
            .iter()
            .map(|o| PlanObject {
                id: o.id,
                origin: store_point_to_render(o.position),
                width: store_to_render(o.scale_x),
                depth: store_to_render(o.scale_y),
                rotation_degrees: render_rotation_degrees(o.rotation_degrees),
                corners: o.footprint_corners().map(store_point_to_render),
                selected: o.selected,
                presentation: self.layer_presentation(o.layer()),
            })
            .collect();

        PlanView {
            room: self.room.points().iter().copied().map(store_point_to_render).collect(),
            outline: self.room.to_path(),
            annotations: self.room.annotations(),
            grid_lines: self.viewport.visible_grid_lines(self.grid.render_cell_size()),
            objects,
        }
    }
}
