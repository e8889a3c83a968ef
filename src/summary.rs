//! Plain-text report of a loaded layout.

use std::fmt;

use roomkit_core::{format_length, format_price, Catalog, LengthUnit};
use roomkit_designer::{AllAssetsReady, DesignerState};

/// Headline figures of a layout and its derived 3D scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    pub project_name: String,
    pub corners: usize,
    pub perimeter: String,
    pub area_m2: f64,
    pub objects: usize,
    pub resolved_objects: usize,
    pub wall_quads: usize,
    pub floor_triangles: usize,
    pub cart_total: Option<String>,
}

impl LayoutSummary {
    /// Summarizes `state`. Without a catalog no object can be resolved and
    /// no cart total is computed.
    pub fn from_state(state: &DesignerState, catalog: Option<&Catalog>, unit: LengthUnit) -> Self {
        let empty = Catalog::default();
        let scene = state.derive_scene(catalog.unwrap_or(&empty), &AllAssetsReady);
        let (wall_quads, floor_triangles) = scene
            .shell
            .as_ref()
            .map(|shell| {
                (
                    shell.wall_quad_count(),
                    shell.floor.as_ref().map_or(0, |f| f.triangle_count()),
                )
            })
            .unwrap_or((0, 0));

        Self {
            project_name: state.project_name.clone(),
            corners: state.room.len(),
            perimeter: format_length(state.room.perimeter(), unit),
            area_m2: state.room.area(),
            objects: state.objects.len(),
            resolved_objects: scene.objects.len(),
            wall_quads,
            floor_triangles,
            cart_total: catalog.map(|c| format_price(state.cart_summary(c).total)),
        }
    }
}

impl fmt::Display for LayoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project:   {}", self.project_name)?;
        writeln!(
            f,
            "Room:      {} corners, perimeter {}, area {:.2} m²",
            self.corners, self.perimeter, self.area_m2
        )?;
        writeln!(f, "Objects:   {} placed, {} resolved", self.objects, self.resolved_objects)?;
        write!(
            f,
            "Scene:     {} wall quads, {} floor triangles",
            self.wall_quads, self.floor_triangles
        )?;
        if let Some(total) = &self.cart_total {
            write!(f, "\nCart:      {}", total)?;
        }
        Ok(())
    }
}
