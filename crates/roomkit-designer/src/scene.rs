//! Scene derivation for the 3D preview.
//!
//! Turns the room outline and the placed objects into renderer-ready world
//! geometry. Nothing here mutates the models; derivation is re-run whenever
//! they change.

use glam::Vec3;
use roomkit_core::{Catalog, CatalogId};

use crate::geometry::Point;
use crate::object::{ObjectId, PlacedObject};
use crate::transform::{
    store_point_to_world, world_rotation_radians, GridConfig, WORLD_GRID_SECTION_SIZE,
    WORLD_MODEL_SCALE, WORLD_UNITS_PER_METER,
};

/// Default wall height in meters.
pub const DEFAULT_WALL_HEIGHT_M: f64 = 2.0;

/// Default wall height in world units.
pub const DEFAULT_WALL_HEIGHT: f32 = (DEFAULT_WALL_HEIGHT_M * WORLD_UNITS_PER_METER) as f32;

/// A flat horizontal polygon with its triangulation. `indices` are triples
/// into `outline`.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub outline: Vec<Vec3>,
    pub indices: Vec<usize>,
}

impl Surface {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Floor, ceiling and walls of the room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomShell {
    pub height: f32,
    pub floor: Option<Surface>,
    pub ceiling: Option<Surface>,
    pub walls: Vec<[Vec3; 3]>,
}

impl RoomShell {
    /// Builds the shell from store-space outline points.
    ///
    /// Non-finite points are dropped first; with fewer than three left there
    /// is no shell. Each edge becomes one wall quad made of two triangles.
    pub fn generate(points: &[Point], height: f32) -> Option<Self> {
        let valid: Vec<Point> = points.iter().copied().filter(Point::is_finite).collect();
        if valid.len() < 3 {
            tracing::debug!("Skipping room shell: {} usable points", valid.len());
            return None;
        }

        let n = valid.len();
        let mut walls = Vec::with_capacity(n * 2);
        for i in 0..n {
            let a = valid[i];
            let b = valid[(i + 1) % n];
            let a0 = store_point_to_world(a, 0.0);
            let b0 = store_point_to_world(b, 0.0);
            let ah = store_point_to_world(a, height);
            let bh = store_point_to_world(b, height);
            walls.push([a0, b0, bh]);
            walls.push([a0, bh, ah]);
        }

        let indices = triangulate(&valid);
        let surface = |y: f32| {
            indices.as_ref().map(|indices| Surface {
                outline: valid.iter().map(|p| store_point_to_world(*p, y)).collect(),
                indices: indices.clone(),
            })
        };

        Some(Self {
            height,
            floor: surface(0.0),
            ceiling: surface(height),
            walls,
        })
    }

    /// Number of wall quads (one per outline edge).
    pub fn wall_quad_count(&self) -> usize {
        self.walls.len() / 2
    }
}

fn triangulate(points: &[Point]) -> Option<Vec<usize>> {
    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    match earcutr::earcut(&flat, &[], 2) {
        Ok(indices) if !indices.is_empty() => Some(indices),
        Ok(_) => {
            tracing::warn!("Room outline is degenerate; no floor or ceiling generated");
            None
        }
        Err(e) => {
            tracing::warn!("Failed to triangulate room outline: {:?}", e);
            None
        }
    }
}

/// Load state of a 3D model asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetState {
    Ready,
    Pending,
    Failed,
}

/// Reports whether model assets are available. Scene derivation never waits
/// on an asset; pending ones are returned as such.
pub trait AssetStatus {
    fn status(&self, model_path: &str) -> AssetState;
}

impl<F> AssetStatus for F
where
    F: Fn(&str) -> AssetState,
{
    fn status(&self, model_path: &str) -> AssetState {
        self(model_path)
    }
}

/// Treats every asset as loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllAssetsReady;

impl AssetStatus for AllAssetsReady {
    fn status(&self, _model_path: &str) -> AssetState {
        AssetState::Ready
    }
}

/// A placed object resolved against the catalog, in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedObject {
    pub id: ObjectId,
    pub catalog_id: CatalogId,
    pub model_path: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub asset: AssetState,
    pub selected: bool,
}

/// Resolves each object's catalog item. Objects whose item is missing are
/// logged and skipped; the rest keep their input order.
pub fn resolve_objects(
    objects: &[PlacedObject],
    catalog: &Catalog,
    assets: &dyn AssetStatus,
) -> Vec<ResolvedObject> {
    objects
        .iter()
        .filter_map(|object| {
            let Some(item) = catalog.find_item(object.catalog_id) else {
                tracing::warn!(
                    "Catalog item {} for object {} not found, skipping",
                    object.catalog_id,
                    object.id
                );
                return None;
            };
            Some(ResolvedObject {
                id: object.id,
                catalog_id: object.catalog_id,
                model_path: item.model_path.clone(),
                position: store_point_to_world(object.position, 0.0),
                rotation: Vec3::new(0.0, world_rotation_radians(object.rotation_degrees), 0.0),
                scale: WORLD_MODEL_SCALE,
                asset: assets.status(&item.model_path),
                selected: object.selected,
            })
        })
        .collect()
}

/// Ground grid of the 3D preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldGrid {
    pub cell_size: f64,
    pub section_size: f64,
}

impl WorldGrid {
    pub fn from_config(grid: &GridConfig) -> Self {
        Self {
            cell_size: grid.world_cell_size(),
            section_size: WORLD_GRID_SECTION_SIZE,
        }
    }
}
