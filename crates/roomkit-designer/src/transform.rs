//! Coordinate transform layer.
//!
//! Three coordinate spaces exist:
//!
//! ```text
//! store space   meters, canonical, what the models hold
//! render space  2D editor units     = meters * RENDER_UNITS_PER_METER
//! world space   3D preview units    = meters * WORLD_UNITS_PER_METER
//! ```
//!
//! Store y maps to world z; world y is height above the floor. Rotations are
//! stored in degrees. The plan draws them negated (its y axis points down)
//! and the preview turns them into radians about +Y; both give the same
//! footprint on the floor.
//!
//! These constants are the only place conversion factors live.

use std::cmp::Ordering;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// 2D editor units per meter.
pub const RENDER_UNITS_PER_METER: f64 = 1000.0;

/// 3D world units per meter.
pub const WORLD_UNITS_PER_METER: f64 = 10.0;

/// Render units per centimeter of grid cell size.
pub const RENDER_UNITS_PER_GRID_CM: f64 = 10.0;

/// World units per meter of grid in the 3D preview.
pub const WORLD_GRID_UNITS_PER_METER: f64 = 10.0;

/// Size of a major section of the 3D grid, in world units.
pub const WORLD_GRID_SECTION_SIZE: f64 = 10.0;

/// Uniform scale applied to every 3D model.
pub const WORLD_MODEL_SCALE: f32 = WORLD_UNITS_PER_METER as f32;

/// Grid cell sizes the user may pick, in centimeters, ascending.
pub const ALLOWED_CELL_SIZES_CM: [u32; 6] = [1, 2, 5, 10, 20, 50];

/// Default grid cell size in centimeters.
pub const DEFAULT_CELL_SIZE_CM: u32 = 10;

pub fn store_to_render(value: f64) -> f64 {
    value * RENDER_UNITS_PER_METER
}

pub fn render_to_store(value: f64) -> f64 {
    value / RENDER_UNITS_PER_METER
}

pub fn store_point_to_render(point: Point) -> Point {
    point.scale(RENDER_UNITS_PER_METER)
}

pub fn render_point_to_store(point: Point) -> Point {
    point.scale(1.0 / RENDER_UNITS_PER_METER)
}

pub fn store_to_world(value: f64) -> f32 {
    (value * WORLD_UNITS_PER_METER) as f32
}

/// Store-space floor point to a world position at height `world_y`.
pub fn store_point_to_world(point: Point, world_y: f32) -> Vec3 {
    Vec3::new(store_to_world(point.x), world_y, store_to_world(point.y))
}

/// Rotation as shown in the 2D editor.
pub fn render_rotation_degrees(rotation_degrees: f64) -> f64 {
    -rotation_degrees
}

/// Inverse of [`render_rotation_degrees`].
pub fn store_rotation_from_render(render_degrees: f64) -> f64 {
    -render_degrees
}

/// Rotation about the world y axis, in radians.
pub fn world_rotation_radians(rotation_degrees: f64) -> f32 {
    rotation_degrees.to_radians() as f32
}

/// Round `raw` to the nearest multiple of `cell`. Halves round away from
/// zero. A non-positive or non-finite cell leaves the value untouched.
pub fn snap(raw: f64, cell: f64) -> f64 {
    if cell <= 0.0 || !cell.is_finite() {
        return raw;
    }
    (raw / cell).round() * cell
}

/// Per-axis [`snap`].
pub fn snap_point(raw: Point, cell: f64) -> Point {
    Point::new(snap(raw.x, cell), snap(raw.y, cell))
}

/// Snap a store-space point to the render-space grid and convert back.
pub fn snap_store_point(point: Point, grid: &GridConfig) -> Point {
    let snapped = snap_point(store_point_to_render(point), grid.render_cell_size());
    render_point_to_store(snapped)
}

/// Grid cell size in render units for a cell size in centimeters.
pub fn grid_cell_render_units(cell_size_cm: u32) -> f64 {
    f64::from(cell_size_cm) * RENDER_UNITS_PER_GRID_CM
}

/// Grid cell size in world units for a cell size in centimeters.
pub fn world_grid_cell_size(cell_size_cm: u32) -> f64 {
    f64::from(cell_size_cm) / 100.0 * WORLD_GRID_UNITS_PER_METER
}

/// Editing grid configuration.
///
/// The cell size is always a member of [`ALLOWED_CELL_SIZES_CM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridConfig {
    cell_size_cm: u32,
}

impl GridConfig {
    /// Builds a grid from an allowed cell size; anything else is rejected.
    pub fn from_cell_size_cm(cell_size_cm: u32) -> Option<Self> {
        ALLOWED_CELL_SIZES_CM
            .contains(&cell_size_cm)
            .then_some(Self { cell_size_cm })
    }

    pub fn cell_size_cm(&self) -> u32 {
        self.cell_size_cm
    }

    /// Cell size in render units.
    pub fn render_cell_size(&self) -> f64 {
        grid_cell_render_units(self.cell_size_cm)
    }

    /// Cell size in world units for the 3D grid.
    pub fn world_cell_size(&self) -> f64 {
        world_grid_cell_size(self.cell_size_cm)
    }

    fn index(&self) -> usize {
        ALLOWED_CELL_SIZES_CM
            .iter()
            .position(|&c| c == self.cell_size_cm)
            .unwrap_or(0)
    }

    /// Move one step through the allowed set toward `requested`.
    ///
    /// The request is first clamped into the allowed range, so a request
    /// below the minimum steps down toward the minimum and one above the
    /// maximum steps up toward the maximum. At a boundary, or when the request
    /// equals the current size, the size is unchanged. Returns the new size.
    pub fn step_toward(&mut self, requested: u32) -> u32 {
        let min = ALLOWED_CELL_SIZES_CM[0];
        let max = ALLOWED_CELL_SIZES_CM[ALLOWED_CELL_SIZES_CM.len() - 1];
        let target = requested.clamp(min, max);
        let idx = self.index();
        self.cell_size_cm = match target.cmp(&self.cell_size_cm) {
            Ordering::Greater => {
                ALLOWED_CELL_SIZES_CM[(idx + 1).min(ALLOWED_CELL_SIZES_CM.len() - 1)]
            }
            Ordering::Less => ALLOWED_CELL_SIZES_CM[idx.saturating_sub(1)],
            Ordering::Equal => self.cell_size_cm,
        };
        self.cell_size_cm
    }

    pub fn step_up(&mut self) -> u32 {
        self.step_toward(self.cell_size_cm.saturating_add(1))
    }

    pub fn step_down(&mut self) -> u32 {
        self.step_toward(self.cell_size_cm.saturating_sub(1))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size_cm: DEFAULT_CELL_SIZE_CM,
        }
    }
}

impl TryFrom<u32> for GridConfig {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_cell_size_cm(value).ok_or_else(|| {
            format!(
                "Grid cell size {} cm is not one of {:?}",
                value, ALLOWED_CELL_SIZES_CM
            )
        })
    }
}

impl From<GridConfig> for u32 {
    fn from(grid: GridConfig) -> Self {
        grid.cell_size_cm
    }
}
