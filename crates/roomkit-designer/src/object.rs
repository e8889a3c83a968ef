//! Placed furniture objects.

use std::fmt;

use roomkit_core::{CatalogId, CatalogItem};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{point_in_polygon, rotate_point, Point};
use crate::transform::render_rotation_degrees;
use crate::view::ViewLayer;

/// Stable identity of a placed object. Never reused, and regenerated on
/// import and variant swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A catalog item instance placed in the room. Lengths are in meters and the
/// rotation is in degrees, counter-clockwise, unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: ObjectId,
    pub catalog_id: CatalogId,
    pub position: Point,
    pub scale_x: f64,
    pub scale_y: f64,
    pub height: f64,
    pub rotation_degrees: f64,
    #[serde(default)]
    pub selected: bool,
}

impl PlacedObject {
    /// A fresh, unselected, unrotated instance at the origin.
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: ObjectId::new(),
            catalog_id: item.id,
            position: Point::ORIGIN,
            scale_x: item.width,
            scale_y: item.depth,
            height: item.height,
            rotation_degrees: 0.0,
            selected: false,
        }
    }

    pub fn layer(&self) -> ViewLayer {
        ViewLayer::for_height(self.height)
    }

    /// Footprint rectangle corners in store space, as drawn in the plan. The
    /// position is the rectangle's origin corner; rotation pivots about it.
    pub fn footprint_corners(&self) -> [Point; 4] {
        let o = self.position;
        let corners = [
            o,
            Point::new(o.x + self.scale_x, o.y),
            Point::new(o.x + self.scale_x, o.y + self.scale_y),
            Point::new(o.x, o.y + self.scale_y),
        ];
        let angle = render_rotation_degrees(self.rotation_degrees);
        corners.map(|c| rotate_point(c, o, angle))
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point_in_polygon(point, &self.footprint_corners())
    }
}
