//! Room polygon model.
//!
//! The room outline is an ordered, implicitly closed list of store-space
//! points (meters). The vertex list is shared behind an `Arc` and replaced
//! wholesale on every write, so readers holding a snapshot never observe a
//! half-applied edit.

use std::fmt;
use std::sync::Arc;

use lyon::math::point;
use lyon::path::Path;
use roomkit_core::units::{format_angle, format_length, LengthUnit};
use roomkit_core::GeometryError;
use serde::{Deserialize, Serialize};

use crate::geometry::{
    angle_bisector_offset, distance, edge_normal_offset, interior_angle_degrees,
    polygon_signed_area, Point,
};
use crate::transform::{render_point_to_store, store_point_to_render};

/// A room outline never has fewer vertices than this.
pub const MIN_ROOM_POINTS: usize = 3;

/// Render-space distance of an edge length label from its edge.
pub const EDGE_LABEL_OFFSET: f64 = 100.0;

/// Render-space distance of a corner angle label from its vertex.
pub const ANGLE_LABEL_OFFSET: f64 = 120.0;

/// Built-in room outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomPreset {
    /// 3 m × 3 m square
    #[default]
    FourCorner,
    /// Square with one cut corner
    FiveCorner,
    /// L-shape
    SixCorner,
    /// U-shape
    EightCorner,
}

impl RoomPreset {
    pub const ALL: [RoomPreset; 4] = [
        RoomPreset::FourCorner,
        RoomPreset::FiveCorner,
        RoomPreset::SixCorner,
        RoomPreset::EightCorner,
    ];

    pub fn points(&self) -> Vec<Point> {
        let raw: &[(f64, f64)] = match self {
            RoomPreset::FourCorner => &[(0.0, 0.0), (0.0, 3.0), (3.0, 3.0), (3.0, 0.0)],
            RoomPreset::FiveCorner => &[(1.5, 0.0), (0.0, 1.5), (0.0, 3.0), (3.0, 3.0), (3.0, 0.0)],
            RoomPreset::SixCorner => &[
                (0.0, 0.0),
                (0.0, 3.0),
                (3.0, 3.0),
                (3.0, 1.5),
                (1.5, 1.5),
                (1.5, 0.0),
            ],
            RoomPreset::EightCorner => &[
                (0.0, 0.0),
                (0.0, 3.0),
                (4.5, 3.0),
                (4.5, 0.0),
                (3.0, 0.0),
                (3.0, 1.5),
                (1.5, 1.5),
                (1.5, 0.0),
            ],
        };
        raw.iter().copied().map(Point::from).collect()
    }

    pub fn corner_count(&self) -> usize {
        match self {
            RoomPreset::FourCorner => 4,
            RoomPreset::FiveCorner => 5,
            RoomPreset::SixCorner => 6,
            RoomPreset::EightCorner => 8,
        }
    }
}

impl fmt::Display for RoomPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-corner room", self.corner_count())
    }
}

/// One closed-polygon edge, `start → end`, with `index` of the start vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub index: usize,
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }
}

/// A text label positioned in render space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Point,
    pub text: String,
}

/// Edge length and corner angle labels for the 2D editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomAnnotations {
    pub edge_lengths: Vec<Label>,
    pub corner_angles: Vec<Label>,
}

/// The room outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct RoomPolygon {
    points: Arc<[Point]>,
}

fn validate(points: &[Point]) -> Result<(), GeometryError> {
    if points.len() < MIN_ROOM_POINTS {
        return Err(GeometryError::TooFewPoints {
            minimum: MIN_ROOM_POINTS,
            actual: points.len(),
        });
    }
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(GeometryError::NonFinitePoint {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}

impl RoomPolygon {
    /// Builds an outline from at least three finite points.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        validate(&points)?;
        Ok(Self {
            points: points.into(),
        })
    }

    pub fn from_preset(preset: RoomPreset) -> Self {
        Self {
            points: preset.points().into(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Cheap shared snapshot of the current vertex list.
    pub fn snapshot(&self) -> Arc<[Point]> {
        Arc::clone(&self.points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    fn rebuild(&mut self, points: Vec<Point>) {
        self.points = points.into();
    }

    /// Replaces one vertex. Out-of-range indices and non-finite points are
    /// ignored and return `false`.
    pub fn set_point_at(&mut self, index: usize, point: Point) -> bool {
        if index >= self.points.len() || !point.is_finite() {
            tracing::debug!("Ignoring room vertex update at {} ({:?})", index, point);
            return false;
        }
        let mut points = self.points.to_vec();
        points[index] = point;
        self.rebuild(points);
        true
    }

    /// Atomically replaces the whole outline. On error nothing changes.
    pub fn replace_all(&mut self, points: Vec<Point>) -> Result<(), GeometryError> {
        validate(&points)?;
        self.rebuild(points);
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: RoomPreset) {
        self.rebuild(preset.points());
    }

    /// Removes a vertex unless that would leave fewer than three.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if self.points.len() <= MIN_ROOM_POINTS || index >= self.points.len() {
            tracing::debug!(
                "Refusing to delete room vertex {} of {}",
                index,
                self.points.len()
            );
            return false;
        }
        let mut points = self.points.to_vec();
        points.remove(index);
        self.rebuild(points);
        true
    }

    /// Inserts a vertex before `index` (`index == len` appends).
    pub fn insert_at(&mut self, index: usize, point: Point) -> Result<(), GeometryError> {
        if index > self.points.len() {
            return Err(GeometryError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        if !point.is_finite() {
            return Err(GeometryError::NonFinitePoint {
                index,
                x: point.x,
                y: point.y,
            });
        }
        let mut points = self.points.to_vec();
        points.insert(index, point);
        self.rebuild(points);
        Ok(())
    }

    /// Splits edge `index → index + 1` at its midpoint. Returns the index of
    /// the new vertex.
    pub fn split_edge(&mut self, index: usize) -> Result<usize, GeometryError> {
        let edge = self.edge(index).ok_or(GeometryError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })?;
        self.insert_at(index + 1, edge.start.midpoint(edge.end))?;
        Ok(index + 1)
    }

    pub fn edge(&self, index: usize) -> Option<Edge> {
        let n = self.points.len();
        (index < n).then(|| Edge {
            index,
            start: self.points[index],
            end: self.points[(index + 1) % n],
        })
    }

    /// Edges of the closed outline, the last one wrapping to vertex 0.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.points.len()).filter_map(move |i| self.edge(i))
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|e| e.length()).sum()
    }

    pub fn area(&self) -> f64 {
        polygon_signed_area(&self.points).abs()
    }

    /// Index of the vertex within `tolerance` meters of `point`, if any.
    pub fn vertex_near(&self, point: Point, tolerance: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, distance(*p, point)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Closed outline in render space.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        for (i, p) in self.points.iter().enumerate() {
            let r = store_point_to_render(*p);
            let p = point(r.x as f32, r.y as f32);
            if i == 0 {
                builder.begin(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.close();
        builder.build()
    }

    /// Edge length and corner angle labels, positioned in render space.
    /// Corners with a zero-length neighbouring edge get no angle label.
    pub fn annotations(&self) -> RoomAnnotations {
        let render: Vec<Point> = self.points.iter().map(|p| store_point_to_render(*p)).collect();
        let n = render.len();

        let edge_lengths = (0..n)
            .map(|i| {
                let a = render[i];
                let b = render[(i + 1) % n];
                let meters = distance(render_point_to_store(a), render_point_to_store(b));
                Label {
                    position: edge_normal_offset(a, b, EDGE_LABEL_OFFSET),
                    text: format_length(meters, LengthUnit::Centimeters),
                }
            })
            .collect();

        let corner_angles = (0..n)
            .filter_map(|i| {
                let prev = render[(i + n - 1) % n];
                let curr = render[i];
                let next = render[(i + 1) % n];
                interior_angle_degrees(prev, curr, next).map(|angle| Label {
                    position: angle_bisector_offset(prev, curr, next, ANGLE_LABEL_OFFSET),
                    text: format_angle(angle),
                })
            })
            .collect();

        RoomAnnotations {
            edge_lengths,
            corner_angles,
        }
    }
}

impl TryFrom<Vec<Point>> for RoomPolygon {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<RoomPolygon> for Vec<Point> {
    fn from(room: RoomPolygon) -> Self {
        room.points.to_vec()
    }
}

impl Default for RoomPolygon {
    fn default() -> Self {
        Self::from_preset(RoomPreset::default())
    }
}
