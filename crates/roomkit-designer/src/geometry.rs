//! Planar geometry helpers for room outlines and label placement.
//!
//! All functions are pure and unit-agnostic: they work the same whether the
//! inputs are store-space meters or render-space units.

use serde::{Deserialize, Serialize};

/// A 2D point (or vector).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Interior angle at `curr` between the edges towards `prev` and `next`, in
/// degrees within `[0, 180]`.
///
/// Returns `None` when either adjacent edge has zero length, since the angle
/// is undefined there.
pub fn interior_angle_degrees(prev: Point, curr: Point, next: Point) -> Option<f64> {
    let ab = prev.sub(curr);
    let cb = next.sub(curr);
    let mag = ab.length() * cb.length();
    if mag == 0.0 || !mag.is_finite() {
        return None;
    }
    // Rounding can push the cosine just outside [-1, 1].
    let cos = (ab.dot(cb) / mag).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Position `offset` units from `curr` along the bisector of the two
/// adjacent edges. A zero-length bisector (collinear opposite edges) is
/// treated as having magnitude 1.
pub fn angle_bisector_offset(prev: Point, curr: Point, next: Point, offset: f64) -> Point {
    let bisector = prev.sub(curr).add(next.sub(curr));
    let mag = non_zero_or_one(bisector.length());
    curr.add(bisector.scale(offset / mag))
}

/// Midpoint of edge `a → b` pushed `offset` units along the edge normal
/// `(-dy, dx) / len`. Zero-length edges use a length of 1.
pub fn edge_normal_offset(a: Point, b: Point, offset: f64) -> Point {
    let d = b.sub(a);
    let len = non_zero_or_one(d.length());
    let normal = Point::new(-d.y / len, d.x / len);
    a.midpoint(b).add(normal.scale(offset))
}

fn non_zero_or_one(value: f64) -> f64 {
    if value == 0.0 {
        1.0
    } else {
        value
    }
}

/// Shoelace area; positive for counter-clockwise winding.
pub fn polygon_signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let sum: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    sum / 2.0
}

/// Ray-casting containment test. Points exactly on an edge may go either way.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Rotates `point` about `center` by `degrees` (counter-clockwise for
/// positive angles in a y-up frame).
pub fn rotate_point(point: Point, center: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point.sub(center);
    Point::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}
