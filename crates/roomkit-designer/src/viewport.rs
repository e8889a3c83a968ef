//! Viewport and coordinate transformation for the 2D plan.
//!
//! Handles conversion between screen coordinates (pointer space) and content
//! coordinates (render space). Manages zoom and pan with the zoom-to-cursor
//! invariant: the content point under the pointer stays under the pointer.

use std::fmt;

use crate::geometry::Point;
use crate::transform::snap;

/// Smallest allowed zoom.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed zoom.
pub const MAX_SCALE: f64 = 3.0;

/// Zoom the plan opens at.
pub const INITIAL_SCALE: f64 = 0.3;

/// Zoom factor applied per wheel notch.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.05;

/// A grid line in content space, from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub start: Point,
    pub end: Point,
}

/// Represents the viewport transformation state (zoom and pan).
///
/// ```text
/// screen = content * scale + position
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    position: Point,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport at the initial zoom with the content origin at
    /// `position`.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            scale: INITIAL_SCALE,
            position: Point::ORIGIN,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom level, clamped to `[MIN_SCALE, MAX_SCALE]`. Non-finite
    /// values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Sets the pan offset (the screen position of the content origin).
    pub fn pan_to(&mut self, position: Point) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_to(Point::new(self.position.x + dx, self.position.y + dy));
    }

    /// Converts a screen point to content coordinates.
    pub fn screen_to_content(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.position.x) / self.scale,
            (screen.y - self.position.y) / self.scale,
        )
    }

    /// Converts content coordinates to a screen point.
    pub fn content_to_screen(&self, content: Point) -> Point {
        Point::new(
            content.x * self.scale + self.position.x,
            content.y * self.scale + self.position.y,
        )
    }

    /// Zooms around `pointer` (screen space): the content point under the
    /// pointer before the zoom stays under it afterwards. Returns the
    /// clamped scale actually applied.
    pub fn zoom_at(&mut self, pointer: Point, new_scale: f64) -> f64 {
        let (scale, position) = self.zoomed_transform(pointer, new_scale);
        self.scale = scale;
        self.position = position;
        scale
    }

    /// The `(scale, position)` that [`Viewport::zoom_at`] would produce,
    /// without applying it.
    pub fn zoomed_transform(&self, pointer: Point, new_scale: f64) -> (f64, Point) {
        if !new_scale.is_finite() || !pointer.is_finite() {
            return (self.scale, self.position);
        }
        let anchor = self.screen_to_content(pointer);
        let scale = new_scale.clamp(MIN_SCALE, MAX_SCALE);
        let position = Point::new(pointer.x - anchor.x * scale, pointer.y - anchor.y * scale);
        (scale, position)
    }

    /// Mouse-wheel zoom: scrolling down (`delta_y > 0`) zooms out by
    /// `factor`, scrolling up zooms in.
    pub fn zoom_wheel(&mut self, pointer: Point, delta_y: f64, factor: f64) -> f64 {
        let new_scale = if delta_y > 0.0 {
            self.scale / factor
        } else {
            self.scale * factor
        };
        self.zoom_at(pointer, new_scale)
    }

    /// Grid lines covering the visible canvas for a cell of `cell` content
    /// units, starting on the cell boundary at or before the top-left corner.
    pub fn visible_grid_lines(&self, cell: f64) -> Vec<GridLine> {
        if cell <= 0.0 || !cell.is_finite() {
            return Vec::new();
        }
        let top_left = self.screen_to_content(Point::ORIGIN);
        let start_x = (top_left.x / cell).floor() * cell;
        let start_y = (top_left.y / cell).floor() * cell;
        let end_x = start_x + self.canvas_width / self.scale;
        let end_y = start_y + self.canvas_height / self.scale;

        let columns = ((end_x - start_x) / cell).floor() as usize;
        let rows = ((end_y - start_y) / cell).floor() as usize;

        let vertical = (0..=columns).map(|i| {
            let x = snap(start_x + i as f64 * cell, cell);
            GridLine {
                start: Point::new(x, start_y),
                end: Point::new(x, end_y),
            }
        });
        let horizontal = (0..=rows).map(|i| {
            let y = snap(start_y + i as f64 * cell, cell);
            GridLine {
                start: Point::new(start_x, y),
                end: Point::new(end_x, y),
            }
        });
        vertical.chain(horizontal).collect()
    }

    /// Resets to the initial zoom with the content origin at the top-left.
    pub fn reset(&mut self) {
        self.scale = INITIAL_SCALE;
        self.position = Point::ORIGIN;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.position.x, self.position.y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
