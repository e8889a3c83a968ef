//! Pointer, drag, wheel and touch handling for the 2D plan.
//!
//! Screen points arrive in canvas pixels. They are mapped through the
//! viewport into render units and then into store meters.

use super::DesignerState;
use crate::geometry::Point;
use crate::history::ModelSnapshot;
use crate::object::ObjectId;
use crate::transform::{render_point_to_store, render_to_store, snap_store_point};
use crate::view::ViewMode;

/// Radius, in screen pixels, within which a pointer grabs a room corner.
pub const VERTEX_HIT_RADIUS: f64 = 12.0;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    Vertex(usize),
    Object(ObjectId),
    Stage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTarget {
    Object(ObjectId),
    Vertex(usize),
}

/// An in-progress drag of an object or room corner.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    /// Offset from the pointer to the dragged point, in store space.
    pub grab_offset: Point,
    /// Last unsnapped position applied.
    pub last_raw: Point,
    pub(crate) before: ModelSnapshot,
}

impl DesignerState {
    /// Maps a screen point to store space.
    pub fn screen_to_store(&self, screen: Point) -> Point {
        render_point_to_store(self.viewport.screen_to_content(screen))
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Hit-tests room corners first, then objects of the active layer
    /// (topmost wins). A hit starts a drag; a miss clears the selection.
    pub fn pointer_down(&mut self, screen: Point) -> PointerTarget {
        if self.view_mode != ViewMode::Editing2D || !screen.is_finite() {
            return PointerTarget::Stage;
        }
        let point = self.screen_to_store(screen);
        let tolerance = render_to_store(VERTEX_HIT_RADIUS / self.viewport.scale());

        if let Some(index) = self.room.vertex_near(point, tolerance) {
            self.begin_vertex_drag(index, point);
            return PointerTarget::Vertex(index);
        }

        let hit = self
            .objects
            .object_at(point, self.active_layer)
            .map(|o| o.id);
        match hit {
            Some(id) => {
                self.select_object(id);
                self.begin_object_drag(id, point);
                PointerTarget::Object(id)
            }
            None => {
                self.deselect_all();
                PointerTarget::Stage
            }
        }
    }

    /// Starts dragging an object grabbed at store point `grab`.
    pub fn begin_object_drag(&mut self, id: ObjectId, grab: Point) -> bool {
        let Some(object) = self.objects.get(id) else {
            return false;
        };
        let origin = object.position;
        self.start_drag(DragTarget::Object(id), origin, grab);
        true
    }

    /// Starts dragging room corner `index` grabbed at store point `grab`.
    pub fn begin_vertex_drag(&mut self, index: usize, grab: Point) -> bool {
        let Some(corner) = self.room.point(index) else {
            return false;
        };
        self.start_drag(DragTarget::Vertex(index), corner, grab);
        true
    }

    fn start_drag(&mut self, target: DragTarget, origin: Point, grab: Point) {
        self.gestures.begin_object_move();
        self.drag = Some(DragSession {
            target,
            grab_offset: origin.sub(grab),
            last_raw: origin,
            before: self.model_snapshot(),
        });
    }

    /// Pointer moved to `screen` during a drag. Positions are applied live
    /// and unsnapped, in the order received.
    pub fn drag_move(&mut self, screen: Point) -> bool {
        let Some(session) = &self.drag else {
            return false;
        };
        if !screen.is_finite() {
            return false;
        }
        let target = session.target;
        let raw = self.screen_to_store(screen).add(session.grab_offset);
        let applied = self.apply_drag_position(target, raw);
        if let Some(session) = self.drag.as_mut() {
            session.last_raw = raw;
        }
        applied
    }

    fn apply_drag_position(&mut self, target: DragTarget, position: Point) -> bool {
        match target {
            DragTarget::Object(id) => self.objects.move_to(id, position),
            DragTarget::Vertex(index) => self.room.set_point_at(index, position),
        }
    }

    /// Ends the drag, snapping the last raw position to the grid and
    /// recording the whole drag as one edit.
    pub fn end_drag(&mut self) -> bool {
        self.gestures.pointer_up();
        let Some(session) = self.drag.take() else {
            return false;
        };
        let snapped = snap_store_point(session.last_raw, &self.grid);
        self.apply_drag_position(session.target, snapped);
        let description = match session.target {
            DragTarget::Object(_) => "Move object",
            DragTarget::Vertex(_) => "Move room corner",
        };
        self.commit(description, session.before)
    }

    /// Abandons the drag and restores the models from before it began.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            self.room = session.before.room;
            self.objects = session.before.objects;
        }
    }

    pub fn pointer_up(&mut self) -> bool {
        if self.drag.is_some() {
            self.end_drag()
        } else {
            self.gestures.pointer_up();
            false
        }
    }

    /// Mouse wheel over the canvas at `pointer`.
    pub fn wheel(&mut self, pointer: Point, delta_y: f64) -> f64 {
        self.gestures.wheel(
            &mut self.viewport,
            pointer,
            delta_y,
            self.options.wheel_zoom_factor,
        )
    }

    /// Stage drag-pan to a new stage position.
    pub fn stage_drag(&mut self, position: Point) -> bool {
        self.gestures.stage_drag(&mut self.viewport, position)
    }

    /// Touch move. A single touch continues a drag; two touches pinch.
    pub fn touch_move(&mut self, touches: &[Point]) {
        match touches {
            [single] if self.drag.is_some() => {
                self.drag_move(*single);
            }
            _ => self.gestures.touch_move(&self.viewport, touches),
        }
    }

    pub fn touch_end(&mut self, remaining: usize) {
        self.gestures.touch_end(remaining);
        if remaining == 0 && self.drag.is_some() {
            self.end_drag();
        }
    }

    pub fn touch_cancel(&mut self) {
        self.gestures.touch_cancel();
        self.cancel_drag();
    }

    /// Applies the latest pending pinch transform. Call once per frame.
    pub fn flush_frame(&mut self) -> bool {
        self.gestures.flush_frame(&mut self.viewport)
    }
}
