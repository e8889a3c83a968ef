//! Pointer and touch gesture state for the 2D plan.
//!
//! Dragging an object (or room vertex) and pinch-zooming both suppress
//! drag-panning of the stage. Pinch transforms are not applied immediately:
//! each touch move replaces a pending transform, and [`GestureState::flush_frame`]
//! applies at most the latest one per rendered frame. Any direct zoom or pan
//! first settles a pending transform, so an older pinch never lands on top
//! of a newer viewport.

use crate::geometry::{distance, Point};
use crate::viewport::Viewport;

/// A zoom/pan result waiting for the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransform {
    pub scale: f64,
    pub position: Point,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    is_moving_object: bool,
    is_pinching: bool,
    last_touch_distance: Option<f64>,
    pending: Option<PendingTransform>,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_moving_object(&self) -> bool {
        self.is_moving_object
    }

    pub fn is_pinching(&self) -> bool {
        self.is_pinching
    }

    pub fn pending_transform(&self) -> Option<PendingTransform> {
        self.pending
    }

    /// Whether the stage should follow a drag-pan right now.
    pub fn stage_pan_allowed(&self) -> bool {
        !self.is_moving_object && !self.is_pinching
    }

    /// Pointer went down on an object or room vertex.
    pub fn begin_object_move(&mut self) {
        self.is_moving_object = true;
    }

    /// Stage drag moved to `position`. Ignored while an object is being moved
    /// or a pinch is in progress.
    pub fn stage_drag(&mut self, viewport: &mut Viewport, position: Point) -> bool {
        if !self.stage_pan_allowed() {
            return false;
        }
        self.flush_frame(viewport);
        viewport.pan_to(position);
        true
    }

    /// Wheel zoom around `pointer`, on top of any pinch step not yet drawn.
    pub fn wheel(
        &mut self,
        viewport: &mut Viewport,
        pointer: Point,
        delta_y: f64,
        factor: f64,
    ) -> f64 {
        self.flush_frame(viewport);
        viewport.zoom_wheel(pointer, delta_y, factor)
    }

    /// Touch move with the current touch points in screen space. Two touches
    /// drive a pinch around their midpoint; anything else is left to the
    /// single-pointer handlers.
    pub fn touch_move(&mut self, viewport: &Viewport, touches: &[Point]) {
        let [a, b] = touches else {
            return;
        };
        self.is_pinching = true;
        let dist = distance(*a, *b);
        if let Some(last) = self.last_touch_distance.filter(|d| *d > 0.0) {
            // Build on the newest transform, flushed or not.
            let mut base = viewport.clone();
            if let Some(p) = self.pending {
                base.set_scale(p.scale);
                base.pan_to(p.position);
            }
            let (scale, position) =
                base.zoomed_transform(a.midpoint(*b), base.scale() * dist / last);
            self.pending = Some(PendingTransform { scale, position });
        }
        self.last_touch_distance = Some(dist);
    }

    /// A touch ended with `remaining` touches still down. Fewer than two ends
    /// the pinch; none ends any object move as well.
    pub fn touch_end(&mut self, remaining: usize) {
        if remaining < 2 {
            self.is_pinching = false;
            self.last_touch_distance = None;
        }
        if remaining == 0 {
            self.is_moving_object = false;
        }
    }

    /// Touch sequence cancelled by the platform.
    pub fn touch_cancel(&mut self) {
        self.reset();
    }

    pub fn pointer_up(&mut self) {
        self.reset();
    }

    /// Back to neutral. The pending transform survives so the final pinch
    /// step is still applied on the next frame.
    pub fn reset(&mut self) {
        self.is_moving_object = false;
        self.is_pinching = false;
        self.last_touch_distance = None;
    }

    /// Applies the latest pending transform, if any. Call once per frame.
    pub fn flush_frame(&mut self, viewport: &mut Viewport) -> bool {
        match self.pending.take() {
            Some(p) => {
                viewport.set_scale(p.scale);
                viewport.pan_to(p.position);
                true
            }
            None => false,
        }
    }
}
