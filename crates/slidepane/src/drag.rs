#![forbid(unsafe_code)]

//! Pointer capture and drag tracking for the slideable surface.
//!
//! [`DragController`] turns the pointer stream into capture, motion, and
//! release effects. It knows nothing about panel geometry: callers tell it
//! whether a point is over the slideable surface and whether the current
//! gesture may capture at all, and they apply the emitted [`DragEffect`]s.
//!
//! ```text
//! Idle -> Dragging -> (release) -> Settling -> Idle
//!   ^        |                        |
//!   +--------+---- release at rest ---+---- pointer-down over surface -> Dragging
//! ```
//!
//! A release leaves the controller in `Dragging` until the caller resolves
//! it with [`DragController::begin_settling`] or [`DragController::finish`],
//! so every transition into `Idle` is observed by the caller exactly once.

use serde::{Deserialize, Serialize};
use slidepane_core::event::{PointerEvent, PointerEventKind, PointerId};
use slidepane_core::velocity::{VelocityTracker, clamp_magnitude};

/// Who currently owns the slideable surface's position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragCaptureState {
    /// Nothing is moving the surface.
    #[default]
    Idle,
    /// A pointer owns the surface.
    Dragging,
    /// An animation owns the surface.
    Settling,
}

/// Explicit no-op diagnostics for pointer events that change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    /// The event belongs to a pointer other than the tracked one.
    PointerMismatch,
    /// Vertical motion has not exceeded the drag slop.
    BelowSlop,
    /// The gesture did not start over the slideable surface.
    NotOverSlideable,
    /// The gesture has been ruled out for panel dragging.
    CaptureRejected,
    /// Release or cancel without an active drag.
    NoActiveDrag,
    /// The pointer already owns the surface.
    AlreadyDragging,
    /// Sub-pixel motion; accumulated for the next event.
    BelowPixel,
}

/// Result of feeding one pointer event to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    /// The pointer captured the surface. Any running settle must stop.
    Captured { pointer_id: PointerId },
    /// The surface should move by `dy` whole pixels.
    Moved { dy: i32 },
    /// The drag ended; `velocity_y` is in px/s, positive downward, already
    /// clamped to the fling bounds.
    Released { velocity_y: f32 },
    Noop { reason: DragNoopReason },
}

/// Tracks the active pointer, its slop, and its velocity.
#[derive(Debug, Clone)]
pub struct DragController {
    capture: DragCaptureState,
    active_pointer: Option<PointerId>,
    initial: (f32, f32),
    last_y: f32,
    tracker: VelocityTracker,
    drag_slop: f32,
    min_velocity: f32,
    max_velocity: f32,
}

impl DragController {
    /// Create a controller. Velocities are in px/s.
    #[must_use]
    pub fn new(drag_slop: f32, min_velocity: f32, max_velocity: f32) -> Self {
        Self {
            capture: DragCaptureState::Idle,
            active_pointer: None,
            initial: (0.0, 0.0),
            last_y: 0.0,
            tracker: VelocityTracker::new(),
            drag_slop,
            min_velocity,
            max_velocity,
        }
    }

    #[inline]
    #[must_use]
    pub const fn capture_state(&self) -> DragCaptureState {
        self.capture
    }

    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.capture, DragCaptureState::Dragging)
    }

    #[inline]
    #[must_use]
    pub const fn drag_slop(&self) -> f32 {
        self.drag_slop
    }

    /// Pointer currently tracked, if any.
    #[inline]
    #[must_use]
    pub const fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    /// Where the tracked pointer went down.
    #[inline]
    #[must_use]
    pub const fn initial_position(&self) -> (f32, f32) {
        self.initial
    }

    pub fn set_velocity_bounds(&mut self, min: f32, max: f32) {
        self.min_velocity = min;
        self.max_velocity = max;
    }

    /// Observe an event on the interception path.
    ///
    /// Captures only when a pointer goes down on a settling surface or moves
    /// past the drag slop. Never emits motion: once intercepting, the caller
    /// routes the stream through [`Self::process`].
    pub fn should_intercept(
        &mut self,
        event: &PointerEvent,
        over_slideable: bool,
        can_capture: bool,
    ) -> DragEffect {
        match event.kind {
            PointerEventKind::Down => {
                self.begin_tracking(event);
                if self.capture == DragCaptureState::Settling && over_slideable && can_capture {
                    self.capture_pointer(event.pointer_id)
                } else {
                    DragEffect::Noop {
                        reason: DragNoopReason::BelowSlop,
                    }
                }
            }
            PointerEventKind::Move => {
                if self.active_pointer != Some(event.pointer_id) {
                    return DragEffect::Noop {
                        reason: DragNoopReason::PointerMismatch,
                    };
                }
                if self.is_dragging() {
                    self.tracker.add(event.x, event.y, event.time);
                    return DragEffect::Noop {
                        reason: DragNoopReason::AlreadyDragging,
                    };
                }
                self.track_before_capture(event, over_slideable, can_capture)
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.cancel(),
        }
    }

    /// Process an event on the panel's own touch path.
    ///
    /// A pointer-down over the surface captures immediately.
    pub fn process(
        &mut self,
        event: &PointerEvent,
        over_slideable: bool,
        can_capture: bool,
    ) -> DragEffect {
        match event.kind {
            PointerEventKind::Down => {
                self.begin_tracking(event);
                if over_slideable && can_capture {
                    self.capture_pointer(event.pointer_id)
                } else if !over_slideable {
                    DragEffect::Noop {
                        reason: DragNoopReason::NotOverSlideable,
                    }
                } else {
                    DragEffect::Noop {
                        reason: DragNoopReason::CaptureRejected,
                    }
                }
            }
            PointerEventKind::Move => {
                if self.active_pointer != Some(event.pointer_id) {
                    return DragEffect::Noop {
                        reason: DragNoopReason::PointerMismatch,
                    };
                }
                if !self.is_dragging() {
                    return self.track_before_capture(event, over_slideable, can_capture);
                }
                self.tracker.add(event.x, event.y, event.time);
                let dy = (event.y - self.last_y) as i32;
                if dy == 0 {
                    return DragEffect::Noop {
                        reason: DragNoopReason::BelowPixel,
                    };
                }
                self.last_y += dy as f32;
                DragEffect::Moved { dy }
            }
            PointerEventKind::Up => {
                if self.active_pointer != Some(event.pointer_id) {
                    return DragEffect::Noop {
                        reason: DragNoopReason::PointerMismatch,
                    };
                }
                self.tracker.add(event.x, event.y, event.time);
                let effect = if self.is_dragging() {
                    DragEffect::Released {
                        velocity_y: self.release_velocity(),
                    }
                } else {
                    DragEffect::Noop {
                        reason: DragNoopReason::NoActiveDrag,
                    }
                };
                self.reset_tracking();
                effect
            }
            PointerEventKind::Cancel => self.cancel(),
        }
    }

    /// Drop pointer tracking. An active drag is released with zero velocity.
    pub fn cancel(&mut self) -> DragEffect {
        let effect = if self.is_dragging() {
            DragEffect::Released { velocity_y: 0.0 }
        } else {
            DragEffect::Noop {
                reason: DragNoopReason::NoActiveDrag,
            }
        };
        self.reset_tracking();
        effect
    }

    /// Hand the surface to a settle animation. Any tracked pointer is dropped.
    pub fn begin_settling(&mut self) {
        self.capture = DragCaptureState::Settling;
        self.reset_tracking();
    }

    /// Return to `Idle`. Returns `true` if the state changed.
    pub fn finish(&mut self) -> bool {
        let changed = self.capture != DragCaptureState::Idle;
        self.capture = DragCaptureState::Idle;
        changed
    }

    fn begin_tracking(&mut self, event: &PointerEvent) {
        self.tracker.clear();
        self.tracker.add(event.x, event.y, event.time);
        self.active_pointer = Some(event.pointer_id);
        self.initial = event.position();
        self.last_y = event.y;
    }

    fn reset_tracking(&mut self) {
        self.tracker.clear();
        self.active_pointer = None;
    }

    fn track_before_capture(
        &mut self,
        event: &PointerEvent,
        over_slideable: bool,
        can_capture: bool,
    ) -> DragEffect {
        self.tracker.add(event.x, event.y, event.time);
        self.last_y = event.y;
        if (event.y - self.initial.1).abs() <= self.drag_slop {
            DragEffect::Noop {
                reason: DragNoopReason::BelowSlop,
            }
        } else if !over_slideable {
            DragEffect::Noop {
                reason: DragNoopReason::NotOverSlideable,
            }
        } else if !can_capture {
            DragEffect::Noop {
                reason: DragNoopReason::CaptureRejected,
            }
        } else {
            self.capture_pointer(event.pointer_id)
        }
    }

    fn capture_pointer(&mut self, pointer_id: PointerId) -> DragEffect {
        if self.is_dragging() && self.active_pointer == Some(pointer_id) {
            return DragEffect::Noop {
                reason: DragNoopReason::AlreadyDragging,
            };
        }
        self.capture = DragCaptureState::Dragging;
        self.active_pointer = Some(pointer_id);
        DragEffect::Captured { pointer_id }
    }

    fn release_velocity(&self) -> f32 {
        let (_, vy) = self.tracker.velocity();
        clamp_magnitude(vy, self.min_velocity, self.max_velocity)
    }
}
