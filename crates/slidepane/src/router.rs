#![forbid(unsafe_code)]

//! Interception routing: decides, event by event, whether a gesture that
//! started over the container belongs to the panel or to the content
//! underneath.
//!
//! The router only classifies. It never moves anything; the panel combines
//! its [`RouteDecision`] with the drag controller's own capture check.
//!
//! # Invariants
//!
//! 1. Every pointer-down starts a fresh [`TouchSession`], superseding any
//!    previous one.
//! 2. Once a session is ruled out for the panel it stays ruled out until the
//!    next pointer-down.
//! 3. Pointer-up and cancel always clear transient capture state.

use serde::{Deserialize, Serialize};
use slidepane_core::event::{PointerEvent, PointerEventKind, PointerId};
use slidepane_core::geometry::Rect;

/// Transient record of one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSession {
    /// Where the pointer went down.
    pub origin: (f32, f32),
    /// The pointer that started the gesture.
    pub pointer_id: PointerId,
    /// Set once the gesture has been ruled out for panel dragging.
    pub unable_to_drag: bool,
}

impl TouchSession {
    #[must_use]
    pub const fn new(event: &PointerEvent) -> Self {
        Self {
            origin: (event.x, event.y),
            pointer_id: event.pointer_id,
            unable_to_drag: false,
        }
    }

    /// Displacement of `(x, y)` from the origin, as absolute values.
    #[must_use]
    pub fn abs_delta(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.origin.0).abs(), (y - self.origin.1).abs())
    }
}

/// Classification of one event on the interception path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// Sliding is off, the panel cannot slide, or the gesture was already
    /// ruled out. Do not intercept.
    Disabled,
    /// Pointer-up or cancel. Do not intercept.
    Released,
    /// The gesture is over the drag handle and should be intercepted as a
    /// possible tap or drag.
    Candidate,
    /// Undecided; defer to the drag controller.
    Pending,
    /// A horizontal gesture on a handle that handles its own touch. The
    /// content keeps the rest of the gesture.
    YieldToContent,
    /// Motion that is clearly not a panel drag. Ruled out for the rest of
    /// the gesture.
    Rejected,
}

impl RouteDecision {
    /// Whether the router itself asks for interception.
    #[inline]
    #[must_use]
    pub const fn intercepts(self) -> bool {
        matches!(self, Self::Candidate)
    }

    /// Whether the drag controller's pointer tracking must be cancelled.
    #[inline]
    #[must_use]
    pub const fn cancels_drag(self) -> bool {
        matches!(self, Self::Disabled | Self::Released | Self::Rejected)
    }

    /// Whether the drag controller still gets to look at the event.
    #[inline]
    #[must_use]
    pub const fn consults_drag(self) -> bool {
        matches!(self, Self::Candidate | Self::Pending)
    }
}

/// Inputs the router needs besides the event itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteContext {
    /// Sliding is enabled and the panel has a slide range.
    pub enabled: bool,
    /// The drag handle handles its own touch.
    pub handle_self_handles_touch: bool,
    /// Platform touch slop in px.
    pub touch_slop: f32,
    /// Drag-helper slop in px.
    pub drag_slop: f32,
    /// Current drag handle bounds, `None` without a slideable surface.
    pub handle: Option<Rect>,
}

impl RouteContext {
    #[inline]
    fn handle_contains(&self, x: f32, y: f32) -> bool {
        self.handle.is_some_and(|r| r.contains_point(x, y))
    }
}

/// Owns the current [`TouchSession`] and classifies events.
#[derive(Debug, Clone, Default)]
pub struct GestureRouter {
    session: Option<TouchSession>,
}

impl GestureRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Whether the current gesture has been ruled out for dragging.
    #[inline]
    #[must_use]
    pub fn is_unable_to_drag(&self) -> bool {
        self.session.is_some_and(|s| s.unable_to_drag)
    }

    /// Start a new session, discarding any previous one.
    pub fn begin_session(&mut self, event: &PointerEvent) {
        self.session = Some(TouchSession::new(event));
    }

    pub fn end_session(&mut self) {
        self.session = None;
    }

    fn mark_unable(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.unable_to_drag = true;
        }
    }

    /// Classify one event on the interception path.
    pub fn route(&mut self, event: &PointerEvent, ctx: &RouteContext) -> RouteDecision {
        if event.kind == PointerEventKind::Down {
            self.begin_session(event);
        }
        if !ctx.enabled || (self.is_unable_to_drag() && event.kind != PointerEventKind::Down) {
            return RouteDecision::Disabled;
        }

        match event.kind {
            PointerEventKind::Up | PointerEventKind::Cancel => RouteDecision::Released,
            PointerEventKind::Down => {
                if ctx.handle_contains(event.x, event.y) && !ctx.handle_self_handles_touch {
                    RouteDecision::Candidate
                } else {
                    RouteDecision::Pending
                }
            }
            PointerEventKind::Move => {
                let Some(session) = self.session else {
                    return RouteDecision::Pending;
                };
                if session.pointer_id != event.pointer_id {
                    return RouteDecision::Pending;
                }
                let (adx, ady) = session.abs_delta(event.x, event.y);
                let over_handle = ctx.handle_contains(event.x, event.y);
                let mut candidate = false;

                if ctx.handle_self_handles_touch {
                    if adx > ctx.touch_slop && ady < ctx.touch_slop {
                        self.mark_unable();
                        return RouteDecision::YieldToContent;
                    } else if ady > ctx.touch_slop {
                        candidate = over_handle;
                    }
                }

                if (ady > ctx.drag_slop && adx > ady) || !over_handle {
                    self.mark_unable();
                    return RouteDecision::Rejected;
                }

                if candidate {
                    RouteDecision::Candidate
                } else {
                    RouteDecision::Pending
                }
            }
        }
    }
}
