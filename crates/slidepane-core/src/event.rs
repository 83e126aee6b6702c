#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Hosts translate their native touch or mouse input into [`PointerEvent`]
//! values and feed them to the panel in delivery order.
//!
//! # Design Notes
//!
//! - Coordinates are in container-relative pixels and may be fractional.
//! - Every event carries the instant it was observed so velocity estimates
//!   do not depend on when the host gets around to delivering it.
//! - Only a single active pointer is tracked per gesture; events from other
//!   pointers are reported with their own [`PointerId`] and filtered by the
//!   consumer.

use web_time::Instant;

/// Identifier of a pointer (finger or mouse) within one gesture.
pub type PointerId = u32;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer touched down / button pressed. Starts a new gesture.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer lifted. Ends the gesture normally.
    Up,
    /// Gesture aborted by the platform (focus loss, parent stole the stream).
    Cancel,
}

impl PointerEventKind {
    /// Whether this kind terminates the current gesture.
    #[inline]
    #[must_use]
    pub const fn ends_gesture(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The phase of the event.
    pub kind: PointerEventKind,

    /// Which pointer produced the event.
    pub pointer_id: PointerId,

    /// X coordinate in container pixels.
    pub x: f32,

    /// Y coordinate in container pixels.
    pub y: f32,

    /// When the sample was taken.
    pub time: Instant,
}

impl PointerEvent {
    /// Create a new event for the primary pointer (id 0).
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32, time: Instant) -> Self {
        Self {
            kind,
            pointer_id: 0,
            x,
            y,
            time,
        }
    }

    /// Shorthand for a `Down` event.
    #[must_use]
    pub const fn down(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerEventKind::Down, x, y, time)
    }

    /// Shorthand for a `Move` event.
    #[must_use]
    pub const fn moved(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerEventKind::Move, x, y, time)
    }

    /// Shorthand for an `Up` event.
    #[must_use]
    pub const fn up(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerEventKind::Up, x, y, time)
    }

    /// Shorthand for a `Cancel` event.
    #[must_use]
    pub const fn cancel(x: f32, y: f32, time: Instant) -> Self {
        Self::new(PointerEventKind::Cancel, x, y, time)
    }

    /// Attach a pointer id.
    #[must_use]
    pub const fn with_pointer_id(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_event_position() {
        let t = Instant::now();
        let event = PointerEvent::down(10.0, 20.5, t);
        assert_eq!(event.position(), (10.0, 20.5));
        assert_eq!(event.kind, PointerEventKind::Down);
        assert_eq!(event.pointer_id, 0);
    }

    #[test]
    fn pointer_event_with_id() {
        let t = Instant::now();
        let event = PointerEvent::moved(1.0, 2.0, t).with_pointer_id(3);
        assert_eq!(event.pointer_id, 3);
        assert_eq!(event.kind, PointerEventKind::Move);
    }

    #[test]
    fn terminal_kinds() {
        assert!(PointerEventKind::Up.ends_gesture());
        assert!(PointerEventKind::Cancel.ends_gesture());
        assert!(!PointerEventKind::Down.ends_gesture());
        assert!(!PointerEventKind::Move.ends_gesture());
    }
}
