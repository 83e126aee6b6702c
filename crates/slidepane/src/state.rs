#![forbid(unsafe_code)]

//! Resting states and their persistence.
//!
//! The panel is always in exactly one [`SlideState`]. The state is only
//! re-derived when the surface comes to rest (the drag capture returns to
//! idle), so listeners hear about a state once per real change and never
//! while a finger or an animation still owns the surface.
//!
//! # Invariants
//!
//! 1. [`SlideStateMachine::evaluate`] is a no-op unless the capture state is
//!    [`DragCaptureState::Idle`].
//! 2. A transition is emitted only when the derived state differs from the
//!    stored one.
//! 3. Restoring from an unrecognized name yields [`SlideState::Collapsed`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drag::DragCaptureState;

/// Where the panel is resting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlideState {
    /// Offset 1.0: only the collapsed panel height is showing.
    #[default]
    Collapsed,
    /// Offset 0.0: the whole slide range is revealed.
    Expanded,
    /// Resting at the configured anchor point.
    Anchored,
}

impl SlideState {
    /// Persisted name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "COLLAPSED",
            Self::Expanded => "EXPANDED",
            Self::Anchored => "ANCHORED",
        }
    }

    /// Derive the resting state for `offset`.
    ///
    /// `anchor_offset` is the offset the anchor point resolves to for the
    /// current slide range (0.0 when no anchor is set). Anything that is
    /// neither fully expanded nor exactly anchored counts as collapsed.
    #[must_use]
    pub fn resolve(offset: f32, anchor_offset: f32) -> Self {
        if offset == 0.0 {
            Self::Expanded
        } else if offset == anchor_offset {
            Self::Anchored
        } else {
            Self::Collapsed
        }
    }

    /// Parse a persisted name, falling back to `Collapsed` for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or(Self::Collapsed)
    }
}

impl fmt::Display for SlideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name does not match any [`SlideState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlideState(pub String);

impl fmt::Display for UnknownSlideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown slide state {:?}", self.0)
    }
}

impl std::error::Error for UnknownSlideState {}

impl FromStr for SlideState {
    type Err = UnknownSlideState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COLLAPSED" => Ok(Self::Collapsed),
            "EXPANDED" => Ok(Self::Expanded),
            "ANCHORED" => Ok(Self::Anchored),
            other => Err(UnknownSlideState(other.to_owned())),
        }
    }
}

impl From<String> for SlideState {
    fn from(name: String) -> Self {
        Self::from_name_lenient(&name)
    }
}

impl From<SlideState> for String {
    fn from(state: SlideState) -> Self {
        state.as_str().to_owned()
    }
}

/// A change of resting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideTransition {
    /// Monotonic counter, starting at 1.
    pub transition_id: u64,
    pub from: SlideState,
    pub to: SlideState,
}

/// Holds the current [`SlideState`] and decides when it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideStateMachine {
    state: SlideState,
    next_transition_id: u64,
}

impl SlideStateMachine {
    #[must_use]
    pub fn new(initial: SlideState) -> Self {
        Self {
            state: initial,
            next_transition_id: 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SlideState {
        self.state
    }

    /// Re-derive the state after the surface came to rest.
    pub fn evaluate(
        &mut self,
        offset: f32,
        anchor_offset: f32,
        capture: DragCaptureState,
    ) -> Option<SlideTransition> {
        if capture != DragCaptureState::Idle {
            return None;
        }
        let next = SlideState::resolve(offset, anchor_offset);
        if next == self.state {
            return None;
        }
        let transition = SlideTransition {
            transition_id: self.next_transition_id.max(1),
            from: self.state,
            to: next,
        };
        self.next_transition_id = transition.transition_id + 1;
        self.state = next;
        Some(transition)
    }

    /// Overwrite the state without emitting a transition.
    pub fn restore(&mut self, state: SlideState) {
        self.state = state;
    }
}

/// Snapshot of a panel that survives process restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSavedState {
    pub slide_state: SlideState,
}

impl PanelSavedState {
    #[must_use]
    pub const fn new(slide_state: SlideState) -> Self {
        Self { slide_state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_states() {
        assert_eq!(SlideState::resolve(0.0, 0.0), SlideState::Expanded);
        assert_eq!(SlideState::resolve(0.0, 0.3), SlideState::Expanded);
        assert_eq!(SlideState::resolve(0.3, 0.3), SlideState::Anchored);
        assert_eq!(SlideState::resolve(0.30001, 0.3), SlideState::Collapsed);
        assert_eq!(SlideState::resolve(1.0, 0.3), SlideState::Collapsed);
        assert_eq!(SlideState::resolve(0.5, 0.0), SlideState::Collapsed);
    }

    #[test]
    fn evaluate_waits_for_idle() {
        let mut machine = SlideStateMachine::new(SlideState::Collapsed);
        assert_eq!(machine.evaluate(0.0, 0.0, DragCaptureState::Dragging), None);
        assert_eq!(machine.evaluate(0.0, 0.0, DragCaptureState::Settling), None);
        assert_eq!(machine.state(), SlideState::Collapsed);

        let transition = machine.evaluate(0.0, 0.0, DragCaptureState::Idle);
        assert_eq!(
            transition,
            Some(SlideTransition {
                transition_id: 1,
                from: SlideState::Collapsed,
                to: SlideState::Expanded,
            })
        );
        assert_eq!(machine.state(), SlideState::Expanded);
    }

    #[test]
    fn evaluate_suppresses_repeats() {
        let mut machine = SlideStateMachine::new(SlideState::Collapsed);
        assert!(machine.evaluate(0.0, 0.0, DragCaptureState::Idle).is_some());
        assert!(machine.evaluate(0.0, 0.0, DragCaptureState::Idle).is_none());
        let next = machine.evaluate(1.0, 0.0, DragCaptureState::Idle);
        assert_eq!(next.map(|t| t.transition_id), Some(2));
    }

    #[test]
    fn restore_is_silent() {
        let mut machine = SlideStateMachine::default();
        machine.restore(SlideState::Anchored);
        assert_eq!(machine.state(), SlideState::Anchored);
        assert_eq!(
            machine.evaluate(0.4, 0.4, DragCaptureState::Idle),
            None,
            "already anchored"
        );
    }

    #[test]
    fn names_round_trip() {
        for state in [SlideState::Collapsed, SlideState::Expanded, SlideState::Anchored] {
            assert_eq!(state.as_str().parse::<SlideState>(), Ok(state));
            assert_eq!(state.to_string(), state.as_str());
        }
    }

    #[test]
    fn unknown_names_fall_back_to_collapsed() {
        assert_eq!(SlideState::from_name_lenient("HIDDEN"), SlideState::Collapsed);
        assert_eq!(SlideState::from_name_lenient(""), SlideState::Collapsed);
        assert_eq!(SlideState::from_name_lenient("expanded"), SlideState::Collapsed);
        assert!("DRAGGING".parse::<SlideState>().is_err());
    }

    #[test]
    fn saved_state_json() {
        let saved = PanelSavedState::new(SlideState::Anchored);
        let json = serde_json::to_string(&saved).expect("serialize");
        assert_eq!(json, r#"{"slide_state":"ANCHORED"}"#);

        let restored: PanelSavedState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, saved);

        let corrupt: PanelSavedState =
            serde_json::from_str(r#"{"slide_state":"SIDEWAYS"}"#).expect("lenient");
        assert_eq!(corrupt.slide_state, SlideState::Collapsed);
    }
}
