#![forbid(unsafe_code)]

//! Release targeting and the settle animation.
//!
//! When a drag ends, [`plan_settle`] picks the resting position from the
//! release velocity and the current offset. [`SettleAnimator`] then eases the
//! slideable surface there, one host frame at a time.

use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use slidepane_core::animation::{Animation, Slide, ease_out_quint};

/// Settle duration used for an unflung release across the full range (ms).
const BASE_SETTLE_MS: f32 = 256.0;

/// Resting position chosen for a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleTarget {
    Expanded,
    Anchored,
    Collapsed,
}

impl SettleTarget {
    /// Slide offset of this target.
    #[must_use]
    pub const fn offset(self, anchor_offset: f32) -> f32 {
        match self {
            Self::Expanded => 0.0,
            Self::Anchored => anchor_offset,
            Self::Collapsed => 1.0,
        }
    }
}

/// Pick where a released panel should come to rest.
///
/// `velocity` is the release velocity in px/s normalized so that positive
/// means "toward collapsed", with sub-minimum flings already zeroed.
/// `anchor_offset` is `Some` when an anchor point is configured.
///
/// Any fling toward collapse collapses. Any fling toward expand expands
/// fully, even from below the anchor. Without a fling the panel goes to the
/// nearest band: above the midpoint between anchor and collapsed it
/// collapses, between half the anchor and that midpoint it anchors, and
/// otherwise it expands.
#[must_use]
pub fn plan_settle(velocity: f32, offset: f32, anchor_offset: Option<f32>) -> SettleTarget {
    let at_rest = velocity == 0.0;
    match anchor_offset {
        Some(anchor) => {
            let collapse_threshold = (1.0 + anchor) / 2.0;
            if velocity > 0.0 || (at_rest && offset >= collapse_threshold) {
                SettleTarget::Collapsed
            } else if at_rest && offset < collapse_threshold && offset >= anchor / 2.0 {
                SettleTarget::Anchored
            } else {
                SettleTarget::Expanded
            }
        }
        None => {
            if velocity > 0.0 || (at_rest && offset > 0.5) {
                SettleTarget::Collapsed
            } else {
                SettleTarget::Expanded
            }
        }
    }
}

/// Bounds on a settle animation's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTiming {
    pub min: Duration,
    pub max: Duration,
}

impl SettleTiming {
    #[must_use]
    pub const fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    fn clamp(self, duration: Duration) -> Duration {
        let max = self.max.max(self.min);
        duration.clamp(self.min, max)
    }
}

fn distance_influence(fraction: f32) -> f32 {
    ((fraction - 0.5) * 0.3 * PI / 2.0).sin()
}

/// Duration to travel `distance` px after a release at `velocity` px/s
/// across a slide range of `motion_range` px.
///
/// Faster flings settle faster; unflung releases take longer the further
/// they travel.
#[must_use]
pub fn settle_duration(distance: i32, velocity: f32, motion_range: i32, timing: SettleTiming) -> Duration {
    if distance == 0 {
        return Duration::ZERO;
    }
    let extent = motion_range.max(1) as f32;
    let distance = distance.unsigned_abs() as f32;
    let speed = velocity.abs();

    let ms = if speed > 0.0 {
        let half = extent / 2.0;
        let ratio = (distance / extent).min(1.0);
        let travel = half + half * distance_influence(ratio);
        4.0 * (1000.0 * travel / speed).round()
    } else {
        (distance / extent + 1.0) * BASE_SETTLE_MS
    };
    timing.clamp(Duration::from_millis(ms.max(0.0) as u64))
}

/// One frame of a settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleStep {
    /// Top edge of the slideable surface for this frame.
    pub top: i32,
    /// Whether the surface reached its target this frame.
    pub finished: bool,
}

/// Eases the slideable surface toward a target top edge.
#[derive(Debug, Clone, Copy)]
pub struct SettleAnimator {
    slide: Slide,
}

impl SettleAnimator {
    /// Start a settle from `from_top` to `to_top`.
    #[must_use]
    pub fn new(from_top: i32, to_top: i32, velocity: f32, motion_range: i32, timing: SettleTiming) -> Self {
        let duration = settle_duration(to_top - from_top, velocity, motion_range, timing);
        Self {
            slide: Slide::new(from_top, to_top, duration).easing(ease_out_quint),
        }
    }

    #[inline]
    #[must_use]
    pub const fn target_top(&self) -> i32 {
        self.slide.to()
    }

    #[inline]
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.slide.duration()
    }

    /// Advance by `dt`. The final frame lands exactly on the target.
    pub fn tick(&mut self, dt: Duration) -> SettleStep {
        self.slide.tick(dt);
        let top = self.slide.position();
        let finished = self.slide.is_complete() || top == self.slide.to();
        SettleStep {
            top: if finished { self.slide.to() } else { top },
            finished,
        }
    }
}
