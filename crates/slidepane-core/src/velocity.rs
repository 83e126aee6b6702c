#![forbid(unsafe_code)]

//! Pointer velocity estimation.
//!
//! [`VelocityTracker`] keeps a short window of recent pointer samples and
//! reports the average velocity across that window in pixels per second.
//!
//! # Invariants
//!
//! 1. Samples older than the horizon (relative to the newest sample) are
//!    discarded on insertion, so a pointer that rests before lifting reports
//!    zero velocity.
//! 2. Fewer than two samples, or samples sharing one timestamp, yield `(0, 0)`.
//! 3. [`clamp_magnitude`] never changes the sign of a value.

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

/// Default sample window.
pub const DEFAULT_VELOCITY_HORIZON: Duration = Duration::from_millis(100);

/// Upper bound on retained samples; older entries fall off first.
const MAX_SAMPLES: usize = 20;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: Instant,
    x: f32,
    y: f32,
}

/// Windowed pointer velocity estimator.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    horizon: Duration,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    /// Create a tracker with the default 100ms window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_horizon(DEFAULT_VELOCITY_HORIZON)
    }

    /// Create a tracker with an explicit window.
    #[must_use]
    pub fn with_horizon(horizon: Duration) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            horizon: if horizon.is_zero() {
                DEFAULT_VELOCITY_HORIZON
            } else {
                horizon
            },
        }
    }

    /// Forget every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples currently inside the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a pointer sample.
    ///
    /// Samples that arrive out of order (earlier than the newest retained
    /// sample) reset the window, since the stream is no longer trustworthy.
    pub fn add(&mut self, x: f32, y: f32, time: Instant) {
        if let Some(last) = self.samples.back()
            && time < last.time
        {
            self.samples.clear();
        }
        self.samples.push_back(Sample { time, x, y });
        while self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
        while let Some(first) = self.samples.front() {
            if time.duration_since(first.time) > self.horizon {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Average velocity `(vx, vy)` across the window, in pixels per second.
    #[must_use]
    pub fn velocity(&self) -> (f32, f32) {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return (0.0, 0.0);
        };
        let elapsed = last.time.duration_since(first.time).as_secs_f32();
        if elapsed <= f32::EPSILON {
            return (0.0, 0.0);
        }
        ((last.x - first.x) / elapsed, (last.y - first.y) / elapsed)
    }
}

/// Clamp the magnitude of `value` into `[min, max]`.
///
/// Values whose magnitude is below `min` collapse to `0.0`; values above
/// `max` are limited to `±max`.
#[must_use]
pub fn clamp_magnitude(value: f32, min: f32, max: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude < min {
        0.0
    } else if magnitude > max {
        if value > 0.0 { max } else { -max }
    } else {
        value
    }
}
