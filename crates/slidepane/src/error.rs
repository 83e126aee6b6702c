#![forbid(unsafe_code)]

//! Panel construction errors.
//!
//! Only configuration problems that leave the panel without a meaningful
//! orientation or unit system are reported as errors. Everything else the
//! panel meets at runtime (bad anchor values, missing surfaces, zero slide
//! range, corrupt saved state) degrades locally and is logged instead.

use std::fmt;

use crate::config::Gravity;

/// Configuration errors detected when building a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelError {
    /// The mount gravity is neither top nor bottom.
    InvalidGravity { gravity: Gravity },
    /// Display density must be finite and positive.
    InvalidDensity { value: f32 },
    /// Drag sensitivity must be finite and positive.
    InvalidDragSensitivity { value: f32 },
    /// Touch slop must be finite and non-negative.
    InvalidTouchSlop { value: f32 },
    /// Fling velocity bounds must satisfy `0 <= min <= max`.
    InvalidFlingVelocity { min: f32, max: f32 },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGravity { gravity } => {
                write!(f, "gravity must be set to either top or bottom (got {gravity:?})")
            }
            Self::InvalidDensity { value } => {
                write!(f, "display density must be > 0 (got {value})")
            }
            Self::InvalidDragSensitivity { value } => {
                write!(f, "drag sensitivity must be > 0 (got {value})")
            }
            Self::InvalidTouchSlop { value } => {
                write!(f, "touch slop must be >= 0 (got {value})")
            }
            Self::InvalidFlingVelocity { min, max } => {
                write!(f, "fling velocity bounds must satisfy 0 <= min <= max (got {min}..{max})")
            }
        }
    }
}

impl std::error::Error for PanelError {}
