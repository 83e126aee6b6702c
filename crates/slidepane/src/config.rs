#![forbid(unsafe_code)]

//! Panel configuration.
//!
//! [`PanelConfig`] collects everything a host can set when mounting a panel.
//! Sizes left as `None` fall back to density-scaled defaults, so a config
//! written once in dp-neutral terms works across screens.
//!
//! # Invariants
//!
//! 1. [`PanelConfig::validate`] rejects configurations without a supported
//!    orientation; everything else is clamped or ignored at runtime.
//! 2. The drag slop is always at least the touch slop
//!    (`touch_slop / drag_sensitivity` with sensitivity in (0, 1]).

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Default collapsed panel height (dp).
pub const DEFAULT_PANEL_HEIGHT_DP: f32 = 68.0;

/// Default shadow height (dp).
pub const DEFAULT_SHADOW_HEIGHT_DP: f32 = 4.0;

/// Default scrim color drawn over the main surface (ARGB).
pub const DEFAULT_FADE_COLOR: u32 = 0x9900_0000;

/// Default minimum fling velocity (dp per second).
pub const DEFAULT_MIN_FLING_VELOCITY_DP: f32 = 400.0;

/// Default maximum fling velocity (dp per second).
pub const DEFAULT_MAX_FLING_VELOCITY_DP: f32 = 8_000.0;

/// Default parallax distance for the main surface (dp).
pub const DEFAULT_PARALLAX_OFFSET_DP: f32 = 0.0;

/// Default platform touch slop (px).
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Default drag-helper sensitivity. 0.5 doubles the touch slop.
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.5;

/// Upper bound for a settle animation (ms).
pub const DEFAULT_MAX_SETTLE_MS: u64 = 600;

/// Which container edge the panel is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    /// Mounted at the bottom edge; expands by sliding up.
    Bottom,
    /// Mounted at the top edge; expands by sliding down.
    Top,
    /// No edge chosen. Rejected at construction.
    Unspecified,
}

impl Gravity {
    /// `Some(true)` when the panel opens upward, `Some(false)` when it opens
    /// downward, `None` when the gravity is unusable.
    #[must_use]
    pub const fn slides_up(self) -> Option<bool> {
        match self {
            Self::Bottom => Some(true),
            Self::Top => Some(false),
            Self::Unspecified => None,
        }
    }
}

/// Host-facing configuration for a [`SlidingPanel`](crate::SlidingPanel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Mount edge.
    pub gravity: Gravity,
    /// Pixels per dp.
    pub density: f32,
    /// Collapsed panel height in px. `None` uses 68dp.
    pub panel_height: Option<i32>,
    /// Shadow height in px. `None` uses 4dp; `Some(0)` disables the shadow.
    pub shadow_height: Option<i32>,
    /// Maximum parallax translation of the main surface in px. `None` uses 0.
    pub parallax_offset: Option<i32>,
    /// Releases slower than this (dp/s) count as zero velocity.
    pub min_fling_velocity: f32,
    /// Release velocity cap (dp/s).
    pub max_fling_velocity: f32,
    /// ARGB color of the scrim over the main surface.
    pub covered_fade_color: u32,
    /// When true the panel overlays the main surface instead of reserving
    /// space for its collapsed height.
    pub overlay_content: bool,
    /// When true the drag handle handles its own horizontal touch (scrolling
    /// rows, buttons) and only clearly vertical motion drags the panel.
    pub drag_view_self_handles_touch: bool,
    /// Master switch for dragging.
    pub sliding_enabled: bool,
    /// Intermediate resting fraction in (0, 1); anything else means unset.
    pub anchor_point: f32,
    /// Platform touch slop in px.
    pub touch_slop: f32,
    /// Drag-helper sensitivity in (0, 1]. The drag slop is
    /// `touch_slop / drag_sensitivity`.
    pub drag_sensitivity: f32,
    /// Lower bound for a settle animation (ms).
    pub min_settle_ms: u64,
    /// Upper bound for a settle animation (ms).
    pub max_settle_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            gravity: Gravity::Bottom,
            density: 1.0,
            panel_height: None,
            shadow_height: None,
            parallax_offset: None,
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY_DP,
            max_fling_velocity: DEFAULT_MAX_FLING_VELOCITY_DP,
            covered_fade_color: DEFAULT_FADE_COLOR,
            overlay_content: false,
            drag_view_self_handles_touch: false,
            sliding_enabled: true,
            anchor_point: 0.0,
            touch_slop: DEFAULT_TOUCH_SLOP,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            min_settle_ms: 0,
            max_settle_ms: DEFAULT_MAX_SETTLE_MS,
        }
    }
}

impl PanelConfig {
    /// Default configuration mounted on `gravity`.
    #[must_use]
    pub fn new(gravity: Gravity) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn with_panel_height(mut self, px: i32) -> Self {
        self.panel_height = Some(px);
        self
    }

    #[must_use]
    pub fn with_shadow_height(mut self, px: i32) -> Self {
        self.shadow_height = Some(px);
        self
    }

    #[must_use]
    pub fn with_parallax_offset(mut self, px: i32) -> Self {
        self.parallax_offset = Some(px);
        self
    }

    #[must_use]
    pub fn with_fling_velocity(mut self, min_dp: f32, max_dp: f32) -> Self {
        self.min_fling_velocity = min_dp;
        self.max_fling_velocity = max_dp;
        self
    }

    #[must_use]
    pub fn with_covered_fade_color(mut self, argb: u32) -> Self {
        self.covered_fade_color = argb;
        self
    }

    #[must_use]
    pub fn with_overlay_content(mut self, overlay: bool) -> Self {
        self.overlay_content = overlay;
        self
    }

    #[must_use]
    pub fn with_drag_view_self_handles_touch(mut self, enabled: bool) -> Self {
        self.drag_view_self_handles_touch = enabled;
        self
    }

    #[must_use]
    pub fn with_sliding_enabled(mut self, enabled: bool) -> Self {
        self.sliding_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_anchor_point(mut self, anchor: f32) -> Self {
        self.anchor_point = anchor;
        self
    }

    #[must_use]
    pub fn with_touch_slop(mut self, px: f32) -> Self {
        self.touch_slop = px;
        self
    }

    #[must_use]
    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn with_settle_bounds(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.min_settle_ms = min_ms;
        self.max_settle_ms = max_ms;
        self
    }

    /// Check the parts of the configuration that cannot be repaired.
    pub fn validate(&self) -> Result<(), PanelError> {
        if self.gravity.slides_up().is_none() {
            return Err(PanelError::InvalidGravity {
                gravity: self.gravity,
            });
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(PanelError::InvalidDensity {
                value: self.density,
            });
        }
        if !(self.drag_sensitivity.is_finite() && self.drag_sensitivity > 0.0) {
            return Err(PanelError::InvalidDragSensitivity {
                value: self.drag_sensitivity,
            });
        }
        if !(self.touch_slop.is_finite() && self.touch_slop >= 0.0) {
            return Err(PanelError::InvalidTouchSlop {
                value: self.touch_slop,
            });
        }
        let (min, max) = (self.min_fling_velocity, self.max_fling_velocity);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(PanelError::InvalidFlingVelocity { min, max });
        }
        Ok(())
    }

    /// Collapsed panel height in px.
    #[must_use]
    pub fn resolved_panel_height(&self) -> i32 {
        self.panel_height
            .unwrap_or_else(|| dp_to_px_rounded(DEFAULT_PANEL_HEIGHT_DP, self.density))
    }

    /// Shadow height in px.
    #[must_use]
    pub fn resolved_shadow_height(&self) -> i32 {
        self.shadow_height
            .unwrap_or_else(|| dp_to_px_rounded(DEFAULT_SHADOW_HEIGHT_DP, self.density))
    }

    /// Parallax distance in px.
    #[must_use]
    pub fn resolved_parallax_offset(&self) -> i32 {
        self.parallax_offset
            .unwrap_or((DEFAULT_PARALLAX_OFFSET_DP * self.density) as i32)
    }

    /// Minimum fling velocity in px/s.
    #[must_use]
    pub fn min_fling_velocity_px(&self) -> f32 {
        self.min_fling_velocity * self.density
    }

    /// Maximum fling velocity in px/s.
    #[must_use]
    pub fn max_fling_velocity_px(&self) -> f32 {
        self.max_fling_velocity * self.density
    }

    /// Slop the drag helper must see before it captures the panel.
    #[must_use]
    pub fn drag_slop(&self) -> f32 {
        self.touch_slop / self.drag_sensitivity
    }
}

fn dp_to_px_rounded(dp: f32, density: f32) -> i32 {
    (dp * density + 0.5) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_density_scaled_sizes() {
        let config = PanelConfig::default().with_density(2.0);
        assert_eq!(config.resolved_panel_height(), 136);
        assert_eq!(config.resolved_shadow_height(), 8);
        assert_eq!(config.resolved_parallax_offset(), 0);
        assert_eq!(config.min_fling_velocity_px(), 800.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_sizes_win() {
        let config = PanelConfig::default()
            .with_panel_height(40)
            .with_shadow_height(0)
            .with_parallax_offset(100);
        assert_eq!(config.resolved_panel_height(), 40);
        assert_eq!(config.resolved_shadow_height(), 0);
        assert_eq!(config.resolved_parallax_offset(), 100);
    }

    #[test]
    fn drag_slop_doubles_touch_slop_by_default() {
        let config = PanelConfig::default().with_touch_slop(8.0);
        assert_eq!(config.drag_slop(), 16.0);
    }

    #[test]
    fn unspecified_gravity_is_rejected() {
        let config = PanelConfig::new(Gravity::Unspecified);
        assert_eq!(
            config.validate(),
            Err(PanelError::InvalidGravity {
                gravity: Gravity::Unspecified
            })
        );
    }

    #[test]
    fn degenerate_units_are_rejected() {
        assert!(matches!(
            PanelConfig::default().with_density(0.0).validate(),
            Err(PanelError::InvalidDensity { .. })
        ));
        assert!(matches!(
            PanelConfig::default().with_drag_sensitivity(f32::NAN).validate(),
            Err(PanelError::InvalidDragSensitivity { .. })
        ));
        assert!(matches!(
            PanelConfig::default().with_touch_slop(-1.0).validate(),
            Err(PanelError::InvalidTouchSlop { .. })
        ));
        assert!(matches!(
            PanelConfig::default()
                .with_fling_velocity(500.0, 100.0)
                .validate(),
            Err(PanelError::InvalidFlingVelocity { .. })
        ));
    }

    #[test]
    fn gravity_orientation() {
        assert_eq!(Gravity::Bottom.slides_up(), Some(true));
        assert_eq!(Gravity::Top.slides_up(), Some(false));
        assert_eq!(Gravity::Unspecified.slides_up(), None);
    }
}
