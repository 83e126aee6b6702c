#![forbid(unsafe_code)]

//! Host boundary: what the panel asks of its surrounding UI toolkit, what it
//! tells observers, and what it needs to know about the container.
//!
//! The panel never draws or measures anything itself. The host reports the
//! measured container through [`PanelGeometry`], receives placement and
//! visibility requests through [`PanelHost`], and observers subscribe through
//! [`PanelSlideListener`].

use slidepane_core::geometry::{Rect, Sides};

/// Observer for panel motion and resting-state changes.
///
/// Every method has an empty default so implementors override only what
/// they care about.
pub trait PanelSlideListener {
    /// The panel moved; `offset` is 0.0 fully expanded and 1.0 collapsed.
    fn on_panel_slide(&mut self, offset: f32) {
        let _ = offset;
    }

    /// The panel came to rest collapsed.
    fn on_panel_collapsed(&mut self) {}

    /// The panel came to rest fully expanded.
    fn on_panel_expanded(&mut self) {}

    /// The panel came to rest at the anchor point.
    fn on_panel_anchored(&mut self) {}
}

/// Listener that ignores every notification.
///
/// Useful as a base when only a subset of callbacks matter and for hosts
/// that want a placeholder listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplePanelSlideListener;

impl PanelSlideListener for SimplePanelSlideListener {}

/// Requests the panel makes of its host.
///
/// All hooks default to doing nothing, so `()` is a valid host for
/// headless use.
pub trait PanelHost {
    /// Schedule another frame; the host answers with
    /// [`SlidingPanel::on_frame`](crate::SlidingPanel::on_frame).
    fn request_frame(&mut self) {}

    /// Something that affects measurement changed; re-measure and call
    /// [`SlidingPanel::on_measure_complete`](crate::SlidingPanel::on_measure_complete).
    fn request_layout(&mut self) {}

    /// Translate the main surface vertically by `dy` pixels (parallax).
    fn set_main_translation(&mut self, dy: i32) {
        let _ = dy;
    }

    /// Show or hide the main surface. The panel hides it while fully
    /// covered by an opaque slideable surface.
    fn set_main_visible(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Show or hide the slideable surface.
    fn set_slideable_visible(&mut self, visible: bool) {
        let _ = visible;
    }

    /// The resting state changed; assistive technology should be told.
    fn announce_state_change(&mut self) {}

    /// A tap toggled the panel.
    fn play_click_sound(&mut self) {}
}

impl PanelHost for () {}

/// Measured size and visibility of the slideable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceMetrics {
    /// Measured width in px.
    pub width: i32,
    /// Measured height in px.
    pub height: i32,
    /// Whether the surface currently participates in layout.
    pub visible: bool,
    /// Whether the surface paints every pixel of its bounds.
    pub opaque: bool,
}

impl SurfaceMetrics {
    /// A visible, non-opaque surface of the given size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            visible: true,
            opaque: false,
        }
    }

    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub const fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }
}

/// Container measurement reported by the host after each measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    /// Container width in px.
    pub width: i32,
    /// Container height in px.
    pub height: i32,
    /// Container padding.
    pub padding: Sides,
    /// Number of child surfaces the host manages. The panel expects two:
    /// the main surface and the slideable one.
    pub surface_count: usize,
    /// The slideable surface, `None` when the host has none.
    pub slideable: Option<SurfaceMetrics>,
    /// Drag handle bounds relative to the slideable surface's origin.
    /// `None` makes the whole slideable surface the handle.
    pub drag_handle: Option<Rect>,
}

impl PanelGeometry {
    /// A container of the given size with no slideable surface yet.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding: Sides::all(0),
            surface_count: 2,
            slideable: None,
            drag_handle: None,
        }
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn with_surface_count(mut self, count: usize) -> Self {
        self.surface_count = count;
        self
    }

    #[must_use]
    pub const fn with_slideable(mut self, slideable: SurfaceMetrics) -> Self {
        self.slideable = Some(slideable);
        self
    }

    #[must_use]
    pub const fn with_drag_handle(mut self, handle: Rect) -> Self {
        self.drag_handle = Some(handle);
        self
    }

    /// Container bounds inside the padding.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height).inner(self.padding)
    }

    /// The slideable surface if it is present and visible.
    #[must_use]
    pub fn visible_slideable(&self) -> Option<SurfaceMetrics> {
        self.slideable.filter(|s| s.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_listener_accepts_everything() {
        let mut listener = SimplePanelSlideListener;
        listener.on_panel_slide(0.5);
        listener.on_panel_collapsed();
        listener.on_panel_expanded();
        listener.on_panel_anchored();
    }

    #[test]
    fn geometry_builders() {
        let geometry = PanelGeometry::new(400, 800)
            .with_padding(Sides::new(10, 0, 20, 0))
            .with_slideable(SurfaceMetrics::new(400, 600).with_opaque(true));
        assert_eq!(geometry.content_bounds(), Rect::new(0, 10, 400, 770));
        assert!(geometry.visible_slideable().is_some_and(|s| s.opaque));
        assert_eq!(geometry.surface_count, 2);
    }

    #[test]
    fn hidden_slideable_is_not_visible() {
        let geometry = PanelGeometry::new(400, 800)
            .with_slideable(SurfaceMetrics::new(400, 600).with_visible(false));
        assert!(geometry.slideable.is_some());
        assert!(geometry.visible_slideable().is_none());
    }
}
