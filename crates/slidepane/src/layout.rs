#![forbid(unsafe_code)]

//! Measurement and placement of the two panel surfaces.
//!
//! Everything here is a pure function of the container geometry, the
//! configured sizes, and the slideable surface's current top edge. The
//! panel controller owns the mutable state and calls into this module.
//!
//! # Offset arithmetic
//!
//! The slide offset is a fraction of the slide range: 0.0 fully expanded,
//! 1.0 collapsed. Converting a fraction to pixels and back goes through
//! [`offset_pixels`] and [`offset_for_pixels`] only, so an offset that was
//! produced from a pixel position converts back to that same pixel, and the
//! anchor offset ([`anchor_offset`]) compares exactly against offsets the
//! panel reaches by settling on the anchor.
//!
//! # Invariants
//!
//! 1. `top_for_offset(offset_for_top(t)) == t` for every top inside
//!    [`PanelMeasure::top_bounds`], for slide ranges below 2^22 px.
//! 2. The slideable surface never leaves `top_bounds`.
//! 3. A hidden or missing slideable surface reserves no space.

use slidepane_core::geometry::Rect;

use crate::host::PanelGeometry;

/// Minimum tolerance applied before flooring fraction-to-pixel conversions.
const PIXEL_EPSILON: f64 = 1e-3;

/// Pixel distance from the collapsed position for `fraction` of `range`.
///
/// The product is taken in `f64` and the tolerance grows with the range to
/// cover the `f32` rounding of `fraction`, so pixels produced by
/// [`offset_for_pixels`] come back unchanged for ranges below 2^22 px.
#[inline]
#[must_use]
pub fn offset_pixels(fraction: f32, range: i32) -> i32 {
    if range <= 0 {
        return 0;
    }
    let range_f = f64::from(range);
    let tolerance = PIXEL_EPSILON.max(range_f * f64::from(f32::EPSILON));
    let px = (f64::from(fraction) * range_f + tolerance).floor() as i32;
    px.clamp(0, range)
}

/// Fraction of `range` that `pixels` represents.
#[inline]
#[must_use]
pub fn offset_for_pixels(pixels: i32, range: i32) -> f32 {
    if range <= 0 {
        return 1.0;
    }
    pixels as f32 / range as f32
}

/// The slide offset the panel rests at when anchored.
///
/// Returns 0.0 when `range` is zero.
#[must_use]
pub fn anchor_offset(anchor_point: f32, range: i32) -> f32 {
    if range <= 0 {
        return 0.0;
    }
    offset_for_pixels(offset_pixels(anchor_point, range), range)
}

/// Result of measuring the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMeasure {
    /// Container bounds inside the padding.
    pub content: Rect,
    /// Whether the panel opens upward (bottom-mounted).
    pub slides_up: bool,
    /// Effective collapsed height: zero while the slideable surface is
    /// hidden or missing.
    pub panel_height: i32,
    /// Slideable surface size, `None` while hidden or missing.
    pub slideable_size: Option<(i32, i32)>,
    /// Top edge of the slideable surface when fully expanded.
    pub sliding_top: i32,
    /// Pixel distance the slideable surface can travel.
    pub slide_range: i32,
    /// Height given to the main surface.
    pub main_height: i32,
    /// Whether the main surface is overlaid rather than shrunk.
    pub overlay: bool,
}

/// Measure the container.
#[must_use]
pub fn measure(
    geometry: &PanelGeometry,
    panel_height: i32,
    overlay: bool,
    slides_up: bool,
) -> PanelMeasure {
    let content = geometry.content_bounds();
    let slideable = geometry.visible_slideable();
    let effective_panel_height = if slideable.is_some() {
        panel_height.max(0)
    } else {
        0
    };
    let main_height = if overlay {
        content.height
    } else {
        (content.height - effective_panel_height).max(0)
    };
    let slideable_height = slideable.map_or(0, |s| s.height.max(0));
    let sliding_top = if slides_up {
        geometry.height - geometry.padding.bottom - slideable_height
    } else {
        geometry.padding.top
    };
    let slide_range = if slideable.is_some() {
        (slideable_height - panel_height).max(0)
    } else {
        0
    };

    PanelMeasure {
        content,
        slides_up,
        panel_height: effective_panel_height,
        slideable_size: slideable.map(|s| (s.width.max(0), slideable_height)),
        sliding_top,
        slide_range,
        main_height,
        overlay,
    }
}

impl PanelMeasure {
    /// Whether the slideable surface can move at all.
    #[inline]
    #[must_use]
    pub const fn can_slide(&self) -> bool {
        self.slideable_size.is_some() && self.slide_range > 0
    }

    /// Inclusive `(min, max)` range of the slideable surface's top edge.
    #[must_use]
    pub const fn top_bounds(&self) -> (i32, i32) {
        if self.slides_up {
            (self.sliding_top, self.sliding_top + self.slide_range)
        } else {
            (self.sliding_top - self.slide_range, self.sliding_top)
        }
    }

    /// Clamp a proposed top edge into [`Self::top_bounds`].
    #[must_use]
    pub fn clamp_top(&self, top: i32) -> i32 {
        let (min, max) = self.top_bounds();
        top.clamp(min, max)
    }

    /// Top edge of the slideable surface at `offset`.
    #[must_use]
    pub fn top_for_offset(&self, offset: f32) -> i32 {
        let px = offset_pixels(offset, self.slide_range);
        if self.slides_up {
            self.sliding_top + px
        } else {
            self.sliding_top - px
        }
    }

    /// Slide offset of a slideable surface whose top edge is at `top`.
    #[must_use]
    pub fn offset_for_top(&self, top: i32) -> f32 {
        let px = if self.slides_up {
            top - self.sliding_top
        } else {
            self.sliding_top - top
        };
        offset_for_pixels(px, self.slide_range)
    }

    /// Bounds of both surfaces with the slideable top edge at `slideable_top`.
    #[must_use]
    pub fn place(&self, slideable_top: i32) -> PanelPlacement {
        let main_top = if !self.slides_up && !self.overlay {
            self.content.y + self.panel_height
        } else {
            self.content.y
        };
        PanelPlacement {
            main: Rect::new(self.content.x, main_top, self.content.width, self.main_height),
            slideable: self
                .slideable_size
                .map(|(w, h)| Rect::new(self.content.x, slideable_top, w, h)),
        }
    }

    /// Parallax translation for the main surface at `offset`.
    ///
    /// Negative (upward) for bottom-mounted panels.
    #[must_use]
    pub fn parallax_translation(&self, parallax_offset: i32, offset: f32) -> i32 {
        if parallax_offset <= 0 {
            return 0;
        }
        let shift = (parallax_offset as f32 * (1.0 - offset).max(0.0)) as i32;
        if self.slides_up { -shift } else { shift }
    }
}

/// Bounds of the two surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPlacement {
    pub main: Rect,
    pub slideable: Option<Rect>,
}

/// Whether an opaque slideable surface fully covers the main surface.
#[must_use]
pub fn main_surface_obscured(content: Rect, main: Rect, slideable: Option<Rect>, opaque: bool) -> bool {
    let Some(cover) = slideable.filter(|_| opaque) else {
        return false;
    };
    let main = main.intersection(&content);
    if main.is_empty() {
        return false;
    }
    cover.contains_rect(&main)
}

/// Scrim drawn over the uncovered part of the main surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrim {
    pub bounds: Rect,
    /// ARGB color with the alpha already scaled for the current offset.
    pub color: u32,
}

/// Everything a host needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawHints {
    /// Clip for the main surface: the part not under the slideable surface.
    pub main_clip: Rect,
    /// Dimming over the main surface, absent when collapsed or transparent.
    pub scrim: Option<Scrim>,
    /// Shadow strip along the slideable surface's leading edge.
    pub shadow: Option<Rect>,
}

/// Scale the alpha of `fade_color` by how far the panel is open.
///
/// Returns `None` when collapsed or when the scaled alpha is zero.
#[must_use]
pub fn scrim_color(fade_color: u32, offset: f32) -> Option<u32> {
    if offset >= 1.0 {
        return None;
    }
    let base_alpha = ((fade_color & 0xff00_0000) >> 24) as f32;
    let alpha = (base_alpha * (1.0 - offset.max(0.0))) as u32;
    if alpha == 0 {
        return None;
    }
    Some((alpha.min(0xff) << 24) | (fade_color & 0x00ff_ffff))
}

/// Compute draw hints for the current position.
#[must_use]
pub fn draw_hints(
    measure: &PanelMeasure,
    placement: &PanelPlacement,
    offset: f32,
    fade_color: u32,
    shadow_height: i32,
) -> DrawHints {
    let main = placement.main;
    let Some(slideable) = placement.slideable else {
        return DrawHints {
            main_clip: main,
            scrim: None,
            shadow: None,
        };
    };

    let main_clip = if measure.overlay {
        main
    } else if measure.slides_up {
        Rect::from_edges(main.left(), main.top(), main.right(), main.bottom().min(slideable.top()))
    } else {
        Rect::from_edges(main.left(), main.top().max(slideable.bottom()), main.right(), main.bottom())
    };

    let scrim = if measure.can_slide() {
        scrim_color(fade_color, offset).map(|color| Scrim {
            bounds: main_clip,
            color,
        })
    } else {
        None
    };

    let shadow = (shadow_height > 0).then(|| {
        if measure.slides_up {
            Rect::from_edges(
                slideable.left(),
                slideable.top() - shadow_height,
                slideable.right(),
                slideable.top(),
            )
        } else {
            Rect::from_edges(
                slideable.left(),
                slideable.bottom(),
                slideable.right(),
                slideable.bottom() + shadow_height,
            )
        }
    });

    DrawHints {
        main_clip,
        scrim,
        shadow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SurfaceMetrics;
    use slidepane_core::geometry::Sides;

    fn geometry() -> PanelGeometry {
        PanelGeometry::new(400, 1000).with_slideable(SurfaceMetrics::new(400, 800))
    }

    #[test]
    fn bottom_mounted_measure() {
        let m = measure(&geometry(), 68, false, true);
        assert_eq!(m.sliding_top, 200);
        assert_eq!(m.slide_range, 732);
        assert_eq!(m.main_height, 932);
        assert_eq!(m.top_bounds(), (200, 932));
        assert!(m.can_slide());
    }

    #[test]
    fn top_mounted_measure() {
        let g = geometry().with_padding(Sides::new(24, 0, 0, 0));
        let m = measure(&g, 68, false, false);
        assert_eq!(m.sliding_top, 24);
        assert_eq!(m.top_bounds(), (24 - 732, 24));
        let placed = m.place(m.top_for_offset(1.0));
        assert_eq!(placed.main.y, 24 + 68);
        assert_eq!(placed.slideable.map(|r| r.bottom()), Some(24 + 68));
    }

    #[test]
    fn overlay_keeps_full_main_height() {
        let m = measure(&geometry(), 68, true, true);
        assert_eq!(m.main_height, 1000);
    }

    #[test]
    fn hidden_slideable_reserves_nothing() {
        let g = PanelGeometry::new(400, 1000)
            .with_slideable(SurfaceMetrics::new(400, 800).with_visible(false));
        let m = measure(&g, 68, false, true);
        assert_eq!(m.panel_height, 0);
        assert_eq!(m.main_height, 1000);
        assert_eq!(m.slide_range, 0);
        assert!(!m.can_slide());
    }

    #[test]
    fn collapsed_and_expanded_tops() {
        let m = measure(&geometry(), 68, false, true);
        assert_eq!(m.top_for_offset(0.0), 200);
        assert_eq!(m.top_for_offset(1.0), 932);
        assert_eq!(m.offset_for_top(932), 1.0);
        assert_eq!(m.offset_for_top(200), 0.0);
    }

    #[test]
    fn anchor_offset_matches_settled_anchor() {
        for range in [1, 2, 3, 7, 333, 732, 1001] {
            for anchor in [0.1f32, 0.3, 0.5, 0.7, 0.9, 0.33] {
                let expected = anchor_offset(anchor, range);
                let px = offset_pixels(anchor, range);
                assert_eq!(offset_for_pixels(px, range), expected);
                assert_eq!(offset_pixels(expected, range), px);
            }
        }
    }

    #[test]
    fn pixel_round_trip_holds_for_large_ranges() {
        for range in [8_191, 16_384, 65_537, 1_000_003, 4_000_000] {
            let step = (range / 997).max(1);
            let mut px = 0;
            while px <= range {
                let offset = offset_for_pixels(px, range);
                assert_eq!(offset_pixels(offset, range), px, "range {range} px {px}");
                px += step;
            }
            assert_eq!(offset_pixels(offset_for_pixels(range - 1, range), range), range - 1);
        }
    }

    #[test]
    fn zero_range_offsets() {
        assert_eq!(anchor_offset(0.5, 0), 0.0);
        assert_eq!(offset_pixels(0.5, 0), 0);
        assert_eq!(offset_for_pixels(0, 0), 1.0);
    }

    #[test]
    fn parallax_direction() {
        let up = measure(&geometry(), 68, false, true);
        assert_eq!(up.parallax_translation(100, 0.0), -100);
        assert_eq!(up.parallax_translation(100, 1.0), 0);
        assert_eq!(up.parallax_translation(0, 0.0), 0);
        let down = measure(&geometry(), 68, false, false);
        assert_eq!(down.parallax_translation(100, 0.5), 50);
    }

    #[test]
    fn scrim_alpha_scales_with_offset() {
        assert_eq!(scrim_color(0x9900_0000, 1.0), None);
        assert_eq!(scrim_color(0x9900_0000, 0.0), Some(0x9900_0000));
        assert_eq!(scrim_color(0x9912_3456, 0.5), Some(0x4c12_3456));
        assert_eq!(scrim_color(0x0000_0000, 0.0), None);
    }

    #[test]
    fn opaque_cover_hides_main() {
        let content = Rect::from_size(400, 1000);
        let main = Rect::new(0, 0, 400, 932);
        assert!(main_surface_obscured(content, main, Some(Rect::new(0, 0, 400, 1000)), true));
        assert!(!main_surface_obscured(content, main, Some(Rect::new(0, 0, 400, 1000)), false));
        assert!(!main_surface_obscured(content, main, Some(Rect::new(0, 200, 400, 800)), true));
        assert!(!main_surface_obscured(content, main, None, true));
    }

    #[test]
    fn draw_hints_clip_and_shadow() {
        let m = measure(&geometry(), 68, false, true);
        let placement = m.place(500);
        let hints = draw_hints(&m, &placement, m.offset_for_top(500), 0x9900_0000, 4);
        assert_eq!(hints.main_clip, Rect::new(0, 0, 400, 500));
        assert_eq!(hints.shadow, Some(Rect::new(0, 496, 400, 4)));
        assert!(hints.scrim.is_some());

        let collapsed = m.place(932);
        let hints = draw_hints(&m, &collapsed, 1.0, 0x9900_0000, 0);
        assert_eq!(hints.scrim, None);
        assert_eq!(hints.shadow, None);
    }
}
