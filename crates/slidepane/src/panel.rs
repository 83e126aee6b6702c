#![forbid(unsafe_code)]

//! The sliding panel controller.
//!
//! [`SlidingPanel`] composes the gesture router, drag controller, settle
//! animator, and state machine behind the three calls a host makes:
//!
//! - [`SlidingPanel::on_measure_complete`] after every measure pass,
//! - [`SlidingPanel::on_intercept_touch_event`] / [`SlidingPanel::on_touch_event`]
//!   (or [`SlidingPanel::dispatch_pointer_event`]) for input,
//! - [`SlidingPanel::on_frame`] for each frame while a settle is running,
//!
//! plus [`SlidingPanel::draw_hints`] when painting.
//!
//! # Invariants
//!
//! 1. The slideable surface's top edge is the single source of truth; the
//!    slide offset is always derived from it and stays within [0, 1].
//! 2. Every position change is followed synchronously by the slide callback
//!    and, if motion came to rest, by state re-evaluation.
//! 3. The resting state is only re-evaluated on a transition into
//!    [`DragCaptureState::Idle`], so each real change dispatches once.
//!
//! # Failure Modes
//!
//! - No slideable surface, a hidden one, or a zero slide range: input passes
//!   through and animated commands return `false`.
//! - Unexpected surface count: logged, layout continues with what is there.

use std::fmt;
use std::time::Duration;

use slidepane_core::event::{PointerEvent, PointerEventKind};
use slidepane_core::geometry::Rect;
use slidepane_core::{debug, debug_span, info, trace, warn};

use crate::config::PanelConfig;
use crate::drag::{DragCaptureState, DragController, DragEffect};
use crate::error::PanelError;
use crate::host::{PanelGeometry, PanelHost, PanelSlideListener};
use crate::layout::{self, DrawHints, PanelMeasure, PanelPlacement};
use crate::router::{GestureRouter, RouteContext};
use crate::settle::{SettleAnimator, SettleTiming, plan_settle};
use crate::state::{PanelSavedState, SlideState, SlideStateMachine, SlideTransition};

/// Who receives the rest of a gesture under [`SlidingPanel::dispatch_pointer_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchTarget {
    /// The panel intercepted and handles the stream.
    Panel,
    /// The content underneath handles the stream.
    Content,
    /// Nobody took the gesture.
    Unhandled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchRoute {
    None,
    Panel,
    Content,
}

/// Gesture, settle, and state core of a sliding panel.
pub struct SlidingPanel<H: PanelHost = ()> {
    config: PanelConfig,
    slides_up: bool,
    host: H,
    listener: Option<Box<dyn PanelSlideListener>>,

    router: GestureRouter,
    drag: DragController,
    settle: Option<SettleAnimator>,
    states: SlideStateMachine,

    geometry: Option<PanelGeometry>,
    measure: Option<PanelMeasure>,
    slideable_top: i32,
    slide_offset: f32,

    panel_height: i32,
    shadow_height: i32,
    parallax_offset: i32,
    anchor_point: f32,

    first_layout: bool,
    pending_offset: Option<f32>,
    pane_visible: bool,
    dispatch: DispatchRoute,
}

impl<H: PanelHost + fmt::Debug> fmt::Debug for SlidingPanel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingPanel")
            .field("host", &self.host)
            .field("state", &self.states.state())
            .field("capture", &self.drag.capture_state())
            .field("slide_offset", &self.slide_offset)
            .field("slideable_top", &self.slideable_top)
            .field("anchor_point", &self.anchor_point)
            .finish_non_exhaustive()
    }
}

impl<H: PanelHost> SlidingPanel<H> {
    /// Build a panel from a validated configuration.
    pub fn new(config: PanelConfig, host: H) -> Result<Self, PanelError> {
        config.validate()?;
        let Some(slides_up) = config.gravity.slides_up() else {
            return Err(PanelError::InvalidGravity {
                gravity: config.gravity,
            });
        };
        let drag = DragController::new(
            config.drag_slop(),
            config.min_fling_velocity_px(),
            config.max_fling_velocity_px(),
        );
        let mut panel = Self {
            slides_up,
            host,
            listener: None,
            router: GestureRouter::new(),
            drag,
            settle: None,
            states: SlideStateMachine::new(SlideState::Collapsed),
            geometry: None,
            measure: None,
            slideable_top: 0,
            slide_offset: 1.0,
            panel_height: config.resolved_panel_height().max(0),
            shadow_height: config.resolved_shadow_height().max(0),
            parallax_offset: config.resolved_parallax_offset().max(0),
            anchor_point: 0.0,
            first_layout: true,
            pending_offset: None,
            pane_visible: true,
            dispatch: DispatchRoute::None,
            config,
        };
        panel.set_anchor_point(panel.config.anchor_point);
        debug!(
            slides_up,
            panel_height = panel.panel_height,
            anchor = panel.anchor_point,
            "sliding panel created"
        );
        Ok(panel)
    }

    // -----------------------------------------------------------------------
    // Host and listener
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current configuration, including runtime changes made via setters.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Replace the slide listener. `None` removes it.
    pub fn set_panel_slide_listener(&mut self, listener: Option<Box<dyn PanelSlideListener>>) {
        self.listener = listener;
    }

    // -----------------------------------------------------------------------
    // Lifecycle and layout
    // -----------------------------------------------------------------------

    /// The container was attached to a window. The next layout re-applies
    /// the resting state.
    pub fn on_attached(&mut self) {
        self.first_layout = true;
    }

    /// The container was detached from its window.
    pub fn on_detached(&mut self) {
        self.first_layout = true;
    }

    /// Accept a fresh measurement and return where both surfaces go.
    ///
    /// The first layout after creation, attachment, or a height change
    /// places the slideable surface at the resting position of the current
    /// state (or of a command issued before layout). Later layouts keep the
    /// current offset.
    pub fn on_measure_complete(&mut self, geometry: PanelGeometry) -> PanelPlacement {
        if geometry.surface_count != 2 {
            warn!(
                count = geometry.surface_count,
                "sliding panel expects exactly two surfaces"
            );
        }
        if geometry.slideable.is_none() {
            warn!("sliding panel has no slideable surface");
        }
        if self.geometry.is_some_and(|prev| prev.height != geometry.height) {
            self.first_layout = true;
        }

        let measure = layout::measure(
            &geometry,
            self.panel_height,
            self.config.overlay_content,
            self.slides_up,
        );
        self.geometry = Some(geometry);
        self.measure = Some(measure);
        self.pane_visible = geometry.visible_slideable().is_some();

        let first_layout = self.first_layout;
        if first_layout {
            if self.drag.capture_state() != DragCaptureState::Idle {
                self.settle = None;
                let _ = self.drag.cancel();
                self.drag.finish();
            }
            let pending = self.pending_offset.take();
            if pending.is_none() {
                self.reconcile_resting_state(&measure);
            }
            let offset = pending.unwrap_or_else(|| self.resting_offset(&measure));
            self.slideable_top = measure.top_for_offset(offset);
            self.slide_offset = if measure.can_slide() {
                measure.offset_for_top(self.slideable_top)
            } else {
                1.0
            };
            debug!(
                offset = self.slide_offset,
                range = measure.slide_range,
                state = %self.states.state(),
                "first layout"
            );
            if pending.is_some() {
                self.evaluate_state();
            }
        } else {
            self.slideable_top = measure.top_for_offset(self.slide_offset);
            if measure.can_slide() {
                self.slide_offset = measure.offset_for_top(self.slideable_top);
            }
        }

        if first_layout {
            self.update_obscured_visibility();
            self.first_layout = false;
        }
        measure.place(self.slideable_top)
    }

    /// A restored state the current configuration cannot rest in falls
    /// back to collapsed without notifying.
    fn reconcile_resting_state(&mut self, measure: &PanelMeasure) {
        let state = self.states.state();
        let unreachable = match state {
            SlideState::Collapsed => false,
            SlideState::Anchored => !measure.can_slide() || self.anchor_point == 0.0,
            SlideState::Expanded => !measure.can_slide(),
        };
        if unreachable {
            debug!(%state, "resting state unreachable, collapsing");
            self.states.restore(SlideState::Collapsed);
        }
    }

    fn resting_offset(&self, measure: &PanelMeasure) -> f32 {
        if !measure.can_slide() {
            return 1.0;
        }
        match self.states.state() {
            SlideState::Expanded => 0.0,
            SlideState::Anchored => self.anchor_point,
            SlideState::Collapsed => 1.0,
        }
    }

    /// Where both surfaces currently go, once measured.
    #[must_use]
    pub fn placement(&self) -> Option<PanelPlacement> {
        self.measure.map(|m| m.place(self.slideable_top))
    }

    /// Clip, scrim, and shadow for the current frame.
    #[must_use]
    pub fn draw_hints(&self) -> Option<DrawHints> {
        let measure = self.measure?;
        let placement = measure.place(self.slideable_top);
        Some(layout::draw_hints(
            &measure,
            &placement,
            self.slide_offset,
            self.config.covered_fade_color,
            self.shadow_height,
        ))
    }

    fn update_obscured_visibility(&mut self) {
        let (Some(geometry), Some(measure)) = (self.geometry, self.measure) else {
            return;
        };
        let placement = measure.place(self.slideable_top);
        let opaque = geometry.visible_slideable().is_some_and(|s| s.opaque);
        let obscured =
            layout::main_surface_obscured(measure.content, placement.main, placement.slideable, opaque);
        self.host.set_main_visible(!obscured);
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    fn route_context(&self) -> RouteContext {
        RouteContext {
            enabled: self.config.sliding_enabled && self.is_slideable(),
            handle_self_handles_touch: self.config.drag_view_self_handles_touch,
            touch_slop: self.config.touch_slop,
            drag_slop: self.drag.drag_slop(),
            handle: self.drag_handle_bounds(),
        }
    }

    fn slideable_bounds(&self) -> Option<Rect> {
        self.measure?.place(self.slideable_top).slideable
    }

    fn drag_handle_bounds(&self) -> Option<Rect> {
        let slideable = self.slideable_bounds()?;
        match self.geometry.and_then(|g| g.drag_handle) {
            Some(handle) => Some(handle.translate(slideable.x, slideable.y)),
            None => Some(slideable),
        }
    }

    /// Whether the gesture that produced `event` started over the slideable
    /// surface.
    fn started_over_slideable(&self, event: &PointerEvent) -> bool {
        let (x, y) = match (event.kind, self.router.session()) {
            (PointerEventKind::Down, _) | (_, None) => event.position(),
            (_, Some(session)) => session.origin,
        };
        self.slideable_bounds().is_some_and(|r| r.contains_point(x, y))
    }

    /// Interception hook: returns `true` when the panel takes over the
    /// gesture from the content underneath.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        let ctx = self.route_context();
        let decision = self.router.route(event, &ctx);
        trace!(?decision, kind = ?event.kind, "intercept");

        if decision.cancels_drag() {
            let effect = self.drag.cancel();
            self.apply_drag_effect(effect);
            return false;
        }
        if !decision.consults_drag() {
            return false;
        }

        let over = self.started_over_slideable(event);
        let can_capture = !self.router.is_unable_to_drag();
        let effect = self.drag.should_intercept(event, over, can_capture);
        self.apply_drag_effect(effect);
        self.drag.is_dragging() || decision.intercepts()
    }

    /// Full handler for a gesture the panel owns. Returns `false` when the
    /// panel cannot slide and the event should fall through.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        if !self.config.sliding_enabled || !self.is_slideable() {
            return false;
        }
        if event.kind == PointerEventKind::Down {
            self.router.begin_session(event);
        }

        let over = self.started_over_slideable(event);
        let can_capture = !self.router.is_unable_to_drag();
        let effect = self.drag.process(event, over, can_capture);
        self.apply_drag_effect(effect);

        if event.kind == PointerEventKind::Up {
            self.toggle_on_tap(event);
        }
        if event.kind.ends_gesture() {
            self.router.end_session();
        }
        true
    }

    /// Route one event the way a container routes touch between itself and
    /// its children.
    ///
    /// `content_accepts_down` says whether the content under the pointer
    /// would take a pointer-down the panel did not intercept.
    pub fn dispatch_pointer_event(
        &mut self,
        event: &PointerEvent,
        content_accepts_down: bool,
    ) -> DispatchTarget {
        let span = debug_span!("panel.dispatch");
        let _guard = span.enter();

        if event.kind == PointerEventKind::Down {
            self.dispatch = DispatchRoute::None;
            if self.on_intercept_touch_event(event) {
                self.dispatch = DispatchRoute::Panel;
                self.on_touch_event(event);
                return DispatchTarget::Panel;
            }
            if content_accepts_down {
                self.dispatch = DispatchRoute::Content;
                return DispatchTarget::Content;
            }
            if self.on_touch_event(event) {
                self.dispatch = DispatchRoute::Panel;
                return DispatchTarget::Panel;
            }
            return DispatchTarget::Unhandled;
        }

        let target = match self.dispatch {
            DispatchRoute::Panel => {
                self.on_touch_event(event);
                DispatchTarget::Panel
            }
            DispatchRoute::Content => {
                if self.on_intercept_touch_event(event) {
                    self.dispatch = DispatchRoute::Panel;
                    DispatchTarget::Panel
                } else {
                    DispatchTarget::Content
                }
            }
            DispatchRoute::None => DispatchTarget::Unhandled,
        };
        if event.kind.ends_gesture() {
            self.dispatch = DispatchRoute::None;
        }
        target
    }

    fn toggle_on_tap(&mut self, event: &PointerEvent) {
        let Some(session) = self.router.session().copied() else {
            return;
        };
        let dx = event.x - session.origin.0;
        let dy = event.y - session.origin.1;
        let slop = self.drag.drag_slop();
        let over_handle = self
            .drag_handle_bounds()
            .is_some_and(|r| r.contains_point(event.x, event.y));
        if dx * dx + dy * dy >= slop * slop || !over_handle {
            return;
        }

        self.host.play_click_sound();
        if !self.is_expanded() && !self.is_anchored() {
            debug!("tap: expanding");
            self.expand_to(self.anchor_point);
        } else {
            debug!("tap: collapsing");
            self.collapse();
        }
    }

    fn apply_drag_effect(&mut self, effect: DragEffect) {
        match effect {
            DragEffect::Captured { .. } => {
                if self.settle.take().is_some() {
                    debug!(top = self.slideable_top, "settle interrupted by pointer");
                }
                self.host.set_main_visible(true);
                debug!(top = self.slideable_top, "panel captured");
            }
            DragEffect::Moved { dy } => {
                self.move_slideable_to(self.slideable_top.saturating_add(dy));
            }
            DragEffect::Released { velocity_y } => self.on_released(velocity_y),
            DragEffect::Noop { .. } => {}
        }
    }

    fn on_released(&mut self, velocity_y: f32) {
        let toward_collapse = if self.slides_up { velocity_y } else { -velocity_y };
        let anchor = self.configured_anchor_offset();
        let target = plan_settle(toward_collapse, self.slide_offset, anchor);
        debug!(
            ?target,
            velocity = velocity_y,
            offset = self.slide_offset,
            "panel released"
        );
        self.settle_to(target.offset(anchor.unwrap_or(0.0)), velocity_y);
    }

    // -----------------------------------------------------------------------
    // Motion
    // -----------------------------------------------------------------------

    /// Move the slideable surface, clamped to its bounds, and notify.
    fn move_slideable_to(&mut self, proposed_top: i32) {
        let Some(measure) = self.measure else {
            return;
        };
        let top = measure.clamp_top(proposed_top);
        if top == self.slideable_top {
            return;
        }
        self.slideable_top = top;
        self.slide_offset = measure.offset_for_top(top);
        trace!(top, offset = self.slide_offset, "panel moved");

        if let Some(listener) = self.listener.as_mut() {
            listener.on_panel_slide(self.slide_offset);
        }
        if self.parallax_offset > 0 {
            let dy = measure.parallax_translation(self.parallax_offset, self.slide_offset);
            self.host.set_main_translation(dy);
        }
    }

    fn settle_timing(&self) -> SettleTiming {
        SettleTiming::from_millis(self.config.min_settle_ms, self.config.max_settle_ms)
    }

    /// Animate toward `offset`. Returns `true` if an animation started.
    fn settle_to(&mut self, offset: f32, velocity: f32) -> bool {
        let Some(measure) = self.measure else {
            return false;
        };
        let target_top = measure.top_for_offset(offset);
        if target_top == self.slideable_top {
            self.settle = None;
            if self.drag.finish() {
                self.evaluate_state();
            }
            return false;
        }
        self.settle = Some(SettleAnimator::new(
            self.slideable_top,
            target_top,
            velocity,
            measure.slide_range,
            self.settle_timing(),
        ));
        self.drag.begin_settling();
        self.host.request_frame();
        true
    }

    fn smooth_slide_to(&mut self, offset: f32) -> bool {
        if !self.is_slideable() {
            debug!(offset, "ignoring slide: panel cannot slide");
            return false;
        }
        let started = self.settle_to(offset, 0.0);
        if started {
            self.host.set_main_visible(true);
        }
        started
    }

    /// Advance a running settle by one frame.
    ///
    /// Returns `true` while another frame is needed. A settle on a panel
    /// that can no longer slide is aborted in place.
    pub fn on_frame(&mut self, dt: Duration) -> bool {
        let Some(mut settle) = self.settle else {
            return false;
        };
        if !self.is_slideable() {
            debug!("settle aborted: panel cannot slide");
            self.abort_motion();
            return false;
        }

        let step = settle.tick(dt);
        self.move_slideable_to(step.top);
        if step.finished {
            self.settle = None;
            if self.drag.finish() {
                self.evaluate_state();
            }
            false
        } else {
            self.settle = Some(settle);
            self.host.request_frame();
            true
        }
    }

    /// Stop any drag or settle where it is.
    fn abort_motion(&mut self) {
        self.settle = None;
        let _ = self.drag.cancel();
        if self.drag.finish() {
            self.evaluate_state();
        }
    }

    fn evaluate_state(&mut self) {
        let anchor = self.anchor_offset();
        if let Some(transition) =
            self.states
                .evaluate(self.slide_offset, anchor, self.drag.capture_state())
        {
            self.dispatch_transition(transition);
        }
    }

    fn dispatch_transition(&mut self, transition: SlideTransition) {
        info!(
            from = %transition.from,
            to = %transition.to,
            id = transition.transition_id,
            "panel state changed"
        );
        match transition.to {
            SlideState::Expanded => {
                self.update_obscured_visibility();
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_panel_expanded();
                }
            }
            SlideState::Anchored => {
                self.update_obscured_visibility();
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_panel_anchored();
                }
            }
            SlideState::Collapsed => {
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_panel_collapsed();
                }
            }
        }
        self.host.announce_state_change();
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Expand fully. See [`Self::expand_to`].
    pub fn expand(&mut self) -> bool {
        self.expand_to(0.0)
    }

    /// Animate to `offset`, showing the pane first if it is hidden.
    ///
    /// Before the first layout the request is remembered and applied when
    /// the panel is placed. Returns `true` if an animation started or the
    /// request was deferred.
    pub fn expand_to(&mut self, offset: f32) -> bool {
        if !offset.is_finite() {
            warn!(offset, "ignoring non-finite expand offset");
            return false;
        }
        if !self.pane_visible {
            self.show_pane();
        }
        let offset = offset.clamp(0.0, 1.0);
        if self.first_layout {
            self.pending_offset = Some(offset);
            return true;
        }
        self.smooth_slide_to(offset)
    }

    /// Collapse. Returns `true` if an animation started or the request was
    /// deferred until the first layout.
    pub fn collapse(&mut self) -> bool {
        if self.first_layout {
            self.pending_offset = Some(1.0);
            return true;
        }
        self.smooth_slide_to(1.0)
    }

    /// Make the slideable surface visible.
    pub fn show_pane(&mut self) {
        if self
            .geometry
            .is_some_and(|g| g.surface_count < 2 || g.slideable.is_none())
        {
            warn!("show_pane: no slideable surface");
            return;
        }
        self.pane_visible = true;
        self.host.set_slideable_visible(true);
        self.host.request_layout();
    }

    /// Hide the slideable surface. A hidden surface reserves no space and
    /// cannot be dragged.
    pub fn hide_pane(&mut self) {
        if self.geometry.is_some_and(|g| g.slideable.is_none()) {
            return;
        }
        self.pane_visible = false;
        self.host.set_slideable_visible(false);
        self.host.request_layout();
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Enable or disable dragging. Disabling stops any drag or settle where
    /// it is.
    pub fn set_sliding_enabled(&mut self, enabled: bool) {
        self.config.sliding_enabled = enabled;
        if !enabled {
            self.abort_motion();
        }
    }

    /// Set the anchor point. Values outside (0, 1) are ignored.
    pub fn set_anchor_point(&mut self, anchor: f32) {
        if anchor > 0.0 && anchor < 1.0 {
            self.anchor_point = anchor;
            self.config.anchor_point = anchor;
        } else if anchor != 0.0 || self.anchor_point != 0.0 {
            debug!(anchor, kept = self.anchor_point, "ignoring anchor point outside (0, 1)");
        }
    }

    /// Remove the anchor point.
    pub fn clear_anchor_point(&mut self) {
        self.anchor_point = 0.0;
        self.config.anchor_point = 0.0;
    }

    /// Collapsed panel height in px.
    pub fn set_panel_height(&mut self, px: i32) {
        self.panel_height = px.max(0);
        self.config.panel_height = Some(self.panel_height);
        self.host.request_layout();
    }

    pub fn set_shadow_height(&mut self, px: i32) {
        self.shadow_height = px.max(0);
        self.config.shadow_height = Some(self.shadow_height);
    }

    /// Maximum parallax translation of the main surface in px.
    pub fn set_parallax_offset(&mut self, px: i32) {
        let previous = self.parallax_offset;
        self.parallax_offset = px.max(0);
        self.config.parallax_offset = Some(self.parallax_offset);
        if previous > 0 && self.parallax_offset == 0 {
            self.host.set_main_translation(0);
        }
        self.host.request_layout();
    }

    pub fn set_covered_fade_color(&mut self, argb: u32) {
        self.config.covered_fade_color = argb;
    }

    /// Overlay the main surface instead of reserving the collapsed height.
    pub fn set_overlay_content(&mut self, overlay: bool) {
        self.config.overlay_content = overlay;
        self.host.request_layout();
    }

    pub fn set_drag_view_self_handles_touch(&mut self, enabled: bool) {
        self.config.drag_view_self_handles_touch = enabled;
    }

    /// Minimum fling velocity in dp/s.
    pub fn set_min_fling_velocity(&mut self, dp_per_sec: f32) {
        if !(dp_per_sec.is_finite() && dp_per_sec >= 0.0) {
            return;
        }
        self.config.min_fling_velocity = dp_per_sec.min(self.config.max_fling_velocity);
        self.drag.set_velocity_bounds(
            self.config.min_fling_velocity_px(),
            self.config.max_fling_velocity_px(),
        );
    }

    /// Maximum fling velocity in dp/s. Values below the minimum are ignored.
    pub fn set_max_fling_velocity(&mut self, dp_per_sec: f32) {
        if !(dp_per_sec.is_finite() && dp_per_sec >= self.config.min_fling_velocity) {
            debug!(dp_per_sec, "ignoring max fling velocity below the minimum");
            return;
        }
        self.config.max_fling_velocity = dp_per_sec;
        self.drag.set_velocity_bounds(
            self.config.min_fling_velocity_px(),
            self.config.max_fling_velocity_px(),
        );
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn state(&self) -> SlideState {
        self.states.state()
    }

    #[inline]
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.states.state() == SlideState::Expanded
    }

    #[inline]
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.states.state() == SlideState::Anchored
    }

    /// Whether the panel can be dragged at all: it has a visible slideable
    /// surface and a positive slide range.
    #[must_use]
    pub fn is_slideable(&self) -> bool {
        self.measure.is_some_and(|m| m.can_slide())
    }

    #[inline]
    #[must_use]
    pub fn is_pane_visible(&self) -> bool {
        self.pane_visible
    }

    #[inline]
    #[must_use]
    pub fn is_sliding_enabled(&self) -> bool {
        self.config.sliding_enabled
    }

    #[inline]
    #[must_use]
    pub fn is_overlay_content(&self) -> bool {
        self.config.overlay_content
    }

    #[inline]
    #[must_use]
    pub fn is_drag_view_self_handles_touch(&self) -> bool {
        self.config.drag_view_self_handles_touch
    }

    /// 0.0 fully expanded, 1.0 collapsed.
    #[inline]
    #[must_use]
    pub fn slide_offset(&self) -> f32 {
        self.slide_offset
    }

    #[must_use]
    pub fn slide_range(&self) -> i32 {
        self.measure.map_or(0, |m| m.slide_range)
    }

    /// Top edge of the slideable surface in container pixels.
    #[inline]
    #[must_use]
    pub fn slideable_top(&self) -> i32 {
        self.slideable_top
    }

    /// The configured anchor point, 0.0 when unset.
    #[inline]
    #[must_use]
    pub fn anchor_point(&self) -> f32 {
        self.anchor_point
    }

    /// Slide offset the panel rests at when anchored, for the current range.
    #[must_use]
    pub fn anchor_offset(&self) -> f32 {
        self.measure
            .map_or(0.0, |m| layout::anchor_offset(self.anchor_point, m.slide_range))
    }

    fn configured_anchor_offset(&self) -> Option<f32> {
        (self.anchor_point != 0.0).then(|| self.anchor_offset())
    }

    #[inline]
    #[must_use]
    pub fn panel_height(&self) -> i32 {
        self.panel_height
    }

    #[inline]
    #[must_use]
    pub fn shadow_height(&self) -> i32 {
        self.shadow_height
    }

    #[inline]
    #[must_use]
    pub fn covered_fade_color(&self) -> u32 {
        self.config.covered_fade_color
    }

    /// Current parallax translation of the main surface.
    #[must_use]
    pub fn current_parallax_offset(&self) -> i32 {
        self.measure.map_or(0, |m| {
            m.parallax_translation(self.parallax_offset, self.slide_offset)
        })
    }

    #[inline]
    #[must_use]
    pub fn capture_state(&self) -> DragCaptureState {
        self.drag.capture_state()
    }

    #[inline]
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn save_state(&self) -> PanelSavedState {
        PanelSavedState::new(self.states.state())
    }

    /// Restore a saved state. Takes effect on the next first layout.
    pub fn restore_state(&mut self, saved: PanelSavedState) {
        debug!(state = %saved.slide_state, "restoring panel state");
        self.states.restore(saved.slide_state);
    }

    /// Restore from a persisted state name, falling back to collapsed.
    pub fn restore_state_name(&mut self, name: &str) {
        self.restore_state(PanelSavedState::new(SlideState::from_name_lenient(name)));
    }
}
