#![forbid(unsafe_code)]

//! Gesture, settle, and state core for a panel that slides up from the
//! bottom (or down from the top) of a container.
//!
//! The host owns measurement, drawing, and the frame clock. It feeds
//! [`SlidingPanel`] container geometry, pointer events, and frame ticks, and
//! applies what comes back: surface placement, visibility and translation
//! requests through [`PanelHost`], and state notifications through
//! [`PanelSlideListener`].
//!
//! # Example
//!
//! ```
//! use slidepane::{Gravity, PanelConfig, PanelGeometry, SlidingPanel, SurfaceMetrics};
//! use std::time::Duration;
//!
//! let mut panel = SlidingPanel::new(PanelConfig::new(Gravity::Bottom), ()).unwrap();
//! panel.on_measure_complete(
//!     PanelGeometry::new(400, 1000).with_slideable(SurfaceMetrics::new(400, 800)),
//! );
//! assert!(panel.expand());
//! while panel.on_frame(Duration::from_millis(16)) {}
//! assert!(panel.is_expanded());
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod host;
pub mod layout;
pub mod panel;
pub mod router;
pub mod settle;
pub mod state;

pub use config::{Gravity, PanelConfig};
pub use drag::{DragCaptureState, DragController, DragEffect, DragNoopReason};
pub use error::PanelError;
pub use host::{PanelGeometry, PanelHost, PanelSlideListener, SimplePanelSlideListener, SurfaceMetrics};
pub use layout::{DrawHints, PanelPlacement, Scrim};
pub use panel::{DispatchTarget, SlidingPanel};
pub use router::{GestureRouter, RouteDecision, TouchSession};
pub use settle::{SettleAnimator, SettleTarget, plan_settle};
pub use state::{PanelSavedState, SlideState, SlideStateMachine, SlideTransition};

pub use slidepane_core::event::{PointerEvent, PointerEventKind, PointerId};
pub use slidepane_core::geometry::{Rect, Sides};
