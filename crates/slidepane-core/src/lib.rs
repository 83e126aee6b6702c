#![forbid(unsafe_code)]

//! Core: pointer events, pixel geometry, animation, and velocity tracking.
//!
//! # Role in slidepane
//! `slidepane-core` holds the host-agnostic primitives the panel crate is
//! built from. It knows nothing about panels: hosts translate their native
//! input into [`event::PointerEvent`] values and the panel crate consumes
//! them together with [`geometry::Rect`] bounds.
//!
//! # Primary responsibilities
//! - **PointerEvent**: timestamped down/move/up/cancel samples.
//! - **Rect / Sides**: pixel bounds and container padding.
//! - **Animation / Slide**: tick-driven eased interpolation.
//! - **VelocityTracker**: windowed release-velocity estimation.
//! - **logging**: `tracing` macros, or no-ops when the feature is off.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod velocity;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
