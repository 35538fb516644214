// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Viewer: an interactive venue seat map.
//!
//! This crate assembles the lower-level seatmap crates into a viewer a host
//! application embeds:
//!
//! - [`GestureController`]: wheel zoom, one-finger drag, two-finger pinch,
//!   and double-tap zoom, applied to a [`Viewport2D`](seatmap_view2d::Viewport2D).
//! - [`ViewModeController`]: embedded / fullscreen presentation, automatic
//!   fullscreen for a new selection, and the one-shot auto-center.
//! - [`SceneRenderer`]: paints a frame onto any
//!   [`ImagingBackend`](seatmap_imaging::ImagingBackend).
//! - [`SeatMapViewer`]: owns all of the above plus the loaded layout and the
//!   current selection, and derives the host-facing [`ViewerStatus`].
//!
//! Everything runs on the host's event thread. The viewer never blocks and
//! never fetches on its own; hosts either hand it a [`LayoutSource`] or
//! report the outcome of their own fetch.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_imaging_ref::RefBackend;
//! use seatmap_layout::{NodeKind, VenueNode};
//! use seatmap_selection::{SelectionMode, SelectionRequest};
//! use seatmap_viewer::{SeatMapViewer, StaticLayout, ViewMode, ViewerConfig};
//!
//! let mut viewer = SeatMapViewer::new(ViewerConfig::default().with_auto_fullscreen(true));
//! viewer.resize(400.0, 300.0, 2.0);
//! viewer.reload(&mut StaticLayout::new(vec![
//!     VenueNode::new("t5", 100.0, 80.0, NodeKind::Table, "Table 5"),
//!     VenueNode::new("v5", 300.0, 80.0, NodeKind::VipTable, "VIP Table 5"),
//!     VenueNode::new("stage", 200.0, 10.0, NodeKind::Stage, "Stage"),
//! ]));
//!
//! viewer.set_selection(SelectionRequest::new([5], SelectionMode::VipOnly));
//! assert_eq!(viewer.mode(), ViewMode::Fullscreen { auto: true });
//! assert_eq!(viewer.highlighted().next().unwrap().id, "v5");
//!
//! let mut backend = RefBackend::default();
//! let stats = viewer.render(&mut backend).unwrap();
//! assert_eq!(stats.highlighted, 1);
//! assert!(!viewer.needs_redraw());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit load, selection, and mode events through `tracing`.
//! - `serde`: (de)serialize [`ViewerConfig`] and layout nodes.

mod config;
mod error;
mod gesture;
mod logging;
mod mode;
mod scene;
mod source;
mod viewer;

pub use config::{
    DEFAULT_DOUBLE_TAP_ZOOM, DEFAULT_DRAG_GAIN, DEFAULT_WHEEL_STEP, GestureConfig, ViewerConfig,
};
pub use error::{LayoutError, ViewerError, ViewerStatus};
pub use gesture::{
    GestureController, GestureEffect, InputEvent, PointerEvent, PointerPhase, WheelEvent, reduce,
};
pub use mode::{ViewMode, ViewModeController};
pub use scene::{FrameInput, FrameStats, Glyph, GlyphShape, Palette, SceneRenderer};
pub use source::{LayoutSource, StaticLayout};
pub use viewer::SeatMapViewer;

pub use seatmap_event_state::pointer::{PointerId, PointerKind};
