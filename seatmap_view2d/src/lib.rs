// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap View 2D: the coordinate pipeline of the seat map viewer.
//!
//! Three coordinate spaces are involved:
//! - **Node space**: the venue-defined logical coordinates that layout nodes
//!   are authored in.
//! - **Base space**: CSS pixels on the drawing surface with the content
//!   fitted and centered, before any user zoom or pan.
//! - **View space**: CSS pixels on the drawing surface after user zoom and
//!   pan. Pointer events arrive in this space. Device pixels are view space
//!   scaled by the device pixel ratio.
//!
//! [`ContentFit`] maps node space to base space. It expands the node bounds
//! by a margin, scales them uniformly so they fit the surface regardless of
//! aspect ratio, and centers them. [`Viewport2D`] holds the user's zoom and pan
//! and maps base space to view space; its zoom-to-point operation keeps the
//! pixel under the cursor stationary.
//!
//! Neither type owns nodes, input handling, or a rendering backend. Callers
//! keep their own node lists and wire pointer events into pan/zoom at a
//! higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use seatmap_view2d::{ContentFit, DEFAULT_CONTENT_MARGIN, Viewport2D};
//!
//! // Nodes span 0..400 x 0..100 in node space, the surface is 800x600 CSS px
//! // on a 2x display.
//! let bounds = Rect::new(0.0, 0.0, 400.0, 100.0);
//! let fit = ContentFit::new(bounds, DEFAULT_CONTENT_MARGIN, Size::new(800.0, 600.0), 2.0)
//!     .unwrap();
//! assert_eq!(fit.backing_store_size(), (1600, 1200));
//!
//! let mut view = Viewport2D::new();
//! let anchor = Point::new(200.0, 150.0);
//! let before = view.view_to_base_point(anchor);
//! view.zoom_about_view_point(anchor, 2.0);
//! let after = view.view_to_base_point(anchor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Where does a node land on screen now?
//! let on_screen = fit.node_to_view_point(&view, Point::new(200.0, 50.0));
//! # let _ = on_screen;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod content;
mod viewport2d;

pub use content::{ContentFit, DEFAULT_CONTENT_MARGIN};
pub use viewport2d::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, Viewport2D, Viewport2DDebugInfo};
