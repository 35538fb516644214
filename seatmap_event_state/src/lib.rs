// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Event State: pointer bookkeeping and gesture recognizers.
//!
//! This crate provides the small state machines a map viewer needs to turn
//! raw pointer events into gestures. Each module handles one pattern:
//!
//! - [`pointer`]: track live pointer contacts and derive the session shape
//!   (idle, single contact, or a tracked pair)
//! - [`drag`]: single-pointer drag deltas, owned by one pointer at a time
//! - [`pinch`]: two-pointer separation ratios and midpoints
//! - [`tap`]: double-tap recognition with temporal and spatial tolerance
//!
//! None of these touch a viewport. They accept positions and timestamps and
//! return deltas, factors, or recognition results; a controller at a higher
//! layer decides what those mean for the camera.
//!
//! ## Drag to pinch handover
//!
//! ```rust
//! use kurbo::Point;
//! use seatmap_event_state::drag::DragState;
//! use seatmap_event_state::pinch::PinchState;
//! use seatmap_event_state::pointer::{Contact, PointerId, PointerKind, PointerSession, SessionShape};
//!
//! let a = PointerId(1);
//! let b = PointerId(2);
//! let mut session = PointerSession::new();
//! let mut drag = DragState::default();
//! let mut pinch = PinchState::default();
//!
//! session.press(Contact::new(a, PointerKind::Touch, Point::new(100.0, 100.0)));
//! drag.start(a, Point::new(100.0, 100.0));
//!
//! // A second finger lands: the drag is released and the pinch starts from
//! // the current separation, so the first pinch frame does not jump.
//! session.press(Contact::new(b, PointerKind::Touch, Point::new(200.0, 100.0)));
//! if let SessionShape::Pair(first, second) = session.shape() {
//!     drag.end();
//!     pinch.start(first.position, second.position);
//! }
//! assert!(!drag.is_dragging());
//!
//! session.move_to(b, Point::new(300.0, 100.0));
//! let step = pinch
//!     .update(Point::new(100.0, 100.0), Point::new(300.0, 100.0))
//!     .unwrap();
//! assert_eq!(step.factor, 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod pointer;
pub mod tap;
