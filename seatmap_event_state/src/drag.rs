// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer drag tracking.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], naming the owning pointer.
//! 2) On each move, call [`DragState::update`]; only the owner produces a delta.
//! 3) When ownership changes hands mid-gesture, call [`DragState::start`] again
//!    with the new owner's current position so the first delta is zero.
//! 4) End with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use seatmap_event_state::drag::DragState;
//! use seatmap_event_state::pointer::PointerId;
//!
//! let mut drag = DragState::default();
//! drag.start(PointerId(7), Point::new(10.0, 20.0));
//!
//! let delta = drag.update(PointerId(7), Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! // Moves from any other pointer are not attributed to the drag.
//! assert!(drag.update(PointerId(8), Point::new(50.0, 50.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::PointerId;

/// Tracks which pointer owns the drag and where it was last seen.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    owner: Option<PointerId>,
    last_pos: Option<Point>,
}

impl DragState {
    /// Starts (or hands over) a drag owned by `owner` at `pos`.
    pub fn start(&mut self, owner: PointerId, pos: Point) {
        self.owner = Some(owner);
        self.last_pos = Some(pos);
    }

    /// Feeds a move of pointer `id`, returning the delta since the owner's
    /// previous position. Returns `None` if `id` does not own the drag.
    pub fn update(&mut self, id: PointerId, pos: Point) -> Option<Vec2> {
        if self.owner != Some(id) {
            return None;
        }
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Ends the drag and forgets the owner.
    pub fn end(&mut self) {
        self.owner = None;
        self.last_pos = None;
    }

    /// Pointer currently owning the drag.
    pub fn owner(&self) -> Option<PointerId> {
        self.owner
    }

    /// Returns `true` while a pointer owns the drag.
    pub fn is_dragging(&self) -> bool {
        self.owner.is_some()
    }
}
