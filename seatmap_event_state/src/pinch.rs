// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch tracking.
//!
//! The pinch remembers the separation of the tracked pair from the previous
//! frame. Each update yields the ratio of the new separation to the old one
//! and the midpoint of the pair, then rebases on the new separation.

use kurbo::Point;

/// One pinch frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinchStep {
    /// Ratio of the current separation to the previous one.
    pub factor: f64,
    /// Midpoint of the two pointers, in view pixels.
    pub center: Point,
}

/// Tracks the last separation of a pinching pair.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PinchState {
    last_distance: Option<f64>,
}

impl PinchState {
    /// Starts (or rebases) a pinch from the pair's current positions.
    pub fn start(&mut self, a: Point, b: Point) {
        self.last_distance = Some(a.distance(b));
    }

    /// Feeds the pair's current positions.
    ///
    /// Returns `None` if no pinch is active or either separation is zero
    /// (coincident pointers carry no scale information). The new separation
    /// becomes the baseline either way.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchStep> {
        let previous = self.last_distance?;
        let distance = a.distance(b);
        self.last_distance = Some(distance);
        if previous <= 0.0 || distance <= 0.0 {
            return None;
        }
        Some(PinchStep {
            factor: distance / previous,
            center: a.midpoint(b),
        })
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.last_distance = None;
    }

    /// Returns `true` while a pinch is active.
    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }

    /// Separation recorded on the last frame.
    pub fn last_distance(&self) -> Option<f64> {
        self.last_distance
    }
}
