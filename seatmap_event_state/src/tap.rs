// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition with temporal and spatial tolerance.
//!
//! Every tap is compared with the previous one. If it arrives within the time
//! window and within the slop radius, the pair is a double tap and is consumed,
//! so a third tap starts a new pair. Otherwise the tap becomes the new
//! reference and recognition waits for the next one.
//!
//! ```
//! use kurbo::Point;
//! use seatmap_event_state::tap::{TapResult, TapState};
//!
//! let mut taps = TapState::new();
//! assert_eq!(taps.on_tap(Point::new(10.0, 10.0), 1_000), TapResult::Single);
//! assert_eq!(
//!     taps.on_tap(Point::new(14.0, 12.0), 1_200),
//!     TapResult::Double(Point::new(14.0, 12.0))
//! );
//! ```

use kurbo::Point;

/// Longest gap between two taps of a double tap, in milliseconds (exclusive).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Largest distance between two taps of a double tap, in view pixels (exclusive).
pub const DEFAULT_DOUBLE_TAP_SLOP: f64 = 30.0;

/// Outcome of feeding a tap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapResult {
    /// The tap was recorded as a candidate first tap.
    Single,
    /// The tap completed a double tap at the given position.
    Double(Point),
}

/// Remembers the last unpaired tap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapState {
    window_ms: u64,
    slop: f64,
    last: Option<(u64, Point)>,
}

impl Default for TapState {
    fn default() -> Self {
        Self::new()
    }
}

impl TapState {
    /// Creates a recognizer with the default 300 ms / 30 px tolerance.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_tolerance(DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_DOUBLE_TAP_SLOP)
    }

    /// Creates a recognizer with a custom tolerance.
    #[must_use]
    pub const fn with_tolerance(window_ms: u64, slop: f64) -> Self {
        Self {
            window_ms,
            slop,
            last: None,
        }
    }

    /// Feeds a tap at `pos` and time `time_ms`.
    ///
    /// Timestamps going backwards never pair.
    pub fn on_tap(&mut self, pos: Point, time_ms: u64) -> TapResult {
        if let Some((last_time, last_pos)) = self.last
            && let Some(elapsed) = time_ms.checked_sub(last_time)
            && elapsed < self.window_ms
            && pos.distance(last_pos) < self.slop
        {
            self.last = None;
            return TapResult::Double(pos);
        }
        self.last = Some((time_ms, pos));
        TapResult::Single
    }

    /// Forgets the pending first tap.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Returns `true` if a first tap is waiting for its partner.
    pub fn is_pending(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{TapResult, TapState};

    #[test]
    fn quick_close_taps_pair() {
        let mut taps = TapState::new();
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 0), TapResult::Single);
        assert!(taps.is_pending());
        assert_eq!(
            taps.on_tap(Point::new(20.0, 0.0), 299),
            TapResult::Double(Point::new(20.0, 0.0))
        );
        assert!(!taps.is_pending());
    }

    #[test]
    fn slow_taps_do_not_pair() {
        let mut taps = TapState::new();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 300), TapResult::Single);
        // The slow tap became the new reference.
        assert_eq!(
            taps.on_tap(Point::new(0.0, 0.0), 450),
            TapResult::Double(Point::new(0.0, 0.0))
        );
    }

    #[test]
    fn distant_taps_do_not_pair() {
        let mut taps = TapState::new();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_tap(Point::new(30.0, 0.0), 100), TapResult::Single);
    }

    #[test]
    fn third_tap_starts_a_new_pair() {
        let mut taps = TapState::new();
        taps.on_tap(Point::ORIGIN, 0);
        taps.on_tap(Point::ORIGIN, 100);
        assert_eq!(taps.on_tap(Point::ORIGIN, 200), TapResult::Single);
    }

    #[test]
    fn clock_going_backwards_never_pairs() {
        let mut taps = TapState::new();
        taps.on_tap(Point::ORIGIN, 1_000);
        assert_eq!(taps.on_tap(Point::ORIGIN, 900), TapResult::Single);
    }

    #[test]
    fn custom_tolerance_and_reset() {
        let mut taps = TapState::with_tolerance(50, 5.0);
        taps.on_tap(Point::ORIGIN, 0);
        assert_eq!(taps.on_tap(Point::ORIGIN, 60), TapResult::Single);
        taps.reset();
        assert!(!taps.is_pending());
        assert_eq!(taps.on_tap(Point::ORIGIN, 70), TapResult::Single);
    }
}
