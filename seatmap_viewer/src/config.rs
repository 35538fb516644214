// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer configuration.
//!
//! Every tunable has a default matching the stock viewer behavior. With the
//! `serde` feature, a host can load a partial document; missing fields keep
//! their defaults.

use seatmap_event_state::tap::{DEFAULT_DOUBLE_TAP_SLOP, DEFAULT_DOUBLE_TAP_WINDOW_MS};
use seatmap_view2d::{DEFAULT_CONTENT_MARGIN, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

/// Zoom multiplier per wheel notch.
pub const DEFAULT_WHEEL_STEP: f64 = 1.08;
/// Multiplier applied to single-pointer drag deltas.
pub const DEFAULT_DRAG_GAIN: f64 = 1.2;
/// Zoom multiplier applied by a double tap.
pub const DEFAULT_DOUBLE_TAP_ZOOM: f64 = 1.15;

/// Gesture tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureConfig {
    /// Zoom multiplier per wheel notch; scrolling down applies the inverse.
    pub wheel_step: f64,
    /// Multiplier applied to drag deltas before panning.
    pub drag_gain: f64,
    /// Zoom multiplier applied by a double tap.
    pub double_tap_zoom: f64,
    /// Longest gap between the taps of a double tap, in milliseconds.
    pub double_tap_window_ms: u64,
    /// Largest distance between the taps of a double tap, in CSS pixels.
    pub double_tap_slop: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            wheel_step: DEFAULT_WHEEL_STEP,
            drag_gain: DEFAULT_DRAG_GAIN,
            double_tap_zoom: DEFAULT_DOUBLE_TAP_ZOOM,
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
            double_tap_slop: DEFAULT_DOUBLE_TAP_SLOP,
        }
    }
}

/// Viewer configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewerConfig {
    /// Margin added around the node bounds before fitting, in node units.
    pub content_margin: f64,
    /// Smallest user zoom.
    pub min_zoom: f64,
    /// Largest user zoom.
    pub max_zoom: f64,
    /// Enter fullscreen automatically when a new selection arrives.
    pub auto_fullscreen: bool,
    /// Gesture tuning.
    pub gestures: GestureConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            content_margin: DEFAULT_CONTENT_MARGIN,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            auto_fullscreen: false,
            gestures: GestureConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Returns a copy with auto fullscreen switched on or off.
    #[must_use]
    pub fn with_auto_fullscreen(mut self, enabled: bool) -> Self {
        self.auto_fullscreen = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_behavior() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.content_margin, 40.0);
        assert_eq!((cfg.min_zoom, cfg.max_zoom), (0.5, 4.0));
        assert!(!cfg.auto_fullscreen);
        assert_eq!(cfg.gestures.wheel_step, 1.08);
        assert_eq!(cfg.gestures.drag_gain, 1.2);
        assert_eq!(cfg.gestures.double_tap_zoom, 1.15);
        assert_eq!(cfg.gestures.double_tap_window_ms, 300);
        assert_eq!(cfg.gestures.double_tap_slop, 30.0);
        assert!(cfg.with_auto_fullscreen(true).auto_fullscreen);
    }
}
