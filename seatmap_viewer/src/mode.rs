// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedded / fullscreen presentation and one-shot auto-centering.
//!
//! Transitions:
//!
//! | From | Trigger | To | Viewport |
//! |---|---|---|---|
//! | embedded | [`enter_fullscreen`](ViewModeController::enter_fullscreen) | fullscreen (manual) | kept |
//! | any | new non-empty selection key, auto fullscreen on | fullscreen (auto) | reset, auto-center armed |
//! | fullscreen (auto) | [`exit_fullscreen`](ViewModeController::exit_fullscreen) | embedded | reset |
//! | fullscreen (manual) | [`exit_fullscreen`](ViewModeController::exit_fullscreen) | embedded | kept |
//!
//! The pending auto-center is cleared only by applying it, by a manual
//! gesture, or by leaving fullscreen.

use kurbo::Point;
use seatmap_selection::SelectionKey;
use seatmap_view2d::Viewport2D;

use crate::logging::{log_debug, log_info};

/// Presentation mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Inline in the host page.
    #[default]
    Embedded,
    /// Covering the host surface.
    Fullscreen {
        /// Entered automatically by a new selection rather than by the user.
        auto: bool,
    },
}

impl ViewMode {
    /// Returns `true` in either fullscreen variant.
    pub fn is_fullscreen(self) -> bool {
        matches!(self, Self::Fullscreen { .. })
    }
}

/// State machine for [`ViewMode`] and the pending auto-center.
#[derive(Clone, Debug, Default)]
pub struct ViewModeController {
    mode: ViewMode,
    auto_fullscreen: bool,
    last_key: SelectionKey,
    pending_auto_center: bool,
}

impl ViewModeController {
    /// Creates a controller in embedded mode.
    pub fn new(auto_fullscreen: bool) -> Self {
        Self {
            auto_fullscreen,
            ..Self::default()
        }
    }

    /// Current mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether a new selection enters fullscreen automatically.
    pub fn auto_fullscreen(&self) -> bool {
        self.auto_fullscreen
    }

    /// Enables or disables automatic fullscreen for future selections.
    pub fn set_auto_fullscreen(&mut self, enabled: bool) {
        self.auto_fullscreen = enabled;
    }

    /// Returns `true` while an auto-center waits for the next frame.
    pub fn auto_center_pending(&self) -> bool {
        self.pending_auto_center
    }

    /// Enters fullscreen at the user's request, keeping the camera.
    ///
    /// Returns `true` if the mode changed.
    pub fn enter_fullscreen(&mut self) -> bool {
        if self.mode.is_fullscreen() {
            return false;
        }
        self.mode = ViewMode::Fullscreen { auto: false };
        log_info!("entered fullscreen");
        true
    }

    /// Leaves fullscreen.
    ///
    /// An automatic fullscreen resets the camera on the way out; a manual one
    /// leaves it where the user put it. Returns `true` if the mode changed.
    pub fn exit_fullscreen(&mut self, viewport: &mut Viewport2D) -> bool {
        let ViewMode::Fullscreen { auto } = self.mode else {
            return false;
        };
        if auto {
            viewport.reset();
        }
        self.mode = ViewMode::Embedded;
        self.pending_auto_center = false;
        log_info!(auto, "left fullscreen");
        true
    }

    /// Enters fullscreen from embedded mode or leaves it otherwise.
    pub fn toggle_fullscreen(&mut self, viewport: &mut Viewport2D) -> bool {
        if self.mode.is_fullscreen() {
            self.exit_fullscreen(viewport)
        } else {
            self.enter_fullscreen()
        }
    }

    /// Records the key of a selection request.
    ///
    /// When the key differs from the previous one, is non-empty, and automatic
    /// fullscreen is on, this enters automatic fullscreen, resets the camera,
    /// and arms the auto-center. Returns `true` in that case. Any other new
    /// key disarms an auto-center still pending for the previous one.
    pub fn on_selection(&mut self, key: SelectionKey, viewport: &mut Viewport2D) -> bool {
        if key == self.last_key {
            return false;
        }
        let is_empty = key.is_empty();
        self.last_key = key;
        self.pending_auto_center = false;
        if is_empty || !self.auto_fullscreen {
            return false;
        }
        self.mode = ViewMode::Fullscreen { auto: true };
        viewport.reset();
        self.pending_auto_center = true;
        log_info!("entered fullscreen for new selection");
        true
    }

    /// Drops a pending auto-center after a manual gesture.
    pub fn cancel_auto_center(&mut self) {
        if self.pending_auto_center {
            log_debug!("auto-center preempted by gesture");
        }
        self.pending_auto_center = false;
    }

    /// Runs the pending auto-center, if any.
    ///
    /// `target` is the base-space position of the node to frame; when it is
    /// `None` (nothing matched yet) the auto-center stays armed. Returns
    /// `true` if the camera was moved.
    pub fn apply_auto_center(
        &mut self,
        viewport: &mut Viewport2D,
        target: Option<Point>,
        view_center: Point,
    ) -> bool {
        if !self.pending_auto_center || !self.mode.is_fullscreen() {
            return false;
        }
        let Some(target) = target else {
            return false;
        };
        self.pending_auto_center = false;
        log_debug!(x = target.x, y = target.y, "auto-centering on selection");
        viewport.center_on(target, view_center)
    }
}
