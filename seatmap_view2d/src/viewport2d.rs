// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Smallest zoom factor a viewport allows by default.
pub const DEFAULT_MIN_ZOOM: f64 = 0.5;

/// Largest zoom factor a viewport allows by default.
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

/// User zoom and pan over the fitted base space.
///
/// `Viewport2D` is the single authoritative `(zoom, pan)` pair of a viewer.
/// A base-space point `p` appears in view space at `p * zoom + pan`. Zoom is
/// always kept inside the configured limits; requests outside them are
/// clamped silently, never rejected.
///
/// The type is `Copy` so gesture code can treat it as a value: every
/// operation is a pure function of the previous state plus its arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport2D {
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for Viewport2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport2D {
    /// Creates a viewport at zoom `1.0` and zero pan with the default limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Creates a viewport at zoom `1.0` (clamped) with the given limits.
    #[must_use]
    pub fn with_zoom_limits(min_zoom: f64, max_zoom: f64) -> Self {
        let mut vp = Self::new();
        vp.set_zoom_limits(min_zoom, max_zoom);
        vp
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range without moving the pan.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Sets the zoom factor directly, clamping it into the zoom limits.
    ///
    /// Pan is left untouched. Returns `true` if the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if clamped == self.zoom {
            return false;
        }
        self.zoom = clamped;
        true
    }

    /// Sets the pan offset directly. Returns `true` if it changed.
    pub fn set_pan(&mut self, pan: Vec2) -> bool {
        if pan == self.pan || !pan.is_finite() {
            return false;
        }
        self.pan = pan;
        true
    }

    /// Restores zoom `1.0` (clamped into the limits) and zero pan.
    ///
    /// Returns `true` if anything changed.
    pub fn reset(&mut self) -> bool {
        let zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
        if self.zoom == zoom && self.pan == Vec2::ZERO {
            return false;
        }
        self.zoom = zoom;
        self.pan = Vec2::ZERO;
        true
    }

    /// Pans the view by a delta in view pixels. Returns `true` if it moved.
    pub fn pan_by_view(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return false;
        }
        self.pan += delta;
        true
    }

    /// Zooms by `factor` around an anchor point in view pixels.
    ///
    /// The base-space point under `anchor_view` before the call maps back to
    /// `anchor_view` afterwards. If clamping leaves the zoom unchanged, nothing
    /// moves: the pan is not touched, so repeated zooming against a limit does
    /// not drift. Non-positive or non-finite factors are ignored.
    ///
    /// Returns `true` if the zoom changed.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) -> bool {
        if factor <= 0.0 || !factor.is_finite() {
            return false;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == old_zoom {
            return false;
        }

        let anchor = anchor_view.to_vec2();
        let base = (anchor - self.pan) / old_zoom;
        self.zoom = new_zoom;
        self.pan = anchor - base * new_zoom;
        true
    }

    /// Pans so that `base_pt` lands on `view_center` at the current zoom.
    ///
    /// Returns `true` if the pan changed.
    pub fn center_on(&mut self, base_pt: Point, view_center: Point) -> bool {
        let pan = view_center.to_vec2() - base_pt.to_vec2() * self.zoom;
        self.set_pan(pan)
    }

    /// Base space to view space transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Converts a base-space point into view pixels.
    #[must_use]
    pub fn base_to_view_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.zoom + self.pan).to_point()
    }

    /// Converts a view-pixel point into base space.
    #[must_use]
    pub fn view_to_base_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.pan) / self.zoom).to_point()
    }

    /// Returns the base-space rectangle visible through a surface of
    /// `view_size` CSS pixels.
    #[must_use]
    pub fn visible_base_rect(&self, view_size: Size) -> Rect {
        let p0 = self.view_to_base_point(Point::ORIGIN);
        let p1 = self.view_to_base_point(Point::new(view_size.width, view_size.height));
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Viewport2DDebugInfo {
        Viewport2DDebugInfo {
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            at_min_zoom: self.zoom <= self.min_zoom,
            at_max_zoom: self.zoom >= self.max_zoom,
        }
    }
}

/// Debug snapshot of a [`Viewport2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Viewport2DDebugInfo {
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Current pan offset in view pixels.
    pub pan: Vec2,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Zoom is pinned at the lower limit.
    pub at_min_zoom: bool,
    /// Zoom is pinned at the upper limit.
    pub at_max_zoom: bool,
}
