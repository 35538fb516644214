// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

use crate::Viewport2D;

/// Margin, in node-space units, added around the node bounds on every side.
pub const DEFAULT_CONTENT_MARGIN: f64 = 40.0;

/// Fitted mapping from node space onto a drawing surface.
///
/// The node bounds are expanded by a margin, then scaled uniformly so the
/// whole box fits the surface (aspect ratio is preserved, content is never
/// stretched) and centered along the slack axis. The result is the base
/// transform: `base = (node - centered_min) * content_scale`.
///
/// For a fixed bounding box and surface the fit is deterministic, and every
/// point inside the bounds lands inside `[0, width] x [0, height]` at zoom 1
/// and zero pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentFit {
    content_bounds: Rect,
    surface_size: Size,
    device_pixel_ratio: f64,
    content_scale: f64,
    centered_min: Point,
}

impl ContentFit {
    /// Fits `bounds`, expanded by `margin` on every side, into a surface of
    /// `surface_size` CSS pixels.
    ///
    /// Returns `None` if the expanded bounds or the surface are empty or not
    /// finite. A non-positive or non-finite `device_pixel_ratio` is treated
    /// as `1.0`.
    #[must_use]
    pub fn new(bounds: Rect, margin: f64, surface_size: Size, device_pixel_ratio: f64) -> Option<Self> {
        let content_bounds = bounds.abs().inflate(margin, margin);
        let content_w = content_bounds.width();
        let content_h = content_bounds.height();
        if !(content_w > 0.0 && content_h > 0.0 && content_w.is_finite() && content_h.is_finite()) {
            return None;
        }
        if !(surface_size.width > 0.0
            && surface_size.height > 0.0
            && surface_size.is_finite())
        {
            return None;
        }

        let content_scale = (surface_size.width / content_w).min(surface_size.height / content_h);

        // Node-space extent that exactly covers the surface; the content sits
        // in its middle.
        let world_w = surface_size.width / content_scale;
        let world_h = surface_size.height / content_scale;
        let offset_x = (world_w - content_w) / 2.0;
        let offset_y = (world_h - content_h) / 2.0;
        let centered_min = Point::new(content_bounds.x0 - offset_x, content_bounds.y0 - offset_y);

        let device_pixel_ratio = if device_pixel_ratio > 0.0 && device_pixel_ratio.is_finite() {
            device_pixel_ratio
        } else {
            1.0
        };

        Some(Self {
            content_bounds,
            surface_size,
            device_pixel_ratio,
            content_scale,
            centered_min,
        })
    }

    /// Fits the bounding box of `points`. Returns `None` for an empty iterator.
    #[must_use]
    pub fn from_points<I>(points: I, margin: f64, surface_size: Size, device_pixel_ratio: f64) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let bounds = iter.fold(Rect::from_points(first, first), |acc, pt| acc.union_pt(pt));
        Self::new(bounds, margin, surface_size, device_pixel_ratio)
    }

    /// Node bounds expanded by the margin.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    /// Surface size in CSS pixels.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Ratio of device pixels to CSS pixels.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// CSS pixels per node-space unit at zoom 1.
    #[must_use]
    pub fn content_scale(&self) -> f64 {
        self.content_scale
    }

    /// Node-space point that maps to surface pixel `(0, 0)` at zoom 1.
    #[must_use]
    pub fn centered_min(&self) -> Point {
        self.centered_min
    }

    /// Center of the surface in CSS pixels.
    #[must_use]
    pub fn surface_center(&self) -> Point {
        Point::new(self.surface_size.width / 2.0, self.surface_size.height / 2.0)
    }

    /// Backing store size in device pixels, so drawing stays sharp on high
    /// density displays.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "surface sizes are positive and far below u32::MAX"
    )]
    pub fn backing_store_size(&self) -> (u32, u32) {
        let w = (self.surface_size.width * self.device_pixel_ratio).round();
        let h = (self.surface_size.height * self.device_pixel_ratio).round();
        (w as u32, h as u32)
    }

    /// Node space to base space transform.
    #[must_use]
    pub fn base_transform(&self) -> Affine {
        Affine::scale(self.content_scale) * Affine::translate(-self.centered_min.to_vec2())
    }

    /// Base space to device pixel transform under `viewport`.
    ///
    /// Pan is kept in CSS pixels, so the device transform is
    /// `scale(dpr) * translate(pan) * scale(zoom)`.
    #[must_use]
    pub fn device_transform(&self, viewport: &Viewport2D) -> Affine {
        Affine::scale(self.device_pixel_ratio) * viewport.transform()
    }

    /// Full node space to device pixel transform under `viewport`.
    #[must_use]
    pub fn node_to_device_transform(&self, viewport: &Viewport2D) -> Affine {
        self.device_transform(viewport) * self.base_transform()
    }

    /// Maps a node-space point into base space.
    #[must_use]
    pub fn node_to_base(&self, pt: Point) -> Point {
        ((pt - self.centered_min) * self.content_scale).to_point()
    }

    /// Maps a base-space point back into node space.
    #[must_use]
    pub fn base_to_node(&self, pt: Point) -> Point {
        self.centered_min + pt.to_vec2() / self.content_scale
    }

    /// Maps a node-space point into view (CSS) pixels under `viewport`.
    #[must_use]
    pub fn node_to_view_point(&self, viewport: &Viewport2D, pt: Point) -> Point {
        viewport.base_to_view_point(self.node_to_base(pt))
    }

    /// Maps a view (CSS) pixel back into node space under `viewport`.
    #[must_use]
    pub fn view_to_node_point(&self, viewport: &Viewport2D, pt: Point) -> Point {
        self.base_to_node(viewport.view_to_base_point(pt))
    }
}
