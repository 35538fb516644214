// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the viewport transform.
//!
//! Verifies:
//! 1. Zoom-to-point: the base point under the anchor stays under the anchor
//!    whenever the zoom is not clamped.
//! 2. Clamp idempotence: once pinned at a limit, further zooming in the same
//!    direction changes neither zoom nor pan.
//! 3. Fit: at zoom 1 and zero pan every node lands on the surface.

use kurbo::{Point, Rect, Size};
use proptest::prelude::*;
use seatmap_view2d::{ContentFit, DEFAULT_CONTENT_MARGIN, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, Viewport2D};

fn arb_point(extent: f64) -> impl Strategy<Value = Point> {
    (-extent..extent, -extent..extent).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn zoom_keeps_anchor_fixed(
        start_zoom in 0.5_f64..4.0,
        pan in arb_point(2_000.0),
        factor in 0.2_f64..5.0,
        anchor in arb_point(1_500.0),
    ) {
        let mut vp = Viewport2D::new();
        vp.set_zoom(start_zoom);
        vp.set_pan(pan.to_vec2());

        let target = start_zoom * factor;
        prop_assume!(target > DEFAULT_MIN_ZOOM && target < DEFAULT_MAX_ZOOM);

        let before = vp.view_to_base_point(anchor);
        prop_assert!(vp.zoom_about_view_point(anchor, factor));
        let back = vp.base_to_view_point(before);
        prop_assert!((back - anchor).hypot() < 1e-6, "anchor moved to {back:?}");
    }

    #[test]
    fn pinned_zoom_does_not_drift(
        anchors in prop::collection::vec(arb_point(1_000.0), 1..20),
        zoom_in in any::<bool>(),
    ) {
        let mut vp = Viewport2D::new();
        let factor = if zoom_in { 1.5 } else { 1.0 / 1.5 };
        for _ in 0..20 {
            vp.zoom_about_view_point(Point::new(10.0, 10.0), factor);
        }
        let limit = if zoom_in { DEFAULT_MAX_ZOOM } else { DEFAULT_MIN_ZOOM };
        prop_assert_eq!(vp.zoom(), limit);

        let pinned = vp;
        for anchor in anchors {
            prop_assert!(!vp.zoom_about_view_point(anchor, factor));
            prop_assert_eq!(vp, pinned);
        }
    }

    #[test]
    fn fitted_nodes_land_on_surface(
        nodes in prop::collection::vec(arb_point(5_000.0), 1..40),
        width in 50.0_f64..3_000.0,
        height in 50.0_f64..3_000.0,
        dpr in 1.0_f64..4.0,
    ) {
        let surface = Size::new(width, height);
        let fit = ContentFit::from_points(nodes.iter().copied(), DEFAULT_CONTENT_MARGIN, surface, dpr)
            .expect("margin keeps the content non-empty");
        let surface_rect = Rect::from_origin_size(Point::ORIGIN, surface).inflate(1e-6, 1e-6);
        let vp = Viewport2D::new();
        for node in nodes {
            let on_screen = fit.node_to_view_point(&vp, node);
            prop_assert!(surface_rect.contains(on_screen), "{node:?} mapped to {on_screen:?}");
        }
    }
}
