// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for gesture handling.
//!
//! Verifies:
//! 1. Any input sequence leaves the zoom inside the configured limits.
//! 2. A wheel notch keeps the base point under the cursor fixed unless the
//!    zoom is pinned.
//! 3. A single-contact drag pans by exactly the summed deltas times the gain.

use kurbo::{Point, Vec2};
use proptest::prelude::*;
use seatmap_view2d::Viewport2D;
use seatmap_viewer::{
    DEFAULT_DRAG_GAIN, GestureController, GestureEffect, InputEvent, PointerKind, PointerPhase,
    reduce,
};

fn arb_point() -> impl Strategy<Value = Point> {
    (0.0_f64..800.0, 0.0_f64..600.0).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        (-3.0_f64..3.0, arb_point()).prop_map(|(dy, p)| InputEvent::wheel(dy, p)),
        (
            0_u64..3,
            prop_oneof![
                Just(PointerPhase::Down),
                Just(PointerPhase::Move),
                Just(PointerPhase::Move),
                Just(PointerPhase::Up),
                Just(PointerPhase::Cancel),
            ],
            arb_point(),
            0_u64..10_000,
        )
            .prop_map(|(id, phase, p, t)| InputEvent::pointer(id, PointerKind::Touch, phase, p, t)),
    ]
}

proptest! {
    #[test]
    fn zoom_stays_within_limits(events in prop::collection::vec(arb_event(), 1..64)) {
        let mut viewport = Viewport2D::new();
        let mut gestures = GestureController::default();
        for event in &events {
            let (vp, g, _) = reduce(viewport, gestures, event);
            viewport = vp;
            gestures = g;
            let (min, max) = viewport.zoom_limits();
            prop_assert!(viewport.zoom() >= min && viewport.zoom() <= max);
            prop_assert!(viewport.pan().is_finite());
        }
    }

    #[test]
    fn wheel_zoom_keeps_cursor_anchor(
        dy in prop_oneof![-5.0_f64..-0.01, 0.01_f64..5.0],
        at in arb_point(),
        notches in 1_usize..8,
    ) {
        let mut viewport = Viewport2D::new();
        let mut gestures = GestureController::default();
        let base = viewport.view_to_base_point(at);
        for _ in 0..notches {
            let effect = gestures.handle(&mut viewport, &InputEvent::wheel(dy, at));
            prop_assert_eq!(effect, GestureEffect::Zoomed);
        }
        let back = viewport.base_to_view_point(base);
        prop_assert!((back - at).hypot() < 1e-6, "anchor moved to {back:?}");
    }

    #[test]
    fn drag_pans_by_scaled_delta(
        start in arb_point(),
        steps in prop::collection::vec((-40.0_f64..40.0, -40.0_f64..40.0), 1..16),
    ) {
        let mut viewport = Viewport2D::new();
        let mut gestures = GestureController::default();
        gestures.handle(&mut viewport, &InputEvent::pointer(7, PointerKind::Mouse, PointerPhase::Down, start, 0));

        let mut pos = start;
        let mut total = Vec2::ZERO;
        for (i, (dx, dy)) in steps.into_iter().enumerate() {
            pos += Vec2::new(dx, dy);
            total += Vec2::new(dx, dy);
            gestures.handle(
                &mut viewport,
                &InputEvent::pointer(7, PointerKind::Mouse, PointerPhase::Move, pos, 16 * (i as u64 + 1)),
            );
        }
        prop_assert!((viewport.pan() - total * DEFAULT_DRAG_GAIN).hypot() < 1e-6);
        prop_assert_eq!(viewport.zoom(), 1.0);
    }
}
