// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and wheel input to viewport changes.
//!
//! [`GestureController`] owns the pointer session and the drag, pinch, and
//! double-tap recognizers, and applies their output to a [`Viewport2D`]:
//!
//! - Wheel: zoom by the configured step about the cursor.
//! - One contact: pan by the owner's move delta times the drag gain.
//! - Two or more contacts: the two oldest pinch-zoom about their midpoint.
//! - Double tap: zoom in about the second tap.
//!
//! Roles are recomputed from the contact list whenever a pointer is added
//! or removed. A contact that inherits the drag or joins the pinch starts
//! from its current position, so handovers never jump.

use kurbo::{Point, Vec2};
use seatmap_event_state::drag::DragState;
use seatmap_event_state::pinch::PinchState;
use seatmap_event_state::pointer::{Contact, PointerId, PointerKind, PointerSession, SessionShape};
use seatmap_event_state::tap::{TapResult, TapState};
use seatmap_view2d::Viewport2D;

use crate::GestureConfig;

/// Phase of a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer pressed.
    Down,
    /// Pointer moved (pressed or hovering).
    Move,
    /// Pointer released.
    Up,
    /// The platform took the pointer away.
    Cancel,
}

/// A pointer event in view pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer identifier.
    pub id: PointerId,
    /// Pointer kind.
    pub kind: PointerKind,
    /// Event phase.
    pub phase: PointerPhase,
    /// Position relative to the drawing surface.
    pub position: Point,
    /// Event time in milliseconds.
    pub time_ms: u64,
}

/// A wheel event in view pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelEvent {
    /// Vertical delta; negative scrolls up (zooms in).
    pub delta_y: f64,
    /// Cursor position relative to the drawing surface.
    pub position: Point,
}

/// Raw input consumed by the viewer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer input.
    Pointer(PointerEvent),
    /// Wheel input. The host suppresses default scrolling.
    Wheel(WheelEvent),
}

impl InputEvent {
    /// Shorthand for a pointer event.
    pub fn pointer(
        id: u64,
        kind: PointerKind,
        phase: PointerPhase,
        position: impl Into<Point>,
        time_ms: u64,
    ) -> Self {
        Self::Pointer(PointerEvent {
            id: PointerId(id),
            kind,
            phase,
            position: position.into(),
            time_ms,
        })
    }

    /// Shorthand for a wheel event.
    pub fn wheel(delta_y: f64, position: impl Into<Point>) -> Self {
        Self::Wheel(WheelEvent {
            delta_y,
            position: position.into(),
        })
    }
}

/// What an event did to the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureEffect {
    /// Nothing changed.
    None,
    /// Pan changed.
    Panned,
    /// Zoom (and pan, to keep the anchor fixed) changed.
    Zoomed,
}

impl GestureEffect {
    /// Returns `true` if the viewport changed.
    pub fn moved_viewport(self) -> bool {
        !matches!(self, Self::None)
    }

    fn zoomed_if(changed: bool) -> Self {
        if changed { Self::Zoomed } else { Self::None }
    }
}

/// Turns input events into viewport mutations.
#[derive(Clone, Debug)]
pub struct GestureController {
    config: GestureConfig,
    session: PointerSession,
    drag: DragState,
    pinch: PinchState,
    taps: TapState,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureController {
    /// Creates a controller with the given tuning.
    pub fn new(config: GestureConfig) -> Self {
        let taps = TapState::with_tolerance(config.double_tap_window_ms, config.double_tap_slop);
        Self {
            config,
            session: PointerSession::new(),
            drag: DragState::default(),
            pinch: PinchState::default(),
            taps,
        }
    }

    /// Gesture tuning.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Live pointer contacts.
    pub fn session(&self) -> &PointerSession {
        &self.session
    }

    /// Pointer currently owning the drag.
    pub fn drag_owner(&self) -> Option<PointerId> {
        self.drag.owner()
    }

    /// Returns `true` while two contacts are pinching.
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Forgets every contact and pending tap.
    pub fn reset(&mut self) {
        self.session.clear();
        self.taps.reset();
        self.sync_roles();
    }

    /// Applies `event` to `viewport`.
    pub fn handle(&mut self, viewport: &mut Viewport2D, event: &InputEvent) -> GestureEffect {
        match *event {
            InputEvent::Wheel(wheel) => self.on_wheel(viewport, wheel),
            InputEvent::Pointer(ev) => match ev.phase {
                PointerPhase::Down => self.on_down(viewport, ev),
                PointerPhase::Move => self.on_move(viewport, ev),
                PointerPhase::Up => {
                    self.on_release(ev.id);
                    GestureEffect::None
                }
                PointerPhase::Cancel => {
                    self.on_release(ev.id);
                    self.taps.reset();
                    GestureEffect::None
                }
            },
        }
    }

    fn on_wheel(&self, viewport: &mut Viewport2D, wheel: WheelEvent) -> GestureEffect {
        let factor = if wheel.delta_y < 0.0 {
            self.config.wheel_step
        } else if wheel.delta_y > 0.0 {
            self.config.wheel_step.recip()
        } else {
            return GestureEffect::None;
        };
        GestureEffect::zoomed_if(viewport.zoom_about_view_point(wheel.position, factor))
    }

    fn on_down(&mut self, viewport: &mut Viewport2D, ev: PointerEvent) -> GestureEffect {
        if !self.session.press(Contact::new(ev.id, ev.kind, ev.position)) {
            return GestureEffect::None;
        }
        self.sync_roles();

        if self.session.len() != 1 {
            return GestureEffect::None;
        }
        match self.taps.on_tap(ev.position, ev.time_ms) {
            TapResult::Single => GestureEffect::None,
            TapResult::Double(at) => GestureEffect::zoomed_if(
                viewport.zoom_about_view_point(at, self.config.double_tap_zoom),
            ),
        }
    }

    fn on_move(&mut self, viewport: &mut Viewport2D, ev: PointerEvent) -> GestureEffect {
        if self.session.move_to(ev.id, ev.position).is_none() {
            return GestureEffect::None;
        }
        match self.session.shape() {
            SessionShape::Idle => GestureEffect::None,
            SessionShape::Single(_) => match self.drag.update(ev.id, ev.position) {
                Some(delta) => self.pan(viewport, delta),
                None => GestureEffect::None,
            },
            SessionShape::Pair(a, b) => {
                if !self.session.is_tracked(ev.id) {
                    return GestureEffect::None;
                }
                match self.pinch.update(a.position, b.position) {
                    Some(step) => GestureEffect::zoomed_if(
                        viewport.zoom_about_view_point(step.center, step.factor),
                    ),
                    None => GestureEffect::None,
                }
            }
        }
    }

    fn on_release(&mut self, id: PointerId) {
        if self.session.release(id).is_some() {
            self.sync_roles();
        }
    }

    fn pan(&self, viewport: &mut Viewport2D, delta: Vec2) -> GestureEffect {
        if viewport.pan_by_view(delta * self.config.drag_gain) {
            GestureEffect::Panned
        } else {
            GestureEffect::None
        }
    }

    /// Re-derives drag and pinch roles from the contact list.
    fn sync_roles(&mut self) {
        match self.session.shape() {
            SessionShape::Idle => {
                self.drag.end();
                self.pinch.end();
            }
            SessionShape::Single(c) => {
                self.pinch.end();
                self.drag.start(c.id, c.position);
            }
            SessionShape::Pair(a, b) => {
                self.drag.end();
                self.pinch.start(a.position, b.position);
            }
        }
    }
}

/// Pure form of [`GestureController::handle`]: consumes the previous state
/// and the event and returns the next state.
pub fn reduce(
    mut viewport: Viewport2D,
    mut gestures: GestureController,
    event: &InputEvent,
) -> (Viewport2D, GestureController, GestureEffect) {
    let effect = gestures.handle(&mut viewport, event);
    (viewport, gestures, effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: PointerPhase, x: f64, y: f64, t: u64) -> InputEvent {
        InputEvent::pointer(id, PointerKind::Touch, phase, (x, y), t)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wheel_zooms_about_cursor() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        let cursor = Point::new(120.0, 80.0);
        let base = vp.view_to_base_point(cursor);

        assert_eq!(g.handle(&mut vp, &InputEvent::wheel(-1.0, cursor)), GestureEffect::Zoomed);
        assert!(close(vp.zoom(), 1.08));
        let back = vp.base_to_view_point(base);
        assert!(close(back.x, cursor.x) && close(back.y, cursor.y));

        g.handle(&mut vp, &InputEvent::wheel(3.0, cursor));
        assert!(close(vp.zoom(), 1.0));

        assert_eq!(g.handle(&mut vp, &InputEvent::wheel(0.0, cursor)), GestureEffect::None);
    }

    #[test]
    fn wheel_at_limit_is_a_no_op() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        vp.set_zoom(4.0);
        let before = vp;
        assert_eq!(
            g.handle(&mut vp, &InputEvent::wheel(-1.0, (10.0, 10.0))),
            GestureEffect::None
        );
        assert_eq!(vp, before);
    }

    #[test]
    fn drag_pans_with_gain() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        g.handle(&mut vp, &touch(1, PointerPhase::Down, 0.0, 0.0, 0));
        assert_eq!(g.drag_owner(), Some(PointerId(1)));

        let effect = g.handle(&mut vp, &touch(1, PointerPhase::Move, 10.0, -5.0, 16));
        assert_eq!(effect, GestureEffect::Panned);
        assert!(close(vp.pan().x, 12.0) && close(vp.pan().y, -6.0));

        g.handle(&mut vp, &touch(1, PointerPhase::Up, 10.0, -5.0, 32));
        assert_eq!(g.drag_owner(), None);
    }

    #[test]
    fn hover_moves_are_ignored() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        let hover = InputEvent::pointer(1, PointerKind::Mouse, PointerPhase::Move, (50.0, 50.0), 0);
        assert_eq!(g.handle(&mut vp, &hover), GestureEffect::None);
        assert_eq!(vp, Viewport2D::new());
    }

    #[test]
    fn remaining_contact_inherits_drag_without_jump() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        g.handle(&mut vp, &touch(1, PointerPhase::Down, 0.0, 0.0, 0));
        g.handle(&mut vp, &touch(2, PointerPhase::Down, 200.0, 0.0, 10));
        assert!(g.is_pinching());
        assert_eq!(g.drag_owner(), None);

        g.handle(&mut vp, &touch(1, PointerPhase::Up, 0.0, 0.0, 20));
        assert!(!g.is_pinching());
        assert_eq!(g.drag_owner(), Some(PointerId(2)));

        let before = vp.pan();
        g.handle(&mut vp, &touch(2, PointerPhase::Move, 200.0, 0.0, 30));
        assert_eq!(vp.pan(), before);
        g.handle(&mut vp, &touch(2, PointerPhase::Move, 210.0, 0.0, 40));
        assert!(close(vp.pan().x - before.x, 12.0));
    }

    #[test]
    fn third_contact_does_not_pinch() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        g.handle(&mut vp, &touch(1, PointerPhase::Down, 0.0, 0.0, 0));
        g.handle(&mut vp, &touch(2, PointerPhase::Down, 100.0, 0.0, 5));
        g.handle(&mut vp, &touch(3, PointerPhase::Down, 50.0, 50.0, 10));

        let effect = g.handle(&mut vp, &touch(3, PointerPhase::Move, 500.0, 500.0, 20));
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(vp.zoom(), 1.0);

        // Once pointer 1 lifts, pointer 3 joins the pinch from where it is.
        g.handle(&mut vp, &touch(1, PointerPhase::Up, 0.0, 0.0, 30));
        let effect = g.handle(&mut vp, &touch(3, PointerPhase::Move, 500.0, 500.0, 40));
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn double_tap_zooms_in_and_consumes_pair() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        let tap = |g: &mut GestureController, vp: &mut Viewport2D, x: f64, t: u64| {
            let effect = g.handle(vp, &touch(1, PointerPhase::Down, x, 40.0, t));
            g.handle(vp, &touch(1, PointerPhase::Up, x, 40.0, t + 30));
            effect
        };

        assert_eq!(tap(&mut g, &mut vp, 100.0, 0), GestureEffect::None);
        assert_eq!(tap(&mut g, &mut vp, 110.0, 200), GestureEffect::Zoomed);
        assert!(close(vp.zoom(), 1.15));
        assert_eq!(tap(&mut g, &mut vp, 110.0, 400), GestureEffect::None);
    }

    #[test]
    fn second_finger_down_is_not_a_tap() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        g.handle(&mut vp, &touch(1, PointerPhase::Down, 0.0, 0.0, 0));
        g.handle(&mut vp, &touch(2, PointerPhase::Down, 5.0, 0.0, 50));
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn cancel_releases_and_forgets_tap() {
        let mut g = GestureController::default();
        let mut vp = Viewport2D::new();
        g.handle(&mut vp, &touch(1, PointerPhase::Down, 0.0, 0.0, 0));
        g.handle(&mut vp, &touch(1, PointerPhase::Cancel, 0.0, 0.0, 10));
        assert!(g.session().is_empty());

        let effect = g.handle(&mut vp, &touch(1, PointerPhase::Down, 0.0, 0.0, 100));
        assert_eq!(effect, GestureEffect::None);
    }

    #[test]
    fn reduce_threads_state() {
        let events = [
            touch(1, PointerPhase::Down, 0.0, 0.0, 0),
            touch(1, PointerPhase::Move, 5.0, 0.0, 10),
            touch(1, PointerPhase::Move, 10.0, 0.0, 20),
        ];
        let (vp, gestures) = events.iter().fold(
            (Viewport2D::new(), GestureController::default()),
            |(vp, g), ev| {
                let (vp, g, _) = reduce(vp, g, ev);
                (vp, g)
            },
        );
        assert!(close(vp.pan().x, 12.0));
        assert_eq!(gestures.drag_owner(), Some(PointerId(1)));
    }
}
