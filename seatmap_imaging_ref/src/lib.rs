// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Imaging Reference: a surface that remembers instead of painting.
//!
//! [`RefBackend`] implements [`ImagingBackend`] by appending every state
//! change and draw to a log, each paired with the full drawing state in
//! effect at that moment. Tests use it to ask questions such as "where does
//! this circle land in device pixels" or "was the route path released"
//! without a rasterizer.
//!
//! Resource slots are never reused, so a destroyed handle keeps resolving
//! to `None`. Ids are the slot index; once `u32::MAX` slots of one kind have
//! been handed out, every later handle of that kind is `u32::MAX` and
//! resolves to the first resource that received it.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use seatmap_imaging::{
    Affine, DrawOp, ImagingBackend, PaintDesc, PaintId, PathDesc, PathId, ResourceBackend,
    StateOp, StrokeStyle,
};

/// Drawing state at one point in the log.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Transform.
    pub transform: Affine,
    /// Paint, once one has been set.
    pub paint: Option<PaintId>,
    /// Stroke, once one has been set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// One log entry.
#[derive(Clone, Debug)]
pub enum Event {
    /// A state change, with the state it produced.
    State {
        /// The change.
        op: StateOp,
        /// State after the change.
        state: StateSnapshot,
    },
    /// A draw, with the state it was drawn under.
    Draw {
        /// The draw.
        op: DrawOp,
        /// State at draw time.
        state: StateSnapshot,
    },
}

/// Logging implementation of [`ImagingBackend`].
#[derive(Default, Debug)]
pub struct RefBackend {
    paths: Vec<Option<PathDesc>>,
    paints: Vec<Option<PaintDesc>>,
    events: Vec<Event>,
    state: StateSnapshot,
}

impl RefBackend {
    /// Everything applied since creation or the last [`clear_events`](Self::clear_events).
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Draws only, each with its state.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Current drawing state.
    ///
    /// Named apart from [`ImagingBackend::state`], which applies a change.
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Empties the log. Resources and the current state are kept.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Geometry of a live path.
    pub fn path(&self, id: PathId) -> Option<&PathDesc> {
        self.paths.get(id.0 as usize)?.as_ref()
    }

    /// Brush of a live paint.
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize)?.as_ref()
    }

    /// Paths created and not yet destroyed.
    pub fn live_paths(&self) -> usize {
        self.paths.iter().flatten().count()
    }

    /// Paints created and not yet destroyed.
    pub fn live_paints(&self) -> usize {
        self.paints.iter().flatten().count()
    }
}

/// Id for the slot at `index`, saturating at `u32::MAX`.
fn slot_id(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

fn allocate<T>(slots: &mut Vec<Option<T>>, desc: T) -> u32 {
    let id = slot_id(slots.len());
    slots.push(Some(desc));
    id
}

fn release<T>(slots: &mut [Option<T>], id: u32) {
    if let Some(slot) = slots.get_mut(id as usize) {
        *slot = None;
    }
}

impl ResourceBackend for RefBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        PathId(allocate(&mut self.paths, desc))
    }

    fn destroy_path(&mut self, id: PathId) {
        release(&mut self.paths, id.0);
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        PaintId(allocate(&mut self.paints, desc))
    }

    fn destroy_paint(&mut self, id: PaintId) {
        release(&mut self.paints, id.0);
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(t) => self.state.transform = *t,
            StateOp::SetPaint(p) => self.state.paint = Some(*p),
            StateOp::SetStroke(s) => self.state.stroke = Some(s.clone()),
        }
        let state = self.state.clone();
        self.events.push(Event::State { op, state });
    }

    fn draw(&mut self, op: DrawOp) {
        let state = self.state.clone();
        self.events.push(Event::Draw { op, state });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use peniko::{Brush, Color};

    fn solid(color: Color) -> PaintDesc {
        PaintDesc {
            brush: Brush::Solid(color),
        }
    }

    #[test]
    fn draws_carry_the_state_they_were_issued_under() {
        let mut backend = RefBackend::default();
        let table = backend.create_paint(solid(Color::from_rgb8(0x15, 0x65, 0xc0)));

        backend.state(StateOp::SetTransform(Affine::scale(2.0)));
        backend.state(StateOp::SetPaint(table));
        backend.draw(DrawOp::FillCircle {
            cx: 5.0,
            cy: 7.0,
            radius: 14.0,
        });

        assert_eq!(backend.events().len(), 3);
        let (op, state) = backend.draws().next().unwrap();
        assert!(matches!(op, DrawOp::FillCircle { .. }));
        assert_eq!(state.paint, Some(table));
        assert_eq!(state.transform * Point::new(5.0, 7.0), Point::new(10.0, 14.0));
    }

    #[test]
    fn state_changes_accumulate() {
        let mut backend = RefBackend::default();
        backend.state(StateOp::SetStroke(StrokeStyle::new(3.0)));
        backend.state(StateOp::SetTransform(Affine::translate((4.0, 0.0))));

        let Some(Event::State { state, .. }) = backend.events().last() else {
            panic!("last event should be a state change");
        };
        assert_eq!(state.stroke.as_ref().map(|s| s.width), Some(3.0));
        assert_eq!(backend.current_state().transform, Affine::translate((4.0, 0.0)));
    }

    #[test]
    fn clearing_the_log_keeps_resources_and_state() {
        let mut backend = RefBackend::default();
        let paint = backend.create_paint(solid(Color::WHITE));
        let path = backend.create_path(PathDesc::polyline([Point::ORIGIN, Point::new(1.0, 1.0)]));
        backend.state(StateOp::SetPaint(paint));
        backend.draw(DrawOp::StrokePath(path));

        backend.clear_events();
        assert!(backend.events().is_empty());
        assert!(backend.path(path).is_some());
        assert!(backend.paint(paint).is_some());
        assert_eq!(backend.current_state().paint, Some(paint));
    }

    #[test]
    fn destroyed_handles_stay_dead() {
        let mut backend = RefBackend::default();
        let route = backend.create_path(PathDesc::polyline([Point::ORIGIN, Point::new(3.0, 4.0)]));
        let ring = backend.create_path(PathDesc::polygon([Point::ORIGIN, Point::new(1.0, 0.0), Point::new(0.0, 1.0)]));
        let paint = backend.create_paint(solid(Color::BLACK));
        assert_eq!((backend.live_paths(), backend.live_paints()), (2, 1));

        backend.destroy_path(route);
        backend.destroy_paint(paint);
        assert_eq!((backend.live_paths(), backend.live_paints()), (1, 0));
        assert!(backend.path(route).is_none());
        assert!(backend.path(ring).is_some());

        let next = backend.create_path(PathDesc::polyline([Point::ORIGIN]));
        assert_ne!(next, route);
        assert!(backend.path(route).is_none());

        // Repeated and unknown releases are ignored.
        backend.destroy_path(route);
        backend.destroy_paint(paint);
        backend.destroy_path(PathId(99));
    }

    #[test]
    fn trait_state_calls_reach_the_log() {
        fn apply(surface: &mut impl ImagingBackend, paint: PaintId) {
            surface.state(StateOp::SetPaint(paint));
            surface.state(StateOp::SetTransform(Affine::scale(3.0)));
        }

        let mut backend = RefBackend::default();
        let paint = backend.create_paint(solid(Color::BLACK));
        apply(&mut backend, paint);
        // Method syntax on the concrete type also resolves to the trait.
        backend.state(StateOp::SetStroke(StrokeStyle::new(2.0)));

        assert_eq!(backend.events().len(), 3);
        let current = backend.current_state();
        assert_eq!(current.paint, Some(paint));
        assert_eq!(current.transform, Affine::scale(3.0));
        assert_eq!(current.stroke.as_ref().map(|s| s.width), Some(2.0));
    }

    #[test]
    fn slot_ids_saturate_at_the_last_u32() {
        assert_eq!(slot_id(0), 0);
        assert_eq!(slot_id(41), 41);
        assert_eq!(slot_id(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(slot_id(u32::MAX as usize + 7), u32::MAX);
    }
}
