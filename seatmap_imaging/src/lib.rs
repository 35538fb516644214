// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Imaging: the drawing vocabulary between scene and surface.
//!
//! The scene renderer knows about venues, glyphs, and highlights; a surface
//! knows how to put pixels somewhere (a 2D canvas, a GPU rasterizer, or the
//! recording backend used in tests). This crate is the narrow contract
//! between them:
//!
//! - [`PathId`] and [`PaintId`] are handles to resources a surface owns.
//!   Create them through [`ResourceBackend`] and release them when done. The
//!   palette and the unit glyph outlines live across frames; a route
//!   polyline lives for one frame.
//! - [`StateOp`] changes the current transform, paint, or stroke.
//! - [`DrawOp`] paints a primitive with whatever state is current.
//!
//! Coordinates in draw ops are `f32` in the space set by the current
//! transform. Text is anchored at its center, since glyph captions sit on
//! the glyph.
//!
//! ```ignore
//! # use seatmap_imaging::*;
//! # use peniko::{Brush, Color};
//! # fn paint_dot(surface: &mut impl ImagingBackend) {
//! let accent = surface.create_paint(PaintDesc {
//!     brush: Brush::Solid(Color::from_rgb8(0xff, 0x17, 0x44)),
//! });
//! surface.state(StateOp::SetPaint(accent));
//! surface.draw(DrawOp::FillCircle { cx: 10.0, cy: 10.0, radius: 4.0 });
//! surface.destroy_paint(accent);
//! # }
//! ```

#![no_std]

extern crate alloc;

use alloc::{boxed::Box, sync::Arc, vec::Vec};

use kurbo::Point;
use peniko::Brush;

/// Handle to a path owned by a surface.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Handle to a paint owned by a surface. One paint serves any number of draws.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Transform carried by [`StateOp::SetTransform`].
pub type Affine = kurbo::Affine;

/// Stroke parameters carried by [`StateOp::SetStroke`].
pub type StrokeStyle = kurbo::Stroke;

/// Changes to the current drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Replace the transform applied to later draws.
    SetTransform(Affine),
    /// Use this paint for later fills and strokes.
    SetPaint(PaintId),
    /// Use this stroke for later strokes.
    SetStroke(StrokeStyle),
}

/// Primitives a seat map frame is made of.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a path.
    FillPath(PathId),
    /// Stroke a path.
    StrokePath(PathId),
    /// Fill the rectangle `[x0, x1] x [y0, y1]`.
    FillRect {
        /// Left edge.
        x0: f32,
        /// Top edge.
        y0: f32,
        /// Right edge.
        x1: f32,
        /// Bottom edge.
        y1: f32,
    },
    /// Fill a disc.
    FillCircle {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        radius: f32,
    },
    /// Stroke a circle outline, as used for highlight rings.
    StrokeCircle {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        radius: f32,
    },
    /// Fill one line of text centered on `(x, y)`.
    FillText {
        /// The text.
        text: Arc<str>,
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
        /// Font size, in the current space.
        size: f32,
    },
}

/// Geometry of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Commands in drawing order.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// Open polyline through `points`. No points gives an empty path.
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        let commands: Vec<PathCmd> = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "draw coordinates are f32"
                )]
                let (x, y) = (p.x as f32, p.y as f32);
                if i == 0 {
                    PathCmd::MoveTo { x, y }
                } else {
                    PathCmd::LineTo { x, y }
                }
            })
            .collect();
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        let mut commands = Self::polyline(points).commands.into_vec();
        if !commands.is_empty() {
            commands.push(PathCmd::Close);
        }
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Path building commands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Start a subpath at `(x, y)`.
    MoveTo {
        /// X.
        x: f32,
        /// Y.
        y: f32,
    },
    /// Straight segment to `(x, y)`.
    LineTo {
        /// X.
        x: f32,
        /// Y.
        y: f32,
    },
    /// Close the subpath back to its start.
    Close,
}

/// A paint resource: a [`peniko::Brush`] surfaces map onto their own paint type.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// The brush.
    pub brush: Brush,
}

/// Creation and release of surface resources.
///
/// A handle stays valid, and keeps naming the same resource, until it is
/// passed to the matching `destroy_*` call. Destroying twice is harmless.
pub trait ResourceBackend {
    /// Creates a path.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Releases a path.
    fn destroy_path(&mut self, id: PathId);

    /// Creates a paint.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Releases a paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// A drawing surface.
pub trait ImagingBackend: ResourceBackend {
    /// Applies a state change.
    fn state(&mut self, op: StateOp);

    /// Paints a primitive under the current state.
    fn draw(&mut self, op: DrawOp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_starts_with_move_then_lines() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 5.0)];
        let line = PathDesc::polyline(pts);
        assert_eq!(
            &*line.commands,
            &[
                PathCmd::MoveTo { x: 0.0, y: 0.0 },
                PathCmd::LineTo { x: 10.0, y: 0.0 },
                PathCmd::LineTo { x: 10.0, y: 5.0 },
            ]
        );
    }

    #[test]
    fn polygon_closes_unless_empty() {
        let tri = PathDesc::polygon([
            Point::new(0.0, -1.0),
            Point::new(0.866, 0.5),
            Point::new(-0.866, 0.5),
        ]);
        assert_eq!(tri.commands.len(), 4);
        assert_eq!(tri.commands.last(), Some(&PathCmd::Close));

        assert!(PathDesc::polygon([]).is_empty());
        assert!(PathDesc::polyline([]).is_empty());
    }
}
