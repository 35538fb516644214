// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame painting.
//!
//! [`SceneRenderer`] paints one frame onto an [`ImagingBackend`]:
//!
//! 1. Background over the whole backing store, in device pixels.
//! 2. The route polyline, if any, beneath the glyphs.
//! 3. One glyph per visual node (shape, fixed color, short label), skipping
//!    glyphs entirely outside the surface.
//! 4. An accent ring around every highlighted node.
//!
//! Everything after the background is drawn in base space under the device
//! transform, so glyph sizes are CSS pixels at zoom 1 and scale with zoom.
//!
//! Paints and the unit triangle/diamond outlines are created on the first
//! frame and reused; the route path lives for one frame.

use std::sync::Arc;

use kurbo::{Affine, Cap, Join, Point, Rect, Size, Stroke, Vec2};
use peniko::{Brush, Color};
use seatmap_imaging::{DrawOp, ImagingBackend, PaintDesc, PaintId, PathDesc, PathId, StateOp};
use seatmap_layout::{NodeKind, VenueNode};
use seatmap_selection::Resolution;
use seatmap_view2d::{ContentFit, Viewport2D};

/// Gap between a glyph's outline and its highlight ring.
const RING_GAP: f64 = 6.0;
const RING_WIDTH: f64 = 3.0;
const ROUTE_WIDTH: f64 = 4.0;
const LABEL_SIZE: f64 = 11.0;

/// Outline of a node glyph in base pixels, centered on the node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GlyphShape {
    /// Circle with the given radius.
    Circle(f64),
    /// Axis-aligned rectangle of the given size.
    Rect(Size),
    /// Upward triangle inscribed in a circle of the given radius.
    Triangle(f64),
    /// Diamond with the given half-diagonal.
    Diamond(f64),
}

impl GlyphShape {
    /// Radius of the smallest circle around the glyph.
    pub fn extent(self) -> f64 {
        match self {
            Self::Circle(r) | Self::Triangle(r) | Self::Diamond(r) => r,
            Self::Rect(size) => 0.5 * size.width.hypot(size.height),
        }
    }

    /// Returns `true` if `offset` from the glyph center lies inside it.
    ///
    /// Triangles hit-test as their bounding circle.
    pub fn contains(self, offset: Vec2) -> bool {
        match self {
            Self::Circle(r) | Self::Triangle(r) => offset.hypot() <= r,
            Self::Rect(size) => {
                offset.x.abs() <= 0.5 * size.width && offset.y.abs() <= 0.5 * size.height
            }
            Self::Diamond(r) => offset.x.abs() + offset.y.abs() <= r,
        }
    }
}

/// How a node kind is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glyph {
    /// Outline.
    pub shape: GlyphShape,
    /// Fixed caption, or `None` to caption with the node's number or label.
    pub caption: Option<&'static str>,
}

impl Glyph {
    /// Glyph for `kind`, or `None` for kinds that are never painted.
    pub fn for_kind(kind: NodeKind) -> Option<Self> {
        let (shape, caption) = match kind {
            NodeKind::Waypoint => return None,
            NodeKind::Table => (GlyphShape::Circle(14.0), None),
            NodeKind::VipTable => (GlyphShape::Circle(17.0), None),
            NodeKind::Entrance => (GlyphShape::Rect(Size::new(34.0, 16.0)), Some("IN")),
            NodeKind::Stage => (GlyphShape::Rect(Size::new(96.0, 40.0)), Some("STAGE")),
            NodeKind::Buffet => (GlyphShape::Rect(Size::new(52.0, 22.0)), Some("BUFFET")),
            NodeKind::CarvingStation => (GlyphShape::Triangle(16.0), Some("CARVE")),
            NodeKind::PhotoExhibit => (GlyphShape::Diamond(16.0), Some("PHOTO")),
            NodeKind::QuietRoom => (GlyphShape::Rect(Size::new(40.0, 26.0)), Some("QUIET")),
            NodeKind::Custom => (GlyphShape::Circle(10.0), None),
        };
        Some(Self { shape, caption })
    }

    /// Text drawn on the glyph for `node`.
    pub fn label(&self, node: &VenueNode) -> Option<Arc<str>> {
        if let Some(caption) = self.caption {
            return Some(Arc::from(caption));
        }
        if let Some(n) = node.seat_number() {
            let text = match node.kind {
                NodeKind::VipTable => format!("VIP {n}"),
                _ => n.to_string(),
            };
            return Some(Arc::from(text));
        }
        let short: String = node.label.chars().take(8).collect();
        (!short.is_empty()).then(|| Arc::from(short))
    }
}

/// Colors used by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Surface background.
    pub background: Color,
    /// Route polyline.
    pub route: Color,
    /// Highlight ring.
    pub accent: Color,
    /// Glyph captions.
    pub label: Color,
    /// Glyph fill per kind, indexed like [`NodeKind::ALL`].
    pub kinds: [Color; NodeKind::ALL.len()],
}

impl Palette {
    /// Fill color for `kind`.
    pub fn fill(&self, kind: NodeKind) -> Color {
        self.kinds[kind_index(kind)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut kinds = [Color::from_rgb8(0x9e, 0x9e, 0x9e); NodeKind::ALL.len()];
        for (slot, kind) in kinds.iter_mut().zip(NodeKind::ALL) {
            *slot = match kind {
                NodeKind::Entrance => Color::from_rgb8(0x2e, 0x7d, 0x32),
                NodeKind::Table => Color::from_rgb8(0x15, 0x65, 0xc0),
                NodeKind::VipTable => Color::from_rgb8(0xc9, 0xa2, 0x27),
                NodeKind::Stage => Color::from_rgb8(0x6a, 0x1b, 0x9a),
                NodeKind::Buffet => Color::from_rgb8(0xef, 0x6c, 0x00),
                NodeKind::CarvingStation => Color::from_rgb8(0xc6, 0x28, 0x28),
                NodeKind::PhotoExhibit => Color::from_rgb8(0x00, 0x83, 0x8f),
                NodeKind::QuietRoom => Color::from_rgb8(0x54, 0x6e, 0x7a),
                NodeKind::Waypoint | NodeKind::Custom => continue,
            };
        }
        Self {
            background: Color::from_rgb8(0xfa, 0xfa, 0xf7),
            route: Color::from_rgb8(0x43, 0xa0, 0x47),
            accent: Color::from_rgb8(0xff, 0x17, 0x44),
            label: Color::WHITE,
            kinds,
        }
    }
}

fn kind_index(kind: NodeKind) -> usize {
    NodeKind::ALL.iter().position(|&k| k == kind).unwrap_or(0)
}

/// Everything a frame depends on.
#[derive(Copy, Clone, Debug)]
pub struct FrameInput<'a> {
    /// Loaded nodes.
    pub nodes: &'a [VenueNode],
    /// Fitted base transform for the current surface.
    pub fit: &'a ContentFit,
    /// Current camera.
    pub viewport: &'a Viewport2D,
    /// Current selection result.
    pub resolution: &'a Resolution,
    /// Node indices of the route overlay, in travel order.
    pub route: &'a [usize],
}

/// Counters for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Glyphs painted.
    pub drawn: usize,
    /// Visual nodes skipped as off-surface.
    pub culled: usize,
    /// Highlight rings painted.
    pub highlighted: usize,
    /// Whether a route polyline was stroked.
    pub route: bool,
}

#[derive(Clone, Debug)]
struct Resources {
    background: PaintId,
    route: PaintId,
    accent: PaintId,
    label: PaintId,
    kinds: Vec<PaintId>,
    triangle: PathId,
    diamond: PathId,
}

/// Paints frames from layout, camera, and selection state.
#[derive(Clone, Debug, Default)]
pub struct SceneRenderer {
    palette: Palette,
    resources: Option<Resources>,
}

impl SceneRenderer {
    /// Creates a renderer with the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with a custom palette.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            resources: None,
        }
    }

    /// Current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Destroys the paints and paths created on `backend`.
    ///
    /// The next frame recreates them. Resource handles belong to the surface
    /// that created them, so call this on the old surface before rendering
    /// onto a different one.
    pub fn release<B: ImagingBackend + ?Sized>(&mut self, backend: &mut B) {
        if let Some(res) = self.resources.take() {
            for paint in [res.background, res.route, res.accent, res.label]
                .into_iter()
                .chain(res.kinds)
            {
                backend.destroy_paint(paint);
            }
            backend.destroy_path(res.triangle);
            backend.destroy_path(res.diamond);
        }
    }

    /// Paints one frame.
    ///
    /// Paints and glyph outlines created by an earlier frame are reused, so
    /// `backend` must be the surface those frames went to, unless
    /// [`release`](Self::release) ran in between.
    pub fn render<B: ImagingBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        frame: &FrameInput<'_>,
    ) -> FrameStats {
        let res = self.resources(backend);
        let mut stats = FrameStats::default();

        let (w, h) = frame.fit.backing_store_size();
        backend.state(StateOp::SetTransform(Affine::IDENTITY));
        backend.state(StateOp::SetPaint(res.background));
        backend.draw(DrawOp::FillRect {
            x0: 0.0,
            y0: 0.0,
            x1: px(f64::from(w)),
            y1: px(f64::from(h)),
        });

        let to_device = frame.fit.device_transform(frame.viewport);
        backend.state(StateOp::SetTransform(to_device));

        stats.route = draw_route(backend, res, frame);

        let visible = frame
            .viewport
            .visible_base_rect(frame.fit.surface_size());
        for (idx, node) in frame.nodes.iter().enumerate() {
            let Some(glyph) = Glyph::for_kind(node.kind) else {
                continue;
            };
            let center = frame.fit.node_to_base(node.position());
            let reach = glyph.shape.extent() + RING_GAP + RING_WIDTH;
            if !intersects(visible, center, reach) {
                stats.culled += 1;
                continue;
            }

            backend.state(StateOp::SetPaint(res.kinds[kind_index(node.kind)]));
            draw_shape(backend, res, to_device, glyph.shape, center);
            stats.drawn += 1;

            if frame.resolution.is_match(idx) {
                backend.state(StateOp::SetPaint(res.accent));
                backend.state(StateOp::SetStroke(Stroke::new(RING_WIDTH)));
                backend.draw(DrawOp::StrokeCircle {
                    cx: px(center.x),
                    cy: px(center.y),
                    radius: px(glyph.shape.extent() + RING_GAP),
                });
                stats.highlighted += 1;
            }

            if let Some(text) = glyph.label(node) {
                backend.state(StateOp::SetPaint(res.label));
                backend.draw(DrawOp::FillText {
                    text,
                    x: px(center.x),
                    y: px(center.y),
                    size: px(LABEL_SIZE),
                });
            }
        }
        stats
    }

    fn resources<B: ImagingBackend + ?Sized>(&mut self, backend: &mut B) -> &Resources {
        let palette = &self.palette;
        self.resources.get_or_insert_with(|| {
            let mut paint = |color: Color| {
                backend.create_paint(PaintDesc {
                    brush: Brush::Solid(color),
                })
            };
            let background = paint(palette.background);
            let route = paint(palette.route);
            let accent = paint(palette.accent);
            let label = paint(palette.label);
            let kinds = palette.kinds.iter().map(|&c| paint(c)).collect();

            let triangle = backend.create_path(PathDesc::polygon([
                Point::new(0.0, -1.0),
                Point::new(0.866, 0.5),
                Point::new(-0.866, 0.5),
            ]));
            let diamond = backend.create_path(PathDesc::polygon([
                Point::new(0.0, -1.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(-1.0, 0.0),
            ]));
            Resources {
                background,
                route,
                accent,
                label,
                kinds,
                triangle,
                diamond,
            }
        })
    }
}

fn draw_route<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    res: &Resources,
    frame: &FrameInput<'_>,
) -> bool {
    let points: Vec<Point> = frame
        .route
        .iter()
        .filter_map(|&i| frame.nodes.get(i))
        .map(|node| frame.fit.node_to_base(node.position()))
        .collect();
    if points.len() < 2 {
        return false;
    }
    let path = backend.create_path(PathDesc::polyline(points));
    backend.state(StateOp::SetPaint(res.route));
    backend.state(StateOp::SetStroke(
        Stroke::new(ROUTE_WIDTH)
            .with_join(Join::Round)
            .with_caps(Cap::Round),
    ));
    backend.draw(DrawOp::StrokePath(path));
    backend.destroy_path(path);
    true
}

fn draw_shape<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    res: &Resources,
    to_device: Affine,
    shape: GlyphShape,
    center: Point,
) {
    match shape {
        GlyphShape::Circle(r) => backend.draw(DrawOp::FillCircle {
            cx: px(center.x),
            cy: px(center.y),
            radius: px(r),
        }),
        GlyphShape::Rect(size) => {
            let rect = Rect::from_center_size(center, size);
            backend.draw(DrawOp::FillRect {
                x0: px(rect.x0),
                y0: px(rect.y0),
                x1: px(rect.x1),
                y1: px(rect.y1),
            });
        }
        GlyphShape::Triangle(r) | GlyphShape::Diamond(r) => {
            let path = if matches!(shape, GlyphShape::Triangle(_)) {
                res.triangle
            } else {
                res.diamond
            };
            let local = Affine::translate(center.to_vec2()) * Affine::scale(r);
            backend.state(StateOp::SetTransform(to_device * local));
            backend.draw(DrawOp::FillPath(path));
            backend.state(StateOp::SetTransform(to_device));
        }
    }
}

fn intersects(visible: Rect, center: Point, reach: f64) -> bool {
    center.x + reach >= visible.x0
        && center.x - reach <= visible.x1
        && center.y + reach >= visible.y0
        && center.y - reach <= visible.y1
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "imaging IR coordinates are f32"
)]
fn px(v: f64) -> f32 {
    v as f32
}
