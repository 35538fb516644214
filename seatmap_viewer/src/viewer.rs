// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewer facade a host embeds.

use kurbo::{Point, Size};
use seatmap_imaging::ImagingBackend;
use seatmap_layout::{VenueNode, node_bounds};
use seatmap_selection::{Resolution, SelectionRequest, SelectionResolver};
use seatmap_view2d::{ContentFit, Viewport2D};

use crate::gesture::{GestureController, GestureEffect, InputEvent};
use crate::logging::{log_debug, log_info, log_warn};
use crate::mode::{ViewMode, ViewModeController};
use crate::scene::{FrameInput, FrameStats, Glyph, SceneRenderer};
use crate::{LayoutError, LayoutSource, ViewerConfig, ViewerError, ViewerStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
enum LoadState {
    Unconfigured,
    Loading,
    Loaded,
    Failed(LayoutError),
}

/// One interactive seat map.
///
/// The viewer owns the camera, the pointer session, the presentation mode,
/// and the current selection, and paints frames on demand. It is driven
/// entirely by its host: load results, selection requests, surface resizes,
/// and raw input arrive through method calls, and the host calls
/// [`render`](Self::render) when [`needs_redraw`](Self::needs_redraw) says so.
#[derive(Debug)]
pub struct SeatMapViewer {
    config: ViewerConfig,
    load: LoadState,
    nodes: Vec<VenueNode>,
    surface: Size,
    device_pixel_ratio: f64,
    fit: Option<ContentFit>,
    viewport: Viewport2D,
    gestures: GestureController,
    modes: ViewModeController,
    selection: SelectionResolver,
    route_ids: Vec<String>,
    route: Vec<usize>,
    renderer: SceneRenderer,
    needs_redraw: bool,
}

impl Default for SeatMapViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl SeatMapViewer {
    /// Creates a viewer with no layout and a zero-sized surface.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            load: LoadState::Unconfigured,
            nodes: Vec::new(),
            surface: Size::ZERO,
            device_pixel_ratio: 1.0,
            fit: None,
            viewport: Viewport2D::with_zoom_limits(config.min_zoom, config.max_zoom),
            gestures: GestureController::new(config.gestures.clone()),
            modes: ViewModeController::new(config.auto_fullscreen),
            selection: SelectionResolver::new(),
            route_ids: Vec::new(),
            route: Vec::new(),
            renderer: SceneRenderer::new(),
            needs_redraw: true,
            config,
        }
    }

    /// Replaces the renderer, for example to use a custom palette.
    #[must_use]
    pub fn with_renderer(mut self, renderer: SceneRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Configuration the viewer was created with.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Marks a layout fetch as outstanding.
    ///
    /// Input is ignored until [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) {
        log_info!("loading layout");
        self.load = LoadState::Loading;
        self.gestures.reset();
        self.needs_redraw = true;
    }

    /// Completes a layout fetch.
    ///
    /// An empty node list counts as [`LayoutError::Empty`]. A failure clears
    /// the nodes and persists until a later successful load.
    pub fn finish_load(&mut self, result: Result<Vec<VenueNode>, LayoutError>) {
        match result {
            Ok(nodes) if !nodes.is_empty() => {
                log_info!(nodes = nodes.len(), "layout loaded");
                self.nodes = nodes;
                self.load = LoadState::Loaded;
            }
            Ok(_) => self.fail_load(LayoutError::Empty),
            Err(err) => self.fail_load(err),
        }
        self.refit();
        self.selection.refresh(&self.nodes);
        self.resolve_route();
        self.needs_redraw = true;
    }

    fn fail_load(&mut self, err: LayoutError) {
        log_warn!(error = %err, "layout unavailable");
        self.nodes.clear();
        self.load = LoadState::Failed(err);
    }

    /// Fetches from `source` and completes the load. Failures are not retried.
    pub fn reload<S: LayoutSource + ?Sized>(&mut self, source: &mut S) {
        self.begin_load();
        let result = source.fetch();
        self.finish_load(result);
    }

    /// Sets the drawing surface size in CSS pixels and its device pixel ratio.
    ///
    /// Returns `true` if anything changed.
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) -> bool {
        let surface = Size::new(width, height);
        if surface == self.surface && device_pixel_ratio == self.device_pixel_ratio {
            return false;
        }
        self.surface = surface;
        self.device_pixel_ratio = device_pixel_ratio;
        self.refit();
        self.needs_redraw = true;
        true
    }

    fn refit(&mut self) {
        self.fit = node_bounds(&self.nodes).and_then(|bounds| {
            ContentFit::new(
                bounds,
                self.config.content_margin,
                self.surface,
                self.device_pixel_ratio,
            )
        });
    }

    /// Applies a selection request.
    ///
    /// A request whose number set differs from the previous one may enter
    /// automatic fullscreen.
    pub fn set_selection(&mut self, request: SelectionRequest) {
        let key = request.key();
        if self.selection.set_request(&self.nodes, request) {
            self.needs_redraw = true;
            if self.selection.resolution().not_found().is_some() {
                log_debug!(ids = ?self.selection.request().ids(), "selection matched nothing");
            }
        }
        if self.modes.on_selection(key, &mut self.viewport) {
            self.needs_redraw = true;
        }
    }

    /// Enables or disables automatic fullscreen for future selections.
    pub fn set_auto_fullscreen(&mut self, enabled: bool) {
        self.modes.set_auto_fullscreen(enabled);
    }

    /// Shows a route through the given node ids, in travel order.
    ///
    /// Ids missing from the layout are skipped. The ids are kept and
    /// re-resolved after every load.
    pub fn set_route<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.route_ids = ids.into_iter().map(Into::into).collect();
        self.resolve_route();
        self.needs_redraw = true;
    }

    /// Removes the route overlay.
    pub fn clear_route(&mut self) {
        self.set_route(std::iter::empty::<String>());
    }

    fn resolve_route(&mut self) {
        let nodes = &self.nodes;
        self.route = self
            .route_ids
            .iter()
            .filter_map(|id| nodes.iter().position(|n| &n.id == id))
            .collect();
    }

    /// Feeds raw input.
    ///
    /// Ignored while no layout is loaded. A gesture that moves the camera
    /// cancels a pending auto-center.
    pub fn handle_input(&mut self, event: &InputEvent) -> GestureEffect {
        if self.load != LoadState::Loaded {
            return GestureEffect::None;
        }
        let effect = self.gestures.handle(&mut self.viewport, event);
        if effect.moved_viewport() {
            self.modes.cancel_auto_center();
            self.needs_redraw = true;
        }
        effect
    }

    /// Enters fullscreen at the user's request.
    pub fn enter_fullscreen(&mut self) -> bool {
        let changed = self.modes.enter_fullscreen();
        self.needs_redraw |= changed;
        changed
    }

    /// Leaves fullscreen.
    pub fn exit_fullscreen(&mut self) -> bool {
        let changed = self.modes.exit_fullscreen(&mut self.viewport);
        self.needs_redraw |= changed;
        changed
    }

    /// Toggles fullscreen.
    pub fn toggle_fullscreen(&mut self) -> bool {
        let changed = self.modes.toggle_fullscreen(&mut self.viewport);
        self.needs_redraw |= changed;
        changed
    }

    /// Derived status for the host banner.
    ///
    /// Loading takes precedence over a load failure, which takes precedence
    /// over a selection miss.
    pub fn status(&self) -> ViewerStatus {
        match &self.load {
            LoadState::Loading => ViewerStatus::Loading,
            LoadState::Unconfigured => ViewerStatus::Error(LayoutError::Empty.into()),
            LoadState::Failed(err) => ViewerStatus::Error(err.clone().into()),
            LoadState::Loaded => match self.selection.resolution().not_found() {
                Some(miss) => ViewerStatus::Error(ViewerError::NoMatch(miss)),
                None => ViewerStatus::Ready,
            },
        }
    }

    /// Banner text for the current status.
    pub fn banner(&self) -> Option<String> {
        self.status().banner()
    }

    /// Current presentation mode.
    pub fn mode(&self) -> ViewMode {
        self.modes.mode()
    }

    /// Returns `true` while an auto-center waits for the next frame.
    pub fn auto_center_pending(&self) -> bool {
        self.modes.auto_center_pending()
    }

    /// Current camera.
    pub fn viewport(&self) -> &Viewport2D {
        &self.viewport
    }

    /// Fitted base transform, once a layout and a non-empty surface exist.
    pub fn content_fit(&self) -> Option<&ContentFit> {
        self.fit.as_ref()
    }

    /// Loaded nodes.
    pub fn nodes(&self) -> &[VenueNode] {
        &self.nodes
    }

    /// Current selection result.
    pub fn resolution(&self) -> &Resolution {
        self.selection.resolution()
    }

    /// Highlighted nodes, in layout order.
    pub fn highlighted(&self) -> impl Iterator<Item = &VenueNode> + '_ {
        self.resolution()
            .matches()
            .iter()
            .filter_map(|&i| self.nodes.get(i))
    }

    /// Route node indices that resolved against the layout.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// The visual node whose glyph is under `point` (CSS pixels).
    ///
    /// When glyphs overlap, the one whose center is nearest wins.
    pub fn node_at(&self, point: Point) -> Option<&VenueNode> {
        let fit = self.fit.as_ref()?;
        let base = self.viewport.view_to_base_point(point);
        self.nodes
            .iter()
            .filter_map(|node| {
                let glyph = Glyph::for_kind(node.kind)?;
                let offset = base - fit.node_to_base(node.position());
                glyph
                    .shape
                    .contains(offset)
                    .then_some((offset.hypot2(), node))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, node)| node)
    }

    /// Returns `true` if something changed since the last frame.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Destroys the surface resources created by earlier frames.
    ///
    /// Call on the old surface before rendering onto a different one.
    pub fn release_resources<B: ImagingBackend + ?Sized>(&mut self, backend: &mut B) {
        self.renderer.release(backend);
        self.needs_redraw = true;
    }

    /// Paints a frame.
    ///
    /// Runs a pending auto-center first. Returns `None` without drawing when
    /// there is no layout or the surface is empty. Draws onto the surface of
    /// earlier frames unless [`release_resources`](Self::release_resources)
    /// was called since.
    pub fn render<B: ImagingBackend + ?Sized>(&mut self, backend: &mut B) -> Option<FrameStats> {
        let fit = self.fit?;
        if self.load != LoadState::Loaded {
            return None;
        }

        let target = self
            .selection
            .resolution()
            .primary()
            .and_then(|i| self.nodes.get(i))
            .map(|node| fit.node_to_base(node.position()));
        if self
            .modes
            .apply_auto_center(&mut self.viewport, target, fit.surface_center())
        {
            log_info!("auto-centered on selection");
        }

        let stats = self.renderer.render(
            backend,
            &FrameInput {
                nodes: &self.nodes,
                fit: &fit,
                viewport: &self.viewport,
                resolution: self.selection.resolution(),
                route: &self.route,
            },
        );
        self.needs_redraw = false;
        Some(stats)
    }
}
