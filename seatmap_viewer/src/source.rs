// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout sources.
//!
//! A source hands the viewer an ordered node snapshot. Fetching is
//! synchronous here; hosts with an asynchronous store call
//! [`SeatMapViewer::begin_load`](crate::SeatMapViewer::begin_load) and
//! [`SeatMapViewer::finish_load`](crate::SeatMapViewer::finish_load) around
//! their own fetch instead.

use seatmap_layout::VenueNode;

use crate::LayoutError;

/// Produces a layout snapshot on demand.
pub trait LayoutSource {
    /// Fetches the current node list.
    fn fetch(&mut self) -> Result<Vec<VenueNode>, LayoutError>;
}

impl<F> LayoutSource for F
where
    F: FnMut() -> Result<Vec<VenueNode>, LayoutError>,
{
    fn fetch(&mut self) -> Result<Vec<VenueNode>, LayoutError> {
        self()
    }
}

/// A fixed in-memory layout.
#[derive(Clone, Debug, Default)]
pub struct StaticLayout {
    nodes: Vec<VenueNode>,
}

impl StaticLayout {
    /// Wraps a node list.
    pub fn new(nodes: Vec<VenueNode>) -> Self {
        Self { nodes }
    }

    /// The wrapped nodes.
    pub fn nodes(&self) -> &[VenueNode] {
        &self.nodes
    }
}

impl From<Vec<VenueNode>> for StaticLayout {
    fn from(nodes: Vec<VenueNode>) -> Self {
        Self::new(nodes)
    }
}

impl LayoutSource for StaticLayout {
    fn fetch(&mut self) -> Result<Vec<VenueNode>, LayoutError> {
        Ok(self.nodes.clone())
    }
}
