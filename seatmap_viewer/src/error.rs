// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer error and status types.

use seatmap_selection::NotFound;
use thiserror::Error;

/// Why no layout is available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout source failed.
    #[error("layout fetch failed: {0}")]
    Fetch(String),

    /// No layout is configured, or the configured one has no nodes.
    #[error("no layout configured")]
    Empty,
}

/// Conditions a host surfaces as a banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The layout could not be loaded. Persists until a successful reload.
    #[error(transparent)]
    DataUnavailable(#[from] LayoutError),

    /// The current selection request matched nothing. Clears itself once a
    /// matching request arrives.
    #[error(transparent)]
    NoMatch(#[from] NotFound),
}

/// Derived viewer status, recomputed from current inputs on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerStatus {
    /// Layout loaded; the selection (if any) matched.
    Ready,
    /// A layout fetch is outstanding.
    Loading,
    /// See [`ViewerError`].
    Error(ViewerError),
}

impl ViewerStatus {
    /// Banner text for the host UI, or `None` when there is nothing to show.
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::Ready => None,
            Self::Loading => Some("Loading seat map".to_owned()),
            Self::Error(err) => Some(err.to_string()),
        }
    }

    /// Returns `true` if the viewer is ready and has nothing to report.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
