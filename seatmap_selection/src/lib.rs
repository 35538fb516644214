// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Selection: which tables a guest asked to see.
//!
//! This crate turns a search request (a set of table numbers plus a mode) into
//! the set of layout nodes that should be highlighted. It does **not** know how
//! nodes are drawn or where the camera is; callers feed it a node slice and get
//! back indices into that slice.
//!
//! The pieces:
//! - [`SelectionMode`]: which seating kinds a number may refer to.
//! - [`SelectionRequest`]: the requested numbers (deduplicated, in request
//!   order) plus the mode.
//! - [`SelectionKey`]: the identity of a request's number set, used to tell a
//!   new search apart from the same search being reapplied.
//! - [`resolve`]: the pure matching function, returning a [`Resolution`].
//! - [`SelectionResolver`]: holds the current request and its resolution and
//!   recomputes only when the nodes, the numbers, or the mode change.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_layout::{NodeKind, VenueNode};
//! use seatmap_selection::{SelectionMode, SelectionRequest, resolve};
//!
//! let nodes = [
//!     VenueNode::new("t5", 100.0, 80.0, NodeKind::Table, "Table 5"),
//!     VenueNode::new("v5", 300.0, 80.0, NodeKind::VipTable, "VIP Table 5"),
//! ];
//!
//! let vip = resolve(&nodes, &SelectionRequest::new([5], SelectionMode::VipOnly));
//! assert_eq!(vip.matches(), &[1]);
//!
//! let any = resolve(&nodes, &SelectionRequest::new([5], SelectionMode::Unrestricted));
//! assert_eq!(any.matches(), &[0, 1]);
//!
//! let missing = resolve(&nodes, &SelectionRequest::new([99], SelectionMode::RegularOnly));
//! assert_eq!(missing.not_found().unwrap().to_string(), "Table 99 not found");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use seatmap_layout::{NodeKind, VenueNode};

/// Which seating kinds a requested number may refer to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Only VIP tables.
    VipOnly,
    /// Only regular tables.
    RegularOnly,
    /// Both regular and VIP tables carrying the number.
    #[default]
    Unrestricted,
}

impl SelectionMode {
    /// Maps an optional "is VIP" flag from a host request onto a mode.
    ///
    /// An absent flag means the request is not restricted to either kind.
    #[must_use]
    pub const fn from_vip_flag(vip: Option<bool>) -> Self {
        match vip {
            Some(true) => Self::VipOnly,
            Some(false) => Self::RegularOnly,
            None => Self::Unrestricted,
        }
    }

    /// Node kinds that can match under this mode.
    #[must_use]
    pub const fn allowed_kinds(self) -> &'static [NodeKind] {
        match self {
            Self::VipOnly => &[NodeKind::VipTable],
            Self::RegularOnly => &[NodeKind::Table],
            Self::Unrestricted => &[NodeKind::Table, NodeKind::VipTable],
        }
    }

    /// Returns `true` if a node of `kind` can match under this mode.
    #[must_use]
    pub fn allows(self, kind: NodeKind) -> bool {
        self.allowed_kinds().contains(&kind)
    }

    const fn singular_noun(self) -> &'static str {
        match self {
            Self::VipOnly => "VIP table",
            Self::RegularOnly => "Table",
            Self::Unrestricted => "Table or VIP table",
        }
    }

    const fn plural_noun(self) -> &'static str {
        match self {
            Self::VipOnly => "VIP tables",
            Self::RegularOnly => "tables",
            Self::Unrestricted => "tables or VIP tables",
        }
    }
}

/// Identity of a request's number set.
///
/// Two requests have equal keys when they ask for the same numbers, in any
/// order and with any repetition. The mode is not part of the key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionKey(BTreeSet<u32>);

impl SelectionKey {
    /// Returns `true` if the key names no numbers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if `id` is part of the key.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    /// Numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for SelectionKey {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Requested table numbers plus a mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionRequest {
    ids: Vec<u32>,
    mode: SelectionMode,
}

impl SelectionRequest {
    /// Creates a request. Repeated numbers are dropped; first occurrence wins.
    pub fn new(ids: impl IntoIterator<Item = u32>, mode: SelectionMode) -> Self {
        let mut unique = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { ids: unique, mode }
    }

    /// A request for nothing.
    #[must_use]
    pub const fn empty(mode: SelectionMode) -> Self {
        Self {
            ids: Vec::new(),
            mode,
        }
    }

    /// Requested numbers in request order.
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Matching mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns `true` if no numbers were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identity of the requested number set.
    #[must_use]
    pub fn key(&self) -> SelectionKey {
        self.ids.iter().copied().collect()
    }
}

/// Diagnostic for a non-empty request that matched nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NotFound {
    /// Exactly one number was requested.
    Single {
        /// The requested number.
        id: u32,
        /// Mode the request was made under.
        mode: SelectionMode,
    },
    /// Several numbers were requested and none matched.
    Multiple {
        /// Mode the request was made under.
        mode: SelectionMode,
    },
}

impl NotFound {
    /// Mode the request was made under.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        match *self {
            Self::Single { mode, .. } | Self::Multiple { mode } => mode,
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Single { id, mode } => write!(f, "{} {id} not found", mode.singular_noun()),
            Self::Multiple { mode } => write!(f, "No matching {} found", mode.plural_noun()),
        }
    }
}

impl core::error::Error for NotFound {}

/// Outcome of matching a request against a node slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    matches: Vec<usize>,
    primary: Option<usize>,
    not_found: Option<NotFound>,
}

impl Resolution {
    /// Indices of matching nodes, in layout order.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Returns `true` if node `index` is highlighted.
    #[must_use]
    pub fn is_match(&self, index: usize) -> bool {
        self.matches.binary_search(&index).is_ok()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The node a camera should frame first.
    ///
    /// This is the first match, in layout order, for the earliest requested
    /// number that has any match.
    #[must_use]
    pub fn primary(&self) -> Option<usize> {
        self.primary
    }

    /// Diagnostic when a non-empty request matched nothing.
    #[must_use]
    pub fn not_found(&self) -> Option<NotFound> {
        self.not_found
    }
}

/// Matches `request` against `nodes`.
///
/// A node matches when its kind is allowed by the request mode and the first
/// digit run of its label is one of the requested numbers. An empty request
/// matches nothing and reports no diagnostic.
#[must_use]
pub fn resolve(nodes: &[VenueNode], request: &SelectionRequest) -> Resolution {
    let mode = request.mode();
    let number_of = |node: &VenueNode| {
        if mode.allows(node.kind) {
            node.seat_number()
        } else {
            None
        }
    };

    let matches: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|&(_, node)| number_of(node).is_some_and(|n| request.ids().contains(&n)))
        .map(|(idx, _)| idx)
        .collect();

    let primary = request.ids().iter().find_map(|&id| {
        matches
            .iter()
            .copied()
            .find(|&idx| number_of(&nodes[idx]) == Some(id))
    });

    let not_found = match request.ids() {
        _ if !matches.is_empty() => None,
        [] => None,
        [id] => Some(NotFound::Single { id: *id, mode }),
        _ => Some(NotFound::Multiple { mode }),
    };

    Resolution {
        matches,
        primary,
        not_found,
    }
}

/// Keeps the current request and its resolution in sync with a node slice.
///
/// The resolver recomputes only when told the inputs changed and tracks a
/// revision counter that bumps whenever the resolution itself changes, so
/// observers can skip work when a reapplied request leaves the highlight set
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct SelectionResolver {
    request: SelectionRequest,
    resolution: Resolution,
    revision: u64,
}

impl SelectionResolver {
    /// Creates a resolver with an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current request.
    #[must_use]
    pub fn request(&self) -> &SelectionRequest {
        &self.request
    }

    /// Current resolution.
    #[must_use]
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Bumps whenever the resolution changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the request and re-resolves against `nodes`.
    ///
    /// Returns `true` if the resolution changed.
    pub fn set_request(&mut self, nodes: &[VenueNode], request: SelectionRequest) -> bool {
        if request == self.request {
            return false;
        }
        self.request = request;
        self.refresh(nodes)
    }

    /// Re-resolves the current request after the node set changed.
    ///
    /// Returns `true` if the resolution changed.
    pub fn refresh(&mut self, nodes: &[VenueNode]) -> bool {
        let resolution = resolve(nodes, &self.request);
        if resolution == self.resolution {
            return false;
        }
        self.resolution = resolution;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}
