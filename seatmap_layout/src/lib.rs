// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Layout: read-only venue layout snapshots.
//!
//! A venue layout is an ordered list of positioned [`VenueNode`]s: tables,
//! the stage, entrances, amenities, and non-visual routing waypoints. Nodes are
//! authored by an external layout editor in a venue-defined logical coordinate
//! system ("node space"); this crate only models the snapshot that a viewer
//! reads. Nothing here creates, mutates, or destroys nodes on behalf of a
//! viewer.
//!
//! Seating nodes ([`NodeKind::Table`] and [`NodeKind::VipTable`]) embed their
//! table number in the label. The first run of ASCII digits is the canonical
//! number used for matching search requests; see [`seat_number`].
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_layout::{NodeKind, VenueNode, node_bounds};
//!
//! let nodes = [
//!     VenueNode::new("t5", 100.0, 80.0, NodeKind::Table, "Table 5"),
//!     VenueNode::new("v5", 300.0, 80.0, NodeKind::VipTable, "VIP Table 5"),
//!     VenueNode::new("stage", 200.0, 10.0, NodeKind::Stage, "Main stage"),
//! ];
//!
//! assert_eq!(nodes[1].seat_number(), Some(5));
//! assert_eq!(nodes[2].seat_number(), None);
//!
//! let bounds = node_bounds(&nodes).unwrap();
//! assert_eq!(bounds.width(), 200.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` using the document store field
//!   names (`id`, `x`, `y`, `type`, `label`).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod kind;
mod node;

pub use kind::NodeKind;
pub use node::{VenueNode, node_bounds, seat_number};
