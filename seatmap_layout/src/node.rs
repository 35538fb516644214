// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::{Point, Rect};

use crate::NodeKind;

/// One venue fixture or seating unit, positioned in node space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueNode {
    /// Opaque identifier, unique within a layout.
    pub id: String,
    /// X position in node space.
    pub x: f64,
    /// Y position in node space.
    pub y: f64,
    /// What the node represents.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: NodeKind,
    /// Human-readable label. Seating labels embed the table number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
}

impl VenueNode {
    /// Creates a node.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        x: f64,
        y: f64,
        kind: NodeKind,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            kind,
            label: label.into(),
        }
    }

    /// Position in node space.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Canonical table number, only for seating kinds.
    #[must_use]
    pub fn seat_number(&self) -> Option<u32> {
        if self.kind.is_seating() {
            seat_number(&self.label)
        } else {
            None
        }
    }
}

/// Extracts the first run of ASCII digits in `label` as a number.
///
/// Returns `None` when the label has no digits or the run does not fit in a
/// `u32`. Leading zeros are ignored, so `"Table 007"` yields `7`.
#[must_use]
pub fn seat_number(label: &str) -> Option<u32> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let rest = &label[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Axis-aligned bounding box of all node positions, waypoints included.
///
/// Returns `None` for an empty slice. A single node yields a zero-sized rect.
#[must_use]
pub fn node_bounds(nodes: &[VenueNode]) -> Option<Rect> {
    let mut iter = nodes.iter().map(VenueNode::position);
    let first = iter.next()?;
    Some(iter.fold(Rect::from_points(first, first), |acc, pt| acc.union_pt(pt)))
}
