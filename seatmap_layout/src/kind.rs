// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Closed set of venue node kinds.
///
/// The kind decides how a node is drawn and whether it can take part in seat
/// matching. Names coming from the layout store are parsed leniently by
/// [`NodeKind::from_name`]; anything unrecognised becomes [`NodeKind::Custom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "&'static str"))]
pub enum NodeKind {
    /// Door or gate guests arrive through.
    Entrance,
    /// Regular guest table.
    Table,
    /// VIP guest table.
    VipTable,
    /// Performance stage.
    Stage,
    /// Buffet line.
    Buffet,
    /// Carving station.
    CarvingStation,
    /// Photo exhibit or booth.
    PhotoExhibit,
    /// Quiet room.
    QuietRoom,
    /// Routing waypoint. Loaded for route overlays but never painted.
    Waypoint,
    /// Any other fixture.
    Custom,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Entrance,
        Self::Table,
        Self::VipTable,
        Self::Stage,
        Self::Buffet,
        Self::CarvingStation,
        Self::PhotoExhibit,
        Self::QuietRoom,
        Self::Waypoint,
        Self::Custom,
    ];

    /// Parses a kind name as written by the layout editor.
    ///
    /// Matching ignores ASCII case and treats `-`, `_` and camel case as
    /// equivalent, so `vip-table`, `vip_table` and `vipTable` all parse to
    /// [`NodeKind::VipTable`]. `edge` is accepted as an alias of `waypoint`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut folded = [0_u8; 24];
        let mut len = 0;
        for byte in name.trim().bytes() {
            if byte == b'-' || byte == b'_' || byte == b' ' {
                continue;
            }
            if len == folded.len() {
                return Self::Custom;
            }
            folded[len] = byte.to_ascii_lowercase();
            len += 1;
        }
        match &folded[..len] {
            b"entrance" => Self::Entrance,
            b"table" => Self::Table,
            b"viptable" => Self::VipTable,
            b"stage" => Self::Stage,
            b"buffet" => Self::Buffet,
            b"carvingstation" => Self::CarvingStation,
            b"photoexhibit" => Self::PhotoExhibit,
            b"quietroom" => Self::QuietRoom,
            b"waypoint" | b"edge" => Self::Waypoint,
            _ => Self::Custom,
        }
    }

    /// Canonical kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entrance => "entrance",
            Self::Table => "table",
            Self::VipTable => "vip-table",
            Self::Stage => "stage",
            Self::Buffet => "buffet",
            Self::CarvingStation => "carving-station",
            Self::PhotoExhibit => "photo-exhibit",
            Self::QuietRoom => "quiet-room",
            Self::Waypoint => "waypoint",
            Self::Custom => "custom",
        }
    }

    /// Returns `false` for kinds that are loaded but never painted.
    #[must_use]
    pub const fn is_visual(self) -> bool {
        !matches!(self, Self::Waypoint)
    }

    /// Returns `true` for kinds that carry a table number.
    #[must_use]
    pub const fn is_seating(self) -> bool {
        matches!(self, Self::Table | Self::VipTable)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<NodeKind> for &'static str {
    fn from(kind: NodeKind) -> Self {
        kind.name()
    }
}
