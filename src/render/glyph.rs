// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Box-drawing glyphs and their direction sets.

pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';
pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_TOP_RIGHT: char = '┐';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';
pub const BOX_TEE_RIGHT: char = '├';
pub const BOX_TEE_LEFT: char = '┤';
pub const BOX_TEE_DOWN: char = '┬';
pub const BOX_TEE_UP: char = '┴';
pub const BOX_CROSS: char = '┼';

pub const ARROW_RIGHT: char = '▶';
pub const ARROW_LEFT: char = '◀';
pub const ARROW_UP: char = '▲';
pub const ARROW_DOWN: char = '▼';

/// Set of directions a box-drawing glyph connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BoxEdges(u8);

impl BoxEdges {
    pub(crate) const NONE: Self = Self(0);
    pub(crate) const LEFT: Self = Self(1 << 0);
    pub(crate) const RIGHT: Self = Self(1 << 1);
    pub(crate) const UP: Self = Self(1 << 2);
    pub(crate) const DOWN: Self = Self(1 << 3);

    pub(crate) fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub(crate) fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Direction of an axis-aligned step `(d_row, d_col)`; diagonal or zero steps are empty.
    pub(crate) fn toward(d_row: i32, d_col: i32) -> Self {
        match (d_row.signum(), d_col.signum()) {
            (0, 1) => Self::RIGHT,
            (0, -1) => Self::LEFT,
            (1, 0) => Self::DOWN,
            (-1, 0) => Self::UP,
            _ => Self::NONE,
        }
    }
}

pub(crate) fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    let (l, r, u, d) = (BoxEdges::LEFT, BoxEdges::RIGHT, BoxEdges::UP, BoxEdges::DOWN);
    match ch {
        BOX_HORIZONTAL => Some(l.union(r)),
        BOX_VERTICAL => Some(u.union(d)),
        BOX_TOP_LEFT => Some(r.union(d)),
        BOX_TOP_RIGHT => Some(l.union(d)),
        BOX_BOTTOM_LEFT => Some(r.union(u)),
        BOX_BOTTOM_RIGHT => Some(l.union(u)),
        BOX_TEE_RIGHT => Some(u.union(d).union(r)),
        BOX_TEE_LEFT => Some(u.union(d).union(l)),
        BOX_TEE_DOWN => Some(l.union(r).union(d)),
        BOX_TEE_UP => Some(l.union(r).union(u)),
        BOX_CROSS => Some(l.union(r).union(u).union(d)),
        _ => None,
    }
}

pub(crate) fn is_box_glyph(ch: char) -> bool {
    box_edges_from_char(ch).is_some()
}

/// The minimal glyph for a direction set. A single direction maps to the straight glyph.
pub(crate) fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        1..=3 => BOX_HORIZONTAL,
        4 | 8 | 12 => BOX_VERTICAL,
        10 => BOX_TOP_LEFT,
        9 => BOX_TOP_RIGHT,
        6 => BOX_BOTTOM_LEFT,
        5 => BOX_BOTTOM_RIGHT,
        14 => BOX_TEE_RIGHT,
        13 => BOX_TEE_LEFT,
        11 => BOX_TEE_DOWN,
        7 => BOX_TEE_UP,
        _ => BOX_CROSS,
    }
}

pub(crate) fn arrowhead(approach: BoxEdges) -> Option<char> {
    match approach {
        BoxEdges::RIGHT => Some(ARROW_RIGHT),
        BoxEdges::LEFT => Some(ARROW_LEFT),
        BoxEdges::UP => Some(ARROW_UP),
        BoxEdges::DOWN => Some(ARROW_DOWN),
        _ => None,
    }
}
