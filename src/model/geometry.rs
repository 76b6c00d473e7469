// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Integer grid geometry.
//!
//! All coordinates are character cells. `x`/`col` grow to the right, `y`/`row` grow downwards.

/// A rectangle on the character grid. `width` and `height` are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width: width.max(1), height: height.max(1) }
    }

    /// Last column covered by the rectangle (inclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last row covered by the rectangle (inclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.y && row <= self.bottom() && col >= self.x && col <= self.right()
    }

    pub fn intersects(&self, min_row: i32, max_row: i32, min_col: i32, max_col: i32) -> bool {
        self.y <= max_row && self.bottom() >= min_row && self.x <= max_col && self.right() >= min_col
    }

    pub fn translated(&self, d_row: i32, d_col: i32) -> Self {
        Self { x: self.x + d_col, y: self.y + d_row, ..*self }
    }

    /// Grows the rectangle by `amount` cells on every side.
    pub fn expanded(&self, amount: i32) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + 2 * amount,
            height: self.height + 2 * amount,
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self { x, y, width: right - x + 1, height: bottom - y + 1 }
    }

    /// Smallest rectangle covering every point, or `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = GridPoint>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min_row, mut max_row, mut min_col, mut max_col) =
            (first.row, first.row, first.col, first.col);
        for point in points {
            min_row = min_row.min(point.row);
            max_row = max_row.max(point.row);
            min_col = min_col.min(point.col);
            max_col = max_col.max(point.col);
        }
        Some(Self {
            x: min_col,
            y: min_row,
            width: max_col - min_col + 1,
            height: max_row - min_row + 1,
        })
    }
}

/// A single grid cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self { row: self.row + d_row, col: self.col + d_col }
    }
}

/// A character placed relative to a node's bounds origin (freeform strokes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SparseCell {
    pub row: i32,
    pub col: i32,
    pub ch: char,
}

impl SparseCell {
    pub fn new(row: i32, col: i32, ch: char) -> Self {
        Self { row, col, ch }
    }
}
