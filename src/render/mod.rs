// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of a document onto a fixed-size character grid.
//!
//! Rendering is two-phase and pure:
//! 1. every visible non-group node is stamped bottom to top; each cell written with a box-drawing
//!    glyph is recorded,
//! 2. junction resolution rewrites every recorded cell from the directions its neighbours reach
//!    toward it, so independently drawn edges that touch become `┬ ┴ ├ ┤ ┼`.

use std::fmt;

use tracing::trace;

use crate::model::{Document, NodeId};

pub mod glyph;
mod stamp;
pub(crate) mod text;

pub use glyph::{
    ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, BOX_BOTTOM_LEFT, BOX_BOTTOM_RIGHT, BOX_CROSS,
    BOX_HORIZONTAL, BOX_TEE_DOWN, BOX_TEE_LEFT, BOX_TEE_RIGHT, BOX_TEE_UP, BOX_TOP_LEFT,
    BOX_TOP_RIGHT, BOX_VERTICAL,
};

use glyph::{box_char_from_edges, box_edges_from_char, BoxEdges};
use stamp::Stamper;

/// A fixed-size, bounds-checked character grid. Row-major, filled with spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::new_filled(rows, cols, ' ')
    }

    pub fn new_filled(rows: usize, cols: usize, fill: char) -> Result<Self, GridError> {
        let len = rows.checked_mul(cols).ok_or(GridError::AreaOverflow { rows, cols })?;
        Ok(Self { rows, cols, cells: vec![fill; len] })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<char, GridError> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) -> Result<(), GridError> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Signed lookup; `None` outside the grid.
    pub fn at(&self, row: i32, col: i32) -> Option<char> {
        let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        self.in_bounds(row, col).then(|| self.cells[row * self.cols + col])
    }

    /// Signed write that silently clips outside the grid. Returns whether the cell was written.
    pub(crate) fn put(&mut self, row: i32, col: i32, ch: char) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        if !self.in_bounds(row, col) {
            return false;
        }
        self.cells[row * self.cols + col] = ch;
        true
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Every cell as `(row, col, ch)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let cols = self.cols.max(1);
        self.cells.iter().enumerate().map(move |(idx, ch)| (idx / cols, idx % cols, *ch))
    }

    /// The grid as text with trailing spaces and trailing blank rows removed.
    pub fn to_trimmed_string(&self) -> String {
        text::grid_to_string_trimmed(self)
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfBounds { row, col, rows: self.rows, cols: self.cols });
        }
        Ok(row * self.cols + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_char(self.cells[row * self.cols + col])?;
            }
            if row + 1 < self.rows {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    AreaOverflow { rows: usize, cols: usize },
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { rows, cols } => write!(f, "grid area overflow: {rows}*{cols}"),
            Self::OutOfBounds { row, col, rows, cols } => {
                write!(f, "out of bounds: ({row},{col}) for {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Renders `doc` onto a grid of the document's size.
pub fn render_document(doc: &Document) -> Result<Grid, GridError> {
    let mut grid = Grid::new(doc.grid_rows(), doc.grid_cols())?;
    let mut stamper = Stamper::new(&mut grid);
    for id in doc.root_order() {
        stamp_subtree(doc, id, &mut stamper);
    }
    let glyphs = stamper.finish();
    trace!(glyphs = glyphs.len(), "render: resolving junctions");
    resolve_junctions(&mut grid, glyphs);
    Ok(grid)
}

/// Renders `doc` and exports it as trimmed text.
pub fn render_text(doc: &Document) -> Result<String, GridError> {
    render_document(doc).map(|grid| grid.to_trimmed_string())
}

fn stamp_subtree(doc: &Document, id: &NodeId, stamper: &mut Stamper<'_>) {
    let Some(node) = doc.node(id) else {
        return;
    };
    if !node.visible() {
        return;
    }
    if !node.kind().is_group() {
        stamper.node(node);
    }
    for child in node.kind().child_ids() {
        stamp_subtree(doc, child, stamper);
    }
}

/// Rewrites every recorded glyph cell from the directions its neighbours reach toward it.
///
/// Neighbours are read from a snapshot taken before any rewrite, so the result does not depend
/// on visiting order. Cells with no reaching neighbour keep their glyph, and cells that were
/// overwritten by a non-glyph after being recorded are skipped. A direction pointing off the
/// grid counts as reaching when the cell's own glyph has it, so clipped frames keep corners.
fn resolve_junctions(grid: &mut Grid, mut glyphs: Vec<(i32, i32)>) {
    glyphs.sort_unstable();
    glyphs.dedup();

    let snapshot = grid.clone();
    let edges_at = |row: i32, col: i32| snapshot.at(row, col).and_then(box_edges_from_char);

    for (row, col) in glyphs {
        let Some(own) = edges_at(row, col) else {
            continue;
        };
        let mut reach = BoxEdges::NONE;
        let neighbours = [
            (0, -1, BoxEdges::RIGHT, BoxEdges::LEFT),
            (0, 1, BoxEdges::LEFT, BoxEdges::RIGHT),
            (-1, 0, BoxEdges::DOWN, BoxEdges::UP),
            (1, 0, BoxEdges::UP, BoxEdges::DOWN),
        ];
        for (d_row, d_col, facing, direction) in neighbours {
            let reaches = match snapshot.at(row + d_row, col + d_col) {
                Some(ch) => box_edges_from_char(ch).is_some_and(|edges| edges.contains(facing)),
                // Edges leaving the grid stay connected.
                None => own.contains(direction),
            };
            if reaches {
                reach = reach.union(direction);
            }
        }
        if !reach.is_empty() {
            grid.put(row, col, box_char_from_edges(reach));
        }
    }
}
