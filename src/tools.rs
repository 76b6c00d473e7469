// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Continuous-gesture scratch buffers.
//!
//! A gesture collects samples in its own buffer and touches the document exactly once, when
//! `commit` hands back a descriptor for [`crate::ops::add_node`]. Previews are recomputed from
//! the buffer on every call.

use std::collections::BTreeMap;

use crate::config::ToolConfig;
use crate::model::{Bounds, GridPoint, NodeDescriptor, NodeKind, SparseCell};
use crate::polyline::{polyline_cells, polyline_descriptor, PolylineTracker};

/// Freeform paint gesture producing a `stroke` node.
#[derive(Debug, Clone)]
pub struct BrushStroke {
    radius: i32,
    ch: char,
    cells: BTreeMap<GridPoint, char>,
}

impl BrushStroke {
    pub fn new(config: &ToolConfig) -> Self {
        Self { radius: config.brush_radius.max(0), ch: config.brush_char, cells: BTreeMap::new() }
    }

    /// Paints the square brush centred on `at`. Repainting a cell is harmless.
    pub fn paint(&mut self, at: GridPoint) {
        for d_row in -self.radius..=self.radius {
            for d_col in -self.radius..=self.radius {
                self.cells.insert(at.offset(d_row, d_col), self.ch);
            }
        }
    }

    /// Paints every cell on the straight path from `from` to `to`, so fast drags leave no gaps.
    pub fn paint_segment(&mut self, from: GridPoint, to: GridPoint) {
        let steps = (to.row - from.row).abs().max((to.col - from.col).abs());
        if steps == 0 {
            self.paint(to);
            return;
        }
        for step in 0..=steps {
            let row = from.row + (to.row - from.row) * step / steps;
            let col = from.col + (to.col - from.col) * step / steps;
            self.paint(GridPoint::new(row, col));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Painted cells in absolute grid coordinates.
    pub fn preview(&self) -> Vec<SparseCell> {
        self.cells.iter().map(|(at, ch)| SparseCell::new(at.row, at.col, *ch)).collect()
    }

    /// A `stroke` descriptor covering the painted cells, or `None` if nothing was painted.
    pub fn commit(self) -> Option<NodeDescriptor> {
        let bounds = Bounds::enclosing(self.cells.keys().copied())?;
        let cells = self
            .cells
            .into_iter()
            .map(|(at, ch)| SparseCell::new(at.row - bounds.y, at.col - bounds.x, ch))
            .collect();
        Some(NodeDescriptor::new(bounds, NodeKind::Stroke { cells }))
    }
}

/// Line/arrow drag gesture.
#[derive(Debug, Clone)]
pub struct LineGesture {
    tracker: PolylineTracker,
    arrow: bool,
}

impl LineGesture {
    pub fn new(start: GridPoint, config: &ToolConfig) -> Self {
        Self { tracker: PolylineTracker::new(start, config.turn_threshold), arrow: config.arrowheads }
    }

    pub fn sample(&mut self, at: GridPoint) {
        self.tracker.push(at);
    }

    /// Cells the line would occupy if released at `current`, in absolute coordinates.
    pub fn preview(&self, current: GridPoint) -> Vec<SparseCell> {
        polyline_cells(&self.tracker.points(current), self.arrow)
    }

    /// The finished node. `None` when the drag never left its start cell.
    pub fn commit(mut self, end: GridPoint) -> Option<NodeDescriptor> {
        self.tracker.push(end);
        polyline_descriptor(&self.tracker.points(end), self.arrow)
    }
}
