// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{self, split_lines, TextSpan};
use crate::model::{Bounds, Node, NodeKind};
use crate::polyline::polyline_cells;

use super::glyph::{
    is_box_glyph, ARROW_DOWN, BOX_BOTTOM_LEFT, BOX_BOTTOM_RIGHT, BOX_CROSS, BOX_HORIZONTAL,
    BOX_TOP_LEFT, BOX_TOP_RIGHT, BOX_VERTICAL,
};
use super::text::{text_len, truncate_with_ellipsis};
use super::Grid;

const SHADE_LIGHT: char = '░';
const SHADE_FULL: char = '█';
const BULLET: char = '•';
const CLOSE: char = '×';
const MAGNIFIER: char = '⌕';

/// Phase-one writer: draws onto the grid and records every cell written with a box glyph.
pub(super) struct Stamper<'g> {
    grid: &'g mut Grid,
    glyphs: Vec<(i32, i32)>,
}

impl<'g> Stamper<'g> {
    pub(super) fn new(grid: &'g mut Grid) -> Self {
        Self { grid, glyphs: Vec::new() }
    }

    /// Recorded glyph positions, possibly with duplicates.
    pub(super) fn finish(self) -> Vec<(i32, i32)> {
        self.glyphs
    }

    fn put(&mut self, row: i32, col: i32, ch: char) {
        if self.grid.put(row, col, ch) && is_box_glyph(ch) {
            self.glyphs.push((row, col));
        }
    }

    /// Writes plain text left to right, clipped to `max_width` characters. Never recorded.
    fn text(&mut self, row: i32, col: i32, text: &str, max_width: i32) {
        let max = usize::try_from(max_width).unwrap_or(0);
        for (i, ch) in text.chars().take(max).enumerate() {
            self.grid.put(row, col + i as i32, ch);
        }
    }

    fn hline(&mut self, row: i32, col0: i32, col1: i32) {
        for col in col0.min(col1)..=col0.max(col1) {
            self.put(row, col, BOX_HORIZONTAL);
        }
    }

    fn vline(&mut self, col: i32, row0: i32, row1: i32) {
        for row in row0.min(row1)..=row0.max(row1) {
            self.put(row, col, BOX_VERTICAL);
        }
    }

    fn fill(&mut self, b: Bounds, ch: char) {
        for row in b.y..=b.bottom() {
            for col in b.x..=b.right() {
                self.grid.put(row, col, ch);
            }
        }
    }

    fn frame(&mut self, b: Bounds) {
        let (x0, y0, x1, y1) = (b.x, b.y, b.right(), b.bottom());
        if x0 == x1 && y0 == y1 {
            self.put(y0, x0, BOX_CROSS);
            return;
        }
        if y0 == y1 {
            self.hline(y0, x0, x1);
            return;
        }
        if x0 == x1 {
            self.vline(x0, y0, y1);
            return;
        }

        for col in (x0 + 1)..x1 {
            self.put(y0, col, BOX_HORIZONTAL);
            self.put(y1, col, BOX_HORIZONTAL);
        }
        for row in (y0 + 1)..y1 {
            self.put(row, x0, BOX_VERTICAL);
            self.put(row, x1, BOX_VERTICAL);
        }
        self.put(y0, x0, BOX_TOP_LEFT);
        self.put(y0, x1, BOX_TOP_RIGHT);
        self.put(y1, x0, BOX_BOTTOM_LEFT);
        self.put(y1, x1, BOX_BOTTOM_RIGHT);
    }

    /// Horizontal divider between the side walls at relative row `at`, if it is an interior row.
    /// The walls themselves become tees during junction resolution.
    fn divider(&mut self, b: Bounds, at: i32) {
        if at > 0 && at < b.height - 1 && b.width > 2 {
            self.hline(b.y + at, b.x + 1, b.right() - 1);
        }
    }

    /// Vertical divider between the top and bottom walls at relative column `at`.
    fn column_divider(&mut self, b: Bounds, at: i32) {
        if at > 0 && at < b.width - 1 && b.height > 2 {
            self.vline(b.x + at, b.y + 1, b.bottom() - 1);
        }
    }

    fn span(&mut self, span: &TextSpan<'_>) {
        if span.max_lines <= 0 || span.max_width <= 0 {
            return;
        }
        let (row, col) = (span.origin.row, span.origin.col);
        if !span.is_multiline() {
            let shown = truncate_with_ellipsis(span.text, span.max_width as usize);
            self.text(row, col, &shown, span.max_width);
            return;
        }
        for (i, line) in split_lines(span.text).iter().take(span.max_lines as usize).enumerate() {
            self.text(row + i as i32, col, line, span.max_width);
        }
    }

    pub(super) fn node(&mut self, node: &Node) {
        let b = node.bounds();
        let (x, y, w, h) = (b.x, b.y, b.width, b.height);

        if is_opaque(node.kind()) {
            self.fill(b, ' ');
        }

        match node.kind() {
            NodeKind::Box { .. } | NodeKind::Input { .. } | NodeKind::Nav { .. } => self.frame(b),
            NodeKind::Card { .. } => {
                self.frame(b);
                self.divider(b, 2);
            }
            NodeKind::Modal { .. } => {
                self.frame(b);
                self.divider(b, 2);
                self.grid.put(y + 1, x + w - 3, CLOSE);
            }
            NodeKind::Table { columns, weights } => {
                self.frame(b);
                self.divider(b, 2);
                for divider in layout::table_dividers(w, weights, columns.len()) {
                    self.column_divider(b, divider);
                }
            }
            NodeKind::Hsplit { ratio } => {
                self.frame(b);
                self.column_divider(b, layout::hsplit_divider(w, *ratio));
            }
            NodeKind::Placeholder { .. } => {
                self.frame(b);
                if w > 2 && h > 2 {
                    self.fill(Bounds::new(x + 1, y + 1, w - 2, h - 2), SHADE_LIGHT);
                }
            }
            NodeKind::Dropdown { .. } => {
                self.frame(b);
                self.grid.put(y + 1, x + w - 3, ARROW_DOWN);
            }
            NodeKind::Search { .. } => {
                self.frame(b);
                self.grid.put(y + 1, x + 2, MAGNIFIER);
            }
            NodeKind::Tabs { tabs, active } => self.tabs(b, tabs, *active),
            NodeKind::Button { .. } => {
                self.grid.put(y, x, '[');
                self.grid.put(y, b.right(), ']');
            }
            NodeKind::Checkbox { checked, .. } => {
                self.text(y, x, if *checked { "[x]" } else { "[ ]" }, w);
            }
            NodeKind::Radio { selected, .. } => {
                self.text(y, x, if *selected { "(•)" } else { "( )" }, w);
            }
            NodeKind::Toggle { on, .. } => {
                self.text(y, x, if *on { "[ ●]" } else { "[● ]" }, w);
            }
            NodeKind::List { items } => {
                for i in 0..(items.len() as i32).min(h) {
                    self.grid.put(y + i, x, BULLET);
                }
            }
            NodeKind::Progress { percent } => self.progress(b, *percent),
            NodeKind::Breadcrumb { items } => {
                let offsets = layout::breadcrumb_offsets(items);
                let separated = items.len().saturating_sub(1);
                for (item, start) in items.iter().zip(offsets.iter().copied()).take(separated) {
                    let at = start + text_len(item) as i32;
                    self.text(y, x + at, layout::BREADCRUMB_SEPARATOR, w - at);
                }
            }
            NodeKind::Pagination { pages, current } => {
                self.text(y, x, &layout::pagination_label(*pages, *current, w.max(0) as usize), w);
            }
            NodeKind::Line { points } | NodeKind::Arrow { points } => {
                let arrow = matches!(node.kind(), NodeKind::Arrow { .. });
                for cell in polyline_cells(points, arrow) {
                    self.put(y + cell.row, x + cell.col, cell.ch);
                }
            }
            NodeKind::Stroke { cells } => {
                for cell in cells {
                    self.put(y + cell.row, x + cell.col, cell.ch);
                }
            }
            NodeKind::Text { .. } | NodeKind::Group { .. } => {}
        }

        for span in layout::text_spans(node) {
            self.span(&span);
        }
    }

    fn tabs(&mut self, b: Bounds, tabs: &[String], active: usize) {
        self.frame(b);
        let offsets = layout::tab_offsets(tabs);
        if b.height > 3 {
            self.divider(b, 2);
            if let (Some(&start), Some(&end)) = (offsets.get(active), offsets.get(active + 1)) {
                for col in (start + 1)..end.min(b.width - 1) {
                    self.grid.put(b.y + 2, b.x + col, ' ');
                }
            }
        }
        for offset in offsets.iter().skip(1).copied().filter(|o| *o < b.width - 1) {
            self.put(b.y + 1, b.x + offset, BOX_VERTICAL);
        }
    }

    fn progress(&mut self, b: Bounds, percent: u8) {
        let inner = (b.width - 2).max(0);
        let filled = (inner * i32::from(percent.min(100)) + 50) / 100;
        self.grid.put(b.y, b.x, '[');
        for i in 0..inner {
            self.grid.put(b.y, b.x + 1 + i, if i < filled { SHADE_FULL } else { SHADE_LIGHT });
        }
        self.grid.put(b.y, b.right(), ']');
    }
}

/// Widgets that hide whatever is painted below their bounds.
fn is_opaque(kind: &NodeKind) -> bool {
    !matches!(
        kind,
        NodeKind::Line { .. }
            | NodeKind::Arrow { .. }
            | NodeKind::Text { .. }
            | NodeKind::Stroke { .. }
            | NodeKind::Group { .. }
    )
}
