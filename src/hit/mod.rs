// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Point, marquee and resize-handle queries over a document snapshot.
//!
//! All queries are pure and return an absence value instead of failing.

use crate::layout::split_lines;
use crate::model::{Bounds, Document, GridPoint, Node, NodeId, NodeKind};

/// Cell distance within which a line counts as hit, and a corner handle as grabbed.
pub const HIT_TOLERANCE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

enum Containment {
    Miss,
    /// Inside the bounding box but not on a drawn glyph.
    Loose,
    Exact,
}

fn chebyshev_to_segment(point: GridPoint, a: GridPoint, b: GridPoint) -> i32 {
    let row = point.row.clamp(a.row.min(b.row), a.row.max(b.row));
    let col = point.col.clamp(a.col.min(b.col), a.col.max(b.col));
    (point.row - row).abs().max((point.col - col).abs())
}

fn near_polyline(bounds: Bounds, points: &[GridPoint], at: GridPoint) -> bool {
    let absolute: Vec<GridPoint> = points.iter().map(|p| p.offset(bounds.y, bounds.x)).collect();
    match absolute.as_slice() {
        [] => false,
        [only] => chebyshev_to_segment(at, *only, *only) <= HIT_TOLERANCE,
        many => many
            .windows(2)
            .any(|pair| chebyshev_to_segment(at, pair[0], pair[1]) <= HIT_TOLERANCE),
    }
}

fn text_glyph_at(content: &str, d_row: i32, d_col: i32) -> bool {
    let (Ok(line), Ok(col)) = (usize::try_from(d_row), usize::try_from(d_col)) else {
        return false;
    };
    split_lines(content)
        .get(line)
        .and_then(|line| line.chars().nth(col))
        .is_some_and(|ch| !ch.is_whitespace())
}

fn containment(node: &Node, row: i32, col: i32) -> Containment {
    let b = node.bounds();
    let verdict = |hit: bool| if hit { Containment::Exact } else { Containment::Miss };
    match node.kind() {
        NodeKind::Line { points } | NodeKind::Arrow { points } => verdict(
            b.expanded(HIT_TOLERANCE).contains(row, col)
                && near_polyline(b, points, GridPoint::new(row, col)),
        ),
        NodeKind::Stroke { cells } => verdict(
            b.contains(row, col)
                && cells.iter().any(|c| c.row == row - b.y && c.col == col - b.x && c.ch != ' '),
        ),
        NodeKind::Text { content } if b.contains(row, col) => {
            if text_glyph_at(content, row - b.y, col - b.x) {
                Containment::Exact
            } else {
                Containment::Loose
            }
        }
        _ => verdict(b.contains(row, col)),
    }
}

fn selectable(node: &Node) -> bool {
    node.visible() && !node.locked()
}

/// Topmost selectable node under `(row, col)` among the root nodes, or among the direct
/// children of `scope` when drilled into a group.
///
/// A text node hit only on its whitespace yields to any exact hit below it.
pub fn hit_test_point(doc: &Document, row: i32, col: i32, scope: Option<&NodeId>) -> Option<NodeId> {
    let candidates = match scope {
        Some(group) => doc.children_of(group),
        None => doc.root_order(),
    };

    let mut loose: Option<&NodeId> = None;
    for id in candidates.iter().rev() {
        let Some(node) = doc.node(id).filter(|node| selectable(node)) else {
            continue;
        };
        match containment(node, row, col) {
            Containment::Exact => return Some(id.clone()),
            Containment::Loose => {
                loose.get_or_insert(id);
            }
            Containment::Miss => {}
        }
    }
    loose.cloned()
}

/// Every selectable non-group node whose bounds intersect the rectangle, in paint order.
///
/// With `scope`, only descendants of that group are considered.
pub fn hit_test_region(
    doc: &Document,
    min_row: i32,
    max_row: i32,
    min_col: i32,
    max_col: i32,
    scope: Option<&NodeId>,
) -> Vec<NodeId> {
    let (min_row, max_row) = (min_row.min(max_row), min_row.max(max_row));
    let (min_col, max_col) = (min_col.min(max_col), min_col.max(max_col));

    doc.paint_order()
        .into_iter()
        .filter(|node| !node.kind().is_group() && selectable(node))
        .filter(|node| scope.map_or(true, |group| doc.is_ancestor(group, node.id())))
        .filter(|node| node.bounds().intersects(min_row, max_row, min_col, max_col))
        .map(|node| node.id().clone())
        .collect()
}

/// Which corner of `bounds` is within [`HIT_TOLERANCE`] of `(row, col)`, if any.
pub fn hit_test_corner_handle(bounds: Bounds, row: i32, col: i32) -> Option<Corner> {
    let point = GridPoint::new(row, col);
    [
        (Corner::TopLeft, GridPoint::new(bounds.y, bounds.x)),
        (Corner::TopRight, GridPoint::new(bounds.y, bounds.right())),
        (Corner::BottomLeft, GridPoint::new(bounds.bottom(), bounds.x)),
        (Corner::BottomRight, GridPoint::new(bounds.bottom(), bounds.right())),
    ]
    .into_iter()
    .find(|(_, at)| chebyshev_to_segment(point, *at, *at) <= HIT_TOLERANCE)
    .map(|(corner, _)| corner)
}
