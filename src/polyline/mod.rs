// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Axis-aligned polylines for line and arrow nodes.
//!
//! [`PolylineTracker`] turns a noisy stream of drag samples into orthogonal waypoints, and
//! [`polyline_cells`] turns an ordered point list into box-drawing cells.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::model::{Bounds, GridPoint, NodeDescriptor, NodeKind, SparseCell};
use crate::render::glyph::{arrowhead, box_char_from_edges, BoxEdges};

/// Default perpendicular drift (in cells) a drag must exceed before it turns a corner.
pub const DEFAULT_TURN_THRESHOLD: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Dominant axis of a movement, or `None` when both deltas are equal.
    fn of(d_row: i32, d_col: i32) -> Option<Self> {
        match d_col.abs().cmp(&d_row.abs()) {
            std::cmp::Ordering::Greater => Some(Self::Horizontal),
            std::cmp::Ordering::Less => Some(Self::Vertical),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Direction-locked waypoint builder for a line/arrow drag.
#[derive(Debug, Clone)]
pub struct PolylineTracker {
    waypoints: SmallVec<[GridPoint; 8]>,
    last_raw: GridPoint,
    axis: Option<Axis>,
    turn_threshold: i32,
}

impl PolylineTracker {
    pub fn new(start: GridPoint, turn_threshold: i32) -> Self {
        let mut waypoints = SmallVec::new();
        waypoints.push(start);
        Self { waypoints, last_raw: start, axis: None, turn_threshold: turn_threshold.max(0) }
    }

    pub fn waypoints(&self) -> &[GridPoint] {
        &self.waypoints
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    fn anchor(&self) -> GridPoint {
        // `waypoints` always holds the start point.
        self.waypoints.last().copied().unwrap_or(self.last_raw)
    }

    /// Feeds one movement sample.
    pub fn push(&mut self, sample: GridPoint) {
        let candidate =
            Axis::of(sample.row - self.last_raw.row, sample.col - self.last_raw.col).or(self.axis);
        self.last_raw = sample;

        let Some(candidate) = candidate else {
            return;
        };
        let Some(locked) = self.axis else {
            self.axis = Some(candidate);
            return;
        };
        if candidate == locked {
            return;
        }

        let anchor = self.anchor();
        let (drift, corner) = match locked {
            Axis::Horizontal => ((sample.row - anchor.row).abs(), GridPoint::new(anchor.row, sample.col)),
            Axis::Vertical => ((sample.col - anchor.col).abs(), GridPoint::new(sample.row, anchor.col)),
        };
        if drift <= self.turn_threshold {
            return;
        }
        if corner != anchor {
            self.waypoints.push(corner);
        }
        self.axis = Some(candidate);
    }

    /// Committed waypoints plus the live cursor, with an L-shaped elbow when the cursor is not
    /// aligned with the last waypoint. The elbow runs along the locked axis first.
    pub fn points(&self, current: GridPoint) -> Vec<GridPoint> {
        let mut points: Vec<GridPoint> = self.waypoints.to_vec();
        let last = self.anchor();
        if current != last {
            if current.row != last.row && current.col != last.col {
                let axis = self
                    .axis
                    .or_else(|| Axis::of(current.row - last.row, current.col - last.col))
                    .unwrap_or(Axis::Horizontal);
                let elbow = match axis {
                    Axis::Horizontal => GridPoint::new(last.row, current.col),
                    Axis::Vertical => GridPoint::new(current.row, last.col),
                };
                points.push(elbow);
            }
            points.push(current);
        }
        points
    }
}

/// Drops consecutive duplicates and splits diagonal segments into horizontal-then-vertical runs.
fn orthogonalize(points: &[GridPoint]) -> Vec<GridPoint> {
    let mut out: Vec<GridPoint> = Vec::with_capacity(points.len());
    for point in points.iter().copied() {
        if let Some(prev) = out.last().copied() {
            if prev == point {
                continue;
            }
            if prev.row != point.row && prev.col != point.col {
                out.push(GridPoint::new(prev.row, point.col));
            }
        }
        out.push(point);
    }
    out
}

/// Cells of the polyline through `points`, in the same coordinate frame as the points.
///
/// Straight runs get `─`/`│`, interior waypoints a corner glyph from their two adjoining
/// segments, and with `arrow` the final point gets a head facing the approach direction.
/// Fewer than two distinct points produce no cells.
pub fn polyline_cells(points: &[GridPoint], arrow: bool) -> Vec<SparseCell> {
    let points = orthogonalize(points);
    if points.len() < 2 {
        return Vec::new();
    }

    let mut edges: BTreeMap<GridPoint, BoxEdges> = BTreeMap::new();
    let mut approach = BoxEdges::NONE;
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let forward = BoxEdges::toward(to.row - from.row, to.col - from.col);
        let backward = BoxEdges::toward(from.row - to.row, from.col - to.col);
        let (d_row, d_col) = ((to.row - from.row).signum(), (to.col - from.col).signum());

        let mut at = from;
        while at != to {
            let entry = edges.entry(at).or_default();
            *entry = entry.union(forward);
            at = at.offset(d_row, d_col);
            let entry = edges.entry(at).or_default();
            *entry = entry.union(backward);
        }
        approach = forward;
    }

    let end = points[points.len() - 1];
    edges
        .into_iter()
        .map(|(point, set)| {
            let head = if arrow && point == end { arrowhead(approach) } else { None };
            SparseCell::new(point.row, point.col, head.unwrap_or_else(|| box_char_from_edges(set)))
        })
        .collect()
}

/// A `line` or `arrow` descriptor through absolute `points`: bounds enclose the points and the
/// stored points are relative to the bounds origin. `None` with fewer than two distinct points.
pub fn polyline_descriptor(points: &[GridPoint], arrow: bool) -> Option<NodeDescriptor> {
    let points = orthogonalize(points);
    if points.len() < 2 {
        return None;
    }
    let bounds = Bounds::enclosing(points.iter().copied())?;
    let relative = points.iter().map(|p| p.offset(-bounds.y, -bounds.x)).collect();
    let kind = if arrow { NodeKind::Arrow { points: relative } } else { NodeKind::Line { points: relative } };
    Some(NodeDescriptor::new(bounds, kind))
}
