// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic benchmark documents (no RNG).

use boxwright::model::{Bounds, Document, GridPoint, NodeDescriptor, NodeId, NodeKind, NodeType};
use boxwright::ops::add_node;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    LargeLongLabels,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDense => "medium_dense",
            Self::LargeLongLabels => "large_long_labels",
        }
    }

    fn shape(self) -> (usize, usize, i32, usize) {
        // (grid rows, grid cols, tiles per row, label length)
        match self {
            Self::Small => (40, 120, 4, 6),
            Self::MediumDense => (120, 240, 12, 8),
            Self::LargeLongLabels => (300, 400, 16, 24),
        }
    }
}

fn label(prefix: &str, idx: usize, len: usize) -> String {
    let mut out = format!("{prefix}{idx}");
    while out.len() < len {
        out.push('x');
    }
    out.truncate(len);
    out
}

/// One widget of a rotating type, placed in a tile whose walls touch its neighbours.
fn tile(idx: usize, bounds: Bounds, label_len: usize) -> NodeDescriptor {
    let ty = [NodeType::Box, NodeType::Card, NodeType::Table, NodeType::Tabs, NodeType::Modal][idx % 5];
    let kind = match NodeKind::default_for(ty) {
        NodeKind::Box { .. } => NodeKind::Box { label: label("box", idx, label_len) },
        NodeKind::Card { content, .. } => NodeKind::Card { title: label("card", idx, label_len), content },
        other => other,
    };
    NodeDescriptor::new(bounds, kind)
}

/// A grid of touching widgets crossed by arrows, so junction resolution has real work.
pub fn fixture(case: Case) -> Document {
    let (rows, cols, per_row, label_len) = case.shape();
    let tile_w = (cols as i32 / per_row).max(4);
    let tile_h = 8;
    let mut doc = Document::new(rows, cols);
    let mut idx = 0;
    for y in (0..rows as i32 - tile_h).step_by(tile_h as usize - 1) {
        for col in 0..per_row {
            let bounds = Bounds::new(col * (tile_w - 1), y, tile_w, tile_h);
            doc = add_node(&doc, tile(idx, bounds, label_len), None).0;
            idx += 1;
        }
        let points = vec![GridPoint::new(0, 0), GridPoint::new(0, cols as i32 / 2), GridPoint::new(3, cols as i32 / 2)];
        let arrow = NodeDescriptor::new(Bounds::new(1, y + 3, cols as i32 / 2 + 1, 4), NodeKind::Arrow { points });
        doc = add_node(&doc, arrow, None).0;
    }
    doc
}

pub fn root_ids(doc: &Document) -> Vec<NodeId> {
    doc.root_order().to_vec()
}

pub fn checksum_document(doc: &Document) -> u64 {
    let mut acc = 0u64;
    for node in doc.nodes() {
        let b = node.bounds();
        acc = acc.wrapping_mul(131).wrapping_add(node.id().as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(b.x as u64 ^ ((b.y as u64) << 16));
        acc = acc.wrapping_mul(131).wrapping_add((b.width as u64) << 8 | b.height as u64);
    }
    acc
}
