// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::Document;
use super::geometry::Bounds;
use super::ids::NodeId;
use super::node::{NodeDescriptor, NodeKind};
use crate::ops::add_node;

pub(crate) fn boxed(x: i32, y: i32, width: i32, height: i32) -> NodeDescriptor {
    NodeDescriptor::new(Bounds::new(x, y, width, height), NodeKind::Box { label: String::new() })
}

pub(crate) fn button(x: i32, y: i32, label: &str) -> NodeDescriptor {
    let width = label.chars().count() as i32 + 4;
    NodeDescriptor::new(Bounds::new(x, y, width, 1), NodeKind::Button { label: label.to_owned() })
}

pub(crate) fn add(doc: &Document, descriptor: NodeDescriptor) -> (Document, NodeId) {
    let (next, id) = add_node(doc, descriptor, None);
    (next, id.expect("root add always succeeds"))
}

/// Two root boxes `a` (below) and `b` (above) on a 20x40 grid.
pub(crate) fn two_boxes() -> (Document, NodeId, NodeId) {
    let doc = Document::new(20, 40);
    let (doc, a) = add(&doc, boxed(2, 2, 10, 5));
    let (doc, b) = add(&doc, boxed(20, 4, 6, 3));
    (doc, a, b)
}
