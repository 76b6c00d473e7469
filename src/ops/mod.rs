// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural operations on documents.
//!
//! Every op takes a document snapshot and returns a new one; the input is never mutated.
//! Untouched nodes stay shared between the two snapshots. Ops that reference unknown ids are
//! no-ops and return a snapshot equal to the input.

use tracing::debug;

use crate::model::{Bounds, Document, Node, NodeDescriptor, NodeId, NodeKind, NodePatch};

/// Adds a node built from `descriptor` on top of the root order, or on top of the children of
/// the group `parent`.
///
/// Returns the new snapshot and the assigned id. A `parent` that is missing or not a group
/// makes this a no-op (`None`).
pub fn add_node(
    doc: &Document,
    descriptor: NodeDescriptor,
    parent: Option<&NodeId>,
) -> (Document, Option<NodeId>) {
    if let Some(parent_id) = parent {
        if !doc.node(parent_id).is_some_and(|node| node.kind().is_group()) {
            debug!(parent = %parent_id, "add_node: parent is not a group");
            return (doc.clone(), None);
        }
    }

    let mut descriptor = descriptor;
    if let Some(child_ids) = descriptor.kind.child_ids_mut() {
        // Groups are only populated through `group_nodes`.
        child_ids.clear();
    }

    let mut next = doc.clone();
    let id = next.allocate_id();
    let mut node = Node::from_descriptor(id.clone(), descriptor);
    node.set_parent_id(parent.cloned());
    next.insert(node);

    if let Some(list) = next.sibling_list_mut(parent) {
        list.push(id.clone());
    }
    if let Some(parent_id) = parent {
        refit_ancestors(&mut next, Some(parent_id));
    }
    (next, Some(id))
}

/// Removes `id` and, for groups, its whole subtree.
pub fn remove_node(doc: &Document, id: &NodeId) -> Document {
    remove_nodes(doc, std::slice::from_ref(id))
}

pub fn remove_nodes(doc: &Document, ids: &[NodeId]) -> Document {
    let mut next = doc.clone();
    for id in ids {
        let Some(node) = next.node(id) else {
            debug!(node = %id, "remove: unknown id");
            continue;
        };
        let parent_id = node.parent_id().cloned();

        if let Some(list) = next.sibling_list_mut(parent_id.as_ref()) {
            list.retain(|sibling| sibling != id);
        }
        for descendant in next.descendants(id) {
            next.take(&descendant);
        }
        next.take(id);
        refit_ancestors(&mut next, parent_id.as_ref());
    }
    next
}

/// Shallow patch of `id`; identity and variant are preserved.
pub fn update_node(doc: &Document, id: &NodeId, patch: &NodePatch) -> Document {
    let Some(node) = doc.node(id) else {
        debug!(node = %id, "update: unknown id");
        return doc.clone();
    };
    let mut candidate = node.clone();
    if !candidate.apply_patch(patch) {
        return doc.clone();
    }

    let mut next = doc.clone();
    let parent_id = candidate.parent_id().cloned();
    if let Some(slot) = next.node_mut(id) {
        *slot = candidate;
    }
    refit_ancestors(&mut next, parent_id.as_ref());
    next
}

pub fn set_visible(doc: &Document, id: &NodeId, visible: bool) -> Document {
    update_node(doc, id, &NodePatch { visible: Some(visible), ..NodePatch::default() })
}

pub fn set_locked(doc: &Document, id: &NodeId, locked: bool) -> Document {
    update_node(doc, id, &NodePatch { locked: Some(locked), ..NodePatch::default() })
}

/// Shifts every listed node, and recursively all group descendants, by `(d_row, d_col)`.
///
/// An id whose ancestor is also listed is moved once, through the ancestor.
pub fn move_nodes(doc: &Document, ids: &[NodeId], d_row: i32, d_col: i32) -> Document {
    let targets = top_level_selection(doc, ids);
    if targets.is_empty() || (d_row == 0 && d_col == 0) {
        return doc.clone();
    }

    let mut next = doc.clone();
    for id in &targets {
        let mut subtree = doc.descendants(id);
        subtree.push(id.clone());
        for member in &subtree {
            if let Some(node) = next.node_mut(member) {
                let shifted = node.bounds().translated(d_row, d_col);
                node.set_bounds(shifted);
            }
        }
        let parent_id = doc.node(id).and_then(Node::parent_id).cloned();
        refit_ancestors(&mut next, parent_id.as_ref());
    }
    next
}

/// Replaces the bounds of `id` (clamped to the variant minimum). Children are not touched.
pub fn resize_node(doc: &Document, id: &NodeId, bounds: Bounds) -> Document {
    let Some(node) = doc.node(id) else {
        debug!(node = %id, "resize: unknown id");
        return doc.clone();
    };
    if node.node_type().clamp_bounds(bounds) == node.bounds() {
        return doc.clone();
    }

    let parent_id = node.parent_id().cloned();
    let mut next = doc.clone();
    if let Some(node) = next.node_mut(id) {
        node.set_bounds(bounds);
    }
    refit_ancestors(&mut next, parent_id.as_ref());
    next
}

/// Moves `id` to the top of its sibling list (parent's children or the root order).
pub fn bring_to_front(doc: &Document, id: &NodeId) -> Document {
    reorder(doc, id, |list, item| list.push(item))
}

/// Moves `id` to the bottom of its sibling list.
pub fn send_to_back(doc: &Document, id: &NodeId) -> Document {
    reorder(doc, id, |list, item| list.insert(0, item))
}

/// Wraps `ids` into a new group.
///
/// Requires at least two existing ids sharing one parent (the root or the same group). The
/// group takes the union bounds of its members, keeps them in their original relative order,
/// and is spliced in where the earliest member used to be.
pub fn group_nodes(doc: &Document, ids: &[NodeId]) -> (Document, Option<NodeId>) {
    let mut selected = Vec::<NodeId>::with_capacity(ids.len());
    for id in ids {
        if !selected.contains(id) {
            selected.push(id.clone());
        }
    }
    if selected.len() < 2 {
        debug!(count = selected.len(), "group: need at least two nodes");
        return (doc.clone(), None);
    }
    let Some(parent_id) = common_parent(doc, &selected) else {
        debug!("group: ids missing or not siblings");
        return (doc.clone(), None);
    };
    let Some(siblings) = sibling_list(doc, parent_id.as_ref()) else {
        return (doc.clone(), None);
    };

    let ordered: Vec<NodeId> =
        siblings.iter().filter(|sibling| selected.contains(sibling)).cloned().collect();
    let Some(insert_at) = siblings.iter().position(|sibling| selected.contains(sibling)) else {
        return (doc.clone(), None);
    };
    let Some(bounds) = ordered
        .iter()
        .filter_map(|id| doc.node(id).map(Node::bounds))
        .reduce(|acc, b| acc.union(&b))
    else {
        return (doc.clone(), None);
    };

    let mut next = doc.clone();
    let group_id = next.allocate_id();
    let mut group = Node::from_descriptor(
        group_id.clone(),
        NodeDescriptor::new(bounds, NodeKind::Group { child_ids: ordered.clone() }),
    );
    group.set_parent_id(parent_id.clone());
    next.insert(group);

    if let Some(list) = next.sibling_list_mut(parent_id.as_ref()) {
        list.retain(|sibling| !ordered.contains(sibling));
        let at = insert_at.min(list.len());
        list.insert(at, group_id.clone());
    }
    for id in &ordered {
        if let Some(node) = next.node_mut(id) {
            node.set_parent_id(Some(group_id.clone()));
        }
    }
    refit_ancestors(&mut next, parent_id.as_ref());
    (next, Some(group_id))
}

/// Dissolves a group: its children take the group's place in the parent list.
///
/// `ids` must name exactly one group.
pub fn ungroup(doc: &Document, ids: &[NodeId]) -> Document {
    let [group_id] = ids else {
        debug!(count = ids.len(), "ungroup: need exactly one id");
        return doc.clone();
    };
    let Some(group) = doc.node(group_id) else {
        return doc.clone();
    };
    if !group.kind().is_group() {
        debug!(node = %group_id, "ungroup: not a group");
        return doc.clone();
    }

    let children = group.kind().child_ids().to_vec();
    let parent_id = group.parent_id().cloned();

    let mut next = doc.clone();
    if let Some(list) = next.sibling_list_mut(parent_id.as_ref()) {
        if let Some(at) = list.iter().position(|sibling| sibling == group_id) {
            let tail = list.split_off(at + 1);
            list.pop();
            list.extend(children.iter().cloned());
            list.extend(tail);
        }
    }
    for child in &children {
        if let Some(node) = next.node_mut(child) {
            node.set_parent_id(parent_id.clone());
        }
    }
    next.take(group_id);
    refit_ancestors(&mut next, parent_id.as_ref());
    next
}

/// Deep-copies the listed subtrees with fresh ids, offset by `(d_row, d_col)`, each placed on
/// top of its sibling list. Returns the ids of the copied top-level nodes.
pub fn duplicate_nodes(
    doc: &Document,
    ids: &[NodeId],
    d_row: i32,
    d_col: i32,
) -> (Document, Vec<NodeId>) {
    let targets = top_level_selection(doc, ids);
    if targets.is_empty() {
        return (doc.clone(), Vec::new());
    }

    let mut next = doc.clone();
    let mut created = Vec::with_capacity(targets.len());
    for id in &targets {
        let parent_id = doc.node(id).and_then(Node::parent_id).cloned();
        let Some(copy_id) = clone_subtree(doc, &mut next, id, parent_id.clone(), d_row, d_col)
        else {
            continue;
        };
        if let Some(list) = next.sibling_list_mut(parent_id.as_ref()) {
            list.push(copy_id.clone());
        }
        refit_ancestors(&mut next, parent_id.as_ref());
        created.push(copy_id);
    }
    (next, created)
}

// Extracted helpers shared by the op implementations above.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
