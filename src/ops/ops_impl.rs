// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Recomputes the bounds of `start` and every group above it as the union of their children.
/// Nodes whose bounds do not change are left shared with the previous snapshot.
fn refit_ancestors(doc: &mut Document, start: Option<&NodeId>) {
    let mut current = start.cloned();
    let mut hops = 0usize;
    while let Some(group_id) = current {
        hops += 1;
        if hops > doc.len() {
            break;
        }
        let Some(group) = doc.node(&group_id) else {
            break;
        };
        let parent = group.parent_id().cloned();
        let union = group
            .kind()
            .child_ids()
            .iter()
            .filter_map(|child| doc.node(child).map(Node::bounds))
            .reduce(|acc, b| acc.union(&b));
        if let Some(union) = union {
            if union != group.bounds() {
                if let Some(group) = doc.node_mut(&group_id) {
                    group.set_bounds(union);
                }
            }
        }
        current = parent;
    }
}

/// Existing ids from `ids`, de-duplicated, minus those with a listed ancestor.
fn top_level_selection(doc: &Document, ids: &[NodeId]) -> Vec<NodeId> {
    let mut out = Vec::<NodeId>::with_capacity(ids.len());
    for id in ids {
        if !doc.contains(id) || out.contains(id) {
            continue;
        }
        if ids.iter().any(|other| other != id && doc.is_ancestor(other, id)) {
            continue;
        }
        out.push(id.clone());
    }
    out
}

/// The shared parent of all `ids` (`Some(None)` for the root), or `None` when an id is missing
/// or the ids live in different lists.
fn common_parent(doc: &Document, ids: &[NodeId]) -> Option<Option<NodeId>> {
    let mut parents = ids.iter().map(|id| doc.node(id).map(|node| node.parent_id().cloned()));
    let first = parents.next()??;
    for parent in parents {
        if parent? != first {
            return None;
        }
    }
    Some(first)
}

fn sibling_list<'a>(doc: &'a Document, parent_id: Option<&NodeId>) -> Option<&'a [NodeId]> {
    match parent_id {
        None => Some(doc.root_order()),
        Some(parent_id) => doc.node(parent_id).map(|node| node.kind().child_ids()),
    }
}

fn reorder(doc: &Document, id: &NodeId, place: impl FnOnce(&mut Vec<NodeId>, NodeId)) -> Document {
    let Some(node) = doc.node(id) else {
        debug!(node = %id, "reorder: unknown id");
        return doc.clone();
    };
    let parent_id = node.parent_id().cloned();

    let mut next = doc.clone();
    if let Some(list) = next.sibling_list_mut(parent_id.as_ref()) {
        list.retain(|sibling| sibling != id);
        place(list, id.clone());
    }
    next
}

/// Copies the subtree rooted at `id` in `source` into `target` with fresh ids and returns the
/// id of the copy. The copy is not linked into any sibling list.
fn clone_subtree(
    source: &Document,
    target: &mut Document,
    id: &NodeId,
    parent_id: Option<NodeId>,
    d_row: i32,
    d_col: i32,
) -> Option<NodeId> {
    let original = source.node(id)?;
    let copy_id = target.allocate_id();

    let mut copy = original.clone();
    copy.set_id(copy_id.clone());
    copy.set_parent_id(parent_id);
    copy.set_bounds(original.bounds().translated(d_row, d_col));

    if let Some(child_ids) = copy.kind_mut().child_ids_mut() {
        let originals = std::mem::take(child_ids);
        let mut copies = Vec::with_capacity(originals.len());
        for child in &originals {
            if let Some(child_copy) =
                clone_subtree(source, target, child, Some(copy_id.clone()), d_row, d_col)
            {
                copies.push(child_copy);
            }
        }
        *child_ids = copies;
    }

    target.insert(copy);
    Some(copy_id)
}
