// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use im::ordmap::DiffItem;
use im::OrdMap;

use super::ids::NodeId;
use super::node::Node;

/// An immutable-by-convention snapshot of the scene graph.
///
/// The node map is the only owner of node memory. It is a persistent map of `Arc`-shared
/// payloads, so cloning a document (for an undo snapshot or as the base of an op) is O(1);
/// an op copies the map path and payload of each node it touches, and the root order only
/// when it reorders root-level nodes.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: OrdMap<NodeId, Arc<Node>>,
    root_order: Arc<Vec<NodeId>>,
    grid_rows: usize,
    grid_cols: usize,
    next_seq: u64,
}

impl Document {
    pub fn new(grid_rows: usize, grid_cols: usize) -> Self {
        Self { nodes: OrdMap::new(), root_order: Arc::new(Vec::new()), grid_rows, grid_cols, next_seq: 1 }
    }

    pub fn grid_rows(&self) -> usize {
        self.grid_rows
    }

    pub fn grid_cols(&self) -> usize {
        self.grid_cols
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id).map(Arc::as_ref)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().map(Arc::as_ref)
    }

    /// Root-level ids, bottom to top.
    pub fn root_order(&self) -> &[NodeId] {
        self.root_order.as_slice()
    }

    /// Direct children of `id`, bottom to top. Empty for non-groups and unknown ids.
    pub fn children_of(&self, id: &NodeId) -> &[NodeId] {
        self.node(id).map(|node| node.kind().child_ids()).unwrap_or(&[])
    }

    /// The list `id` is ordered in: its parent's children, or the root order.
    pub fn siblings_of(&self, id: &NodeId) -> Option<&[NodeId]> {
        let node = self.node(id)?;
        match node.parent_id() {
            Some(parent_id) => Some(self.children_of(parent_id)),
            None => Some(self.root_order.as_slice()),
        }
    }

    /// All descendants of `id` in pre-order (excluding `id`).
    pub fn descendants(&self, id: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<&NodeId> = self.children_of(id).iter().rev().collect();
        while let Some(next) = stack.pop() {
            out.push(next.clone());
            stack.extend(self.children_of(next).iter().rev());
        }
        out
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: &NodeId, id: &NodeId) -> bool {
        let mut current = self.node(id).and_then(Node::parent_id);
        let mut hops = 0usize;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            hops += 1;
            if hops > self.nodes.len() {
                return false;
            }
            current = self.node(parent).and_then(Node::parent_id);
        }
        false
    }

    /// Every node flattened bottom to top, with group children painted in place of the group.
    pub fn paint_order(&self) -> Vec<&Node> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for id in self.root_order.iter() {
            self.collect_paint_order(id, &mut out);
        }
        out
    }

    fn collect_paint_order<'a>(&'a self, id: &NodeId, out: &mut Vec<&'a Node>) {
        let Some(node) = self.node(id) else {
            return;
        };
        out.push(node);
        for child in node.kind().child_ids() {
            self.collect_paint_order(child, out);
        }
    }

    /// Whether `self` and `other` share the same allocation for node `id`.
    pub fn shares_node_with(&self, other: &Self, id: &NodeId) -> bool {
        match (self.nodes.get(id), other.nodes.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Whether `self` and `other` share the same root order allocation.
    pub fn shares_root_order_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root_order, &other.root_order)
    }

    /// Structural equality of content (ids, payloads, ordering, grid size).
    ///
    /// Subtrees and payloads shared between the two snapshots are skipped, so comparing a
    /// document with one derived from it costs time proportional to the nodes that differ.
    pub fn same_content(&self, other: &Self) -> bool {
        if self.grid_rows != other.grid_rows
            || self.grid_cols != other.grid_cols
            || self.nodes.len() != other.nodes.len()
        {
            return false;
        }
        if !Arc::ptr_eq(&self.root_order, &other.root_order) && self.root_order != other.root_order {
            return false;
        }
        if self.nodes.ptr_eq(&other.nodes) {
            return true;
        }
        self.nodes.diff(&other.nodes).all(|item| match item {
            DiffItem::Update { old: (_, a), new: (_, b) } => Arc::ptr_eq(a, b) || a == b,
            DiffItem::Add(..) | DiffItem::Remove(..) => false,
        })
    }

    /// Verifies the parent/child/root-order invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen_roots = BTreeSet::new();
        for id in self.root_order.iter() {
            let node = self.node(id).ok_or_else(|| InvariantViolation::dangling(id))?;
            if node.parent_id().is_some() {
                return Err(InvariantViolation::new(id, "root entry has a parent"));
            }
            if !seen_roots.insert(id) {
                return Err(InvariantViolation::new(id, "duplicate root entry"));
            }
        }

        for node in self.nodes() {
            let id = node.id();
            match node.parent_id() {
                None if !seen_roots.contains(id) => {
                    return Err(InvariantViolation::new(id, "parentless node missing from root"));
                }
                None => {}
                Some(parent_id) => {
                    let parent =
                        self.node(parent_id).ok_or_else(|| InvariantViolation::dangling(parent_id))?;
                    let hits = parent.kind().child_ids().iter().filter(|c| *c == id).count();
                    if !parent.kind().is_group() || hits != 1 {
                        return Err(InvariantViolation::new(id, "parent does not list child once"));
                    }
                    if self.is_ancestor(id, id) {
                        return Err(InvariantViolation::new(id, "node is its own ancestor"));
                    }
                }
            }
            for child in node.kind().child_ids() {
                let child_node =
                    self.node(child).ok_or_else(|| InvariantViolation::dangling(child))?;
                if child_node.parent_id() != Some(id) {
                    return Err(InvariantViolation::new(child, "child does not point at group"));
                }
            }
            let (min_w, min_h) = node.node_type().min_size();
            if node.bounds().width < min_w || node.bounds().height < min_h {
                return Err(InvariantViolation::new(id, "bounds below minimum size"));
            }
        }
        Ok(())
    }

    pub(crate) fn allocate_id(&mut self) -> NodeId {
        let id = NodeId::from_seq(self.next_seq);
        self.next_seq += 1;
        id
    }

    pub(crate) fn insert(&mut self, node: Node) {
        self.nodes.insert(node.id().clone(), Arc::new(node));
    }

    pub(crate) fn take(&mut self, id: &NodeId) -> Option<Arc<Node>> {
        self.nodes.remove(id)
    }

    /// Copy-on-write access: clones the node only if another snapshot still shares it.
    pub(crate) fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id).map(Arc::make_mut)
    }

    /// The mutable sibling list `id` lives in (parent's children or the root order).
    pub(crate) fn sibling_list_mut(&mut self, parent_id: Option<&NodeId>) -> Option<&mut Vec<NodeId>> {
        match parent_id {
            None => Some(Arc::make_mut(&mut self.root_order)),
            Some(parent_id) => self.node_mut(parent_id)?.kind_mut().child_ids_mut(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub node_id: NodeId,
    pub reason: &'static str,
}

impl InvariantViolation {
    fn new(node_id: &NodeId, reason: &'static str) -> Self {
        Self { node_id: node_id.clone(), reason }
    }

    fn dangling(node_id: &NodeId) -> Self {
        Self::new(node_id, "dangling id reference")
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "document invariant violated at {}: {}", self.node_id, self.reason)
    }
}

impl std::error::Error for InvariantViolation {}
