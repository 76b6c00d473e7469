// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use crate::model::fixtures::{add, boxed, button, two_boxes};
use crate::model::{Bounds, Document, NodeId, NodeKind, NodePatch};

use super::{
    add_node, bring_to_front, duplicate_nodes, group_nodes, move_nodes, remove_node,
    remove_nodes, resize_node, send_to_back, set_locked, ungroup, update_node,
};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn bounds_of(doc: &Document, id: &NodeId) -> Bounds {
    doc.node(id).expect("node").bounds()
}

#[test]
fn add_assigns_fresh_ids_and_appends_to_root_order() {
    let (doc, a, b) = two_boxes();
    assert_ne!(a, b);
    assert_eq!(doc.root_order(), &[a.clone(), b.clone()]);
    assert!(doc.node(&a).expect("a").parent_id().is_none());
    doc.check_invariants().expect("invariants");
}

#[test]
fn add_into_non_group_parent_is_noop() {
    let (doc, a, _) = two_boxes();
    let (next, id) = add_node(&doc, boxed(0, 0, 3, 3), Some(&a));
    assert!(id.is_none());
    assert!(next.same_content(&doc));
}

#[test]
fn add_into_group_links_child_and_refits_group() {
    let (doc, a, b) = two_boxes();
    let (doc, group) = group_nodes(&doc, &[a, b]);
    let group = group.expect("group");

    let (doc, child) = add_node(&doc, boxed(30, 12, 4, 4), Some(&group));
    let child = child.expect("child");

    assert_eq!(doc.node(&child).expect("child").parent_id(), Some(&group));
    assert_eq!(doc.children_of(&group).last(), Some(&child));
    assert_eq!(bounds_of(&doc, &group), Bounds::new(2, 2, 32, 14));
    doc.check_invariants().expect("invariants");
}

#[rstest]
#[case::update("update")]
#[case::move_nodes("move")]
#[case::resize("resize")]
#[case::remove("remove")]
#[case::front("front")]
#[case::back("back")]
fn ops_on_absent_id_are_noops(#[case] op: &str) {
    let (doc, _, _) = two_boxes();
    let missing = nid("missing");
    let next = match op {
        "update" => update_node(&doc, &missing, &NodePatch::bounds(Bounds::new(0, 0, 9, 9))),
        "move" => move_nodes(&doc, std::slice::from_ref(&missing), 3, 4),
        "resize" => resize_node(&doc, &missing, Bounds::new(0, 0, 9, 9)),
        "remove" => remove_node(&doc, &missing),
        "front" => bring_to_front(&doc, &missing),
        "back" => send_to_back(&doc, &missing),
        other => panic!("unknown op {other}"),
    };
    assert!(next.same_content(&doc));
}

#[test]
fn update_shares_untouched_nodes_with_previous_snapshot() {
    let (doc, a, b) = two_boxes();
    let next = update_node(&doc, &a, &NodePatch::kind(NodeKind::Box { label: "Hi".to_owned() }));

    assert!(next.shares_node_with(&doc, &b));
    assert!(!next.shares_node_with(&doc, &a));
    assert_eq!(doc.node(&a).expect("a").kind(), &NodeKind::Box { label: String::new() });
    assert_eq!(next.node(&a).expect("a").kind(), &NodeKind::Box { label: "Hi".to_owned() });
}

#[test]
fn edits_in_a_large_document_copy_only_touched_nodes() {
    let mut doc = Document::new(40, 120);
    let mut ids = Vec::new();
    for i in 0..300 {
        let (next, id) = add(&doc, boxed(i % 100, i / 100 * 6, 4, 3));
        doc = next;
        ids.push(id);
    }
    let target = ids[150].clone();

    let moved = move_nodes(&doc, std::slice::from_ref(&target), 1, 1);
    assert!(!moved.same_content(&doc));
    assert!(moved.shares_root_order_with(&doc));
    assert!(!moved.shares_node_with(&doc, &target));
    assert!(ids.iter().filter(|id| **id != target).all(|id| moved.shares_node_with(&doc, id)));

    let same_label = NodePatch::kind(NodeKind::Box { label: String::new() });
    let rewritten = update_node(&doc, &target, &same_label);
    assert!(rewritten.same_content(&doc));

    let raised = bring_to_front(&doc, &ids[0]);
    assert!(!raised.shares_root_order_with(&doc));
    assert!(ids.iter().all(|id| raised.shares_node_with(&doc, id)));
}

#[test]
fn update_cannot_change_variant() {
    let (doc, a, _) = two_boxes();
    let next = update_node(&doc, &a, &NodePatch::kind(NodeKind::Text { content: "x".into() }));
    assert!(next.same_content(&doc));
}

#[test]
fn resize_clamps_to_minimum_and_does_not_cascade() {
    let (doc, a, b) = two_boxes();
    let (doc, group) = group_nodes(&doc, &[a.clone(), b.clone()]);
    let group = group.expect("group");

    let next = resize_node(&doc, &a, Bounds::new(2, 2, 0, 0));
    assert_eq!(bounds_of(&next, &a), Bounds::new(2, 2, 2, 2));

    let next = resize_node(&doc, &group, Bounds::new(0, 0, 50, 50));
    assert_eq!(bounds_of(&next, &group), Bounds::new(0, 0, 50, 50));
    assert_eq!(bounds_of(&next, &a), bounds_of(&doc, &a));
}

#[test]
fn move_then_inverse_move_restores_group_descendants() {
    let (doc, a, b) = two_boxes();
    let (doc, inner) = group_nodes(&doc, &[a.clone(), b.clone()]);
    let inner = inner.expect("group");
    let (doc, c) = add(&doc, button(0, 15, "OK"));
    let (doc, outer) = group_nodes(&doc, &[inner.clone(), c.clone()]);
    let outer = outer.expect("outer");

    let moved = move_nodes(&doc, std::slice::from_ref(&outer), 3, -2);
    assert_eq!(bounds_of(&moved, &a), Bounds::new(0, 5, 10, 5));
    assert_eq!(bounds_of(&moved, &c).y, 18);

    let restored = move_nodes(&moved, std::slice::from_ref(&outer), -3, 2);
    for id in [&a, &b, &c, &inner, &outer] {
        assert_eq!(bounds_of(&restored, id), bounds_of(&doc, id), "{id}");
    }
}

#[test]
fn move_with_selected_ancestor_moves_once() {
    let (doc, a, b) = two_boxes();
    let (doc, group) = group_nodes(&doc, &[a.clone(), b.clone()]);
    let group = group.expect("group");

    let moved = move_nodes(&doc, &[group, a.clone()], 1, 1);
    assert_eq!(bounds_of(&moved, &a), Bounds::new(3, 3, 10, 5));
}

#[test]
fn moving_a_child_refits_its_group() {
    let (doc, a, b) = two_boxes();
    let (doc, group) = group_nodes(&doc, &[a.clone(), b]);
    let group = group.expect("group");

    let moved = move_nodes(&doc, std::slice::from_ref(&a), 10, 0);
    assert_eq!(bounds_of(&moved, &group), Bounds::new(2, 4, 24, 13));
    moved.check_invariants().expect("invariants");
}

#[test]
fn z_order_ops_reposition_within_root_order() {
    let (doc, a, b) = two_boxes();
    let (doc, c) = add(&doc, boxed(0, 0, 3, 3));

    let front = bring_to_front(&doc, &a);
    assert_eq!(front.root_order(), &[b.clone(), c.clone(), a.clone()]);

    let back = send_to_back(&doc, &c);
    assert_eq!(back.root_order(), &[c, a, b]);
}

#[test]
fn group_requires_two_ids_and_common_parent() {
    let (doc, a, b) = two_boxes();

    let (next, group) = group_nodes(&doc, std::slice::from_ref(&a));
    assert!(group.is_none());
    assert!(next.same_content(&doc));

    let (next, group) = group_nodes(&doc, &[a.clone(), a.clone()]);
    assert!(group.is_none());
    assert!(next.same_content(&doc));

    let (grouped, group) = group_nodes(&doc, &[a.clone(), b.clone()]);
    let (doc, c) = add(&grouped, boxed(0, 0, 3, 3));
    let (next, none) = group_nodes(&doc, &[a, c]);
    assert!(none.is_none());
    assert!(next.same_content(&doc));
    assert!(group.is_some());
}

#[test]
fn group_splices_at_earliest_member_and_keeps_relative_order() {
    let doc = Document::new(20, 40);
    let (doc, a) = add(&doc, boxed(0, 0, 3, 3));
    let (doc, b) = add(&doc, boxed(5, 0, 3, 3));
    let (doc, c) = add(&doc, boxed(10, 0, 3, 3));
    let (doc, d) = add(&doc, boxed(15, 0, 3, 3));

    let (doc, group) = group_nodes(&doc, &[d.clone(), b.clone()]);
    let group = group.expect("group");

    assert_eq!(doc.root_order(), &[a, group.clone(), c]);
    assert_eq!(doc.children_of(&group), &[b, d]);
    assert_eq!(bounds_of(&doc, &group), Bounds::new(5, 0, 13, 3));
    doc.check_invariants().expect("invariants");
}

#[test]
fn ungroup_inverts_group() {
    let doc = Document::new(20, 40);
    let (doc, a) = add(&doc, boxed(0, 0, 3, 3));
    let (doc, b) = add(&doc, boxed(5, 0, 3, 3));
    let (doc, c) = add(&doc, boxed(10, 0, 3, 3));

    let (grouped, group) = group_nodes(&doc, &[a.clone(), c.clone()]);
    let group = group.expect("group");
    let restored = ungroup(&grouped, std::slice::from_ref(&group));

    assert_eq!(restored.root_order(), &[a.clone(), c.clone(), b.clone()]);
    assert!(!restored.contains(&group));
    for id in [&a, &b, &c] {
        assert_eq!(bounds_of(&restored, id), bounds_of(&doc, id));
        assert!(restored.node(id).expect("node").parent_id().is_none());
    }
    restored.check_invariants().expect("invariants");
}

#[test]
fn ungroup_requires_exactly_one_group() {
    let (doc, a, b) = two_boxes();
    assert!(ungroup(&doc, std::slice::from_ref(&a)).same_content(&doc));
    assert!(ungroup(&doc, &[a, b]).same_content(&doc));
    assert!(ungroup(&doc, &[]).same_content(&doc));
}

#[test]
fn remove_group_removes_subtree_and_nested_removal_unlinks() {
    let (doc, a, b) = two_boxes();
    let (doc, c) = add(&doc, boxed(0, 10, 3, 3));
    let (doc, group) = group_nodes(&doc, &[a.clone(), b.clone()]);
    let group = group.expect("group");

    let without_child = remove_node(&doc, &a);
    assert_eq!(without_child.children_of(&group), &[b.clone()]);
    assert_eq!(bounds_of(&without_child, &group), bounds_of(&doc, &b));
    without_child.check_invariants().expect("invariants");

    let without_group = remove_nodes(&doc, &[group.clone(), nid("ghost")]);
    assert_eq!(without_group.len(), 1);
    assert_eq!(without_group.root_order(), &[c]);
    without_group.check_invariants().expect("invariants");
}

#[test]
fn duplicate_copies_subtree_with_fresh_ids() {
    let (doc, a, b) = two_boxes();
    let (doc, group) = group_nodes(&doc, &[a, b]);
    let group = group.expect("group");

    let (next, copies) = duplicate_nodes(&doc, std::slice::from_ref(&group), 1, 1);
    assert_eq!(copies.len(), 1);
    let copy = &copies[0];
    assert_ne!(copy, &group);
    assert_eq!(next.root_order().last(), Some(copy));
    assert_eq!(next.children_of(copy).len(), 2);
    assert_eq!(bounds_of(&next, copy), bounds_of(&doc, &group).translated(1, 1));
    assert_eq!(next.len(), doc.len() + 3);
    next.check_invariants().expect("invariants");
}

#[test]
fn set_locked_toggles_flag() {
    let (doc, a, _) = two_boxes();
    let next = set_locked(&doc, &a, true);
    assert!(next.node(&a).expect("a").locked());
    assert!(!doc.node(&a).expect("a").locked());
}
