// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use crate::model::fixtures::{add, button};
use crate::model::{Bounds, Document, GridPoint, Node, NodeDescriptor, NodeId, NodeKind, NodeType};
use crate::ops::update_node;

use super::{
    cursor_to_grid, detect_region, get_text, move_cursor, regions, set_text, CursorMove,
    RegionHit, RegionKey,
};

fn node(bounds: Bounds, kind: NodeKind) -> Node {
    Node::from_descriptor(NodeId::from_seq(1), NodeDescriptor::new(bounds, kind))
}

fn text_node(content: &str) -> Node {
    let edit = set_text(
        &node(Bounds::new(0, 0, 1, 1), NodeKind::Text { content: String::new() }),
        RegionKey::Content,
        content,
    )
    .expect("text edit");
    node(edit.bounds, edit.kind)
}

#[test]
fn button_scenario_width_and_caret() {
    let (doc, id) = add(&Document::new(5, 20), button(0, 0, "OK"));
    let node = doc.node(&id).expect("button");
    assert_eq!(node.bounds().width, 6);
    assert_eq!(cursor_to_grid(node, RegionKey::Label, 0), Some(GridPoint::new(0, 2)));
    assert_eq!(cursor_to_grid(node, RegionKey::Label, 9), Some(GridPoint::new(0, 4)));
}

#[test]
fn every_variant_key_round_trips_through_get_and_set() {
    for ty in NodeType::ALL {
        let original = node(Bounds::new(0, 0, 30, 8), NodeKind::default_for(ty));
        for key in regions(&original) {
            let edit = set_text(&original, key, "changed").expect("settable key");
            let updated = node(edit.bounds, edit.kind);
            assert_eq!(get_text(&updated, key), Some("changed"), "{ty} {key}");
        }
    }
}

#[rstest]
#[case::button(NodeType::Button, "Submit", 10, 1)]
#[case::checkbox(NodeType::Checkbox, "Accept", 10, 1)]
#[case::toggle(NodeType::Toggle, "Dark", 9, 1)]
fn single_row_widgets_fit_label(
    #[case] ty: NodeType,
    #[case] label: &str,
    #[case] width: i32,
    #[case] height: i32,
) {
    let original = node(Bounds::new(3, 4, 20, 1), NodeKind::default_for(ty));
    let edit = set_text(&original, RegionKey::Label, label).expect("edit");
    assert_eq!(edit.bounds, Bounds::new(3, 4, width, height));
}

#[test]
fn text_node_sizes_to_lines() {
    let node = text_node("ab\nlonger line\nc");
    assert_eq!(node.bounds(), Bounds::new(0, 0, 11, 3));
}

#[test]
fn list_sizes_to_items_and_bordered_widgets_only_grow() {
    let list = node(Bounds::new(0, 0, 20, 5), NodeKind::List { items: vec!["a".into(), "b".into()] });
    let edit = set_text(&list, RegionKey::Item(1), "bravo").expect("edit");
    assert_eq!(edit.bounds, Bounds::new(0, 0, 7, 2));

    let boxed = node(Bounds::new(0, 0, 20, 5), NodeKind::Box { label: String::new() });
    let edit = set_text(&boxed, RegionKey::Label, "hi").expect("edit");
    assert_eq!(edit.bounds, Bounds::new(0, 0, 20, 5));
    let edit = set_text(&boxed, RegionKey::Label, "a label far wider than the box").expect("edit");
    assert_eq!(edit.bounds.width, 32);
}

#[test]
fn unknown_or_out_of_range_keys_are_rejected() {
    let tabs = node(Bounds::new(0, 0, 30, 3), NodeKind::default_for(NodeType::Tabs));
    assert!(set_text(&tabs, RegionKey::Tab(7), "x").is_none());
    assert!(set_text(&tabs, RegionKey::Label, "x").is_none());
    assert_eq!(get_text(&tabs, RegionKey::Tab(1)), Some("Tab 2"));
    let line = node(Bounds::new(0, 0, 3, 3), NodeKind::default_for(NodeType::Line));
    assert!(regions(&line).is_empty());
}

#[test]
fn detect_region_clamps_clicks_on_decorations() {
    let (doc, id) = add(&Document::new(5, 20), button(4, 1, "OK"));
    let node = doc.node(&id).expect("button");
    assert_eq!(detect_region(node, 1, 4), Some(RegionHit { key: RegionKey::Label, offset: 0 }));
    assert_eq!(detect_region(node, 1, 7), Some(RegionHit { key: RegionKey::Label, offset: 1 }));
    assert_eq!(detect_region(node, 1, 9), Some(RegionHit { key: RegionKey::Label, offset: 2 }));
    assert_eq!(detect_region(node, 2, 7), None);
}

#[test]
fn detect_region_finds_indexed_spans() {
    let tabs = node(
        Bounds::new(0, 0, 20, 3),
        NodeKind::Tabs { tabs: vec!["One".into(), "Two".into()], active: 0 },
    );
    assert_eq!(detect_region(&tabs, 1, 8), Some(RegionHit { key: RegionKey::Tab(1), offset: 0 }));
    assert_eq!(detect_region(&tabs, 1, 4), Some(RegionHit { key: RegionKey::Tab(0), offset: 2 }));

    let nav = node(Bounds::new(0, 0, 30, 3), NodeKind::default_for(NodeType::Nav));
    assert_eq!(detect_region(&nav, 1, 10), Some(RegionHit { key: RegionKey::Link(0), offset: 1 }));
}

#[test]
fn detect_and_cursor_are_inverse_for_multiline_text() {
    let node = text_node("ab\ncde");
    let hit = detect_region(&node, 1, 2).expect("hit");
    assert_eq!(hit, RegionHit { key: RegionKey::Content, offset: 5 });
    assert_eq!(cursor_to_grid(&node, RegionKey::Content, hit.offset), Some(GridPoint::new(1, 2)));
    assert_eq!(cursor_to_grid(&node, RegionKey::Content, 2), Some(GridPoint::new(0, 2)));
}

#[test]
fn card_content_caret_starts_below_divider() {
    let card = node(Bounds::new(1, 1, 20, 6), NodeKind::default_for(NodeType::Card));
    assert_eq!(cursor_to_grid(&card, RegionKey::Title, 0), Some(GridPoint::new(2, 3)));
    assert_eq!(cursor_to_grid(&card, RegionKey::Content, 0), Some(GridPoint::new(4, 3)));
}

#[rstest]
#[case::left(4, CursorMove::Left, 3)]
#[case::left_at_start(0, CursorMove::Left, 0)]
#[case::right_at_end(9, CursorMove::Right, 9)]
#[case::up_keeps_column(4, CursorMove::Up, 1)]
#[case::up_clamps_to_shorter_line(9, CursorMove::Up, 2)]
#[case::down(1, CursorMove::Down, 4)]
#[case::down_on_last_line(7, CursorMove::Down, 7)]
fn move_cursor_in_multiline_text(
    #[case] offset: usize,
    #[case] direction: CursorMove,
    #[case] expected: usize,
) {
    let node = text_node("ab\ncdefgh");
    assert_eq!(move_cursor(&node, RegionKey::Content, offset, direction), expected);
}

#[test]
fn vertical_moves_are_noops_on_single_line_spans() {
    let (doc, id) = add(&Document::new(5, 20), button(0, 0, "Save"));
    let node = doc.node(&id).expect("button");
    assert_eq!(move_cursor(node, RegionKey::Label, 2, CursorMove::Up), 2);
    assert_eq!(move_cursor(node, RegionKey::Label, 2, CursorMove::Right), 3);
}

#[test]
fn edit_applies_as_patch() {
    let (doc, id) = add(&Document::new(5, 20), button(0, 0, "OK"));
    let edit = set_text(doc.node(&id).expect("button"), RegionKey::Label, "Cancel").expect("edit");
    let next = update_node(&doc, &id, &edit.into_patch());
    let node = next.node(&id).expect("button");
    assert_eq!(get_text(node, RegionKey::Label), Some("Cancel"));
    assert_eq!(node.bounds().width, 10);
}
