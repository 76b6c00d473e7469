// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;
use serde_json::json;

use crate::model::{Bounds, GridPoint, NodeKind, NodeType, SparseCell};

use super::{descriptor_schema, normalize_weights, validate_all, validate_descriptor, ValidationError};

#[test]
fn oversized_descriptor_is_pulled_inside_the_region() {
    let value = json!({ "type": "box", "x": 7, "y": 7, "width": 10, "height": 10 });
    let descriptor = validate_descriptor(&value, 8, 8).expect("valid");
    let b = descriptor.bounds;
    assert!(b.x >= 0 && b.y >= 0);
    assert!(b.x + b.width <= 8, "{b:?}");
    assert!(b.y + b.height <= 8, "{b:?}");
    assert_eq!(b, Bounds::new(0, 0, 8, 8));
}

#[test]
fn overflow_moves_before_it_shrinks() {
    let value = json!({ "type": "box", "x": 35, "y": 2, "width": 10, "height": 4 });
    let descriptor = validate_descriptor(&value, 40, 20).expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(30, 2, 10, 4));
}

#[test]
fn minimum_size_wins_over_a_tiny_region() {
    let value = json!({ "type": "dropdown", "x": 3, "y": 0 });
    let descriptor = validate_descriptor(&value, 4, 2).expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(0, 0, 6, 3));
}

#[test]
fn far_out_coordinates_are_clamped_without_overflow() {
    let value = json!({ "type": "box", "x": 3e9, "y": -3e9, "width": 4, "height": 3 });
    let descriptor = validate_descriptor(&value, 40, 20).expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(36, 0, 4, 3));

    let value = json!({ "type": "box", "x": 3_000_000_000i64, "y": 1, "width": 4, "height": 3 });
    let descriptor = validate_descriptor(&value, 40, 20).expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(36, 1, 4, 3));

    let value = json!({ "type": "arrow", "points": [[0, 0], [0, 3e9]] });
    let b = validate_descriptor(&value, 40, 20).expect("valid").bounds;
    assert!(b.x >= 0 && b.x + b.width <= 40, "{b:?}");
}

#[test]
fn page_count_is_capped_to_the_region_width() {
    let value = json!({ "type": "pagination", "pages": 2_147_483_647i64, "current": 3 });
    let descriptor = validate_descriptor(&value, 40, 5).expect("valid");
    assert_eq!(descriptor.kind, NodeKind::Pagination { pages: 14, current: 3 });
    assert!(descriptor.bounds.width <= 40, "{:?}", descriptor.bounds);
}

#[rstest]
#[case::not_object(json!("button"), ValidationError::NotAnObject)]
#[case::missing(json!({ "x": 1 }), ValidationError::MissingType)]
#[case::unknown(json!({ "type": "slider" }), ValidationError::UnknownType("slider".into()))]
#[case::group(json!({ "type": "group" }), ValidationError::Unsupported(NodeType::Group))]
fn invalid_descriptors_are_rejected(#[case] value: serde_json::Value, #[case] error: ValidationError) {
    assert_eq!(validate_descriptor(&value, 40, 20), Err(error));
}

#[test]
fn missing_fields_take_variant_defaults() {
    let descriptor = validate_descriptor(&json!({ "type": "tabs" }), 80, 24).expect("valid");
    assert_eq!(descriptor.kind, NodeKind::default_for(NodeType::Tabs));
    assert_eq!(descriptor.bounds.height, 3);
    assert_eq!(descriptor.name.as_str(), "tabs");
}

#[test]
fn button_is_sized_to_its_label() {
    let descriptor =
        validate_descriptor(&json!({ "type": "button", "label": "OK", "x": 2, "y": 1 }), 40, 20)
            .expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(2, 1, 6, 1));

    let forced = validate_descriptor(&json!({ "type": "button", "label": "Submit", "width": 3 }), 40, 20)
        .expect("valid");
    assert_eq!(forced.bounds.width, 10);
}

#[test]
fn numbers_may_arrive_as_floats_or_strings() {
    let value = json!({ "type": "box", "x": "4", "y": 2.6, "width": 12.2, "height": "5" });
    let descriptor = validate_descriptor(&value, 80, 24).expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(4, 3, 12, 5));
}

#[test]
fn table_weights_are_normalized_to_columns() {
    let value = json!({ "type": "table", "columns": ["a", "b", "c"], "widths": [2, 0] });
    let descriptor = validate_descriptor(&value, 80, 24).expect("valid");
    let NodeKind::Table { columns, weights } = descriptor.kind else {
        panic!("expected a table");
    };
    assert_eq!(columns.len(), 3);
    assert_eq!(weights, vec![2, 1, 1]);
    assert_eq!(normalize_weights(&[3, 4, 5, 6], 2), vec![3, 4]);
}

#[test]
fn scalar_values_are_clamped() {
    let tabs = validate_descriptor(&json!({ "type": "tabs", "tabs": ["a", "b"], "active": 9 }), 80, 24)
        .expect("valid");
    assert!(matches!(tabs.kind, NodeKind::Tabs { active: 1, .. }));

    let pages = validate_descriptor(&json!({ "type": "pagination", "pages": 4, "current": 0 }), 80, 24)
        .expect("valid");
    assert_eq!(pages.kind, NodeKind::Pagination { pages: 4, current: 1 });

    let progress = validate_descriptor(&json!({ "type": "progress", "percent": 140 }), 80, 24)
        .expect("valid");
    assert_eq!(progress.kind, NodeKind::Progress { percent: 100 });
}

#[test]
fn arrow_points_are_kept_relative_to_the_fitted_bounds() {
    let value = json!({ "type": "arrow", "x": 2, "y": 1, "points": [[0, 0], { "row": 0, "col": 5 }, [3, 5]] });
    let descriptor = validate_descriptor(&value, 40, 20).expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(2, 1, 6, 4));
    assert_eq!(
        descriptor.kind,
        NodeKind::Arrow { points: vec![GridPoint::new(0, 0), GridPoint::new(0, 5), GridPoint::new(3, 5)] }
    );
}

#[test]
fn line_without_points_spans_its_width() {
    let descriptor = validate_descriptor(&json!({ "type": "line", "x": 1, "y": 1 }), 40, 20).expect("valid");
    assert_eq!(descriptor.bounds, Bounds::new(1, 1, 10, 1));
    assert_eq!(descriptor.kind, NodeKind::Line { points: vec![GridPoint::new(0, 0), GridPoint::new(0, 9)] });
}

#[test]
fn stroke_cells_outside_the_bounds_are_dropped() {
    let value = json!({
        "type": "stroke",
        "width": 3,
        "height": 3,
        "cells": [{ "row": 1, "col": 1, "ch": "#" }, { "row": 5, "col": 5, "ch": "#" }, { "row": 0 }]
    });
    let descriptor = validate_descriptor(&value, 40, 20).expect("valid");
    assert_eq!(descriptor.kind, NodeKind::Stroke { cells: vec![SparseCell::new(1, 1, '#')] });
}

#[test]
fn validate_all_keeps_order_and_counts_rejects() {
    let values = vec![
        json!({ "type": "button", "label": "A" }),
        json!({ "type": "nope" }),
        json!({ "type": "text", "content": "hello\nworld", "name": "  greeting " }),
        json!(null),
    ];
    let (valid, rejected) = validate_all(&values, 40, 20);
    assert_eq!(rejected, 2);
    assert_eq!(valid.len(), 2);
    assert_eq!(valid[0].node_type(), NodeType::Button);
    assert_eq!(valid[1].name.as_str(), "greeting");
    assert_eq!(valid[1].bounds, Bounds::new(0, 0, 5, 2));
}

#[test]
fn schema_names_the_type_field() {
    let schema = descriptor_schema();
    let properties = schema.get("properties").expect("properties");
    assert!(properties.get("type").is_some());
    assert!(properties.get("points").is_some());
}
