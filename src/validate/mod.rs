// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Validation and repair of loosely-typed external node descriptors.
//!
//! External producers (the generation backend, JSON files handed to the binary) describe nodes
//! as `{ "type": "button", "x": 2, "y": 1, "label": "OK", ... }`. Parsing is best-effort per
//! item: an unknown `type` rejects the item, missing fields get defaults, numbers may arrive as
//! floats or strings, and geometry is clamped into the target region instead of rejected.

use std::fmt;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::layout::{self, longest_line, line_count};
use crate::model::{Bounds, GridPoint, NodeDescriptor, NodeKind, NodeType, SparseCell};
use crate::polyline::polyline_descriptor;
use crate::render::text::text_len;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotAnObject,
    MissingType,
    UnknownType(String),
    /// Known variant that external descriptors may not create.
    Unsupported(NodeType),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("descriptor is not a JSON object"),
            Self::MissingType => f.write_str("descriptor has no \"type\""),
            Self::UnknownType(raw) => write!(f, "unknown node type '{raw}'"),
            Self::Unsupported(ty) => write!(f, "node type '{ty}' cannot be created from a descriptor"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Shape of an external descriptor, as advertised to producers through [`descriptor_schema`].
///
/// Validation reads descriptors leniently from raw JSON; this type only documents the fields.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LooseDescriptor {
    /// Widget variant.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: Option<String>,
    /// Column, relative to the target region.
    pub x: Option<i64>,
    /// Row, relative to the target region.
    pub y: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub label: Option<String>,
    pub title: Option<String>,
    /// Body text; may contain newlines.
    pub content: Option<String>,
    pub placeholder: Option<String>,
    /// Table column headers.
    pub columns: Option<Vec<String>>,
    /// Proportional table column widths, one per column.
    pub weights: Option<Vec<u32>>,
    pub tabs: Option<Vec<String>>,
    /// Index of the active tab.
    pub active: Option<u32>,
    pub links: Option<Vec<String>>,
    /// List or breadcrumb entries.
    pub items: Option<Vec<String>>,
    pub checked: Option<bool>,
    pub selected: Option<bool>,
    pub on: Option<bool>,
    /// Progress in percent (0-100).
    pub percent: Option<u8>,
    /// Horizontal split position in percent (0-100).
    pub ratio: Option<u8>,
    pub pages: Option<u32>,
    pub current: Option<u32>,
    /// Line/arrow waypoints `[row, col]`, relative to `x`/`y`.
    pub points: Option<Vec<[i32; 2]>>,
    /// Freeform stroke cells, relative to `x`/`y`.
    pub cells: Option<Vec<LooseCell>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LooseCell {
    pub row: i32,
    pub col: i32,
    pub ch: char,
}

/// JSON schema of a single external descriptor.
pub fn descriptor_schema() -> Value {
    schemars::schema_for!(LooseDescriptor).to_value()
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn int_of(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64))?,
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64)?,
        _ => return None,
    };
    Some(saturate(n))
}

fn int(obj: &Map<String, Value>, key: &str) -> Option<i32> {
    obj.get(key).and_then(int_of)
}

fn string_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(string_of))
}

fn flag(obj: &Map<String, Value>, key: &str) -> Option<bool> {
    match obj.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// A non-empty list of strings. Non-string scalars are stringified, other entries skipped.
fn strings(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let list: Vec<String> = obj.get(key)?.as_array()?.iter().filter_map(string_of).collect();
    (!list.is_empty()).then_some(list)
}

fn point_of(value: &Value) -> Option<GridPoint> {
    match value {
        Value::Array(pair) if pair.len() == 2 => Some(GridPoint::new(int_of(&pair[0])?, int_of(&pair[1])?)),
        Value::Object(obj) => Some(GridPoint::new(int(obj, "row")?, int(obj, "col")?)),
        _ => None,
    }
}

fn points(obj: &Map<String, Value>) -> Vec<GridPoint> {
    let Some(list) = obj.get("points").and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter().filter_map(point_of).collect()
}

fn cells(obj: &Map<String, Value>) -> Vec<SparseCell> {
    let Some(list) = obj.get("cells").and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .filter_map(|cell| {
            let cell = cell.as_object()?;
            let ch = text(cell, &["ch", "char"])?.chars().next()?;
            Some(SparseCell::new(int(cell, "row")?, int(cell, "col")?, ch))
        })
        .collect()
}

/// One weight per column; missing or zero weights become 1.
pub fn normalize_weights(weights: &[u32], columns: usize) -> Vec<u32> {
    (0..columns).map(|i| weights.get(i).copied().filter(|w| *w > 0).unwrap_or(1)).collect()
}

fn weights(obj: &Map<String, Value>) -> Vec<u32> {
    let Some(list) = obj.get("weights").or_else(|| obj.get("widths")).and_then(Value::as_array)
    else {
        return Vec::new();
    };
    list.iter().map(|w| int_of(w).map_or(0, |w| w.max(0) as u32)).collect()
}

fn percent(value: Option<i32>, default: u8) -> u8 {
    value.map_or(default, |v| v.clamp(0, 100) as u8)
}

/// Variant payload with every missing field taken from the variant's defaults.
fn build_kind(defaults: NodeKind, obj: &Map<String, Value>, region_width: i32) -> NodeKind {
    use NodeKind as K;
    match defaults {
        K::Box { label } => K::Box { label: text(obj, &["label", "text"]).unwrap_or(label) },
        K::Card { title, content } => K::Card {
            title: text(obj, &["title", "label"]).unwrap_or(title),
            content: text(obj, &["content", "text"]).unwrap_or(content),
        },
        K::Table { columns, .. } => {
            let columns = strings(obj, "columns").unwrap_or(columns);
            let weights = normalize_weights(&weights(obj), columns.len());
            K::Table { columns, weights }
        }
        K::Hsplit { ratio } => K::Hsplit { ratio: percent(int(obj, "ratio"), ratio) },
        K::Placeholder { label } => K::Placeholder { label: text(obj, &["label", "text"]).unwrap_or(label) },
        K::Button { label } => K::Button { label: text(obj, &["label", "text"]).unwrap_or(label) },
        K::Checkbox { label, checked } => K::Checkbox {
            label: text(obj, &["label", "text"]).unwrap_or(label),
            checked: flag(obj, "checked").unwrap_or(checked),
        },
        K::Radio { label, selected } => K::Radio {
            label: text(obj, &["label", "text"]).unwrap_or(label),
            selected: flag(obj, "selected").or_else(|| flag(obj, "checked")).unwrap_or(selected),
        },
        K::Input { placeholder } => K::Input { placeholder: text(obj, &["placeholder", "label"]).unwrap_or(placeholder) },
        K::Dropdown { label } => K::Dropdown { label: text(obj, &["label", "placeholder"]).unwrap_or(label) },
        K::Tabs { tabs, active } => {
            let tabs = strings(obj, "tabs").or_else(|| strings(obj, "items")).unwrap_or(tabs);
            let active = int(obj, "active").map_or(active, |a| a.max(0) as usize).min(tabs.len().saturating_sub(1));
            K::Tabs { tabs, active }
        }
        K::Nav { title, links } => K::Nav {
            title: text(obj, &["title", "label"]).unwrap_or(title),
            links: strings(obj, "links").or_else(|| strings(obj, "items")).unwrap_or(links),
        },
        K::List { items } => K::List { items: strings(obj, "items").unwrap_or(items) },
        K::Modal { title, content } => K::Modal {
            title: text(obj, &["title", "label"]).unwrap_or(title),
            content: text(obj, &["content", "text"]).unwrap_or(content),
        },
        K::Search { placeholder } => K::Search { placeholder: text(obj, &["placeholder", "label"]).unwrap_or(placeholder) },
        K::Toggle { label, on } => K::Toggle {
            label: text(obj, &["label", "text"]).unwrap_or(label),
            on: flag(obj, "on").or_else(|| flag(obj, "checked")).unwrap_or(on),
        },
        K::Progress { percent: value } => K::Progress { percent: percent(int(obj, "percent").or_else(|| int(obj, "value")), value) },
        K::Breadcrumb { items } => K::Breadcrumb { items: strings(obj, "items").unwrap_or(items) },
        K::Pagination { pages, current } => {
            let pages = int(obj, "pages")
                .map_or(pages, |p| p.max(1) as u32)
                .min(layout::pagination_max_pages(region_width));
            let current = int(obj, "current").map_or(current, |c| c.max(1) as u32).clamp(1, pages);
            K::Pagination { pages, current }
        }
        K::Line { .. } => K::Line { points: points(obj) },
        K::Arrow { .. } => K::Arrow { points: points(obj) },
        K::Text { content } => K::Text { content: text(obj, &["content", "text", "label"]).unwrap_or(content) },
        K::Stroke { .. } => K::Stroke { cells: cells(obj) },
        K::Group { child_ids } => K::Group { child_ids },
    }
}

fn extent<I: IntoIterator<Item = (i32, i32)>>(offsets: I) -> (i32, i32) {
    offsets
        .into_iter()
        .fold((1, 1), |(w, h), (row, col)| (w.max(col.saturating_add(1)), h.max(row.saturating_add(1))))
}

/// Size a widget takes when the descriptor does not ask for one.
fn natural_size(kind: &NodeKind) -> (i32, i32) {
    let len = |s: &str| text_len(s) as i32;
    match kind {
        NodeKind::Box { label } => ((len(label) + 4).max(10), 5),
        NodeKind::Card { title, content } => {
            ((len(title) + 4).max(longest_line(content) + 4).max(20), (line_count(content) + 4).max(6))
        }
        NodeKind::Table { columns, .. } => (layout::table_required_width(columns).max(30), 5),
        NodeKind::Hsplit { .. } => (30, 8),
        NodeKind::Placeholder { label } => ((len(label) + 4).max(12), 5),
        NodeKind::Button { label } | NodeKind::Checkbox { label, .. } | NodeKind::Radio { label, .. } => {
            (len(label) + 4, 1)
        }
        NodeKind::Toggle { label, .. } => (len(label) + 5, 1),
        NodeKind::Input { placeholder } => ((len(placeholder) + 4).max(20), 3),
        NodeKind::Search { placeholder } => ((len(placeholder) + 6).max(20), 3),
        NodeKind::Dropdown { label } => ((len(label) + 6).max(16), 3),
        NodeKind::Tabs { tabs, .. } => (layout::tab_strip_width(tabs), 3),
        NodeKind::Nav { title, links } => (layout::nav_required_width(title, links), 3),
        NodeKind::List { items } => {
            (items.iter().map(|item| len(item)).max().unwrap_or(0) + 2, items.len() as i32)
        }
        NodeKind::Modal { title, content } => {
            ((len(title) + 6).max(longest_line(content) + 4).max(30), (line_count(content) + 4).max(8))
        }
        NodeKind::Progress { .. } => (12, 1),
        NodeKind::Breadcrumb { items } => (layout::breadcrumb_width(items), 1),
        NodeKind::Pagination { pages, current } => (len(&layout::pagination_label(*pages, *current, usize::MAX)), 1),
        NodeKind::Line { points } | NodeKind::Arrow { points } if points.len() < 2 => (10, 1),
        NodeKind::Line { points } | NodeKind::Arrow { points } => {
            extent(points.iter().map(|p| (p.row, p.col)))
        }
        NodeKind::Text { content } => (longest_line(content), line_count(content)),
        NodeKind::Stroke { cells } => extent(cells.iter().map(|c| (c.row, c.col))),
        NodeKind::Group { .. } => (1, 1),
    }
}

/// Width the layout needs regardless of what the descriptor asked for.
fn derived_min_width(kind: &NodeKind) -> i32 {
    match kind {
        NodeKind::Tabs { tabs, .. } => layout::tab_strip_width(tabs),
        NodeKind::Button { .. }
        | NodeKind::Checkbox { .. }
        | NodeKind::Radio { .. }
        | NodeKind::Toggle { .. } => natural_size(kind).0,
        _ => 1,
    }
}

/// Clamps one axis into `0..limit`: shrink to the limit first, then move back inside.
/// The variant minimum wins over the limit, in which case the node starts at 0.
fn fit_axis(pos: i32, size: i32, min: i32, limit: i32) -> (i32, i32) {
    let limit = limit.max(1);
    let size = size.min(limit).max(min);
    (pos.min(limit - size).max(0), size)
}

fn clamp_points(points: &mut Vec<GridPoint>, width: i32, height: i32) {
    for point in points.iter_mut() {
        point.row = point.row.clamp(0, height - 1);
        point.col = point.col.clamp(0, width - 1);
    }
}

/// Validates one descriptor against a target region of `region_width` x `region_height` cells.
///
/// The returned descriptor is positioned relative to the region origin; callers translate it
/// by the region's position before adding it to a document.
pub fn validate_descriptor(
    value: &Value,
    region_width: i32,
    region_height: i32,
) -> Result<NodeDescriptor, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;
    let raw_type = obj.get("type").and_then(Value::as_str).ok_or(ValidationError::MissingType)?;
    let ty: NodeType = raw_type.parse().map_err(|_| ValidationError::UnknownType(raw_type.to_owned()))?;
    if ty == NodeType::Group {
        return Err(ValidationError::Unsupported(ty));
    }

    let mut kind = build_kind(NodeKind::default_for(ty), obj, region_width);
    let (natural_w, natural_h) = natural_size(&kind);
    let requested_w = int(obj, "width").filter(|w| *w > 0).unwrap_or(natural_w);
    let requested_h = int(obj, "height").filter(|h| *h > 0).unwrap_or(natural_h);
    let (min_w, min_h) = ty.min_size();

    let (x, width) = fit_axis(
        int(obj, "x").unwrap_or(0),
        requested_w.max(derived_min_width(&kind)),
        min_w,
        region_width,
    );
    let (y, height) = fit_axis(int(obj, "y").unwrap_or(0), requested_h, min_h, region_height);

    match &mut kind {
        NodeKind::Line { points } | NodeKind::Arrow { points } => {
            if points.len() < 2 {
                *points = vec![GridPoint::new(0, 0), GridPoint::new(0, width - 1)];
            }
            clamp_points(points, width, height);
            let arrow = ty == NodeType::Arrow;
            let absolute: Vec<GridPoint> = points.iter().map(|p| p.offset(y, x)).collect();
            if let Some(descriptor) = polyline_descriptor(&absolute, arrow) {
                return Ok(with_name(descriptor, obj));
            }
        }
        NodeKind::Stroke { cells } => {
            cells.retain(|c| c.row >= 0 && c.row < height && c.col >= 0 && c.col < width);
        }
        _ => {}
    }

    Ok(with_name(NodeDescriptor::new(Bounds::new(x, y, width, height), kind), obj))
}

fn with_name(descriptor: NodeDescriptor, obj: &Map<String, Value>) -> NodeDescriptor {
    match text(obj, &["name"]) {
        Some(name) if !name.trim().is_empty() => descriptor.with_name(name.trim()),
        _ => descriptor,
    }
}

/// Validates every descriptor, dropping (and logging) the invalid ones.
///
/// Returns the valid descriptors in input order plus the number rejected.
pub fn validate_all<'a>(
    values: impl IntoIterator<Item = &'a Value>,
    region_width: i32,
    region_height: i32,
) -> (Vec<NodeDescriptor>, usize) {
    let mut valid = Vec::new();
    let mut rejected = 0;
    for (index, value) in values.into_iter().enumerate() {
        match validate_descriptor(value, region_width, region_height) {
            Ok(descriptor) => valid.push(descriptor),
            Err(err) => {
                warn!(index, error = %err, "dropping invalid descriptor");
                rejected += 1;
            }
        }
    }
    (valid, rejected)
}

#[cfg(test)]
mod tests;
