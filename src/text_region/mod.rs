// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Uniform inline text editing for every widget variant.
//!
//! Each editable span is named by a [`RegionKey`]. The five operations here dispatch on the
//! variant, and all geometry comes from [`crate::layout::text_spans`], the same layout the
//! renderer stamps. Caret, insert and backspace logic above this module never looks at the
//! variant.

mod key;

pub use key::{RegionKey, RegionKeyError};

use crate::layout::{self, longest_line, line_count, split_lines, TextSpan};
use crate::model::{Bounds, GridPoint, Node, NodeKind, NodePatch};
use crate::render::text::text_len;

/// Result of [`set_text`]: the replacement payload and the bounds that fit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub kind: NodeKind,
    pub bounds: Bounds,
}

impl TextEdit {
    pub fn into_patch(self) -> NodePatch {
        NodePatch { kind: Some(self.kind), bounds: Some(self.bounds), ..NodePatch::default() }
    }
}

/// A click resolved to a text span and a character offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHit {
    pub key: RegionKey,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

fn slot(kind: &NodeKind, key: RegionKey) -> Option<&String> {
    use NodeKind as K;
    use RegionKey as R;
    match (kind, key) {
        (K::Box { label }, R::Label)
        | (K::Placeholder { label }, R::Label)
        | (K::Button { label }, R::Label)
        | (K::Checkbox { label, .. }, R::Label)
        | (K::Radio { label, .. }, R::Label)
        | (K::Dropdown { label }, R::Label)
        | (K::Toggle { label, .. }, R::Label) => Some(label),
        (K::Card { title, .. }, R::Title)
        | (K::Modal { title, .. }, R::Title)
        | (K::Nav { title, .. }, R::Title) => Some(title),
        (K::Card { content, .. }, R::Content)
        | (K::Modal { content, .. }, R::Content)
        | (K::Text { content }, R::Content) => Some(content),
        (K::Input { placeholder }, R::Placeholder) | (K::Search { placeholder }, R::Placeholder) => {
            Some(placeholder)
        }
        (K::Table { columns, .. }, R::Col(i)) => columns.get(i),
        (K::Tabs { tabs, .. }, R::Tab(i)) => tabs.get(i),
        (K::Nav { links, .. }, R::Link(i)) => links.get(i),
        (K::List { items }, R::Item(i)) | (K::Breadcrumb { items }, R::Item(i)) => items.get(i),
        _ => None,
    }
}

fn slot_mut(kind: &mut NodeKind, key: RegionKey) -> Option<&mut String> {
    use NodeKind as K;
    use RegionKey as R;
    match (kind, key) {
        (K::Box { label }, R::Label)
        | (K::Placeholder { label }, R::Label)
        | (K::Button { label }, R::Label)
        | (K::Checkbox { label, .. }, R::Label)
        | (K::Radio { label, .. }, R::Label)
        | (K::Dropdown { label }, R::Label)
        | (K::Toggle { label, .. }, R::Label) => Some(label),
        (K::Card { title, .. }, R::Title)
        | (K::Modal { title, .. }, R::Title)
        | (K::Nav { title, .. }, R::Title) => Some(title),
        (K::Card { content, .. }, R::Content)
        | (K::Modal { content, .. }, R::Content)
        | (K::Text { content }, R::Content) => Some(content),
        (K::Input { placeholder }, R::Placeholder) | (K::Search { placeholder }, R::Placeholder) => {
            Some(placeholder)
        }
        (K::Table { columns, .. }, R::Col(i)) => columns.get_mut(i),
        (K::Tabs { tabs, .. }, R::Tab(i)) => tabs.get_mut(i),
        (K::Nav { links, .. }, R::Link(i)) => links.get_mut(i),
        (K::List { items }, R::Item(i)) | (K::Breadcrumb { items }, R::Item(i)) => items.get_mut(i),
        _ => None,
    }
}

/// Every key `node` can address, in layout order.
pub fn regions(node: &Node) -> Vec<RegionKey> {
    use NodeKind as K;
    use RegionKey as R;
    let indexed = |len: usize, make: fn(usize) -> RegionKey| (0..len).map(make).collect::<Vec<_>>();
    match node.kind() {
        K::Box { .. }
        | K::Placeholder { .. }
        | K::Button { .. }
        | K::Checkbox { .. }
        | K::Radio { .. }
        | K::Dropdown { .. }
        | K::Toggle { .. } => vec![R::Label],
        K::Card { .. } | K::Modal { .. } => vec![R::Title, R::Content],
        K::Text { .. } => vec![R::Content],
        K::Input { .. } | K::Search { .. } => vec![R::Placeholder],
        K::Table { columns, .. } => indexed(columns.len(), R::Col),
        K::Tabs { tabs, .. } => indexed(tabs.len(), R::Tab),
        K::Nav { links, .. } => {
            let mut keys = vec![R::Title];
            keys.extend(indexed(links.len(), R::Link));
            keys
        }
        K::List { items } | K::Breadcrumb { items } => indexed(items.len(), R::Item),
        K::Hsplit { .. }
        | K::Progress { .. }
        | K::Pagination { .. }
        | K::Line { .. }
        | K::Arrow { .. }
        | K::Stroke { .. }
        | K::Group { .. } => Vec::new(),
    }
}

pub fn get_text(node: &Node, key: RegionKey) -> Option<&str> {
    slot(node.kind(), key).map(String::as_str)
}

/// Replaces the text at `key` and computes bounds that fit it.
///
/// Buttons, checkboxes, radios, toggles, lists, breadcrumbs and text nodes are sized to their
/// content exactly; every other variant only grows. `None` when the key does not address a
/// span of this node.
pub fn set_text(node: &Node, key: RegionKey, text: &str) -> Option<TextEdit> {
    let mut kind = node.kind().clone();
    *slot_mut(&mut kind, key)? = text.to_owned();

    let b = node.bounds();
    let grow = |width: i32, height: i32| Bounds::new(b.x, b.y, b.width.max(width), b.height.max(height));
    let len = |s: &str| text_len(s) as i32;

    let bounds = match &kind {
        NodeKind::Button { label } | NodeKind::Checkbox { label, .. } | NodeKind::Radio { label, .. } => {
            Bounds::new(b.x, b.y, len(label) + 4, b.height)
        }
        NodeKind::Toggle { label, .. } => Bounds::new(b.x, b.y, len(label) + 5, b.height),
        NodeKind::List { items } => {
            let widest = items.iter().map(|item| len(item)).max().unwrap_or(0);
            Bounds::new(b.x, b.y, widest + 2, items.len() as i32)
        }
        NodeKind::Breadcrumb { items } => Bounds::new(b.x, b.y, layout::breadcrumb_width(items), b.height),
        NodeKind::Text { content } => Bounds::new(b.x, b.y, longest_line(content), line_count(content)),
        NodeKind::Box { label } | NodeKind::Placeholder { label } => grow(len(label) + 2, 0),
        NodeKind::Dropdown { label } => grow(len(label) + 6, 0),
        NodeKind::Input { placeholder } => grow(len(placeholder) + 4, 0),
        NodeKind::Search { placeholder } => grow(len(placeholder) + 6, 0),
        NodeKind::Card { title, content } | NodeKind::Modal { title, content } => {
            let decoration = if matches!(kind, NodeKind::Modal { .. }) { 6 } else { 4 };
            let width = (len(title) + decoration).max(longest_line(content) + 4);
            grow(width, line_count(content) + 4)
        }
        NodeKind::Table { columns, .. } => grow(layout::table_required_width(columns), 0),
        NodeKind::Tabs { tabs, .. } => grow(layout::tab_strip_width(tabs), 0),
        NodeKind::Nav { title, links } => grow(layout::nav_required_width(title, links), 0),
        NodeKind::Hsplit { .. }
        | NodeKind::Progress { .. }
        | NodeKind::Pagination { .. }
        | NodeKind::Line { .. }
        | NodeKind::Arrow { .. }
        | NodeKind::Stroke { .. }
        | NodeKind::Group { .. } => b,
    };

    Some(TextEdit { bounds: node.node_type().clamp_bounds(bounds), kind })
}

fn span_for(node: &Node, key: RegionKey) -> Option<TextSpan<'_>> {
    layout::text_spans(node).into_iter().find(|span| span.key == key)
}

/// `(line, column)` of a character offset inside `text`. Offsets past the end clamp to it.
fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut remaining = offset;
    let lines = split_lines(text);
    for (i, line) in lines.iter().enumerate() {
        let len = text_len(line);
        if remaining <= len || i + 1 == lines.len() {
            return (i, remaining.min(len));
        }
        remaining -= len + 1;
    }
    (0, 0)
}

fn offset_of(text: &str, line: usize, col: usize) -> usize {
    let lines = split_lines(text);
    let line = line.min(lines.len() - 1);
    let before: usize = lines[..line].iter().map(|l| text_len(l) + 1).sum();
    before + col.min(text_len(lines[line]))
}

/// Maps a clicked cell to the span under it and the caret offset the click implies.
///
/// Decorations (`[ ` of a button, the bullet of a list item, ...) sit outside the text span, so
/// clicks on them clamp to the nearest end of the text.
pub fn detect_region(node: &Node, row: i32, col: i32) -> Option<RegionHit> {
    let span = layout::text_spans(node)
        .into_iter()
        .find(|span| span.max_lines > 0 && span.hit.contains(row, col))?;

    let line = usize::try_from(row - span.origin.row).unwrap_or(0);
    let column = usize::try_from(col - span.origin.col).unwrap_or(0);
    let offset = if span.is_multiline() {
        offset_of(span.text, line, column)
    } else {
        column.min(text_len(span.text))
    };
    Some(RegionHit { key: span.key, offset })
}

/// Grid cell of the caret at `offset` inside the span `key`.
pub fn cursor_to_grid(node: &Node, key: RegionKey, offset: usize) -> Option<GridPoint> {
    let span = span_for(node, key)?;
    let (line, column) = if span.is_multiline() {
        line_col(span.text, offset)
    } else {
        (0, offset.min(text_len(span.text)))
    };
    Some(span.origin.offset(line as i32, column as i32))
}

/// Moves a caret inside the span `key`. Left/right step one character and clamp to the text;
/// up/down only move in multi-line spans and keep the column where the target line allows.
pub fn move_cursor(node: &Node, key: RegionKey, offset: usize, direction: CursorMove) -> usize {
    let Some(text) = get_text(node, key) else {
        return offset;
    };
    let len = text_len(text);
    let offset = offset.min(len);
    let multiline = matches!(key, RegionKey::Content);

    match direction {
        CursorMove::Left => offset.saturating_sub(1),
        CursorMove::Right => (offset + 1).min(len),
        CursorMove::Up | CursorMove::Down if !multiline => offset,
        CursorMove::Up => {
            let (line, column) = line_col(text, offset);
            if line == 0 {
                offset
            } else {
                offset_of(text, line - 1, column)
            }
        }
        CursorMove::Down => {
            let (line, column) = line_col(text, offset);
            if line + 1 >= split_lines(text).len() {
                offset
            } else {
                offset_of(text, line + 1, column)
            }
        }
    }
}

#[cfg(test)]
mod tests;
