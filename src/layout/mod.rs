// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-variant layout of a node's text and decorations on the grid.
//!
//! This is the single source of truth for where each widget puts its text. The renderer stamps
//! [`TextSpan`]s and the text-region addressing maps clicks and carets through the same spans,
//! so the two cannot drift apart.

use smallvec::SmallVec;

use crate::model::{Bounds, GridPoint, Node, NodeKind};
use crate::render::text::text_len;
use crate::text_region::RegionKey;

/// Columns taken by a tab's decoration: the divider and one space on each side of the label.
pub const TAB_DECORATION: i32 = 3;
/// Spaces between nav links.
pub const NAV_LINK_GAP: i32 = 2;
/// Separator between breadcrumb items.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// One editable text span of a node, in absolute grid coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan<'a> {
    pub key: RegionKey,
    /// Cell of the first character of the first line.
    pub origin: GridPoint,
    pub text: &'a str,
    /// Visible characters per line; anything beyond is clipped.
    pub max_width: i32,
    /// Visible lines; `1` for single-line spans.
    pub max_lines: i32,
    /// Cells that address this span when clicked.
    pub hit: Bounds,
}

impl TextSpan<'_> {
    pub fn is_multiline(&self) -> bool {
        matches!(self.key, RegionKey::Content)
    }
}

/// Splits `text` into lines on `'\n'`. Always yields at least one (possibly empty) line.
pub(crate) fn split_lines(text: &str) -> SmallVec<[&str; 4]> {
    let mut lines = SmallVec::new();
    let mut start = 0;
    for end in memchr::memchr_iter(b'\n', text.as_bytes()) {
        lines.push(&text[start..end]);
        start = end + 1;
    }
    lines.push(&text[start..]);
    lines
}

pub(crate) fn longest_line(text: &str) -> i32 {
    split_lines(text).iter().map(|line| text_len(line) as i32).max().unwrap_or(0)
}

pub(crate) fn line_count(text: &str) -> i32 {
    memchr::memchr_iter(b'\n', text.as_bytes()).count() as i32 + 1
}

fn len(text: &str) -> i32 {
    text_len(text) as i32
}

fn row_hit(row: i32, col0: i32, col1: i32) -> Bounds {
    Bounds::new(col0, row, col1 - col0 + 1, 1)
}

fn inner_hit(b: Bounds, row0: i32, row1: i32) -> Bounds {
    Bounds::new(b.x + 1, row0, b.width - 2, row1 - row0 + 1)
}

/// Relative column offsets of the internal dividers of a table `width` cells wide.
///
/// Column `i` gets a share of the interior proportional to `weights[i]` (missing or zero weights
/// count as 1). Dividers are strictly increasing and stay inside the outer border.
pub fn table_dividers(width: i32, weights: &[u32], columns: usize) -> Vec<i32> {
    if columns < 2 {
        return Vec::new();
    }
    let weight = |i: usize| i64::from(weights.get(i).copied().unwrap_or(1).max(1));
    let total: i64 = (0..columns).map(weight).sum();
    let span = i64::from(width - 1);

    let mut out = Vec::with_capacity(columns - 1);
    let mut prev = 0i32;
    let mut cumulative = 0i64;
    for i in 0..columns - 1 {
        cumulative += weight(i);
        let ideal = ((span * cumulative + total / 2) / total) as i32;
        let remaining = (columns - 1 - i) as i32;
        let max = (width - 1 - remaining).max(prev + 1);
        let pos = ideal.clamp(prev + 1, max);
        if pos >= width - 1 {
            break;
        }
        out.push(pos);
        prev = pos;
    }
    out
}

/// Left/right relative border columns of table column `index`.
pub fn table_column_edges(width: i32, dividers: &[i32], index: usize) -> (i32, i32) {
    let left = if index == 0 { 0 } else { dividers.get(index - 1).copied().unwrap_or(width - 1) };
    let right = dividers.get(index).copied().unwrap_or(width - 1);
    (left, right)
}

/// Smallest table width that shows every column header.
pub fn table_required_width(columns: &[String]) -> i32 {
    columns.iter().map(|column| len(column) + TAB_DECORATION).sum::<i32>() + 1
}

/// Relative column of the hsplit divider.
pub fn hsplit_divider(width: i32, ratio: u8) -> i32 {
    let ideal = (width - 1) * i32::from(ratio.min(100)) / 100;
    ideal.clamp(1, (width - 2).max(1))
}

/// Relative start columns of each tab's divider, plus the closing divider.
pub fn tab_offsets(tabs: &[String]) -> SmallVec<[i32; 8]> {
    let mut offsets = SmallVec::with_capacity(tabs.len() + 1);
    let mut offset = 0;
    offsets.push(offset);
    for tab in tabs {
        offset += len(tab) + TAB_DECORATION;
        offsets.push(offset);
    }
    offsets
}

/// Width of the concatenated tab strip (`│ A │ B │`).
pub fn tab_strip_width(tabs: &[String]) -> i32 {
    tab_offsets(tabs).last().copied().unwrap_or(0) + 1
}

/// Relative column of the nav title followed by each link.
pub fn nav_offsets(title: &str, links: &[String]) -> SmallVec<[i32; 8]> {
    let mut offsets = SmallVec::with_capacity(links.len() + 1);
    let mut col = 2;
    offsets.push(col);
    col += len(title) + NAV_LINK_GAP;
    for link in links {
        offsets.push(col);
        col += len(link) + NAV_LINK_GAP;
    }
    offsets
}

pub fn nav_required_width(title: &str, links: &[String]) -> i32 {
    let last = links.last().map(|link| len(link)).unwrap_or(len(title));
    nav_offsets(title, links).last().copied().unwrap_or(2) + last + 2
}

pub fn breadcrumb_offsets(items: &[String]) -> SmallVec<[i32; 8]> {
    let mut offsets = SmallVec::with_capacity(items.len());
    let mut col = 0;
    for item in items {
        offsets.push(col);
        col += len(item) + len(BREADCRUMB_SEPARATOR);
    }
    offsets
}

pub fn breadcrumb_width(items: &[String]) -> i32 {
    let separators = len(BREADCRUMB_SEPARATOR) * (items.len() as i32 - 1).max(0);
    items.iter().map(|item| len(item)).sum::<i32>() + separators
}

/// `‹ 1 [2] 3 ›` with the current page bracketed.
///
/// Page numbers stop once they would exceed `max_width` characters; the closing `›` is only
/// written when every page fits.
pub fn pagination_label(pages: u32, current: u32, max_width: usize) -> String {
    let mut out = String::from("‹");
    let mut width = 1;
    let mut buf = itoa::Buffer::new();
    for page in 1..=pages.max(1) {
        let number = buf.format(page);
        let bracket = if page == current { 2 } else { 0 };
        width += 1 + number.len() + bracket;
        if width > max_width {
            return out;
        }
        out.push(' ');
        if page == current {
            out.push('[');
            out.push_str(number);
            out.push(']');
        } else {
            out.push_str(number);
        }
    }
    out.push_str(" ›");
    out
}

/// Largest page count whose full label fits in `width` columns, assuming one page is
/// bracketed. Never less than 1.
pub fn pagination_max_pages(width: i32) -> u32 {
    // `‹`, ` ›` and the current page's brackets.
    let mut used = 5;
    let mut pages = 0u32;
    let mut buf = itoa::Buffer::new();
    loop {
        let next = used + 1 + buf.format(pages + 1).len() as i32;
        if next > width {
            break;
        }
        used = next;
        pages += 1;
    }
    pages.max(1)
}

/// All text spans of `node`, in key order.
pub fn text_spans(node: &Node) -> Vec<TextSpan<'_>> {
    let b = node.bounds();
    let (x, y, w, h) = (b.x, b.y, b.width, b.height);
    let mut spans = Vec::new();

    let single = |key, row: i32, col: i32, text, max_width: i32, hit| TextSpan {
        key,
        origin: GridPoint::new(row, col),
        text,
        max_width,
        max_lines: 1,
        hit,
    };

    match node.kind() {
        NodeKind::Box { label } | NodeKind::Placeholder { label } => {
            let inner = w - 2;
            let row = y + h / 2;
            let col = x + 1 + (inner - len(label)).max(0) / 2;
            let visible = if h >= 3 { 1 } else { 0 };
            spans.push(TextSpan {
                max_lines: visible,
                ..single(RegionKey::Label, row, col, label.as_str(), inner, row_hit(row, x + 1, x + w - 2))
            });
        }
        NodeKind::Card { title, content } | NodeKind::Modal { title, content } => {
            let title_room = if matches!(node.kind(), NodeKind::Modal { .. }) { w - 6 } else { w - 4 };
            spans.push(single(RegionKey::Title, y + 1, x + 2, title.as_str(), title_room, inner_hit(b, y + 1, y + 1)));
            spans.push(TextSpan {
                key: RegionKey::Content,
                origin: GridPoint::new(y + 3, x + 2),
                text: content.as_str(),
                max_width: w - 4,
                max_lines: (h - 4).max(0),
                hit: inner_hit(b, y + 3, (y + h - 2).max(y + 3)),
            });
        }
        NodeKind::Table { columns, weights } => {
            let dividers = table_dividers(w, weights, columns.len());
            for (i, column) in columns.iter().enumerate() {
                let (left, right) = table_column_edges(w, &dividers, i);
                if left >= right {
                    continue;
                }
                spans.push(single(
                    RegionKey::Col(i),
                    y + 1,
                    x + left + 2,
                    column.as_str(),
                    right - left - 3,
                    row_hit(y + 1, x + left + 1, x + right - 1),
                ));
            }
        }
        NodeKind::Input { placeholder } => {
            spans.push(single(RegionKey::Placeholder, y + 1, x + 2, placeholder.as_str(), w - 4, inner_hit(b, y + 1, y + 1)));
        }
        NodeKind::Search { placeholder } => {
            spans.push(single(RegionKey::Placeholder, y + 1, x + 4, placeholder.as_str(), w - 6, inner_hit(b, y + 1, y + 1)));
        }
        NodeKind::Dropdown { label } => {
            spans.push(single(RegionKey::Label, y + 1, x + 2, label.as_str(), w - 6, inner_hit(b, y + 1, y + 1)));
        }
        NodeKind::Tabs { tabs, .. } => {
            let offsets = tab_offsets(tabs);
            for (i, tab) in tabs.iter().enumerate() {
                let start = offsets[i];
                let end = offsets[i + 1].min(w - 1);
                if start + 1 >= w - 1 {
                    break;
                }
                spans.push(single(
                    RegionKey::Tab(i),
                    y + 1,
                    x + start + 2,
                    tab.as_str(),
                    (end - start - 2).min(len(tab)).max(0),
                    row_hit(y + 1, x + start + 1, x + end - 1),
                ));
            }
        }
        NodeKind::Nav { title, links } => {
            let offsets = nav_offsets(title, links);
            let texts = std::iter::once((RegionKey::Title, title.as_str()))
                .chain(links.iter().enumerate().map(|(i, link)| (RegionKey::Link(i), link.as_str())));
            for ((key, text), start) in texts.zip(offsets.iter().copied()) {
                if start >= w - 1 {
                    break;
                }
                let room = (w - 2 - start).min(len(text)).max(0);
                spans.push(single(key, y + 1, x + start, text, room, row_hit(y + 1, x + start, x + start + len(text))));
            }
        }
        NodeKind::Button { label } => {
            spans.push(single(RegionKey::Label, y, x + 2, label.as_str(), w - 4, row_hit(y, x, x + w - 1)));
        }
        NodeKind::Checkbox { label, .. } | NodeKind::Radio { label, .. } => {
            spans.push(single(RegionKey::Label, y, x + 4, label.as_str(), w - 4, row_hit(y, x, x + w - 1)));
        }
        NodeKind::Toggle { label, .. } => {
            spans.push(single(RegionKey::Label, y, x + 5, label.as_str(), w - 5, row_hit(y, x, x + w - 1)));
        }
        NodeKind::List { items } => {
            for (i, item) in items.iter().enumerate() {
                let row = y + i as i32;
                let visible = if (i as i32) < h { 1 } else { 0 };
                spans.push(TextSpan {
                    max_lines: visible,
                    ..single(RegionKey::Item(i), row, x + 2, item.as_str(), w - 2, row_hit(row, x, x + w - 1))
                });
            }
        }
        NodeKind::Breadcrumb { items } => {
            let offsets = breadcrumb_offsets(items);
            for (i, (item, start)) in items.iter().zip(offsets.iter().copied()).enumerate() {
                let room = (w - start).min(len(item)).max(0);
                spans.push(single(RegionKey::Item(i), y, x + start, item.as_str(), room, row_hit(y, x + start, x + start + len(item))));
            }
        }
        NodeKind::Text { content } => {
            spans.push(TextSpan {
                key: RegionKey::Content,
                origin: GridPoint::new(y, x),
                text: content.as_str(),
                max_width: w,
                max_lines: h,
                hit: b,
            });
        }
        NodeKind::Hsplit { .. }
        | NodeKind::Progress { .. }
        | NodeKind::Pagination { .. }
        | NodeKind::Line { .. }
        | NodeKind::Arrow { .. }
        | NodeKind::Stroke { .. }
        | NodeKind::Group { .. } => {}
    }

    spans
}
