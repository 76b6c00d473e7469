// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Grid;

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn grid_to_string_trimmed(grid: &Grid) -> String {
    let mut lines = Vec::<String>::with_capacity(grid.rows());
    for row in 0..grid.rows() {
        let line: String = grid.row(row).unwrap_or(&[]).iter().collect();
        lines.push(line.trim_end_matches(' ').to_owned());
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
