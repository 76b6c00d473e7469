// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bounded undo/redo stacks of document snapshots.
//!
//! Snapshots are whole [`Document`] values backed by persistent containers; untouched nodes
//! are shared between snapshots, so a push is O(1) and memory grows with the nodes each edit
//! touched.

use std::collections::VecDeque;

use crate::model::Document;

/// Default number of undo steps kept.
pub const MAX_UNDO: usize = 100;

#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Document>,
    redo: Vec<Document>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(MAX_UNDO)
    }
}

impl History {
    /// A history keeping at most `limit` undo steps (at least one).
    pub fn new(limit: usize) -> Self {
        Self { undo: VecDeque::new(), redo: Vec::new(), limit: limit.max(1) }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Records the state *before* a mutation. Clears the redo stack and evicts the oldest
    /// snapshot once the limit is exceeded.
    pub fn push(&mut self, before: Document) {
        self.undo.push_back(before);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Steps back: returns the previous snapshot and parks `current` for redo.
    pub fn undo(&mut self, current: Document) -> Option<Document> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: Document) -> Option<Document> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Undo snapshots, oldest first.
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &Document> {
        self.undo.iter()
    }
}
