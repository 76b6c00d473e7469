// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The current document plus its undo history.

use tracing::debug;

use crate::config::EditorConfig;
use crate::history::History;
use crate::model::{Document, NodeDescriptor, NodeId};
use crate::ops;
use crate::render::{render_document, render_text, Grid, GridError};

#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    history: History,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(Document::new(config.grid_rows, config.grid_cols), config)
    }

    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        Self { document, history: History::new(config.max_undo), config }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Runs a document op. The prior snapshot is recorded for undo only if the op changed
    /// something; returns whether it did.
    pub fn apply(&mut self, op: impl FnOnce(&Document) -> Document) -> bool {
        self.apply_with(|doc| (op(doc), ())).1
    }

    /// Like [`Editor::apply`] for ops that also return a value (new ids and the like).
    pub fn apply_with<T>(&mut self, op: impl FnOnce(&Document) -> (Document, T)) -> (T, bool) {
        let (next, value) = op(&self.document);
        if next.same_content(&self.document) {
            debug!("editor: op left the document unchanged");
            return (value, false);
        }
        let before = std::mem::replace(&mut self.document, next);
        self.history.push(before);
        (value, true)
    }

    /// Adds one root-level node as its own undo step.
    pub fn add(&mut self, descriptor: NodeDescriptor) -> Option<NodeId> {
        self.apply_with(|doc| ops::add_node(doc, descriptor, None)).0
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.document.clone()) {
            Some(previous) => {
                self.document = previous;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.document.clone()) {
            Some(next) => {
                self.document = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn render(&self) -> Result<Grid, GridError> {
        render_document(&self.document)
    }

    /// Trimmed text export of the current document.
    pub fn export_text(&self) -> Result<String, GridError> {
        render_text(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::Editor;
    use crate::config::EditorConfig;
    use crate::model::fixtures::boxed;
    use crate::model::NodeId;
    use crate::ops::{move_nodes, remove_node};

    fn small() -> Editor {
        Editor::new(EditorConfig { grid_rows: 10, grid_cols: 20, max_undo: 3, ..EditorConfig::default() })
    }

    #[test]
    fn each_change_is_one_undo_step() {
        let mut editor = small();
        let id = editor.add(boxed(0, 0, 4, 3)).expect("id");
        assert!(editor.apply(|doc| move_nodes(doc, &[id.clone()], 1, 1)));
        assert_eq!(editor.history().undo_len(), 2);

        assert!(editor.undo());
        assert_eq!(editor.document().node(&id).map(|n| n.bounds().x), Some(0));
        assert!(editor.undo());
        assert!(editor.document().is_empty());
        assert!(!editor.undo());

        assert!(editor.redo());
        assert!(editor.document().contains(&id));
        assert!(editor.can_redo());
    }

    #[test]
    fn no_op_does_not_record_history() {
        let mut editor = small();
        let missing = NodeId::new("n999").expect("id");
        assert!(!editor.apply(|doc| remove_node(doc, &missing)));
        assert!(!editor.can_undo());
    }

    #[test]
    fn history_depth_comes_from_config() {
        let mut editor = small();
        for i in 0..6 {
            editor.add(boxed(i, 0, 2, 2));
        }
        assert_eq!(editor.history().undo_len(), 3);
    }

    #[test]
    fn export_text_renders_current_document() {
        let mut editor = small();
        editor.add(boxed(0, 0, 3, 2));
        assert_eq!(editor.export_text().expect("render"), "┌─┐\n└─┘");
    }
}
