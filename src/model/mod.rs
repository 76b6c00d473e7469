// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core scene-graph data model.
//!
//! A [`Document`] owns every [`Node`] in an id-keyed arena; groups reference their children by
//! id and children point back through `parent_id`.

pub mod document;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;
pub mod node;

pub use document::{Document, InvariantViolation};
pub use geometry::{Bounds, GridPoint, SparseCell};
pub use ids::{Id, IdError, NodeId};
pub use node::{Node, NodeDescriptor, NodeKind, NodePatch, NodeType, UnknownNodeType};
