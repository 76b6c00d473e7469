// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boxwright: a scene-graph engine for character-grid UI mockups.
//!
//! Documents are immutable snapshots of typed widget nodes. [`ops`] produces new snapshots,
//! [`render`] rasterizes them to a character grid with automatic junction glyphs, and
//! [`editor::Editor`] ties a document to its undo history.

pub mod collab;
pub mod config;
pub mod editor;
pub mod generate;
pub mod hit;
pub mod history;
pub mod layout;
pub mod model;
pub mod ops;
pub mod polyline;
pub mod render;
pub mod text_region;
pub mod tools;
pub mod validate;
