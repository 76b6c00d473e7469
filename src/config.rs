// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor and tool configuration.
//!
//! Values come from defaults, a JSON document, and `BOXWRIGHT_*` environment variables, in
//! that order. Tool settings are passed explicitly to every tool call.

use std::env;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::history::MAX_UNDO;
use crate::polyline::DEFAULT_TURN_THRESHOLD;

pub const ENV_GRID_ROWS: &str = "BOXWRIGHT_GRID_ROWS";
pub const ENV_GRID_COLS: &str = "BOXWRIGHT_GRID_COLS";
pub const ENV_MAX_UNDO: &str = "BOXWRIGHT_MAX_UNDO";
pub const ENV_BRUSH_RADIUS: &str = "BOXWRIGHT_BRUSH_RADIUS";

const MAX_GRID_SIDE: usize = 1000;
const MAX_UNDO_LIMIT: usize = 10_000;
const MAX_BRUSH_RADIUS: i32 = 8;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Json(err) => write!(f, "invalid config JSON: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Settings for the gesture tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Square brush half-size; `0` paints single cells.
    pub brush_radius: i32,
    pub brush_char: char,
    /// Perpendicular drift (cells) needed before a line drag turns.
    pub turn_threshold: i32,
    /// Whether the line tool places arrows instead of plain lines.
    pub arrowheads: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self { brush_radius: 0, brush_char: '#', turn_threshold: DEFAULT_TURN_THRESHOLD, arrowheads: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub max_undo: usize,
    pub tool: ToolConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { grid_rows: 40, grid_cols: 120, max_undo: MAX_UNDO, tool: ToolConfig::default() }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.clamped())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Applies `BOXWRIGHT_*` overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_vars(|name| env::var(name).ok())
    }

    /// Applies overrides from `lookup`. Unparseable values are logged and ignored.
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
            let raw = lookup(name)?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            let value = trimmed.parse().ok();
            if value.is_none() {
                warn!(name, value = trimmed, "ignoring invalid config variable");
            }
            value
        }

        if let Some(rows) = parsed(&lookup, ENV_GRID_ROWS) {
            self.grid_rows = rows;
        }
        if let Some(cols) = parsed(&lookup, ENV_GRID_COLS) {
            self.grid_cols = cols;
        }
        if let Some(max_undo) = parsed(&lookup, ENV_MAX_UNDO) {
            self.max_undo = max_undo;
        }
        if let Some(radius) = parsed(&lookup, ENV_BRUSH_RADIUS) {
            self.tool.brush_radius = radius;
        }
        self.clamped()
    }

    fn clamped(mut self) -> Self {
        self.grid_rows = self.grid_rows.clamp(1, MAX_GRID_SIDE);
        self.grid_cols = self.grid_cols.clamp(1, MAX_GRID_SIDE);
        self.max_undo = self.max_undo.clamp(1, MAX_UNDO_LIMIT);
        self.tool.brush_radius = self.tool.brush_radius.clamp(0, MAX_BRUSH_RADIUS);
        self.tool.turn_threshold = self.tool.turn_threshold.max(0);
        self
    }
}
