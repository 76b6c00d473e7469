// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Raw-cell boundary towards a shared collaboration channel.
//!
//! The channel knows nothing about nodes: it stores a flat character grid and exchanges
//! `(row, col) -> char` deltas.

use tracing::debug;

use crate::render::{Grid, GridError};

/// One changed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDelta {
    pub row: usize,
    pub col: usize,
    pub ch: char,
}

pub trait CellChannel {
    type Error: std::error::Error;

    /// The channel's current cell snapshot.
    fn snapshot(&self) -> Result<Grid, Self::Error>;

    fn broadcast(&mut self, deltas: &[CellDelta]) -> Result<(), Self::Error>;
}

/// Cells of `after` that differ from `before`, row-major.
///
/// Cells of `after` outside `before` count as changed; cells only `before` has are ignored.
pub fn diff_grids(before: &Grid, after: &Grid) -> Vec<CellDelta> {
    after
        .cells()
        .filter(|(row, col, ch)| before.get(*row, *col).map_or(true, |old| old != *ch))
        .map(|(row, col, ch)| CellDelta { row, col, ch })
        .collect()
}

pub fn apply_deltas(grid: &mut Grid, deltas: &[CellDelta]) -> Result<(), GridError> {
    for delta in deltas {
        grid.set(delta.row, delta.col, delta.ch)?;
    }
    Ok(())
}

/// Broadcasts the cells where `rendered` differs from the channel's snapshot. Returns the
/// number of cells sent.
pub fn publish<C: CellChannel>(channel: &mut C, rendered: &Grid) -> Result<usize, C::Error> {
    let current = channel.snapshot()?;
    let deltas = diff_grids(&current, rendered);
    if !deltas.is_empty() {
        channel.broadcast(&deltas)?;
    }
    debug!(cells = deltas.len(), "published cell deltas");
    Ok(deltas.len())
}
