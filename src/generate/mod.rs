// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Driver for an external, streaming node generator.
//!
//! The generator (for example a language-model backend) receives a target region and an
//! instruction and streams back text containing loose JSON descriptors. Each complete
//! descriptor is validated against the region, moved to the region origin and added through the
//! [`Editor`] as its own undo step. Cancellation is observed before every write; nodes added
//! before it stay in the document.

mod splitter;

use std::fmt;

use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

pub use splitter::DescriptorSplitter;

use crate::editor::Editor;
use crate::model::{Bounds, NodeId};
use crate::validate::{descriptor_schema, validate_descriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Target area in document coordinates.
    pub region: Bounds,
    pub instruction: String,
}

impl GenerationRequest {
    pub fn new(region: Bounds, instruction: impl Into<String>) -> Self {
        Self { region, instruction: instruction.into() }
    }

    /// Prompt text for a backend: region size, instruction and descriptor schema.
    pub fn prompt(&self) -> String {
        format!(
            "Lay out a UI mockup in a {}x{} character grid (width x height). Coordinates are \
             relative to the top-left corner of that grid.\n\nRequest: {}\n\nRespond with a JSON \
             array of node descriptors matching this schema:\n{}",
            self.region.width,
            self.region.height,
            self.instruction.trim(),
            descriptor_schema(),
        )
    }
}

/// A source of streamed descriptor text.
pub trait Generator {
    /// Starts a generation. The stream ends when the returned receiver closes.
    fn generate(&self, request: &GenerationRequest) -> mpsc::Receiver<String>;
}

/// Requests cancellation of a running generation.
#[derive(Debug, Clone)]
pub struct CancelHandle(std::sync::Arc<watch::Sender<bool>>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

/// Observes cancellation.
#[derive(Debug, Clone)]
pub struct CancelToken(watch::Receiver<bool>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolves once cancellation is requested. Never resolves if every handle is dropped first.
    pub async fn cancelled(&mut self) {
        while !*self.0.borrow_and_update() {
            if self.0.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle(std::sync::Arc::new(tx)), CancelToken(rx))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Ids of the added nodes, in arrival order.
    pub added: Vec<NodeId>,
    pub rejected: usize,
    pub cancelled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The stream finished without producing a single usable node.
    NoValidNodes { rejected: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValidNodes { rejected: 0 } => f.write_str("generation produced no nodes"),
            Self::NoValidNodes { rejected } => {
                write!(f, "generation produced no valid nodes ({rejected} rejected)")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Streams a generation into `editor`.
///
/// A complete, non-cancelled run that adds nothing is an error; a cancelled run reports what
/// it added so far.
pub async fn run_generation<G: Generator + ?Sized>(
    generator: &G,
    request: &GenerationRequest,
    editor: &mut Editor,
    cancel: &mut CancelToken,
) -> Result<GenerationReport, GenerationError> {
    let region = request.region;
    let mut report = GenerationReport::default();
    let mut splitter = DescriptorSplitter::new();

    if cancel.is_cancelled() {
        info!("generation cancelled before start");
        report.cancelled = true;
        return Ok(report);
    }
    let mut stream = generator.generate(request);
    info!(width = region.width, height = region.height, "generation started");

    'stream: loop {
        let chunk = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                report.cancelled = true;
                break 'stream;
            }
            chunk = stream.recv() => chunk,
        };
        let Some(chunk) = chunk else {
            break;
        };

        for item in splitter.push(&chunk) {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break 'stream;
            }
            let value = match item {
                Ok(value) => value,
                Err(err) => {
                    warn!(error = %err, "dropping malformed descriptor");
                    report.rejected += 1;
                    continue;
                }
            };
            match validate_descriptor(&value, region.width, region.height) {
                Ok(descriptor) => match editor.add(descriptor.translated(region.y, region.x)) {
                    Some(id) => report.added.push(id),
                    None => report.rejected += 1,
                },
                Err(err) => {
                    warn!(error = %err, "dropping invalid descriptor");
                    report.rejected += 1;
                }
            }
        }
    }

    if report.cancelled {
        info!(added = report.added.len(), "generation cancelled");
        return Ok(report);
    }
    if splitter.has_pending() {
        warn!("generation stream ended inside a descriptor");
        report.rejected += 1;
    }
    info!(added = report.added.len(), rejected = report.rejected, "generation finished");
    if report.added.is_empty() {
        return Err(GenerationError::NoValidNodes { rejected: report.rejected });
    }
    Ok(report)
}
