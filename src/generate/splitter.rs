// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::Value;

/// Incremental extractor of complete top-level JSON objects from streamed text.
///
/// Anything between objects (array brackets, commas, code fences, prose) is skipped. An object
/// still open when a chunk ends is kept until a later chunk closes it.
#[derive(Debug, Default)]
pub struct DescriptorSplitter {
    buf: String,
    /// Byte offset up to which `buf` has been scanned.
    scanned: usize,
    /// Start of the object being read, if any.
    start: Option<usize>,
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl DescriptorSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a chunk and returns every object it completed, in order. Objects that are not
    /// valid JSON come back as errors.
    pub fn push(&mut self, chunk: &str) -> Vec<Result<Value, serde_json::Error>> {
        self.buf.push_str(chunk);
        let mut out = Vec::new();
        let mut consumed = 0;

        for (offset, byte) in self.buf.as_bytes()[self.scanned..].iter().enumerate() {
            let at = self.scanned + offset;
            if self.start.is_none() {
                if *byte == b'{' {
                    self.start = Some(at);
                    self.depth = 1;
                }
                continue;
            }

            if self.in_string {
                match byte {
                    _ if self.escaped => self.escaped = false,
                    b'\\' => self.escaped = true,
                    b'"' => self.in_string = false,
                    _ => {}
                }
                continue;
            }

            match byte {
                b'"' => self.in_string = true,
                b'{' => self.depth += 1,
                b'}' => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        if let Some(start) = self.start.take() {
                            out.push(serde_json::from_str(&self.buf[start..=at]));
                        }
                        consumed = at + 1;
                    }
                }
                _ => {}
            }
        }

        self.scanned = self.buf.len();
        if self.start.is_none() {
            consumed = self.buf.len();
        }
        if consumed > 0 {
            self.buf.drain(..consumed);
            self.scanned -= consumed;
            if let Some(start) = self.start.as_mut() {
                *start -= consumed;
            }
        }
        out
    }

    /// Whether an object has started but not yet closed.
    pub fn has_pending(&self) -> bool {
        self.start.is_some()
    }
}
