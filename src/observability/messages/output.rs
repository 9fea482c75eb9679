// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for output collection.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// One engine output file was added to the response.
///
/// # Log Level
/// `debug!`
pub struct OutputFileCollected<'a> {
    pub key: &'a str,
    pub file_name: &'a str,
    pub size: usize,
}

impl Display for OutputFileCollected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Collected '{}' as {} ({} bytes)",
            self.file_name, self.key, self.size
        )
    }
}

impl StructuredLog for OutputFileCollected<'_> {
    fn log(&self) {
        tracing::debug!(
            key = self.key,
            file_name = self.file_name,
            size = self.size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "output_file",
            span_name = name,
            key = self.key,
            file_name = self.file_name,
        )
    }
}

/// Output collection finished.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use decode_bridge::observability::messages::output::CollectionCompleted;
///
/// let msg = CollectionCompleted { files: 1, printed_bytes: 0 };
///
/// assert_eq!(msg.to_string(), "Collected 1 output files, 0 printed bytes");
/// ```
pub struct CollectionCompleted {
    pub files: usize,
    pub printed_bytes: usize,
}

impl Display for CollectionCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Collected {} output files, {} printed bytes",
            self.files, self.printed_bytes
        )
    }
}

impl StructuredLog for CollectionCompleted {
    fn log(&self) {
        tracing::info!(files = self.files, printed_bytes = self.printed_bytes, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("collect", span_name = name, files = self.files)
    }
}
