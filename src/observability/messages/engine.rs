// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for decoding engine invocations.
//!
//! This module contains message types for logging events related to:
//! * Engine invocation start
//! * Engine completion with timing and captured output size
//! * Engine failure, including deadline expiry

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Engine invocation started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use decode_bridge::observability::messages::engine::InvocationStarted;
///
/// let msg = InvocationStarted {
///     engine: "nlp4j-decode",
///     arguments: "-c config.xml -i /tmp/input1 -ie input -oe out",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InvocationStarted<'a> {
    pub engine: &'a str,
    pub arguments: &'a str,
}

impl Display for InvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invoking engine '{}' with: {}", self.engine, self.arguments)
    }
}

impl StructuredLog for InvocationStarted<'_> {
    fn log(&self) {
        tracing::info!(engine = self.engine, arguments = self.arguments, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "invocation",
            span_name = name,
            engine = self.engine,
            arguments = self.arguments,
        )
    }
}

/// Engine invocation completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use decode_bridge::observability::messages::engine::InvocationCompleted;
/// use std::time::Duration;
///
/// let msg = InvocationCompleted {
///     engine: "nlp4j-decode",
///     duration: Duration::from_millis(850),
///     printed_bytes: 412,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InvocationCompleted<'a> {
    pub engine: &'a str,
    pub duration: Duration,
    pub printed_bytes: usize,
}

impl Display for InvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' completed in {:?}: printed {} bytes",
            self.engine, self.duration, self.printed_bytes
        )
    }
}

impl StructuredLog for InvocationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            engine = self.engine,
            duration_ms = self.duration.as_millis() as u64,
            printed_bytes = self.printed_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "invocation_completed",
            span_name = name,
            engine = self.engine,
            duration_ms = self.duration.as_millis() as u64,
        )
    }
}

/// Engine invocation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct InvocationFailed<'a> {
    pub engine: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for InvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Engine '{}' failed: {}", self.engine, self.error)
    }
}

impl StructuredLog for InvocationFailed<'_> {
    fn log(&self) {
        tracing::error!(engine = self.engine, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("invocation_failed", span_name = name, engine = self.engine)
    }
}
