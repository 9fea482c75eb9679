// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration compilation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Request options compiled into a configuration document.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigurationCompiled {
    pub columns: usize,
    pub lexica: usize,
    pub models: usize,
}

impl Display for ConfigurationCompiled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration compiled: {} tsv columns, {} lexica, {} models",
            self.columns, self.lexica, self.models
        )
    }
}

impl StructuredLog for ConfigurationCompiled {
    fn log(&self) {
        tracing::info!(
            columns = self.columns,
            lexica = self.lexica,
            models = self.models,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "compile",
            span_name = name,
            columns = self.columns,
            lexica = self.lexica,
            models = self.models,
        )
    }
}

/// Request options failed validation.
///
/// # Log Level
/// `error!` - The caller receives an ERROR envelope
///
/// # Example
/// ```
/// use decode_bridge::errors::ValidationFailure;
/// use decode_bridge::observability::messages::compiler::ValidationFailed;
///
/// let failure = ValidationFailure::UnknownAmbiguityName("bogus".to_string());
/// let msg = ValidationFailed { kind: failure.kind(), failure: &failure };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ValidationFailed<'a> {
    pub kind: &'a str,
    pub failure: &'a dyn std::error::Error,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Validation failed ({}): {}", self.kind, self.failure)
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(kind = self.kind, failure = %self.failure, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("validation", span_name = name, kind = self.kind)
    }
}
