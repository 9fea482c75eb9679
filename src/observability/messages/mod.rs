// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `request` - Request intake, rejection and error pass-through
//! * `compiler` - Configuration compilation results
//! * `engine` - Decoding engine invocation lifecycle
//! * `output` - Output file collection
//!
//! # Usage Pattern
//!
//! ```rust
//! use decode_bridge::observability::messages::compiler::ConfigurationCompiled;
//!
//! let msg = ConfigurationCompiled {
//!     columns: 3,
//!     lexica: 1,
//!     models: 2,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod compiler;
pub mod engine;
pub mod output;
pub mod request;

/// A message that knows its own log level and structured fields.
///
/// `log` emits the event; `span` opens a span carrying the same fields so
/// nested events inherit them.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
