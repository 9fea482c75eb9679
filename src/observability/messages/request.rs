// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for request intake.
//!
//! This module contains message types for logging events related to:
//! * Requests arriving at the service
//! * Requests rejected before compilation
//! * ERROR envelopes passed through unchanged
//! * Parameters the service does not recognize

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Request received by the service.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use decode_bridge::observability::messages::request::RequestReceived;
///
/// let msg = RequestReceived {
///     discriminator: "http://vocab.lappsgrid.org/ns/action/get",
///     parameter_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RequestReceived<'a> {
    pub discriminator: &'a str,
    pub parameter_count: usize,
}

impl Display for RequestReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Request received: discriminator={}, parameters={}",
            self.discriminator, self.parameter_count
        )
    }
}

impl StructuredLog for RequestReceived<'_> {
    fn log(&self) {
        tracing::info!(
            discriminator = self.discriminator,
            parameter_count = self.parameter_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "request",
            span_name = name,
            discriminator = self.discriminator,
            parameter_count = self.parameter_count,
        )
    }
}

/// Request rejected before any work was done.
///
/// # Log Level
/// `error!` - The caller receives an ERROR envelope
pub struct RequestRejected<'a> {
    pub reason: &'a dyn std::error::Error,
}

impl Display for RequestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Request rejected: {}", self.reason)
    }
}

impl StructuredLog for RequestRejected<'_> {
    fn log(&self) {
        tracing::error!(reason = %self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("request_rejected", span_name = name, reason = %self.reason)
    }
}

/// An ERROR envelope was returned to the caller untouched.
///
/// # Log Level
/// `debug!`
pub struct ErrorPassedThrough {
    pub length: usize,
}

impl Display for ErrorPassedThrough {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Passing through ERROR envelope ({} bytes)", self.length)
    }
}

impl StructuredLog for ErrorPassedThrough {
    fn log(&self) {
        tracing::debug!(length = self.length, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("error_pass_through", span_name = name, length = self.length)
    }
}

/// A request parameter was ignored because it is not one the service knows.
///
/// # Log Level
/// `debug!`
///
/// # Example
/// ```
/// use decode_bridge::observability::messages::request::ParameterIgnored;
///
/// let msg = ParameterIgnored { name: "verbose" };
///
/// assert_eq!(msg.to_string(), "Ignoring unrecognized parameter 'verbose'");
/// ```
pub struct ParameterIgnored<'a> {
    pub name: &'a str,
}

impl Display for ParameterIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ignoring unrecognized parameter '{}'", self.name)
    }
}

impl StructuredLog for ParameterIgnored<'_> {
    fn log(&self) {
        tracing::debug!(parameter = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("parameter_ignored", span_name = name, parameter = self.name)
    }
}
