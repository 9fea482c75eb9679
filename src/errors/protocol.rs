// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Request-level problems detected before any compilation or engine work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid discriminator.\nExpected {expected}\nFound {found}")]
    InvalidDiscriminator { expected: String, found: String },

    #[error("No input given.")]
    NoInput,

    #[error("Unable to parse request: {0}")]
    MalformedRequest(String),

    #[error("Invalid payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid value for parameter '{name}': {reason}")]
    MalformedParameter { name: String, reason: String },
}
