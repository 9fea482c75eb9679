// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Infrastructure and engine faults.
//!
//! Unlike protocol errors and validation failures these are not expected during
//! normal operation. They are returned as `Err` so the host can escalate.

use std::time::Duration;
use thiserror::Error;

/// The configuration document could not be rendered.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to write configuration markup: {0}")]
    Markup(String),

    #[error("Configuration markup is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// The external decoding engine did not complete successfully.
#[derive(Error, Debug)]
pub enum EngineFault {
    #[error("Failed to start decoding engine '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Decoding engine exited with {status}: {stderr}")]
    NonZeroExit { status: String, stderr: String },

    #[error("Decoding engine did not finish within {0:?}")]
    TimedOut(Duration),

    #[error("Failed to capture decoding engine output: {0}")]
    Console(#[from] std::io::Error),
}

/// Faults that abort a request and escalate to the host.
#[derive(Error, Debug)]
pub enum ServiceFault {
    #[error("A problem occurred in the handling of the temporary files: {0}")]
    Workspace(#[source] std::io::Error),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("A problem occurred in the handling of the output files: {0}")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineFault),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}
