// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::engine::{ArgumentVector, CapturedOutput, ConsoleCapture};
use crate::errors::EngineFault;
use crate::observability::messages::engine::{
    InvocationCompleted, InvocationFailed, InvocationStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::DecodeEngine;

/// Runs the decoding engine with exclusive use of the console capture.
///
/// Only one invocation is in flight per adapter; concurrent callers queue on
/// the capture. The session is released on every exit path, including engine
/// failure and deadline expiry.
pub struct ProcessAdapter {
    engine: Arc<dyn DecodeEngine>,
    capture: ConsoleCapture,
    timeout: Option<Duration>,
}

impl ProcessAdapter {
    pub fn new(engine: Arc<dyn DecodeEngine>, timeout: Option<Duration>) -> Self {
        Self {
            engine,
            capture: ConsoleCapture::new(),
            timeout,
        }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub async fn invoke(&self, arguments: &ArgumentVector) -> Result<CapturedOutput, EngineFault> {
        let engine = self.engine.name();
        let rendered = arguments.to_string();
        let started = InvocationStarted {
            engine,
            arguments: &rendered,
        };
        started.log();

        let start = Instant::now();
        let mut session = self.capture.acquire().await;

        let result = match self.timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.engine.decode(arguments, &mut session)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(EngineFault::TimedOut(limit)),
                }
            }
            None => self.engine.decode(arguments, &mut session).await,
        };

        if let Err(error) = result.and_then(|()| session.flush().map_err(EngineFault::from)) {
            InvocationFailed {
                engine,
                error: &error,
            }
            .log();
            return Err(error);
        }

        let printed = session.finish();
        InvocationCompleted {
            engine,
            duration: start.elapsed(),
            printed_bytes: printed.len(),
        }
        .log();

        Ok(printed)
    }
}
