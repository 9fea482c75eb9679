// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::EngineConfig;
use crate::engine::ArgumentVector;
use crate::errors::EngineFault;
use crate::traits::DecodeEngine;

/// Runs the decoder as a child process.
///
/// The command line is `program leading_args... arguments...`. Standard output
/// goes to the console sink; standard error is kept for the failure report.
/// The child is killed if the invocation is abandoned (e.g. on deadline).
pub struct CommandEngine {
    program: String,
    leading_args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, leading_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            leading_args,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.get_program(), config.args.clone())
    }
}

#[async_trait]
impl DecodeEngine for CommandEngine {
    async fn decode(
        &self,
        arguments: &ArgumentVector,
        console: &mut (dyn Write + Send),
    ) -> Result<(), EngineFault> {
        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(arguments.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| EngineFault::Spawn {
                program: self.program.clone(),
                source,
            })?;

        console.write_all(&output.stdout)?;

        if !output.status.success() {
            return Err(EngineFault::NonZeroExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}
