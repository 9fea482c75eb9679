// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::engine::arguments::{
    ArgumentVector, INPUT_DIR_FLAG, INPUT_EXTENSION_FLAG, OUTPUT_EXTENSION_FLAG,
};
use crate::errors::EngineFault;
use crate::traits::DecodeEngine;

/// Stand-in for the real decoder: prints a banner, then copies every input
/// file to `<file>.<output ext>` with each line prefixed by its line number.
pub struct EchoEngine {
    pub banner: String,
}

impl EchoEngine {
    pub const BANNER: &'static str = "Decoding with echo engine";

    pub fn new() -> Self {
        Self {
            banner: Self::BANNER.to_string(),
        }
    }

    fn decode_dir(dir: &Path, input_ext: &str, output_ext: &str) -> std::io::Result<usize> {
        let mut decoded = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(input_ext) {
                continue;
            }
            let text = std::fs::read_to_string(&path)?;
            let rendered: String = text
                .lines()
                .enumerate()
                .map(|(i, line)| format!("{}\t{}\n", i + 1, line))
                .collect();
            let mut target = path.clone().into_os_string();
            target.push(format!(".{output_ext}"));
            std::fs::write(target, rendered)?;
            decoded += 1;
        }
        Ok(decoded)
    }
}

impl Default for EchoEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecodeEngine for EchoEngine {
    async fn decode(
        &self,
        arguments: &ArgumentVector,
        console: &mut (dyn Write + Send),
    ) -> Result<(), EngineFault> {
        writeln!(console, "{}", self.banner)?;

        if let Some(dir) = arguments.value_of(INPUT_DIR_FLAG) {
            let input_ext = arguments.value_of(INPUT_EXTENSION_FLAG).unwrap_or("input");
            let output_ext = arguments.value_of(OUTPUT_EXTENSION_FLAG).unwrap_or("out");
            let decoded = Self::decode_dir(Path::new(dir), input_ext, output_ext)?;
            writeln!(console, "Decoded {decoded} files")?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "echo"
    }
}

/// An engine that always exits unsuccessfully.
pub struct FailingEngine;

#[async_trait]
impl DecodeEngine for FailingEngine {
    async fn decode(
        &self,
        _arguments: &ArgumentVector,
        console: &mut (dyn Write + Send),
    ) -> Result<(), EngineFault> {
        writeln!(console, "Loading models")?;
        Err(EngineFault::NonZeroExit {
            status: "exit status: 1".to_string(),
            stderr: "Simulated engine failure".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// An engine that never finishes on its own.
pub struct HangingEngine;

#[async_trait]
impl DecodeEngine for HangingEngine {
    async fn decode(
        &self,
        _arguments: &ArgumentVector,
        _console: &mut (dyn Write + Send),
    ) -> Result<(), EngineFault> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "hanging"
    }
}
