// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::io::Write;

use crate::engine::ArgumentVector;
use crate::errors::EngineFault;

/// The external decoding engine.
///
/// Implementations run one decode over the files named by `arguments` and
/// write everything the engine prints to `console`. Output files are left in
/// the working directory named by the `-i` argument.
#[async_trait]
pub trait DecodeEngine: Send + Sync {
    async fn decode(
        &self,
        arguments: &ArgumentVector,
        console: &mut (dyn Write + Send),
    ) -> Result<(), EngineFault>;

    fn name(&self) -> &str;
}
