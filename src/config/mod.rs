// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod options;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, validate_config, AdapterConfig, EngineConfig,
    OutputConfig, OutputOrdering, ResourceConfig, WorkspaceConfig,
};
pub use options::{DecodeOptions, RECOGNIZED_PARAMETERS};
