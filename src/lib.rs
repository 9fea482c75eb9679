// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod catalog;    // symbolic resource names -> files
pub mod compiler;   // parameters -> configuration document
pub mod config;     // request options + adapter settings
pub mod engine;     // argument vector, capture, process adapter
pub mod envelope;   // request/response envelopes
pub mod errors;     // error handling
pub mod observability;
pub mod output;     // engine output collection
pub mod service;    // request orchestration
pub mod traits;     // unified abstractions
pub mod workspace;  // request-scoped working directory
