// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod decode_engine;
pub mod processor;

pub use decode_engine::DecodeEngine;
pub use processor::Processor;
