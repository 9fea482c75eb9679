// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod adapter;
pub mod arguments;
pub mod capture;
pub mod command;
#[cfg(test)]
pub mod stub;

pub use adapter::ProcessAdapter;
pub use arguments::{ArgumentVector, ArgumentVectorBuilder};
pub use capture::{CaptureSession, CapturedOutput, ConsoleCapture};
pub use command::CommandEngine;
