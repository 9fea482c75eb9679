// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod fault;
mod protocol;
mod validation;

pub use config::ConfigError;
pub use fault::{DocumentError, EngineFault, ServiceFault};
pub use protocol::ProtocolError;
pub use validation::ValidationFailure;
