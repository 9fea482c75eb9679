// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic the bridge emits is a message struct with a `Display`
//! implementation, so log text lives in one place instead of being scattered
//! through the request path as format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::request` - Request intake, rejection and error pass-through
//! * `messages::compiler` - Configuration compilation results
//! * `messages::engine` - Decoding engine invocation lifecycle
//! * `messages::output` - Output file collection
//!
//! # Usage
//!
//! ```rust
//! use decode_bridge::observability::messages::engine::InvocationStarted;
//! use decode_bridge::observability::messages::StructuredLog;
//!
//! let msg = InvocationStarted {
//!     engine: "nlp4j-decode",
//!     arguments: "-c config.xml -i /tmp/input1 -ie input -oe out",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
