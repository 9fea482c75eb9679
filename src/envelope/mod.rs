// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and response envelopes exchanged with callers.
//!
//! Every envelope carries a [`Discriminator`] URI and a payload. Requests add a
//! free-form parameter map that is turned into typed options at the boundary.

pub mod discriminator;
mod metadata;
mod request;
mod response;

pub use discriminator::Discriminator;
pub use metadata::{IoSpecification, ServiceMetadata, SERVICE_NAME};
pub use request::{Payload, Request};
pub use response::{Response, ResponseMap};
