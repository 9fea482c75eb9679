// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::envelope::{Request, Response};
use crate::errors::ServiceFault;

/// A request/response service.
///
/// Expected failures (bad requests, unknown resource names) come back as an
/// ERROR [`Response`]; `Err` is reserved for faults the host should escalate.
#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, request: Request) -> Result<Response, ServiceFault>;

    fn name(&self) -> &'static str;
}
