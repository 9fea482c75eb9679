// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::discriminator::{APACHE2_URI, GET_URI, LAPPS_URI};
use super::{Discriminator, Response};

pub const SERVICE_NAME: &str = "decode-bridge";
pub const SERVICE_DESCRIPTION: &str = "The Decode function from EmoryNLP's NLP4J project.";
pub const SERVICE_VENDOR: &str = "http://www.lappsgrid.org";
const ENCODING: &str = "UTF-8";

/// Formats and encoding a service accepts or emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoSpecification {
    pub format: Vec<String>,
    pub encoding: String,
}

impl IoSpecification {
    fn utf8(format: &str) -> Self {
        Self {
            format: vec![format.to_string()],
            encoding: ENCODING.to_string(),
        }
    }
}

/// Static description of this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    pub vendor: String,
    pub license: String,
    pub requires: IoSpecification,
    pub produces: IoSpecification,
}

impl Default for ServiceMetadata {
    fn default() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            vendor: SERVICE_VENDOR.to_string(),
            license: APACHE2_URI.to_string(),
            requires: IoSpecification::utf8(GET_URI),
            produces: IoSpecification::utf8(LAPPS_URI),
        }
    }
}

impl ServiceMetadata {
    /// Wrap in a META envelope.
    pub fn into_response(self) -> Result<Response, serde_json::Error> {
        Ok(Response {
            discriminator: Discriminator::Meta,
            payload: serde_json::to_value(self)?,
        })
    }
}
