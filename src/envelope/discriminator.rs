// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

pub const GET_URI: &str = "http://vocab.lappsgrid.org/ns/action/get";
pub const ERROR_URI: &str = "http://vocab.lappsgrid.org/ns/error";
pub const LAPPS_URI: &str = "http://vocab.lappsgrid.org/ns/media/jsonld#lapps";
pub const META_URI: &str = "http://vocab.lappsgrid.org/ns/meta";
pub const APACHE2_URI: &str = "http://vocab.lappsgrid.org/ns/license#apache-2.0";

/// Tag identifying the kind of an envelope.
///
/// Serialized as its URI; unknown URIs are preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Discriminator {
    Get,
    Error,
    Lapps,
    Meta,
    Other(String),
}

impl Discriminator {
    pub fn uri(&self) -> &str {
        match self {
            Discriminator::Get => GET_URI,
            Discriminator::Error => ERROR_URI,
            Discriminator::Lapps => LAPPS_URI,
            Discriminator::Meta => META_URI,
            Discriminator::Other(uri) => uri.as_str(),
        }
    }
}

impl From<String> for Discriminator {
    fn from(uri: String) -> Self {
        match uri.as_str() {
            GET_URI => Discriminator::Get,
            ERROR_URI => Discriminator::Error,
            LAPPS_URI => Discriminator::Lapps,
            META_URI => Discriminator::Meta,
            _ => Discriminator::Other(uri),
        }
    }
}

impl From<Discriminator> for String {
    fn from(discriminator: Discriminator) -> Self {
        match discriminator {
            Discriminator::Other(uri) => uri,
            known => known.uri().to_string(),
        }
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}
