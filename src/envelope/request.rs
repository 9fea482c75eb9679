// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::Discriminator;
use crate::config::consts::INPUT_KEY_MARKER;
use crate::errors::ProtocolError;

/// Incoming request envelope.
///
/// `payload` is left untyped because callers send it either as a JSON object
/// or as a string holding one; [`Request::documents`] normalizes both.
/// A missing or `null` discriminator parses as `None` and is rejected later
/// with the other unsupported discriminators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub discriminator: Option<Discriminator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Map::is_empty"
    )]
    pub parameters: Map<String, Value>,
}

/// Only the routing field of an envelope; everything else is ignored.
#[derive(Deserialize)]
struct EnvelopeHead {
    #[serde(default)]
    discriminator: Option<Discriminator>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Request {
    /// A GET request carrying the given documents.
    pub fn get(documents: Payload) -> Self {
        let payload = documents
            .0
            .into_iter()
            .map(|(key, text)| (key, Value::String(text)))
            .collect::<Map<String, Value>>();
        Self {
            discriminator: Some(Discriminator::Get),
            payload: Some(Value::Object(payload)),
            parameters: Map::new(),
        }
    }

    pub fn with_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(raw).map_err(|e| ProtocolError::MalformedRequest(e.to_string()))
    }

    /// Whether `raw` is an ERROR envelope, judged from its discriminator alone
    /// so that the rest of the envelope never has to parse.
    pub fn is_error_envelope(raw: &str) -> bool {
        serde_json::from_str::<EnvelopeHead>(raw)
            .is_ok_and(|head| head.discriminator == Some(Discriminator::Error))
    }

    /// The discriminator URI, or `"null"` when none was sent.
    pub fn discriminator_uri(&self) -> &str {
        self.discriminator.as_ref().map_or("null", Discriminator::uri)
    }

    /// The payload as a key -> text map.
    ///
    /// `Ok(None)` when no payload (or a JSON `null`) was sent.
    pub fn documents(&self) -> Result<Option<Payload>, ProtocolError> {
        let object = match &self.payload {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Object(map)) => map.clone(),
            Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(ProtocolError::MalformedPayload(
                        "payload string must encode a JSON object".to_string(),
                    ))
                }
                Err(e) => return Err(ProtocolError::MalformedPayload(e.to_string())),
            },
            Some(_) => {
                return Err(ProtocolError::MalformedPayload(
                    "payload must be an object of strings".to_string(),
                ))
            }
        };

        let mut documents = BTreeMap::new();
        for (key, value) in object {
            match value {
                Value::String(text) => {
                    documents.insert(key, text);
                }
                _ => {
                    return Err(ProtocolError::MalformedPayload(format!(
                        "value for '{key}' must be a string"
                    )))
                }
            }
        }
        Ok(Some(Payload(documents)))
    }
}

/// Payload documents keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload(pub BTreeMap<String, String>);

impl Payload {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.0.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries whose key names an input document.
    pub fn inputs(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter().filter(|(key, _)| key.contains(INPUT_KEY_MARKER))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
