// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Discriminator;
use crate::config::consts::{OUTPUT_FILE_KEY_PREFIX, PRINTED_KEY};

/// Outgoing response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub discriminator: Discriminator,
    pub payload: Value,
}

impl Response {
    /// Wrap a response map as a LAPPS success envelope. The map travels as a
    /// JSON string, the form downstream consumers decode.
    pub fn success(map: &ResponseMap) -> Result<Self, serde_json::Error> {
        Ok(Self {
            discriminator: Discriminator::Lapps,
            payload: Value::String(serde_json::to_string(map)?),
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            discriminator: Discriminator::Error,
            payload: Value::String(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.discriminator == Discriminator::Error
    }

    /// Error message carried by an ERROR envelope.
    pub fn message(&self) -> Option<&str> {
        match (&self.discriminator, &self.payload) {
            (Discriminator::Error, Value::String(message)) => Some(message),
            _ => None,
        }
    }

    /// Decode the response map back out of a success envelope.
    pub fn response_map(&self) -> Option<ResponseMap> {
        match (&self.discriminator, &self.payload) {
            (Discriminator::Lapps, Value::String(encoded)) => serde_json::from_str(encoded).ok(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Output key -> text. Holds `Printed` plus one `output-file-N` per
/// collected engine output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMap(BTreeMap<String, String>);

impl ResponseMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert_printed(&mut self, printed: impl Into<String>) {
        self.0.insert(PRINTED_KEY.to_string(), printed.into());
    }

    /// Insert under `output-file-<ordinal>`; ordinals start at 1.
    pub fn insert_output(&mut self, ordinal: usize, content: impl Into<String>) {
        self.0
            .insert(format!("{OUTPUT_FILE_KEY_PREFIX}{ordinal}"), content.into());
    }

    pub fn printed(&self) -> Option<&str> {
        self.get(PRINTED_KEY)
    }

    pub fn output(&self, ordinal: usize) -> Option<&str> {
        self.get(&format!("{OUTPUT_FILE_KEY_PREFIX}{ordinal}"))
    }

    pub fn output_count(&self) -> usize {
        self.0
            .keys()
            .filter(|key| key.starts_with(OUTPUT_FILE_KEY_PREFIX))
            .count()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::discriminator::{ERROR_URI, LAPPS_URI};

    #[test]
    fn test_success_envelope_carries_encoded_map() {
        let mut map = ResponseMap::new();
        map.insert_printed("banner");
        map.insert_output(1, "1\tThe\tthe\tDT");

        let response = Response::success(&map).unwrap();
        let json: Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();

        assert_eq!(json["discriminator"], LAPPS_URI);
        let payload: BTreeMap<String, String> =
            serde_json::from_str(json["payload"].as_str().unwrap()).unwrap();
        assert_eq!(payload.get("Printed").map(String::as_str), Some("banner"));
        assert_eq!(payload.get("output-file-1").map(String::as_str), Some("1\tThe\tthe\tDT"));
        assert_eq!(response.response_map(), Some(map));
    }

    #[test]
    fn test_error_envelope() {
        let response = Response::error("No input given.");
        let json: Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();

        assert!(response.is_error());
        assert_eq!(response.message(), Some("No input given."));
        assert_eq!(json["discriminator"], ERROR_URI);
        assert_eq!(json["payload"], "No input given.");
        assert!(response.response_map().is_none());
    }

    #[test]
    fn test_output_count_ignores_printed() {
        let mut map = ResponseMap::new();
        map.insert_printed("");
        assert_eq!(map.output_count(), 0);

        map.insert_output(1, "a");
        map.insert_output(2, "b");
        assert_eq!(map.output_count(), 2);
        assert_eq!(map.len(), 3);
        assert_eq!(map.output(2), Some("b"));
        assert_eq!(map.printed(), Some(""));
    }
}
