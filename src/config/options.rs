// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed view of a request's parameter map.
//!
//! The parameter map on the wire is open-ended. It is parsed exactly once, here,
//! into [`DecodeOptions`]; nothing downstream probes the raw map.

use serde_json::{Map, Value};

use crate::catalog::{ModelTask, ResourceCategory};
use crate::errors::ProtocolError;

pub const TSV_INDICES: &str = "tsv-indices";
pub const TSV_FIELDS: &str = "tsv-fields";
pub const AMBIGUITY: &str = "ambiguity";
pub const CLUSTERS: &str = "clusters";
pub const GAZETTEERS: &str = "gazetteers";
pub const EMBEDDINGS: &str = "embeddings";
pub const POS: &str = "pos";
pub const NER: &str = "ner";
pub const DEP: &str = "dep";
pub const FORMAT: &str = "format";

/// Every option the adapter recognizes. Anything else in the map is ignored.
pub const RECOGNIZED_PARAMETERS: [&str; 10] = [
    TSV_INDICES,
    TSV_FIELDS,
    AMBIGUITY,
    CLUSTERS,
    GAZETTEERS,
    EMBEDDINGS,
    POS,
    NER,
    DEP,
    FORMAT,
];

/// Options controlling one decode request.
///
/// String options keep the caller's raw text so validation failures can echo
/// it back verbatim. Model flags only record presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub tsv_indices: Option<String>,
    pub tsv_fields: Option<String>,
    pub ambiguity: Option<String>,
    pub clusters: Option<String>,
    pub gazetteers: Option<String>,
    pub embeddings: Option<String>,
    pub pos: bool,
    pub ner: bool,
    pub dep: bool,
    pub format: Option<String>,
}

impl DecodeOptions {
    /// Parse the request's parameter map.
    ///
    /// `null` counts as absent. Strings, numbers and booleans are accepted for
    /// text options; arrays and objects are rejected.
    pub fn from_parameters(parameters: &Map<String, Value>) -> Result<Self, ProtocolError> {
        let text = |name: &str| text_parameter(parameters, name);
        let flag = |name: &str| !matches!(parameters.get(name), None | Some(Value::Null));

        Ok(Self {
            tsv_indices: text(TSV_INDICES)?,
            tsv_fields: text(TSV_FIELDS)?,
            ambiguity: text(AMBIGUITY)?,
            clusters: text(CLUSTERS)?,
            gazetteers: text(GAZETTEERS)?,
            embeddings: text(EMBEDDINGS)?,
            pos: flag(POS),
            ner: flag(NER),
            dep: flag(DEP),
            format: text(FORMAT)?,
        })
    }

    /// Symbolic name requested for a lexica category.
    pub fn lexicon(&self, category: ResourceCategory) -> Option<&str> {
        match category {
            ResourceCategory::AmbiguityClasses => self.ambiguity.as_deref(),
            ResourceCategory::WordClusters => self.clusters.as_deref(),
            ResourceCategory::NamedEntityGazetteers => self.gazetteers.as_deref(),
            ResourceCategory::WordEmbeddings => self.embeddings.as_deref(),
            ResourceCategory::Models => None,
        }
    }

    pub fn wants_model(&self, task: ModelTask) -> bool {
        match task {
            ModelTask::PartOfSpeech => self.pos,
            ModelTask::NamedEntity => self.ner,
            ModelTask::Dependency => self.dep,
        }
    }
}

fn text_parameter(parameters: &Map<String, Value>, name: &str) -> Result<Option<String>, ProtocolError> {
    match parameters.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(ProtocolError::MalformedParameter {
            name: name.to_string(),
            reason: "expected a scalar value".to_string(),
        }),
    }
}
