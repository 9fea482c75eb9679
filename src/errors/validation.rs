// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation failures raised while compiling request options.

use thiserror::Error;

/// Why a set of request options could not be compiled into a configuration document.
///
/// Every variant carries the raw value(s) the caller supplied so the error
/// envelope can echo them back. Compilation stops at the first failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// `tsv-indices` ran out before `tsv-fields` did.
    #[error("The given list of TSV indices and TSV fields did not match.\nGiven indices: {indices}\nGiven fields: {fields}")]
    IndexFieldMismatch { indices: String, fields: String },

    #[error("Invalid field given for ambiguity classes.\nGiven: {0}")]
    UnknownAmbiguityName(String),

    #[error("Invalid field given for word clusters.\nGiven: {0}")]
    UnknownClusterName(String),

    #[error("Invalid field given for named entity gazetteers.\nGiven: {0}")]
    UnknownGazetteerName(String),

    #[error("Invalid field given for word embeddings.\nGiven: {0}")]
    UnknownEmbeddingName(String),
}

impl ValidationFailure {
    /// Short tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IndexFieldMismatch { .. } => "index_field_mismatch",
            Self::UnknownAmbiguityName(_) => "unknown_ambiguity_name",
            Self::UnknownClusterName(_) => "unknown_cluster_name",
            Self::UnknownGazetteerName(_) => "unknown_gazetteer_name",
            Self::UnknownEmbeddingName(_) => "unknown_embedding_name",
        }
    }
}
