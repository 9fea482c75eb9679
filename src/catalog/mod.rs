// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static resource catalog.
//!
//! Requests only ever name resources symbolically ("simplified", "brown-twit-lc", ...).
//! The catalog maps those names to a concrete file under the configured lexica or
//! models root plus the token field the engine should read the resource against.
//! Paths are never taken from request data.

use std::fmt;
use std::path::{Path, PathBuf};

/// Resource categories understood by the decoding engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    AmbiguityClasses,
    WordClusters,
    NamedEntityGazetteers,
    WordEmbeddings,
    Models,
}

impl ResourceCategory {
    /// The four lexica categories, in the order the compiler evaluates them.
    pub const LEXICA: [ResourceCategory; 4] = [
        ResourceCategory::AmbiguityClasses,
        ResourceCategory::WordClusters,
        ResourceCategory::NamedEntityGazetteers,
        ResourceCategory::WordEmbeddings,
    ];

    /// Element name used for this category in the configuration document.
    pub fn element_name(&self) -> &'static str {
        match self {
            ResourceCategory::AmbiguityClasses => "ambiguity_classes",
            ResourceCategory::WordClusters => "word_clusters",
            ResourceCategory::NamedEntityGazetteers => "named_entity_gazetteers",
            ResourceCategory::WordEmbeddings => "word_embeddings",
            ResourceCategory::Models => "models",
        }
    }

    /// Human-readable description, used in diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            ResourceCategory::AmbiguityClasses => "ambiguity classes",
            ResourceCategory::WordClusters => "word clusters",
            ResourceCategory::NamedEntityGazetteers => "named entity gazetteers",
            ResourceCategory::WordEmbeddings => "word embeddings",
            ResourceCategory::Models => "models",
        }
    }

    fn rows(&self) -> &'static [CatalogRow] {
        match self {
            ResourceCategory::AmbiguityClasses => AMBIGUITY_CLASSES,
            ResourceCategory::WordClusters => WORD_CLUSTERS,
            ResourceCategory::NamedEntityGazetteers => NAMED_ENTITY_GAZETTEERS,
            ResourceCategory::WordEmbeddings => WORD_EMBEDDINGS,
            ResourceCategory::Models => MODELS,
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Decoding tasks with a trained model in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTask {
    PartOfSpeech,
    NamedEntity,
    Dependency,
}

impl ModelTask {
    /// Tasks in the order they appear in the configuration document.
    pub const ALL: [ModelTask; 3] = [
        ModelTask::PartOfSpeech,
        ModelTask::NamedEntity,
        ModelTask::Dependency,
    ];

    /// Short name, shared by the request flag and the document element.
    pub fn name(&self) -> &'static str {
        match self {
            ModelTask::PartOfSpeech => "pos",
            ModelTask::NamedEntity => "ner",
            ModelTask::Dependency => "dep",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ModelTask::PartOfSpeech => "en-pos.xz",
            ModelTask::NamedEntity => "en-ner.xz",
            ModelTask::Dependency => "en-dep.xz",
        }
    }
}

/// (symbolic name, file name, field name)
type CatalogRow = (&'static str, &'static str, &'static str);

const AMBIGUITY_CLASSES: &[CatalogRow] = &[
    ("simplified", "en-ambiguity-classes-simplified.xz", "word_form_simplified"),
    (
        "simplified-lowercase",
        "en-ambiguity-classes-simplified-lowercase.xz",
        "word_form_simplified_lowercase",
    ),
];

const WORD_CLUSTERS: &[CatalogRow] = &[
    (
        "brown-simplified-lc",
        "en-brown-clusters-simplified-lowercase.xz",
        "word_form_simplified_lowercase",
    ),
    ("brown-twit-lc", "en-brown-clusters-twit-lowercase.xz", "word_form_lowercase"),
];

const NAMED_ENTITY_GAZETTEERS: &[CatalogRow] = &[
    ("simplified", "en-named-entity-gazetteers-simplified.xz", "word_form_simplified"),
    (
        "simplified-lowercase",
        "en-named-entity-gazetteers-simplified-lowercase.xz",
        "word_form_simplified_lowercase",
    ),
];

const WORD_EMBEDDINGS: &[CatalogRow] = &[(
    "undigitalized",
    "en-word-embeddings-undigitalized.xz",
    "word_form_undigitalized",
)];

const MODELS: &[CatalogRow] = &[
    ("pos", "en-pos.xz", "pos"),
    ("ner", "en-ner.xz", "ner"),
    ("dep", "en-dep.xz", "dep"),
];

/// A resolved catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: ResourceCategory,
    pub name: &'static str,
    pub field: &'static str,
    pub path: PathBuf,
}

/// Catalog bound to the directories the resource files live in.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    lexica_root: PathBuf,
    models_root: PathBuf,
}

impl ResourceCatalog {
    pub fn new(lexica_root: impl Into<PathBuf>, models_root: impl Into<PathBuf>) -> Self {
        Self {
            lexica_root: lexica_root.into(),
            models_root: models_root.into(),
        }
    }

    pub fn lexica_root(&self) -> &Path {
        &self.lexica_root
    }

    pub fn models_root(&self) -> &Path {
        &self.models_root
    }

    /// Look up a symbolic name. Absence is not an error here; the caller decides.
    pub fn resolve(&self, category: ResourceCategory, name: &str) -> Option<CatalogEntry> {
        let root = match category {
            ResourceCategory::Models => &self.models_root,
            _ => &self.lexica_root,
        };

        category
            .rows()
            .iter()
            .copied()
            .find(|(symbolic, _, _)| *symbolic == name)
            .map(|(symbolic, file, field)| CatalogEntry {
                category,
                name: symbolic,
                field,
                path: root.join(file),
            })
    }

    /// Model file for a task.
    pub fn model(&self, task: ModelTask) -> CatalogEntry {
        CatalogEntry {
            category: ResourceCategory::Models,
            name: task.name(),
            field: task.name(),
            path: self.models_root.join(task.file_name()),
        }
    }

    /// Symbolic names accepted for a category.
    pub fn names(&self, category: ResourceCategory) -> Vec<&'static str> {
        category.rows().iter().map(|(name, _, _)| *name).collect()
    }
}
