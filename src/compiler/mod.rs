// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration compiler.
//!
//! Turns [`DecodeOptions`] into a [`ConfigurationDocument`], resolving every
//! symbolic resource name through the [`ResourceCatalog`]. Sections are evaluated
//! in a fixed order and the first failure wins:
//!
//! ```text
//! tsv -> ambiguity -> clusters -> gazetteers -> embeddings -> models
//! ```
//!
//! An unresolved name never reaches the document.

mod document;

pub use document::{
    normalize_path, ColumnBinding, ConfigurationDocument, LexiconBinding, ModelBinding,
};

use crate::catalog::{ModelTask, ResourceCatalog, ResourceCategory};
use crate::config::DecodeOptions;
use crate::errors::ValidationFailure;

/// Lexica sections in evaluation order, each paired with the failure raised
/// for a name the catalog does not know.
const LEXICON_SECTIONS: [(ResourceCategory, fn(String) -> ValidationFailure); 4] = [
    (ResourceCategory::AmbiguityClasses, ValidationFailure::UnknownAmbiguityName),
    (ResourceCategory::WordClusters, ValidationFailure::UnknownClusterName),
    (ResourceCategory::NamedEntityGazetteers, ValidationFailure::UnknownGazetteerName),
    (ResourceCategory::WordEmbeddings, ValidationFailure::UnknownEmbeddingName),
];

/// Compiles request options against a resource catalog.
///
/// Holds no state besides the catalog reference, so compiling the same options
/// twice yields identical documents.
pub struct ConfigurationCompiler<'a> {
    catalog: &'a ResourceCatalog,
}

impl<'a> ConfigurationCompiler<'a> {
    pub fn new(catalog: &'a ResourceCatalog) -> Self {
        Self { catalog }
    }

    pub fn compile(&self, options: &DecodeOptions) -> Result<ConfigurationDocument, ValidationFailure> {
        Ok(ConfigurationDocument {
            tsv: self.compile_tsv(options)?,
            lexica: self.compile_lexica(options)?,
            models: self.compile_models(options),
        })
    }

    fn compile_tsv(&self, options: &DecodeOptions) -> Result<Option<Vec<ColumnBinding>>, ValidationFailure> {
        let Some(fields_raw) = options.tsv_fields.as_deref() else {
            return Ok(None);
        };
        let fields = split_list(fields_raw);

        let columns = match options.tsv_indices.as_deref() {
            Some(indices_raw) => {
                let indices = split_list(indices_raw);
                fields
                    .iter()
                    .enumerate()
                    .map(|(i, field)| match indices.get(i) {
                        Some(index) => Ok(ColumnBinding {
                            index: index.to_string(),
                            field: field.to_string(),
                        }),
                        None => Err(ValidationFailure::IndexFieldMismatch {
                            indices: indices_raw.to_string(),
                            fields: fields_raw.to_string(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => fields
                .iter()
                .enumerate()
                .map(|(i, field)| ColumnBinding {
                    index: i.to_string(),
                    field: field.to_string(),
                })
                .collect(),
        };

        Ok(Some(columns))
    }

    fn compile_lexica(&self, options: &DecodeOptions) -> Result<Option<Vec<LexiconBinding>>, ValidationFailure> {
        let mut lexica = Vec::new();

        for (category, unknown) in LEXICON_SECTIONS {
            let Some(name) = options.lexicon(category) else {
                continue;
            };
            match self.catalog.resolve(category, name) {
                Some(entry) => lexica.push(LexiconBinding::from(entry)),
                None => return Err(unknown(name.to_string())),
            }
        }

        Ok((!lexica.is_empty()).then_some(lexica))
    }

    fn compile_models(&self, options: &DecodeOptions) -> Option<Vec<ModelBinding>> {
        let models: Vec<ModelBinding> = ModelTask::ALL
            .into_iter()
            .filter(|task| options.wants_model(*task))
            .map(|task| ModelBinding {
                task,
                path: normalize_path(&self.catalog.model(task).path),
            })
            .collect();

        (!models.is_empty()).then_some(models)
    }
}

/// Split a comma-separated list, dropping the spaces that follow each comma.
///
/// Trailing empty items are discarded; an empty string is a single empty item.
fn split_list(raw: &str) -> Vec<&str> {
    if raw.is_empty() {
        return vec![raw];
    }

    let mut items: Vec<&str> = raw
        .split(',')
        .enumerate()
        .map(|(i, item)| if i == 0 { item } else { item.trim_start_matches(' ') })
        .collect();
    while items.last().is_some_and(|item| item.is_empty()) {
        items.pop();
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::new("lexica", "models")
    }

    fn compile(options: &DecodeOptions) -> Result<ConfigurationDocument, ValidationFailure> {
        let catalog = catalog();
        ConfigurationCompiler::new(&catalog).compile(options)
    }

    fn columns(document: &ConfigurationDocument) -> Vec<(String, String)> {
        document
            .tsv
            .as_ref()
            .unwrap()
            .iter()
            .map(|c| (c.index.clone(), c.field.clone()))
            .collect()
    }

    #[test]
    fn test_no_options_produces_empty_document() {
        let document = compile(&DecodeOptions::default()).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_tsv_fields_default_to_positional_indices() {
        let options = DecodeOptions {
            tsv_fields: Some("a,b,c".to_string()),
            ..Default::default()
        };
        let document = compile(&options).unwrap();

        assert_eq!(
            columns(&document),
            vec![
                ("0".to_string(), "a".to_string()),
                ("1".to_string(), "b".to_string()),
                ("2".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_tsv_indices_zip_with_fields() {
        let options = DecodeOptions {
            tsv_fields: Some("form,  lemma, pos".to_string()),
            tsv_indices: Some("1, 2,4, 9".to_string()),
            ..Default::default()
        };
        let document = compile(&options).unwrap();

        // extra indices are ignored
        assert_eq!(
            columns(&document),
            vec![
                ("1".to_string(), "form".to_string()),
                ("2".to_string(), "lemma".to_string()),
                ("4".to_string(), "pos".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_indices_fail_with_both_raw_values() {
        let options = DecodeOptions {
            tsv_fields: Some("a,b".to_string()),
            tsv_indices: Some("5".to_string()),
            ..Default::default()
        };

        assert_eq!(
            compile(&options),
            Err(ValidationFailure::IndexFieldMismatch {
                indices: "5".to_string(),
                fields: "a,b".to_string(),
            })
        );
    }

    #[test]
    fn test_indices_without_fields_are_ignored() {
        let options = DecodeOptions {
            tsv_indices: Some("0,1".to_string()),
            ..Default::default()
        };
        assert!(compile(&options).unwrap().tsv.is_none());
    }

    #[test]
    fn test_ambiguity_resolves_field_from_catalog() {
        let options = DecodeOptions {
            ambiguity: Some("simplified-lowercase".to_string()),
            ..Default::default()
        };
        let document = compile(&options).unwrap();
        let lexica = document.lexica.unwrap();

        assert_eq!(lexica.len(), 1);
        assert_eq!(lexica[0].category, ResourceCategory::AmbiguityClasses);
        assert_eq!(lexica[0].field, "word_form_simplified_lowercase");
        assert_eq!(lexica[0].path, "lexica/en-ambiguity-classes-simplified-lowercase.xz");
    }

    #[test]
    fn test_lexica_keep_category_order() {
        let options = DecodeOptions {
            embeddings: Some("undigitalized".to_string()),
            gazetteers: Some("simplified".to_string()),
            clusters: Some("brown-simplified-lc".to_string()),
            ambiguity: Some("simplified".to_string()),
            ..Default::default()
        };
        let lexica = compile(&options).unwrap().lexica.unwrap();
        let categories: Vec<_> = lexica.iter().map(|l| l.category).collect();

        assert_eq!(categories, ResourceCategory::LEXICA.to_vec());
    }

    #[test]
    fn test_lexicon_sections_follow_category_order() {
        let categories: Vec<_> = LEXICON_SECTIONS.iter().map(|(category, _)| *category).collect();

        assert_eq!(categories, ResourceCategory::LEXICA.to_vec());
    }

    #[test]
    fn test_unknown_names_per_category() {
        let cases = vec![
            (
                DecodeOptions { ambiguity: Some("bogus".to_string()), ..Default::default() },
                ValidationFailure::UnknownAmbiguityName("bogus".to_string()),
            ),
            (
                DecodeOptions { clusters: Some("bogus".to_string()), ..Default::default() },
                ValidationFailure::UnknownClusterName("bogus".to_string()),
            ),
            (
                DecodeOptions { gazetteers: Some("bogus".to_string()), ..Default::default() },
                ValidationFailure::UnknownGazetteerName("bogus".to_string()),
            ),
            (
                DecodeOptions { embeddings: Some("bogus".to_string()), ..Default::default() },
                ValidationFailure::UnknownEmbeddingName("bogus".to_string()),
            ),
        ];

        for (options, expected) in cases {
            assert_eq!(compile(&options), Err(expected));
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let options = DecodeOptions {
            ambiguity: Some("bogus".to_string()),
            clusters: Some("also-bogus".to_string()),
            ..Default::default()
        };
        assert_eq!(
            compile(&options),
            Err(ValidationFailure::UnknownAmbiguityName("bogus".to_string()))
        );

        // tsv is checked before any lexicon
        let options = DecodeOptions {
            tsv_fields: Some("a,b".to_string()),
            tsv_indices: Some("0".to_string()),
            ambiguity: Some("bogus".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            compile(&options),
            Err(ValidationFailure::IndexFieldMismatch { .. })
        ));
    }

    #[test]
    fn test_models_follow_flags() {
        let options = DecodeOptions {
            dep: true,
            pos: true,
            ..Default::default()
        };
        let models = compile(&options).unwrap().models.unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].task, ModelTask::PartOfSpeech);
        assert_eq!(models[0].path, "models/en-pos.xz");
        assert_eq!(models[1].task, ModelTask::Dependency);
    }

    #[test]
    fn test_compile_is_idempotent() {
        let options = DecodeOptions {
            tsv_fields: Some("form,lemma".to_string()),
            ambiguity: Some("simplified".to_string()),
            clusters: Some("brown-twit-lc".to_string()),
            ner: true,
            ..Default::default()
        };
        let first = compile(&options).unwrap();
        let second = compile(&options).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_xml().unwrap(), second.to_xml().unwrap());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("a,   b, c"), vec!["a", "b", "c"]);
        assert_eq!(split_list(" a,b"), vec![" a", "b"]);
        assert_eq!(split_list("a,b,,"), vec!["a", "b"]);
        assert_eq!(split_list("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_list(""), vec![""]);
    }
}
