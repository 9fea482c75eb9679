// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The configuration document handed to the decoding engine.
//!
//! The document is built as typed sections and only rendered to markup at the
//! very end, so everything the compiler produced can be asserted on directly.

use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::catalog::{CatalogEntry, ModelTask, ResourceCategory};
use crate::errors::DocumentError;

const ROOT_ELEMENT: &str = "configuration";
const INDENT_SIZE: usize = 4;

/// Binds a TSV column index to a token field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    /// Kept as the caller wrote it; defaults are rendered from the position.
    pub index: String,
    pub field: String,
}

/// A lexicon resolved through the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconBinding {
    pub category: ResourceCategory,
    pub field: String,
    pub path: String,
}

impl From<CatalogEntry> for LexiconBinding {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            category: entry.category,
            field: entry.field.to_string(),
            path: normalize_path(&entry.path),
        }
    }
}

/// A trained model resolved through the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBinding {
    pub task: ModelTask,
    pub path: String,
}

/// Structured configuration for one engine run. Sections are `None` when the
/// request did not ask for anything in them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationDocument {
    pub tsv: Option<Vec<ColumnBinding>>,
    pub lexica: Option<Vec<LexiconBinding>>,
    pub models: Option<Vec<ModelBinding>>,
}

impl ConfigurationDocument {
    pub fn is_empty(&self) -> bool {
        self.tsv.is_none() && self.lexica.is_none() && self.models.is_none()
    }

    /// Render the nested markup form the engine reads with `-c`.
    pub fn to_xml(&self) -> Result<String, DocumentError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);

        start(&mut writer, ROOT_ELEMENT)?;

        if let Some(columns) = &self.tsv {
            start(&mut writer, "tsv")?;
            for column in columns {
                writer
                    .create_element("column")
                    .with_attribute(("index", column.index.as_str()))
                    .with_attribute(("field", column.field.as_str()))
                    .write_empty()
                    .map_err(markup_error)?;
            }
            end(&mut writer, "tsv")?;
        }

        if let Some(lexica) = &self.lexica {
            start(&mut writer, "lexica")?;
            for lexicon in lexica {
                writer
                    .create_element(lexicon.category.element_name())
                    .with_attribute(("field", lexicon.field.as_str()))
                    .write_text_content(BytesText::new(&lexicon.path))
                    .map_err(markup_error)?;
            }
            end(&mut writer, "lexica")?;
        }

        if let Some(models) = &self.models {
            start(&mut writer, "models")?;
            for model in models {
                writer
                    .create_element(model.task.name())
                    .write_text_content(BytesText::new(&model.path))
                    .map_err(markup_error)?;
            }
            end(&mut writer, "models")?;
        }

        end(&mut writer, ROOT_ELEMENT)?;

        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }
}

fn start(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str) -> Result<(), DocumentError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(markup_error)
}

fn end(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str) -> Result<(), DocumentError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(markup_error)
}

fn markup_error(error: impl std::fmt::Display) -> DocumentError {
    DocumentError::Markup(error.to_string())
}

/// Render a path with forward slashes, the separator the engine expects.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
