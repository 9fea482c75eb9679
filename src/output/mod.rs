// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Output collection.
//!
//! After the engine has run, every regular file directly under the working
//! directory whose name contains the output marker becomes one
//! `output-file-N` entry of the response map. The captured console text is
//! always added under `Printed`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::consts::OUTPUT_FILE_KEY_PREFIX;
use crate::config::{OutputConfig, OutputOrdering};
use crate::engine::CapturedOutput;
use crate::envelope::ResponseMap;
use crate::observability::messages::output::{CollectionCompleted, OutputFileCollected};
use crate::observability::messages::StructuredLog;

pub struct OutputCollector {
    marker: String,
    ordering: OutputOrdering,
}

impl OutputCollector {
    pub fn new(marker: impl Into<String>, ordering: OutputOrdering) -> Self {
        Self {
            marker: marker.into(),
            ordering,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.output_marker(), config.ordering)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Number the matching files from 1 and read them into a response map.
    pub fn collect(&self, dir: &Path, printed: CapturedOutput) -> io::Result<ResponseMap> {
        let mut map = ResponseMap::new();

        let files = self.matching_files(dir)?;
        for (i, path) in files.iter().enumerate() {
            let ordinal = i + 1;
            // undecodable bytes become U+FFFD, as the console text does
            let content = String::from_utf8_lossy(&fs::read(path)?).into_owned();
            let key = format!("{OUTPUT_FILE_KEY_PREFIX}{ordinal}");
            OutputFileCollected {
                key: &key,
                file_name: &path.file_name().unwrap_or_default().to_string_lossy(),
                size: content.len(),
            }
            .log();
            map.insert_output(ordinal, content);
        }

        CollectionCompleted {
            files: files.len(),
            printed_bytes: printed.len(),
        }
        .log();
        map.insert_printed(printed.into_string());

        Ok(map)
    }

    fn matching_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().contains(&self.marker) {
                files.push(entry.path());
            }
        }

        if self.ordering == OutputOrdering::FileName {
            files.sort();
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collector() -> OutputCollector {
        OutputCollector::from_config(&OutputConfig::default())
    }

    #[test]
    fn test_printed_is_always_present() {
        let dir = TempDir::new().unwrap();

        let map = collector().collect(dir.path(), CapturedOutput::default()).unwrap();

        assert_eq!(map.printed(), Some(""));
        assert_eq!(map.output_count(), 0);
    }

    #[test]
    fn test_only_marked_regular_files_are_collected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("input123.input"), "raw").unwrap();
        fs::write(dir.path().join("config9.xml"), "<configuration/>").unwrap();
        fs::write(dir.path().join("input123.input.out"), "1\tThe").unwrap();
        fs::create_dir(dir.path().join("nested.out")).unwrap();

        let map = collector().collect(dir.path(), CapturedOutput::default()).unwrap();

        assert_eq!(map.output_count(), 1);
        assert_eq!(map.output(1), Some("1\tThe"));
    }

    #[test]
    fn test_file_name_ordering_numbers_sorted_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("inputB.input.out"), "second").unwrap();
        fs::write(dir.path().join("inputA.input.out"), "first").unwrap();
        fs::write(dir.path().join("inputC.input.out"), "third").unwrap();

        let map = collector().collect(dir.path(), CapturedOutput::default()).unwrap();

        assert_eq!(map.output(1), Some("first"));
        assert_eq!(map.output(2), Some("second"));
        assert_eq!(map.output(3), Some("third"));
    }

    #[test]
    fn test_listing_ordering_keeps_every_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.out"), "a").unwrap();
        fs::write(dir.path().join("b.out"), "b").unwrap();

        let collector = OutputCollector::new(".out", OutputOrdering::Listing);
        let map = collector.collect(dir.path(), CapturedOutput::default()).unwrap();

        let mut contents = vec![map.output(1).unwrap(), map.output(2).unwrap()];
        contents.sort();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.input.out"), [b'c', b'a', 0xE9, b't']).unwrap();

        let map = collector().collect(dir.path(), CapturedOutput::default()).unwrap();

        assert_eq!(map.output(1), Some("ca\u{FFFD}t"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        assert!(collector().collect(&missing, CapturedOutput::default()).is_err());
    }
}
