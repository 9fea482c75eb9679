// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Argument vector for one engine run.
//!
//! Layout: `-c <config> -i <dir> -ie <input ext> -oe <output ext> [-format <value>]`.
//! Tokens are kept individually so paths containing spaces survive intact.

use std::fmt;
use std::io;
use std::path::Path;

use crate::compiler::normalize_path;
use crate::config::OutputConfig;
use crate::envelope::Payload;
use crate::workspace::WorkingDirectory;

pub const CONFIG_FLAG: &str = "-c";
pub const INPUT_DIR_FLAG: &str = "-i";
pub const INPUT_EXTENSION_FLAG: &str = "-ie";
pub const OUTPUT_EXTENSION_FLAG: &str = "-oe";
pub const FORMAT_FLAG: &str = "-format";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value following `flag`, if the flag is present.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.0
            .iter()
            .position(|token| token == flag)
            .and_then(|i| self.0.get(i + 1))
            .map(String::as_str)
    }

    fn push(&mut self, flag: &str, value: impl Into<String>) {
        self.0.push(flag.to_string());
        self.0.push(value.into());
    }
}

impl From<Vec<String>> for ArgumentVector {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl fmt::Display for ArgumentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Materializes input documents into the working directory and produces the
/// matching argument vector.
pub struct ArgumentVectorBuilder<'a> {
    workspace: &'a WorkingDirectory,
    output: &'a OutputConfig,
}

impl<'a> ArgumentVectorBuilder<'a> {
    pub fn new(workspace: &'a WorkingDirectory, output: &'a OutputConfig) -> Self {
        Self { workspace, output }
    }

    /// Writes one input file per payload entry whose key names an input
    /// document, then returns the full argument vector.
    pub fn build(
        &self,
        documents: &Payload,
        format: Option<&str>,
        config_path: &Path,
    ) -> io::Result<ArgumentVector> {
        for (key, text) in documents.inputs() {
            self.workspace
                .write_file(key, &self.output.input_extension, text)?;
        }

        let mut arguments = ArgumentVector::default();
        arguments.push(CONFIG_FLAG, normalize_path(config_path));
        arguments.push(INPUT_DIR_FLAG, normalize_path(self.workspace.path()));
        arguments.push(INPUT_EXTENSION_FLAG, self.output.input_extension.as_str());
        arguments.push(OUTPUT_EXTENSION_FLAG, self.output.output_extension.as_str());
        if let Some(format) = format {
            arguments.push(FORMAT_FLAG, format);
        }
        Ok(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;
    use tempfile::TempDir;

    fn workspace(root: &TempDir) -> WorkingDirectory {
        WorkingDirectory::create(&WorkspaceConfig {
            prefix: None,
            root: Some(root.path().to_path_buf()),
        })
        .unwrap()
    }

    fn files_with_extension(dir: &Path, extension: &str) -> Vec<String> {
        let mut contents: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
            .map(|path| std::fs::read_to_string(path).unwrap())
            .collect();
        contents.sort();
        contents
    }

    #[test]
    fn test_build_layout() {
        let root = TempDir::new().unwrap();
        let workspace = workspace(&root);
        let output = OutputConfig::default();
        let config_path = workspace.path().join("config1.xml");
        let documents: Payload = [("input", "The cat sat.")].into_iter().collect();

        let arguments = ArgumentVectorBuilder::new(&workspace, &output)
            .build(&documents, None, &config_path)
            .unwrap();

        let dir = normalize_path(workspace.path());
        let expected: Vec<String> = vec![
            "-c".to_string(),
            normalize_path(&config_path),
            "-i".to_string(),
            dir,
            "-ie".to_string(),
            "input".to_string(),
            "-oe".to_string(),
            "out".to_string(),
        ];
        assert_eq!(arguments.as_slice(), expected.as_slice());
        assert_eq!(arguments.value_of(FORMAT_FLAG), None);
    }

    #[test]
    fn test_format_is_appended_last() {
        let root = TempDir::new().unwrap();
        let workspace = workspace(&root);
        let output = OutputConfig::default();

        let arguments = ArgumentVectorBuilder::new(&workspace, &output)
            .build(&Payload::new(), Some("tsv"), &workspace.path().join("c.xml"))
            .unwrap();

        assert_eq!(arguments.len(), 10);
        assert_eq!(arguments.value_of(FORMAT_FLAG), Some("tsv"));
        assert_eq!(arguments.iter().last(), Some("tsv"));
    }

    #[test]
    fn test_only_input_keys_become_files() {
        let root = TempDir::new().unwrap();
        let workspace = workspace(&root);
        let output = OutputConfig::default();
        let documents: Payload = [
            ("input", "first"),
            ("input-2", "second"),
            ("comment", "ignored"),
        ]
        .into_iter()
        .collect();

        ArgumentVectorBuilder::new(&workspace, &output)
            .build(&documents, None, &workspace.path().join("c.xml"))
            .unwrap();

        assert_eq!(
            files_with_extension(workspace.path(), "input"),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_paths_use_forward_slashes() {
        let root = TempDir::new().unwrap();
        let workspace = workspace(&root);
        let output = OutputConfig::default();

        let arguments = ArgumentVectorBuilder::new(&workspace, &output)
            .build(&Payload::new(), None, Path::new(r"C:\work\config.xml"))
            .unwrap();

        assert_eq!(arguments.value_of(CONFIG_FLAG), Some("C:/work/config.xml"));
        assert!(!arguments.iter().any(|token| token.contains('\\')));
    }
}
