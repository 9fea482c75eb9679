// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_ENGINE_PROGRAM, DEFAULT_INPUT_EXTENSION, DEFAULT_LEXICA_ROOT, DEFAULT_MODELS_ROOT,
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_WORKSPACE_PREFIX,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Adapter settings: where the engine and its resources live, and how the
/// per-request working directory and output collection behave.
///
/// Every section is optional and falls back to built-in defaults, so an empty
/// file is a valid configuration.
///
/// # Example
/// ```yaml
/// engine:
///   program: java
///   args: ["-cp", "nlp4j.jar", "edu.emory.mathcs.nlp.bin.NLPDecode"]
///   timeout_seconds: 300
/// resources:
///   lexica_root: /opt/nlp4j/lexica
///   models_root: /opt/nlp4j/models
/// workspace:
///   prefix: decode
/// output:
///   output_extension: out
///   ordering: file_name
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How to launch the external decoding engine.
///
/// `args` are placed before the generated argument vector, which lets a JVM
/// entry point (classpath + main class) be configured without a wrapper script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    pub program: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    pub timeout_seconds: Option<u64>,
}

impl EngineConfig {
    /// Get the engine program, using the built-in default if not configured.
    pub fn get_program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_ENGINE_PROGRAM)
    }

    /// Deadline for one invocation; `None` waits indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    #[serde(default = "default_lexica_root")]
    pub lexica_root: PathBuf,
    #[serde(default = "default_models_root")]
    pub models_root: PathBuf,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            lexica_root: default_lexica_root(),
            models_root: default_models_root(),
        }
    }
}

fn default_lexica_root() -> PathBuf {
    PathBuf::from(DEFAULT_LEXICA_ROOT)
}

fn default_models_root() -> PathBuf {
    PathBuf::from(DEFAULT_MODELS_ROOT)
}

/// Where per-request working directories are created.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceConfig {
    pub prefix: Option<String>,
    /// Parent directory; the system temp dir when unset.
    pub root: Option<PathBuf>,
}

impl WorkspaceConfig {
    pub fn get_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_WORKSPACE_PREFIX)
    }
}

/// File extensions shared by the argument vector and the output collector.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_input_extension")]
    pub input_extension: String,
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    #[serde(default)]
    pub ordering: OutputOrdering,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            input_extension: default_input_extension(),
            output_extension: default_output_extension(),
            ordering: OutputOrdering::default(),
        }
    }
}

impl OutputConfig {
    /// Substring that marks a file in the working directory as engine output.
    pub fn output_marker(&self) -> String {
        format!(".{}", self.output_extension)
    }
}

fn default_input_extension() -> String {
    DEFAULT_INPUT_EXTENSION.to_string()
}

fn default_output_extension() -> String {
    DEFAULT_OUTPUT_EXTENSION.to_string()
}

/// Order in which output files are numbered.
///
/// # Variants
/// * `FileName` - Sorted by file name, stable across platforms
/// * `Listing` - Whatever order the filesystem lists the directory in
#[derive(Debug, Default, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrdering {
    #[default]
    FileName,
    Listing,
}

/// Supported settings file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn detect_from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Some(ConfigFormat::Yaml)
            }
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Load adapter settings from a YAML or TOML file (chosen by extension)
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AdapterConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::detect_from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cfg = match format {
        ConfigFormat::Yaml => {
            // serde_yaml rejects an empty document; treat it as all defaults
            if content.trim().is_empty() {
                AdapterConfig::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        }
        ConfigFormat::Toml => toml::from_str(&content)?,
    };
    Ok(cfg)
}

/// Load adapter settings and reject values the adapter cannot run with.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<AdapterConfig, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Check settings that deserialize fine but cannot work at runtime.
pub fn validate_config(cfg: &AdapterConfig) -> Result<(), ConfigError> {
    let mut problems = Vec::new();

    if cfg.engine.get_program().trim().is_empty() {
        problems.push("engine.program must not be empty".to_string());
    }
    if cfg.engine.timeout_seconds == Some(0) {
        problems.push("engine.timeout_seconds must be greater than zero".to_string());
    }
    if cfg.output.input_extension.is_empty() {
        problems.push("output.input_extension must not be empty".to_string());
    }
    if cfg.output.output_extension.is_empty() {
        problems.push("output.output_extension must not be empty".to_string());
    }
    if cfg.output.input_extension == cfg.output.output_extension {
        problems.push("output.input_extension and output.output_extension must differ".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(problems))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
engine:
  program: java
  args: ["-cp", "nlp4j.jar", "edu.emory.mathcs.nlp.bin.NLPDecode"]
  timeout_seconds: 30
resources:
  lexica_root: /opt/lexica
"#;

        let cfg: AdapterConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.engine.get_program(), "java");
        assert_eq!(cfg.engine.args.len(), 3);
        assert_eq!(cfg.engine.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(cfg.resources.lexica_root, PathBuf::from("/opt/lexica"));
        // untouched sections keep their defaults
        assert_eq!(cfg.resources.models_root, PathBuf::from(DEFAULT_MODELS_ROOT));
        assert_eq!(cfg.output.ordering, OutputOrdering::FileName);
    }

    #[test]
    fn test_defaults() {
        let cfg = AdapterConfig::default();

        assert_eq!(cfg.engine.get_program(), DEFAULT_ENGINE_PROGRAM);
        assert_eq!(cfg.engine.timeout(), None);
        assert_eq!(cfg.workspace.get_prefix(), "input");
        assert_eq!(cfg.output.input_extension, "input");
        assert_eq!(cfg.output.output_marker(), ".out");
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_load_yaml_and_toml() {
        let dir = TempDir::new().unwrap();
        let yaml = write_config(
            &dir,
            "adapter.yaml",
            "output:\n  ordering: listing\n  output_extension: nlp\n",
        );
        let toml = write_config(
            &dir,
            "adapter.toml",
            "[engine]\nprogram = \"decode\"\n\n[workspace]\nprefix = \"job\"\n",
        );

        let from_yaml = load_and_validate_config(&yaml).unwrap();
        assert_eq!(from_yaml.output.ordering, OutputOrdering::Listing);
        assert_eq!(from_yaml.output.output_marker(), ".nlp");

        let from_toml = load_and_validate_config(&toml).unwrap();
        assert_eq!(from_toml.engine.get_program(), "decode");
        assert_eq!(from_toml.workspace.get_prefix(), "job");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "empty.yml", "");

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.engine.get_program(), DEFAULT_ENGINE_PROGRAM);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "adapter.json", "{}");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/adapter.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "bad.yaml",
            "engine:\n  program: \"\"\n  timeout_seconds: 0\noutput:\n  output_extension: input\n",
        );

        let error = load_and_validate_config(&path).unwrap_err();
        match &error {
            ConfigError::Invalid(problems) => assert_eq!(problems.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(error.to_string().contains("engine.program must not be empty"));
    }
}
