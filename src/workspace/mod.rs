// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request-scoped working directory.
//!
//! Holds the generated configuration document, the input documents and
//! whatever the engine writes back. The directory and everything in it is
//! removed when the [`WorkingDirectory`] is dropped.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};

use crate::config::WorkspaceConfig;

pub struct WorkingDirectory {
    dir: TempDir,
}

impl WorkingDirectory {
    /// Create a fresh, uniquely named directory under the configured root
    /// (or the system temp directory).
    pub fn create(config: &WorkspaceConfig) -> io::Result<Self> {
        let mut builder = Builder::new();
        builder.prefix(config.get_prefix());
        let dir = match &config.root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to a new file named `<stem><random>.<extension>` and
    /// return its path. The file lives until the directory is dropped.
    pub fn write_file(&self, stem: &str, extension: &str, content: &str) -> io::Result<PathBuf> {
        let suffix = format!(".{extension}");
        let mut file = Builder::new()
            .prefix(&sanitize_stem(stem))
            .suffix(&suffix)
            .tempfile_in(self.dir.path())?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        let (_, path) = file.keep().map_err(io::Error::from)?;
        Ok(path)
    }
}

/// Payload keys become file name prefixes; anything that could leave the
/// directory or confuse the engine's extension matching is replaced.
fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
