//! Output sink: persistence of the rendered artifacts.
//!
//! Rendering is pure (see `cminus_syntax::render`); this module is the only place the driver
//! touches the filesystem. The [`OutputSink`] trait separates that concern from the pipeline so
//! artifacts can be captured in memory instead of written to disk.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{Artifact, OutputConfig};

/// Errors that occur while reading the source or persisting artifacts
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot create output directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
}

/// Read a UTF-8 source file.
pub fn read_source(path: &Path) -> Result<String, SinkError> {
    fs::read_to_string(path).map_err(|source| SinkError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Destination for rendered artifacts.
pub trait OutputSink {
    /// Persist the full text of one artifact, replacing any previous content.
    fn write(&mut self, artifact: Artifact, contents: &str) -> Result<(), SinkError>;
}

/// Writes each artifact to its configured file, creating the output directory on first use.
#[derive(Debug, Clone)]
pub struct FileSink {
    config: OutputConfig,
    dir_ready: bool,
}

impl FileSink {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            dir_ready: false,
        }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    fn ensure_dir(&mut self) -> Result<(), SinkError> {
        if self.dir_ready {
            return Ok(());
        }
        let dir = self.config.out_dir();
        fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        self.dir_ready = true;
        Ok(())
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, artifact: Artifact, contents: &str) -> Result<(), SinkError> {
        self.ensure_dir()?;
        let path = self.config.path_for(artifact);
        fs::write(&path, contents).map_err(|source| SinkError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        Ok(())
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: BTreeMap<Artifact, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, artifact: Artifact) -> Option<&str> {
        self.artifacts.get(&artifact).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, artifact: Artifact, contents: &str) -> Result<(), SinkError> {
        self.artifacts.insert(artifact, contents.to_string());
        Ok(())
    }
}
