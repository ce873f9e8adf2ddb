//! Destinations for named text artifacts.

use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

const WRITER_BUFFER_SIZE: usize = 64 * 1024;

/// A named blob of text offered to a sink
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub name: String,
    pub mime: &'static str,
    pub content: String,
}

impl Artifact {
    pub fn csv(name: impl Into<String>, content: String) -> Self {
        Self {
            name: name.into(),
            mime: CSV_MIME,
            content,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Receives artifacts. What happens to them afterwards is not observed.
pub trait ArtifactSink {
    fn emit(&mut self, artifact: &Artifact) -> anyhow::Result<()>;
}

/// Writes each artifact to `<dir>/<name>`, replacing existing files
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in emit order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactSink for DirectorySink {
    fn emit(&mut self, artifact: &Artifact) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.dir))?;

        let path = self.dir.join(&artifact.name);
        let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
        let mut writer = BufWriter::with_capacity(WRITER_BUFFER_SIZE, file);
        writer
            .write_all(artifact.content.as_bytes())
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write {:?}", path))?;

        self.written.push(path);
        Ok(())
    }
}

/// Keeps artifacts in memory, in emit order
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}

impl ArtifactSink for MemorySink {
    fn emit(&mut self, artifact: &Artifact) -> anyhow::Result<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}
