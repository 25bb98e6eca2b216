//! Destinations for build sprites.
//!
//! The host tool's asset emission is reached only through [`AssetSink`];
//! [`DirectorySink`] writes to a configured output directory instead.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Capability to publish a named build artifact.
pub trait AssetSink {
    fn emit(&mut self, file_name: &str, source: &str) -> Result<()>;
}

/// Writes artifacts into a directory, creating it on demand and
/// overwriting existing files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AssetSink for DirectorySink {
    fn emit(&mut self, file_name: &str, source: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create `{}`", self.dir.display()))?;
        let path = self.dir.join(file_name);
        fs::write(&path, source).with_context(|| format!("failed to write `{}`", path.display()))
    }
}

/// An artifact registered with [`EmittedAssets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    pub file_name: String,
    pub source: String,
}

/// In-memory asset registry, for hosts that collect artifacts and write
/// them out themselves.
#[derive(Debug, Clone, Default)]
pub struct EmittedAssets {
    assets: Vec<EmittedAsset>,
}

impl EmittedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assets(&self) -> &[EmittedAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn into_assets(self) -> Vec<EmittedAsset> {
        self.assets
    }
}

impl AssetSink for EmittedAssets {
    fn emit(&mut self, file_name: &str, source: &str) -> Result<()> {
        self.assets.push(EmittedAsset {
            file_name: file_name.to_string(),
            source: source.to_string(),
        });
        Ok(())
    }
}
