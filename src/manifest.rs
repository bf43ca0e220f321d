//! JSON manifest describing the files an asset generator produced.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize, Debug, Clone)]
pub struct AssetManifest {
    pub generator: String,
    pub version: u32,
    pub images: Vec<ImageEntry>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    pub filename: String,
    pub width: u32,
    pub height: u32,
}

impl AssetManifest {
    pub fn new(generator: &str) -> Self {
        Self {
            generator: generator.to_string(),
            version: 1,
            images: Vec::new(),
        }
    }

    pub fn add_image(&mut self, filename: impl Into<String>, width: u32, height: u32) {
        self.images.push(ImageEntry {
            filename: filename.into(),
            width,
            height,
        });
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
