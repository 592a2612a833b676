//! Reads manifests from disk, checks their structure and decodes them by kind

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::models::Resource;
use crate::validation::{SpannedDocument, StructureValidator};

const MANIFEST_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// A decoded manifest together with the document it came from
pub struct LoadedResource {
    pub path: PathBuf,
    pub resource: Resource,
    pub document: SpannedDocument,
}

pub struct ResourceLoader {
    structure_validator: StructureValidator,
}

impl ResourceLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            structure_validator: StructureValidator::new()?,
        })
    }

    /// Load a single manifest file
    pub fn load_file(&self, path: &Path) -> Result<LoadedResource> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {path:?}"))?;
        self.load_str(&content, path)
    }

    /// Load a manifest from memory; `path` is only used for reporting
    pub fn load_str(&self, content: &str, path: &Path) -> Result<LoadedResource> {
        let document = SpannedDocument::parse(path, content.to_string())
            .with_context(|| format!("Failed to parse YAML from: {path:?}"))?;

        self.structure_validator.validate(&document, path)?;

        let resource: Resource = serde_json::from_value(document.json_value().clone())
            .with_context(|| format!("Failed to decode resource from: {path:?}"))?;
        debug!("  Loaded {} '{}' from {path:?}", resource.kind(), resource.name());

        Ok(LoadedResource {
            path: path.to_path_buf(),
            resource,
            document,
        })
    }

    /// Load a file, or every manifest under a directory in path order
    pub fn load_path(&self, path: &Path) -> Result<Vec<LoadedResource>> {
        self.manifest_paths(path)?
            .iter()
            .map(|manifest| self.load_file(manifest))
            .collect()
    }

    /// Expand `path` into the manifest files it names
    pub fn manifest_paths(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }
        if !path.is_dir() {
            anyhow::bail!("No such file or directory: {path:?}");
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(path).follow_links(false) {
            let entry = entry.with_context(|| format!("Failed to walk directory: {path:?}"))?;
            let file = entry.path();
            if file.is_file() && is_manifest(file) {
                files.push(file.to_path_buf());
            }
        }
        files.sort();

        info!("Found {} manifest(s) under {path:?}", files.len());
        Ok(files)
    }
}

fn is_manifest(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MANIFEST_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests;
