use anyhow::{Context, Result};
use miette::Report;
use std::path::Path;
use tracing::debug;

use super::error_reporter::{ManifestError, SpannedDocument};
use super::schemas::get_resource_schema;

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

/// Checks the manifest envelope before any typed decoding happens.
pub struct StructureValidator {
    validator: jsonschema::Validator,
}

impl StructureValidator {
    pub fn new() -> Result<Self> {
        let schema = get_resource_schema().context("Failed to parse resource schema")?;
        let validator = schema_draft::options()
            .build(&schema)
            .context("Failed to compile resource schema")?;

        Ok(Self { validator })
    }

    pub fn violations(&self, document: &SpannedDocument) -> Vec<ManifestError> {
        self.validator
            .iter_errors(document.json_value())
            .map(|error| document.create_error(&error.instance_path.to_string(), error.to_string()))
            .collect()
    }

    pub fn validate(&self, document: &SpannedDocument, path: &Path) -> Result<()> {
        let errors = self.violations(document);

        if !errors.is_empty() {
            eprintln!(); // Add newline before first error
            for error in errors {
                eprintln!("{:?}", Report::new(error));
            }
            anyhow::bail!("Schema validation failed for {path:?} (see detailed errors above)");
        }

        debug!("    ✓ Structure validation passed: {path:?}");
        Ok(())
    }
}
