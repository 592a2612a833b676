use anyhow::Result;
use atlas_validate::loader::ResourceLoader;
use atlas_validate::validation::{Finding, validate_resource};
use colored::Colorize;
use miette::Report;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Outcome for one manifest in JSON output
#[derive(Debug, Serialize)]
struct ResourceReport {
    path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    valid: bool,

    findings: Vec<Finding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn validate_command(paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let loader = ResourceLoader::new()?;
    let human = format == OutputFormat::Human;

    let mut manifests = Vec::new();
    for path in paths {
        manifests.extend(loader.manifest_paths(path)?);
    }
    if manifests.is_empty() {
        anyhow::bail!("No manifests (*.yaml, *.yml, *.json) found under {paths:?}");
    }

    let mut reports = Vec::with_capacity(manifests.len());
    for manifest in &manifests {
        let path = manifest.display().to_string();

        let loaded = match loader.load_file(manifest) {
            Ok(loaded) => loaded,
            Err(error) => {
                if human {
                    eprintln!("{} {path}: {error:#}", "✗".red());
                }
                reports.push(ResourceReport {
                    path,
                    kind: None,
                    name: None,
                    valid: false,
                    findings: Vec::new(),
                    error: Some(format!("{error:#}")),
                });
                continue;
            }
        };

        let result = validate_resource(&loaded.resource);
        debug!("{path}: {} finding(s)", result.len());

        if human {
            for finding in result.findings() {
                eprintln!("{:?}", Report::new(loaded.document.report_finding(finding)));
            }
            let mark = if result.is_valid() {
                "✓".green()
            } else {
                "✗".red()
            };
            println!(
                "{mark} {} '{}' ({path})",
                loaded.resource.kind(),
                loaded.resource.name()
            );
            for finding in result.findings() {
                println!("    - {}", finding.message);
            }
        }

        reports.push(ResourceReport {
            path,
            kind: Some(loaded.resource.kind()),
            name: Some(loaded.resource.name().to_string()),
            valid: result.is_valid(),
            findings: result.into_iter().collect(),
            error: None,
        });
    }

    let failed = reports.iter().filter(|r| !r.valid).count();

    if human {
        if failed == 0 {
            println!(
                "\n✅ All {} manifest(s) passed validation!",
                reports.len()
            );
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} manifest(s) failed validation", reports.len());
    }

    Ok(())
}
