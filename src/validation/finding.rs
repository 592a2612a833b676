use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    NoVariantPresent,
    MultipleVariantsPresent,
    InstanceSizeRequired,
    InstanceSizeForbidden,
}

impl FindingKind {
    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::NoVariantPresent => "atlas::cluster::no_variant",
            FindingKind::MultipleVariantsPresent => "atlas::cluster::multiple_variants",
            FindingKind::InstanceSizeRequired => "atlas::cluster::instance_size_required",
            FindingKind::InstanceSizeForbidden => "atlas::cluster::instance_size_forbidden",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single violated invariant.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct Finding {
    pub kind: FindingKind,

    /// JSON pointer to the offending field in the manifest
    pub path: &'static str,

    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, path: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
        }
    }
}

impl Diagnostic for Finding {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }
}

/// Ordered findings for one specification. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn messages(&self) -> Vec<&str> {
        self.findings.iter().map(|f| f.message.as_str()).collect()
    }

    pub fn has(&self, kind: FindingKind) -> bool {
        self.findings.iter().any(|f| f.kind == kind)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationErrors {
                findings: self.findings,
            })
        }
    }
}

impl IntoIterator for ValidationResult {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

/// Every finding of a rejected specification, in the order they were found.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
#[error("{}", summarize(.findings))]
pub struct ValidationErrors {
    #[related]
    pub findings: Vec<Finding>,
}

fn summarize(findings: &[Finding]) -> String {
    let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
    format!(
        "{} validation finding(s): {}",
        findings.len(),
        messages.join("; ")
    )
}
