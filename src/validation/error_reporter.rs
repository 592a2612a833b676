use anyhow::Result;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::collections::HashMap;
use std::path::Path;
use yaml_spanned::{Spanned, Value as YamlValue, from_str};

use super::finding::Finding;

#[derive(Debug, Clone)]
pub struct SpanInfo {
    pub start: usize,
    pub end: usize,
}

/// A source-annotated problem in a manifest, ready for miette to render.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[error("{message}")]
pub struct ManifestError {
    #[source_code]
    pub source_code: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// A parsed manifest that remembers where every value came from.
#[derive(Debug, Clone)]
pub struct SpannedDocument {
    spans: HashMap<String, SpanInfo>,
    json_value: serde_json::Value,
    source: String,
    file_path: String,
}

impl SpannedDocument {
    pub fn parse(file_path: &Path, source: String) -> Result<Self> {
        let spanned_yaml: Spanned<YamlValue> = from_str(&source)
            .map_err(|e| anyhow::anyhow!("Failed to parse YAML with spans: {}", e))?;

        // Strip spans and build lookup map
        let mut spans = HashMap::new();
        let json_value = Self::strip_spans_and_index(&spanned_yaml, String::new(), &mut spans);

        Ok(Self {
            spans,
            json_value,
            source,
            file_path: crate::error_utils::format_error_path(file_path),
        })
    }

    pub fn json_value(&self) -> &serde_json::Value {
        &self.json_value
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Span of the value at `pointer`, or of its closest existing ancestor.
    pub fn span_for(&self, pointer: &str) -> SpanInfo {
        let mut current = pointer;
        loop {
            if let Some(span) = self.spans.get(current) {
                return span.clone();
            }
            match current.rfind('/') {
                Some(idx) => current = &current[..idx],
                None => return SpanInfo { start: 0, end: 0 },
            }
        }
    }

    pub fn create_error(&self, instance_path: &str, message: String) -> ManifestError {
        let span_info = self.span_for(instance_path);

        ManifestError {
            source_code: NamedSource::new(&self.file_path, self.source.clone()),
            span: SourceSpan::new(span_info.start.into(), span_info.end - span_info.start),
            message,
            help: None,
        }
    }

    pub fn report_finding(&self, finding: &Finding) -> ManifestError {
        let mut error = self.create_error(finding.path, finding.message.clone());
        error.help = Some(format!("rule: {}", finding.kind.code()));
        error
    }

    fn strip_spans_and_index(
        spanned: &Spanned<YamlValue>,
        path: String,
        spans: &mut HashMap<String, SpanInfo>,
    ) -> serde_json::Value {
        // Record span for this path
        let span = spanned.span();
        spans.insert(
            path.clone(),
            SpanInfo {
                start: span.start.unwrap_or_default().byte_index,
                end: span.end.unwrap_or_default().byte_index,
            },
        );

        match spanned.as_ref() {
            YamlValue::Null => serde_json::Value::Null,
            YamlValue::Bool(b) => serde_json::Value::Bool(*b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    serde_json::Value::Number(serde_json::Number::from(i))
                } else if let Some(u) = n.as_u64() {
                    serde_json::Value::Number(serde_json::Number::from(u))
                } else if let Some(f) = n.as_f64() {
                    serde_json::Number::from_f64(f)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                } else {
                    serde_json::Value::Null
                }
            }
            YamlValue::String(s) => serde_json::Value::String(s.clone()),
            YamlValue::Sequence(seq) => {
                let arr: Vec<serde_json::Value> = seq
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        Self::strip_spans_and_index(item, format!("{path}/{i}"), spans)
                    })
                    .collect();
                serde_json::Value::Array(arr)
            }
            YamlValue::Mapping(map) => {
                let mut obj = serde_json::Map::new();
                for (key_spanned, value_spanned) in map {
                    if let YamlValue::String(key) = key_spanned.as_ref() {
                        let value_path = format!("{path}/{}", escape_pointer_token(key));
                        let value = Self::strip_spans_and_index(value_spanned, value_path, spans);
                        obj.insert(key.clone(), value);
                    }
                }
                serde_json::Value::Object(obj)
            }
            YamlValue::Tagged(tagged_value) => {
                Self::strip_spans_and_index(&tagged_value.value, path, spans)
            }
        }
    }
}

/// Escapes a mapping key as an RFC 6901 reference token.
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
