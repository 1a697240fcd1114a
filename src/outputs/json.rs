//! JSON output for analysis results.
//!
//! Consumers rely on every field of the record being present, so
//! [`JsonFormatter::format_analysis`] fills in whatever a (possibly
//! hand-edited or partial) record is missing before it is written.
//!
//! # Required fields
//!
//! ```text
//! response:    query_datetime, source_name, source_evaluation,
//!              source_credibility, source_perspective, extracted_urls[]
//! publication: publication_url, publication_date, publication_summary,
//!              publication_keypoints[], publication_sentiment[],
//!              sentiment_analysis[]
//! ```

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::error::AnalyzerError;
use crate::models::AnalysisResult;
use crate::utils::{analysis_date, ensure_parent_dir};

const RESPONSE_FIELDS: &[&str] = &[
    "query_datetime",
    "source_name",
    "source_evaluation",
    "source_credibility",
    "source_perspective",
    "extracted_urls",
];

const PUBLICATION_FIELDS: &[&str] = &[
    "publication_url",
    "publication_date",
    "publication_summary",
    "publication_keypoints",
    "publication_sentiment",
    "sentiment_analysis",
];

const LIST_FIELDS: &[&str] = &[
    "extracted_urls",
    "publication_keypoints",
    "publication_sentiment",
    "sentiment_analysis",
];

/// Serializes analysis records with a fixed indentation.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    indent: usize,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Take the object stored under `key`; anything that is not an object is dropped.
fn take_section(root: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match root.remove(key) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn fill_missing(section: &mut Map<String, Value>, fields: &[&str]) {
    for &field in fields {
        section.entry(field.to_string()).or_insert_with(|| {
            if LIST_FIELDS.contains(&field) {
                Value::Array(Vec::new())
            } else {
                Value::String(String::new())
            }
        });
    }
}

impl JsonFormatter {
    /// Create a formatter indenting nested values by `indent` spaces.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Ensure every required section and field exists.
    ///
    /// Missing strings become `""` and missing lists `[]`; an empty
    /// `query_datetime` is stamped with today's date. A non-object input is
    /// treated as an empty record.
    pub fn format_analysis(&self, data: Value) -> Value {
        let mut root = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut response = take_section(&mut root, "response");
        fill_missing(&mut response, RESPONSE_FIELDS);
        if response
            .get("query_datetime")
            .and_then(Value::as_str)
            .is_some_and(str::is_empty)
        {
            response.insert("query_datetime".to_string(), Value::String(analysis_date()));
        }

        let mut publication = take_section(&mut root, "publication");
        fill_missing(&mut publication, PUBLICATION_FIELDS);

        root.insert("response".to_string(), Value::Object(response));
        root.insert("publication".to_string(), Value::Object(publication));
        Value::Object(root)
    }

    /// Normalize `data` and render it as indented JSON.
    pub fn to_json(&self, data: Value) -> Result<String, AnalyzerError> {
        let formatted = self.format_analysis(data);
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        formatted.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render an [`AnalysisResult`] as indented JSON.
    pub fn result_to_json(&self, result: &AnalysisResult) -> Result<String, AnalyzerError> {
        self.to_json(serde_json::to_value(result)?)
    }

    /// Write `result` as JSON to `path`, creating parent directories.
    ///
    /// # Arguments
    ///
    /// * `result` - The analysis to save
    /// * `path` - Destination file; missing parent directories are created
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Io`] if the directory or file cannot be
    /// written.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn save_to_file(
        &self,
        result: &AnalysisResult,
        path: impl AsRef<Path>,
    ) -> Result<(), AnalyzerError> {
        let path = path.as_ref();
        let json = self.result_to_json(result)?;
        ensure_parent_dir(path).await?;

        if let Err(e) = fs::write(path, json).await {
            error!(error = %e, "Failed to write JSON");
            return Err(AnalyzerError::io(path.display().to_string(), e));
        }
        info!("Wrote analysis JSON");
        Ok(())
    }
}
