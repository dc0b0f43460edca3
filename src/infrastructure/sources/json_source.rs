use std::path::PathBuf;

use serde_json::Value;

use super::line_source::read_file;
use crate::domain::entities::log_record::ParsedLogs;
use crate::domain::logs::parse_records;
use crate::domain::ports::log_source::{LogSource, SourceError};

/// Extracts the record array from a structured log document.
///
/// Accepts either a bare array or a search-engine response whose records
/// live under `hits.hits`.
///
/// # Errors
///
/// Returns `SourceError::InvalidFormat` for any other document shape.
pub fn records_from_document(document: Value) -> Result<Vec<Value>, SourceError> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut root) => match root.remove("hits") {
            Some(Value::Object(mut hits)) => match hits.remove("hits") {
                Some(Value::Array(records)) => Ok(records),
                _ => Err(SourceError::InvalidFormat(
                    "`hits.hits` is not a list of logs".to_string(),
                )),
            },
            _ => Err(SourceError::InvalidFormat(
                "object without a `hits.hits` list".to_string(),
            )),
        },
        other => Err(SourceError::InvalidFormat(format!(
            "expected a list of logs, found {}",
            json_kind(&other)
        ))),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Structured records already held in memory.
pub struct StructuredRecords {
    records: Vec<Value>,
}

impl StructuredRecords {
    #[must_use]
    pub const fn new(records: Vec<Value>) -> Self {
        Self { records }
    }
}

impl LogSource for StructuredRecords {
    fn read(&self) -> Result<ParsedLogs, SourceError> {
        Ok(parse_records(&self.records))
    }

    fn describe(&self) -> String {
        format!("{} in-memory record(s)", self.records.len())
    }
}

/// Reads a JSON file of structured records.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the file and returns its raw record elements.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the file is missing, unreadable, not JSON,
    /// or not a recognised document shape.
    pub fn load(&self) -> Result<Vec<Value>, SourceError> {
        let content = read_file(&self.path)?;
        let document: Value = serde_json::from_str(&content).map_err(|e| {
            SourceError::InvalidFormat(format!("{} is not valid JSON: {e}", self.path.display()))
        })?;
        records_from_document(document)
    }
}

impl LogSource for JsonFileSource {
    fn read(&self) -> Result<ParsedLogs, SourceError> {
        StructuredRecords::new(self.load()?).read()
    }

    fn describe(&self) -> String {
        format!("JSON log file {}", self.path.display())
    }
}
