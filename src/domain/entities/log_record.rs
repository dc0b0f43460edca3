use serde::{Deserialize, Serialize};

use crate::domain::value_objects::log_level::LogLevel;

/// A parsed log entry before severity filtering.
///
/// `level` holds the lowercased, trimmed level token exactly as found in the
/// source; it may be empty when a structured record carries no usable level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogCandidate {
    pub level: String,
    pub message: String,
    pub station: String,
    pub raw_line: Option<String>,
}

/// A triaged log entry whose level is known to be `warning` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "log level")]
    pub level: LogLevel,
    pub message: String,
    pub station: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub raw_line: Option<String>,
}

impl LogCandidate {
    /// Promotes the candidate if its level is one of the triaged levels.
    #[must_use]
    pub fn into_record(self) -> Option<LogRecord> {
        let level = LogLevel::parse(&self.level)?;
        Some(LogRecord {
            level,
            message: self.message,
            station: self.station,
            raw_line: self.raw_line,
        })
    }
}

impl From<LogRecord> for LogCandidate {
    fn from(record: LogRecord) -> Self {
        Self {
            level: record.level.to_string(),
            message: record.message,
            station: record.station,
            raw_line: record.raw_line,
        }
    }
}

/// Candidates produced by one source plus the count of entries that did not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLogs {
    pub candidates: Vec<LogCandidate>,
    pub dropped: usize,
}
