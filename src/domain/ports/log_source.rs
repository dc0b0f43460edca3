use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::log_record::ParsedLogs;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("log file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read logs: {0}")]
    ReadFailed(String),
    #[error("unexpected log document: {0}")]
    InvalidFormat(String),
}

/// A bounded corpus of log entries, read and parsed in one call.
pub trait LogSource {
    /// Reads the whole corpus. Individual malformed entries are counted in
    /// `ParsedLogs::dropped`, never reported as errors.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the corpus as a whole cannot be read.
    fn read(&self) -> Result<ParsedLogs, SourceError>;

    /// Short description used in diagnostics.
    fn describe(&self) -> String;
}
