use std::path::Path;

use thiserror::Error;

use crate::domain::entities::report::Report;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write report to {path}: {reason}")]
    WriteFailed { path: String, reason: String },
    #[error("failed to serialize report: {0}")]
    Serialization(String),
}

/// Writes a report as one artifact holding its two sections.
pub trait ReportExporter {
    /// # Errors
    ///
    /// Returns `ExportError` if the artifact cannot be serialized or written.
    /// The report itself is borrowed and stays usable on failure.
    fn export(&self, report: &Report, path: &Path) -> Result<(), ExportError>;
}
