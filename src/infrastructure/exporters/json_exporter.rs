use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::domain::entities::report::Report;
use crate::domain::ports::exporter::{ExportError, ReportExporter};

/// Writes the report as a JSON object keyed by section name.
///
/// Each section is `{"columns": [...], "rows": [[...], ...]}` so that an
/// empty Logs section still carries its header.
pub struct JsonExporter;

impl JsonExporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the JSON document for `report`.
#[must_use]
pub fn report_document(report: &Report) -> Value {
    let sections: Map<String, Value> = report
        .sections()
        .into_iter()
        .map(|table| {
            (
                table.name.to_string(),
                json!({ "columns": table.columns, "rows": table.rows }),
            )
        })
        .collect();
    Value::Object(sections)
}

/// Pretty-prints the document for `report` into `writer`.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization or the underlying write fails.
pub fn write_document<W: Write>(writer: W, report: &Report) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, &report_document(report))
}

/// I/O failures surfacing through serde_json are write failures, not
/// serialization failures.
fn export_error(path: &Path, e: &serde_json::Error) -> ExportError {
    if e.is_io() {
        ExportError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    } else {
        ExportError::Serialization(e.to_string())
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &Report, path: &Path) -> Result<(), ExportError> {
        let write_failed = |reason: String| ExportError::WriteFailed {
            path: path.display().to_string(),
            reason,
        };

        let file = File::create(path).map_err(|e| write_failed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        write_document(&mut writer, report).map_err(|e| export_error(path, &e))?;
        writer.flush().map_err(|e| write_failed(e.to_string()))
    }
}
