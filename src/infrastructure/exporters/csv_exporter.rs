use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::entities::report::Report;
use crate::domain::ports::exporter::{ExportError, ReportExporter};

/// Writes the report as one CSV file holding both sections.
///
/// Each section starts with a single-field line naming it, followed by its
/// header row and data rows. Sections are separated by an empty line.
/// Multi-line cells are quoted by the CSV writer.
pub struct CsvExporter;

impl CsvExporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Streams both report sections into `writer`.
///
/// Each section gets its own CSV writer so the blank separator line can be
/// written to the underlying stream between them.
///
/// # Errors
///
/// Returns `csv::Error` if a record cannot be written.
pub fn write_sections<W: Write>(mut writer: W, report: &Report) -> Result<(), csv::Error> {
    for (index, table) in report.sections().iter().enumerate() {
        if index > 0 {
            writer.write_all(b"\n")?;
        }

        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut writer);
        wtr.write_record([table.name])?;
        wtr.write_record(&table.columns)?;
        for row in &table.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }

    writer.flush()?;
    Ok(())
}

impl ReportExporter for CsvExporter {
    fn export(&self, report: &Report, path: &Path) -> Result<(), ExportError> {
        let write_failed = |reason: String| ExportError::WriteFailed {
            path: path.display().to_string(),
            reason,
        };

        let file = File::create(path).map_err(|e| write_failed(e.to_string()))?;
        write_sections(file, report).map_err(|e| write_failed(e.to_string()))
    }
}
