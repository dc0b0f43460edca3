use std::path::Path;

use crate::domain::entities::log_record::ParsedLogs;
use crate::domain::entities::report::Report;
use crate::domain::logs::filter_and_sort;
use crate::domain::ports::collector::SystemCollector;
use crate::domain::ports::exporter::{ExportError, ReportExporter};
use crate::domain::ports::log_source::{LogSource, SourceError};

/// Result of building a report, before export.
pub struct TriageOutcome {
    pub report: Report,
    /// Entries the parser could not read.
    pub dropped: usize,
    /// Set when the corpus could not be read at all; the Logs section is
    /// then empty but the report is still produced.
    pub source_error: Option<SourceError>,
}

/// Orchestrates one triage run: read → parse → filter/sort → snapshot → export.
pub struct TriageService<'a> {
    source: &'a dyn LogSource,
    collector: &'a dyn SystemCollector,
    exporter: &'a dyn ReportExporter,
}

impl<'a> TriageService<'a> {
    #[must_use]
    pub fn new(
        source: &'a dyn LogSource,
        collector: &'a dyn SystemCollector,
        exporter: &'a dyn ReportExporter,
    ) -> Self {
        Self {
            source,
            collector,
            exporter,
        }
    }

    /// Builds the in-memory report. Never fails: an unreadable corpus gives
    /// an empty Logs section and an unreachable host a default snapshot.
    #[must_use]
    pub fn build(&self) -> TriageOutcome {
        let (parsed, source_error) = match self.source.read() {
            Ok(parsed) => (parsed, None),
            Err(e) => {
                tracing::warn!("{}: {e}", self.source.describe());
                (ParsedLogs::default(), Some(e))
            }
        };

        let total = parsed.candidates.len();
        let dropped = parsed.dropped;
        if dropped > 0 {
            tracing::info!("{dropped} malformed log entries ignored");
        }

        let logs = filter_and_sort(parsed.candidates);
        tracing::info!("{} of {total} parsed log entries kept", logs.len());

        let system = self.collector.collect();

        TriageOutcome {
            report: Report::new(logs, system),
            dropped,
            source_error,
        }
    }

    /// Writes the report artifact.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the artifact cannot be written. The report
    /// is only borrowed, so the caller still holds it afterwards.
    pub fn export(&self, report: &Report, path: &Path) -> Result<(), ExportError> {
        self.exporter.export(report, path)?;
        tracing::info!("Report written to {}", path.display());
        Ok(())
    }
}
