use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::domain::entities::log_record::LogRecord;
use crate::domain::logs::filter_and_sort;
use crate::domain::ports::log_source::LogSource;
use crate::infrastructure::sources::json_source::JsonFileSource;

/// Filters a structured log file and writes the kept records as a JSON array.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
pub fn run_filter(input: &Path, output: &Path) -> anyhow::Result<usize> {
    let source = JsonFileSource::new(input);
    let parsed = source
        .read()
        .with_context(|| format!("Failed to load {}", source.describe()))?;
    if parsed.dropped > 0 {
        tracing::debug!("{} non-object elements skipped", parsed.dropped);
    }

    let records = filter_and_sort(parsed.candidates);

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, &records)?;
    writer.flush().context("Failed to flush filtered logs")?;

    println!(
        "{} {} ({} records)",
        "Filtered logs written to".green(),
        output.display().to_string().bold(),
        records.len()
    );
    Ok(records.len())
}

/// Pretty-printed JSON array of records, UTF-8 with non-ASCII kept as is.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_records<W: Write>(writer: W, records: &[LogRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, records).context("Failed to serialize filtered logs")
}
