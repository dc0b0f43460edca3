use crate::domain::entities::log_record::LogRecord;
use crate::domain::entities::process::ProcessUsage;
use crate::presentation::cli::formatters::status_fmt::level_badge;

const STATION_WIDTH: usize = 16;

/// Aligned table of processes in the order given.
///
/// # Returns
///
/// A multi-line string with header, separator, and one row per process.
#[must_use]
pub fn format_process_table(processes: &[ProcessUsage]) -> String {
    let header = format!("{:<32} {:>8}", "NAME", "CPU%");
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];
    for p in processes {
        let name: String = p.name.chars().take(31).collect();
        rows.push(format!("{name:<32} {:>8.1}", p.cpu_percent));
    }

    rows.join("\n")
}

/// Aligned table of triaged records, showing at most `limit` rows.
///
/// A trailing line counts the records left out.
#[must_use]
pub fn format_log_table(records: &[LogRecord], limit: usize) -> String {
    let header = format!("{:<7} {:<STATION_WIDTH$} {}", "LEVEL", "STATION", "MESSAGE");
    let separator = "─".repeat(header.chars().count() + 24);

    let mut rows = vec![header, separator];
    for record in records.iter().take(limit) {
        let station: String = record.station.chars().take(STATION_WIDTH - 1).collect();
        rows.push(format!(
            "{} {station:<STATION_WIDTH$} {}",
            level_badge(record.level),
            record.message
        ));
    }

    let hidden = records.len().saturating_sub(limit);
    if hidden > 0 {
        rows.push(format!("… {hidden} more"));
    }

    rows.join("\n")
}
