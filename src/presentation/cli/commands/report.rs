use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::application::services::triage::{TriageOutcome, TriageService};
use crate::domain::value_objects::log_level::LogLevel;
use crate::presentation::cli::formatters::status_fmt::section_header;
use crate::presentation::cli::formatters::table_fmt::format_log_table;

const PREVIEW_ROWS: usize = 10;

/// Runs the full pipeline and writes the report artifact to `output`.
///
/// # Errors
///
/// Returns an error only when the artifact cannot be written. An unreadable
/// log corpus is reported on stderr and the report is still exported.
pub fn run_report(service: &TriageService<'_>, output: &Path) -> anyhow::Result<()> {
    let outcome = service.build();
    print_summary(&outcome);

    service
        .export(&outcome.report, output)
        .with_context(|| format!("Failed to export report to {}", output.display()))?;

    println!(
        "\n{} {}",
        "Report written to".green(),
        output.display().to_string().bold()
    );
    Ok(())
}

fn print_summary(outcome: &TriageOutcome) {
    if let Some(ref e) = outcome.source_error {
        eprintln!("{} {e}", "warning:".yellow().bold());
    }

    let logs = &outcome.report.logs;
    let errors = logs.iter().filter(|r| r.level == LogLevel::Error).count();
    let warnings = logs.len() - errors;

    println!("{}", section_header("Logs"));
    println!(
        "  {} errors, {} warnings",
        errors.to_string().red().bold(),
        warnings.to_string().yellow()
    );
    if outcome.dropped > 0 {
        println!(
            "  {}",
            format!("{} unparseable entries skipped", outcome.dropped).dimmed()
        );
    }
    if !logs.is_empty() {
        println!("\n{}", format_log_table(logs, PREVIEW_ROWS));
    }

    let system = &outcome.report.system;
    println!("\n{}", section_header("System Status"));
    if !system.os_label.is_empty() {
        println!("  OS: {}", system.os_label);
    }
    println!(
        "  CPU {:.1}% · RAM {:.1}% · {} partitions · {} interfaces",
        system.cpu_usage_percent,
        system.ram_usage_percent,
        system.disk_usage.len(),
        system.network_interfaces.len()
    );
}
