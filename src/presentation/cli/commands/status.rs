use colored::Colorize;

use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::ports::collector::SystemCollector;
use crate::presentation::cli::formatters::status_fmt::{
    bytes_as_gb, colorize_percent, section_header, usage_bar,
};
use crate::presentation::cli::formatters::table_fmt::format_process_table;

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_status(collector: &dyn SystemCollector, json: bool) -> anyhow::Result<()> {
    let snapshot = collector.collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &SystemSnapshot) {
    println!("{}", "triage — System Status".bold().cyan());
    println!("{}", "━".repeat(50));
    if !snapshot.os_label.is_empty() {
        println!("{}", snapshot.os_label.dimmed());
    }
    if !snapshot.boot_time.is_empty() {
        println!("{} {}", "Booted at".dimmed(), snapshot.boot_time);
    }

    let cpu = f64::from(snapshot.cpu_usage_percent);
    println!("\n{}", section_header("CPU"));
    println!("  {} {}", usage_bar(cpu, 30), colorize_percent(cpu));

    println!("\n{}", section_header("Memory"));
    println!(
        "  {} {}",
        usage_bar(snapshot.ram_usage_percent, 30),
        colorize_percent(snapshot.ram_usage_percent)
    );
    println!("  Available: {}", bytes_as_gb(snapshot.ram_available_bytes));

    if !snapshot.disk_usage.is_empty() {
        println!("\n{}", section_header("Disks"));
        for disk in &snapshot.disk_usage {
            println!(
                "  {:<20} {} {} ({} free)",
                disk.device,
                usage_bar(disk.percent_used, 20),
                colorize_percent(disk.percent_used),
                bytes_as_gb(disk.free_bytes)
            );
        }
    }

    if !snapshot.network_interfaces.is_empty() {
        println!("\n{}", section_header("Network interfaces"));
        println!("  {}", snapshot.network_interfaces.join(", "));
    }

    println!("\n{}", section_header("Top processes (CPU)"));
    println!("{}", format_process_table(&snapshot.top_processes));

    println!(
        "\n{}",
        format!(
            "{} environment variables captured",
            snapshot.environment_variables.len()
        )
        .dimmed()
    );
}
