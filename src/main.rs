use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use triage::application::config::AppConfig;
use triage::application::services::snapshot::SnapshotService;
use triage::application::services::triage::TriageService;
use triage::domain::ports::log_source::LogSource;
use triage::domain::value_objects::formats::{ExportFormat, SourceFormat};
use triage::infrastructure::collectors::SysinfoProbe;
use triage::infrastructure::exporters::create_exporter;
use triage::infrastructure::geo::GeoApiClient;
use triage::infrastructure::sources::{JsonFileSource, LineFileSource};
use triage::presentation::cli::app::{Cli, Commands};
use triage::presentation::cli::commands::filter::run_filter;
use triage::presentation::cli::commands::population::run_population;
use triage::presentation::cli::commands::report::run_report;
use triage::presentation::cli::commands::status::run_status;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_source(flag: Option<&str>, configured: SourceFormat) -> anyhow::Result<SourceFormat> {
    match flag.map(str::to_lowercase).as_deref() {
        None => Ok(configured),
        Some("lines") => Ok(SourceFormat::Lines),
        Some("json") => Ok(SourceFormat::Json),
        Some(other) => {
            anyhow::bail!("Unknown source format '{other}'. Valid formats: lines, json");
        }
    }
}

fn resolve_export(flag: Option<&str>, configured: ExportFormat) -> anyhow::Result<ExportFormat> {
    match flag.map(str::to_lowercase).as_deref() {
        None => Ok(configured),
        Some("csv") => Ok(ExportFormat::Csv),
        Some("json") => Ok(ExportFormat::Json),
        Some("xlsx") => Ok(ExportFormat::Xlsx),
        Some(other) => {
            anyhow::bail!("Unknown export format '{other}'. Valid formats: csv, json, xlsx");
        }
    }
}

fn open_source(format: SourceFormat, path: PathBuf) -> Box<dyn LogSource> {
    match format {
        SourceFormat::Lines => Box::new(LineFileSource::new(path)),
        SourceFormat::Json => Box::new(JsonFileSource::new(path)),
    }
}

/// Builds the probe and lets one CPU sampling interval elapse.
async fn sampled_probe(config: &AppConfig) -> SysinfoProbe {
    let probe = SysinfoProbe::new();
    let interval = config
        .collector
        .cpu_sample_interval()
        .max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    tokio::time::sleep(interval).await;
    probe
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    let command = cli.command.unwrap_or(Commands::Report {
        input: None,
        source: None,
        output: None,
        export: None,
    });

    // Manual DI: main.rs is the only place that knows concrete types
    match command {
        Commands::Status { json } => {
            let probe = sampled_probe(&config).await;
            let collector = SnapshotService::new(&probe);
            run_status(&collector, json)?;
        }
        Commands::Filter { input, output } => {
            let input = input.unwrap_or_else(|| config.input.resolved_path());
            run_filter(&input, &output)?;
        }
        Commands::Population { code } => {
            let client =
                GeoApiClient::new(&config.population.base_url, config.population.timeout())?;
            run_population(&client, code).await?;
        }
        Commands::Report {
            input,
            source,
            output,
            export,
        } => {
            let source_format = resolve_source(source.as_deref(), config.input.format)?;
            let export_format = resolve_export(export.as_deref(), config.report.format)?;
            let input = input.unwrap_or_else(|| config.input.resolved_path());
            let output = output.unwrap_or_else(|| {
                config
                    .report
                    .resolved_output()
                    .with_extension(export_format.extension())
            });

            tracing::debug!(
                "Reading {source_format} logs from {}, writing {export_format} report",
                input.display()
            );

            let probe = sampled_probe(&config).await;
            let collector = SnapshotService::new(&probe);
            let source = open_source(source_format, input);
            let exporter = create_exporter(export_format);
            let service = TriageService::new(&*source, &collector, &*exporter);
            run_report(&service, &output)?;
        }
    }

    Ok(())
}
