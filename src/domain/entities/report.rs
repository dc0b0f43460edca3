use super::log_record::LogRecord;
use super::snapshot::SystemSnapshot;

pub const LOGS_SECTION: &str = "Logs";
pub const STATUS_SECTION: &str = "System Status";

pub const LOG_COLUMNS: [&str; 3] = ["log level", "message", "station"];

pub const STATUS_COLUMNS: [&str; 9] = [
    "os_label",
    "cpu_usage_percent",
    "ram_usage_percent",
    "ram_available_bytes",
    "top_processes",
    "environment_variables",
    "disk_usage",
    "network_interfaces",
    "boot_time",
];

const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// One named table of the report artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The triage output: sorted log records plus one host snapshot.
///
/// Rendered as two independent tables that never share rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub logs: Vec<LogRecord>,
    pub system: SystemSnapshot,
}

impl Report {
    #[must_use]
    pub const fn new(logs: Vec<LogRecord>, system: SystemSnapshot) -> Self {
        Self { logs, system }
    }

    /// "Logs" table: one row per record, in the order held by the report.
    #[must_use]
    pub fn logs_table(&self) -> Table {
        Table {
            name: LOGS_SECTION,
            columns: LOG_COLUMNS.iter().map(ToString::to_string).collect(),
            rows: self
                .logs
                .iter()
                .map(|r| vec![r.level.to_string(), r.message.clone(), r.station.clone()])
                .collect(),
        }
    }

    /// "System Status" table: always exactly one row.
    #[must_use]
    pub fn status_table(&self) -> Table {
        let s = &self.system;
        let row = vec![
            s.os_label.clone(),
            format!("{:.1}", s.cpu_usage_percent),
            format!("{:.1}", s.ram_usage_percent),
            s.ram_available_bytes.to_string(),
            join_lines(
                s.top_processes
                    .iter()
                    .map(|p| format!("{}: {:.1}%", p.name, p.cpu_percent)),
            ),
            join_lines(
                s.environment_variables
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}")),
            ),
            join_lines(s.disk_usage.iter().map(|d| {
                format!(
                    "{}: {:.1}% used ({:.2} GB free)",
                    d.device,
                    d.percent_used,
                    bytes_to_gb(d.free_bytes)
                )
            })),
            join_lines(s.network_interfaces.iter().cloned()),
            s.boot_time.clone(),
        ];

        Table {
            name: STATUS_SECTION,
            columns: STATUS_COLUMNS.iter().map(ToString::to_string).collect(),
            rows: vec![row],
        }
    }

    /// Both sections in artifact order.
    #[must_use]
    pub fn sections(&self) -> [Table; 2] {
        [self.logs_table(), self.status_table()]
    }
}

#[allow(clippy::cast_precision_loss)]
fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

fn join_lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}
