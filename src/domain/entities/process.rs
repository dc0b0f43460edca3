use serde::{Deserialize, Serialize};

/// CPU consumption of one readable process at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessUsage {
    pub name: String,
    pub cpu_percent: f32,
}

/// Keeps the `limit` busiest processes, highest CPU first.
///
/// Equal CPU figures keep their enumeration order.
#[must_use]
pub fn select_top_processes(mut processes: Vec<ProcessUsage>, limit: usize) -> Vec<ProcessUsage> {
    processes.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
    processes.truncate(limit);
    processes
}
