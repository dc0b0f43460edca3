use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::disk::DiskUsage;
use super::process::ProcessUsage;

/// Point-in-time capture of host state.
///
/// Built in one pass by the snapshot collector and never updated afterwards.
/// A sub-system that could not be queried leaves its field at the default
/// (empty string, zero, or empty collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub os_label: String,
    pub cpu_usage_percent: f32,
    pub ram_usage_percent: f64,
    pub ram_available_bytes: u64,
    pub top_processes: Vec<ProcessUsage>,
    pub environment_variables: BTreeMap<String, String>,
    pub disk_usage: Vec<DiskUsage>,
    pub network_interfaces: Vec<String>,
    pub boot_time: String,
}

/// System memory figures as reported by one probe query
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub usage_percent: f64,
    pub available_bytes: u64,
}
