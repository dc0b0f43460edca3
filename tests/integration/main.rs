#![allow(clippy::expect_used)]

mod export_test;
mod pipeline_test;
mod snapshot_test;

use std::collections::BTreeMap;
use std::path::PathBuf;

use triage::domain::entities::disk::DiskUsage;
use triage::domain::entities::process::ProcessUsage;
use triage::domain::entities::snapshot::SystemSnapshot;
use triage::domain::ports::collector::SystemCollector;

pub fn fixture_path(name: &str) -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Collector returning the same snapshot on every call.
pub struct FixedCollector {
    pub snapshot: SystemSnapshot,
}

impl SystemCollector for FixedCollector {
    fn collect(&self) -> SystemSnapshot {
        self.snapshot.clone()
    }
}

pub fn sample_snapshot() -> SystemSnapshot {
    SystemSnapshot {
        os_label: "Linux 6.8.0".to_string(),
        cpu_usage_percent: 12.5,
        ram_usage_percent: 48.25,
        ram_available_bytes: 8_589_934_592,
        top_processes: vec![
            ProcessUsage {
                name: "postgres".to_string(),
                cpu_percent: 30.0,
            },
            ProcessUsage {
                name: "nginx".to_string(),
                cpu_percent: 4.5,
            },
        ],
        environment_variables: BTreeMap::from([
            ("HOME".to_string(), "/home/ops".to_string()),
            ("LANG".to_string(), "C.UTF-8".to_string()),
        ]),
        disk_usage: vec![DiskUsage {
            device: "/dev/sda1".to_string(),
            percent_used: 42.0,
            free_bytes: 2_147_483_648,
        }],
        network_interfaces: vec!["eth0".to_string(), "lo".to_string()],
        boot_time: "07:45:00".to_string(),
    }
}
