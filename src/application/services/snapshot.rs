use chrono::{DateTime, Local};

use crate::domain::entities::disk::DiskUsage;
use crate::domain::entities::process::{select_top_processes, ProcessUsage};
use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::ports::collector::{CollectionError, HostProbe, SystemCollector};

/// Number of processes kept in `SystemSnapshot::top_processes`.
pub const TOP_PROCESS_COUNT: usize = 5;

const BOOT_TIME_FORMAT: &str = "%H:%M:%S";

/// Builds a snapshot from independent host queries.
///
/// Each query is attempted regardless of how the others went. A failed
/// query leaves its field at the default; a failed per-process or
/// per-partition query drops just that item.
pub struct SnapshotService<'a> {
    probe: &'a dyn HostProbe,
}

impl<'a> SnapshotService<'a> {
    #[must_use]
    pub fn new(probe: &'a dyn HostProbe) -> Self {
        Self { probe }
    }

    fn top_processes(&self) -> Vec<ProcessUsage> {
        let pids = or_default("process table", self.probe.process_ids());
        let readable: Vec<ProcessUsage> = pids
            .into_iter()
            .filter_map(|pid| match self.probe.process_usage(pid) {
                Ok(usage) => Some(usage),
                Err(e) => {
                    tracing::debug!("Skipping process {pid}: {e}");
                    None
                }
            })
            .collect();
        select_top_processes(readable, TOP_PROCESS_COUNT)
    }

    fn disk_usage(&self) -> Vec<DiskUsage> {
        or_default("disk partitions", self.probe.partitions())
            .iter()
            .filter_map(|partition| match self.probe.disk_usage(partition) {
                Ok(usage) => Some(usage),
                Err(e) => {
                    tracing::warn!("Skipping partition {}: {e}", partition.mount_point);
                    None
                }
            })
            .collect()
    }

    fn boot_time(&self) -> String {
        let secs = or_default("boot time", self.probe.boot_time_secs());
        if secs == 0 {
            return String::new();
        }
        format_boot_time(secs).unwrap_or_else(|| {
            tracing::warn!("Boot time {secs} is out of range");
            String::new()
        })
    }
}

impl SystemCollector for SnapshotService<'_> {
    fn collect(&self) -> SystemSnapshot {
        if let Err(e) = self.probe.refresh() {
            tracing::warn!("Host sample refresh failed, using previous sample: {e}");
        }

        let memory = or_default("memory", self.probe.memory());

        let snapshot = SystemSnapshot {
            os_label: or_default("OS identity", self.probe.os_label()),
            cpu_usage_percent: or_default("CPU usage", self.probe.cpu_usage_percent()),
            ram_usage_percent: memory.usage_percent,
            ram_available_bytes: memory.available_bytes,
            top_processes: self.top_processes(),
            environment_variables: or_default("environment", self.probe.environment()),
            disk_usage: self.disk_usage(),
            network_interfaces: or_default("network interfaces", self.probe.network_interfaces()),
            boot_time: self.boot_time(),
        };

        tracing::debug!(
            "Snapshot collected: {} process(es), {} partition(s), {} interface(s)",
            snapshot.top_processes.len(),
            snapshot.disk_usage.len(),
            snapshot.network_interfaces.len()
        );
        snapshot
    }
}

/// Unwraps a query result, logging and substituting the default on failure.
fn or_default<T: Default>(what: &str, result: Result<T, CollectionError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("{what} unavailable: {e}");
        T::default()
    })
}

/// Local wall-clock time of day for a Unix timestamp.
fn format_boot_time(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    let utc = DateTime::from_timestamp(secs, 0)?;
    Some(
        utc.with_timezone(&Local)
            .format(BOOT_TIME_FORMAT)
            .to_string(),
    )
}
