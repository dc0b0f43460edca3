use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::entities::disk::{DiskUsage, Partition};
use crate::domain::entities::process::ProcessUsage;
use crate::domain::entities::snapshot::{MemoryUsage, SystemSnapshot};

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("failed to collect system metrics: {0}")]
    MetricsUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("process {0} no longer exists")]
    NoSuchProcess(u32),
}

/// Individually failable host queries.
///
/// Every method is independent: one failing must not prevent the others
/// from being called. Per-item queries (`process_usage`, `disk_usage`) let
/// the caller drop just the unreadable process or partition.
pub trait HostProbe: Send + Sync {
    /// Takes a fresh sample of host counters before the queries below run.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the host cannot be sampled; the queries
    /// then report whatever the previous sample held.
    fn refresh(&self) -> Result<(), CollectionError> {
        Ok(())
    }

    /// Human-readable OS name and version.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the OS identity cannot be read.
    fn os_label(&self) -> Result<String, CollectionError>;

    /// Instantaneous global CPU utilization in percent.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if CPU statistics are unavailable.
    fn cpu_usage_percent(&self) -> Result<f32, CollectionError>;

    /// Memory utilization and available bytes.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if memory statistics are unavailable.
    fn memory(&self) -> Result<MemoryUsage, CollectionError>;

    /// Identifiers of every process currently listed by the host.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the process table cannot be enumerated.
    fn process_ids(&self) -> Result<Vec<u32>, CollectionError>;

    /// Name and CPU percentage of one process.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::NoSuchProcess` if the process exited, or
    /// `PermissionDenied` if it cannot be inspected.
    fn process_usage(&self, pid: u32) -> Result<ProcessUsage, CollectionError>;

    /// Mounted partitions.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the mount table cannot be read.
    fn partitions(&self) -> Result<Vec<Partition>, CollectionError>;

    /// Usage figures for one partition.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if that partition cannot be queried.
    fn disk_usage(&self, partition: &Partition) -> Result<DiskUsage, CollectionError>;

    /// Names of the network interfaces present on the host.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if interfaces cannot be listed.
    fn network_interfaces(&self) -> Result<Vec<String>, CollectionError>;

    /// Process-wide environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the environment cannot be read.
    fn environment(&self) -> Result<BTreeMap<String, String>, CollectionError>;

    /// Host boot time as seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the boot time is unknown.
    fn boot_time_secs(&self) -> Result<u64, CollectionError>;
}

/// Produces one snapshot per call. Never fails: unreachable sub-systems
/// leave their fields empty.
pub trait SystemCollector: Send + Sync {
    fn collect(&self) -> SystemSnapshot;
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn collection_error_display() {
        let err = CollectionError::MetricsUnavailable("cpu stats".to_string());
        assert_eq!(
            err.to_string(),
            "failed to collect system metrics: cpu stats"
        );

        let err = CollectionError::NoSuchProcess(42);
        assert_eq!(err.to_string(), "process 42 no longer exists");
    }
}
