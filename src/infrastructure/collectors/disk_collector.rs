use std::sync::Mutex;

use sysinfo::Disks;

use crate::domain::entities::disk::{DiskUsage, Partition};
use crate::domain::ports::collector::CollectionError;

/// Filesystem types that never count as real partitions.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "tmpfs",
    "devtmpfs",
    "sysfs",
    "proc",
    "cgroup2",
    "overlay",
    "squashfs",
    "efivarfs",
    "bpf",
    "hugetlbfs",
    "mqueue",
    "pstore",
    "securityfs",
    "debugfs",
    "tracefs",
    "fusectl",
    "rpc_pipefs",
];

/// Enumerates mounted partitions and queries each one on its own.
///
/// Enumeration and per-partition queries are separate calls so that one
/// unreadable partition can be skipped without losing the rest.
pub struct DiskCollector {
    disks: Mutex<Disks>,
}

impl DiskCollector {
    /// Creates a new collector with a pre-refreshed disk list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            disks: Mutex::new(Disks::new_with_refreshed_list()),
        }
    }

    /// Lists real mounted partitions, re-reading the mount table first.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::MetricsUnavailable` if the internal mutex is poisoned.
    pub fn partitions(&self) -> Result<Vec<Partition>, CollectionError> {
        let mut disks = self
            .disks
            .lock()
            .map_err(|e| CollectionError::MetricsUnavailable(format!("disk lock poisoned: {e}")))?;
        disks.refresh_list();

        Ok(disks
            .iter()
            .filter(|d| {
                let fs = d.file_system().to_string_lossy();
                !PSEUDO_FILESYSTEMS.iter().any(|&pseudo| fs == pseudo)
            })
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_string_lossy().to_string(),
            })
            .collect())
    }

    /// Usage of the partition mounted at `partition.mount_point`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::MetricsUnavailable` if the partition is no
    /// longer mounted or reports no capacity, or if the mutex is poisoned.
    #[allow(clippy::cast_precision_loss)]
    pub fn usage(&self, partition: &Partition) -> Result<DiskUsage, CollectionError> {
        let disks = self
            .disks
            .lock()
            .map_err(|e| CollectionError::MetricsUnavailable(format!("disk lock poisoned: {e}")))?;

        let disk = disks
            .iter()
            .find(|d| d.mount_point().to_string_lossy() == partition.mount_point.as_str())
            .ok_or_else(|| {
                CollectionError::MetricsUnavailable(format!(
                    "{} is no longer mounted",
                    partition.mount_point
                ))
            })?;

        let total = disk.total_space();
        if total == 0 {
            return Err(CollectionError::MetricsUnavailable(format!(
                "{} reports no capacity",
                partition.mount_point
            )));
        }
        let available = disk.available_space();
        let used = total.saturating_sub(available);

        Ok(DiskUsage {
            device: partition.device.clone(),
            percent_used: ((used as f64 / total as f64) * 100.0).clamp(0.0, 100.0),
            free_bytes: available,
        })
    }
}

impl Default for DiskCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn partitions_exclude_pseudo_filesystems() {
        let collector = DiskCollector::new();
        let partitions = collector.partitions().expect("partitions should succeed");
        let disks = collector.disks.lock().expect("not poisoned");

        for partition in &partitions {
            let disk = disks
                .iter()
                .find(|d| d.mount_point().to_string_lossy() == partition.mount_point.as_str())
                .expect("listed partition is mounted");
            let fs = disk.file_system().to_string_lossy().to_string();
            assert!(
                !PSEUDO_FILESYSTEMS.contains(&fs.as_str()),
                "pseudo-filesystem {fs} should be filtered"
            );
        }
    }

    #[test]
    fn partitions_have_non_empty_mount_point() {
        let collector = DiskCollector::new();
        for partition in collector.partitions().expect("partitions should succeed") {
            assert!(!partition.mount_point.is_empty());
        }
    }

    #[test]
    fn usage_percent_in_valid_range() {
        let collector = DiskCollector::new();
        // May be empty in container environments; validate entries if present.
        for partition in collector.partitions().expect("partitions should succeed") {
            if let Ok(usage) = collector.usage(&partition) {
                assert!(
                    (0.0..=100.0).contains(&usage.percent_used),
                    "{} usage {}% should be in [0, 100]",
                    usage.device,
                    usage.percent_used
                );
                assert_eq!(usage.device, partition.device);
            }
        }
    }

    #[test]
    fn usage_of_unknown_mount_point_fails() {
        let collector = DiskCollector::new();
        let missing = Partition {
            device: "/dev/none".to_string(),
            mount_point: "/definitely/not/mounted/here".to_string(),
        };
        assert!(collector.usage(&missing).is_err());
    }

    #[test]
    fn partitions_return_error_on_poisoned_mutex() {
        let collector = DiskCollector::new();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = collector.disks.lock().expect("not yet poisoned");
            panic!("intentional panic to poison the mutex");
        }));

        assert!(collector.partitions().is_err());
    }

    #[test]
    fn successive_enumerations_are_consistent() {
        let collector = DiskCollector::default();
        let first = collector.partitions().expect("first enumeration");
        let second = collector.partitions().expect("second enumeration");
        assert_eq!(first.len(), second.len());
    }
}
