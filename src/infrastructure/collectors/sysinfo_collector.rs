use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use sysinfo::{Networks, Pid, System};

use super::disk_collector::DiskCollector;
use crate::domain::entities::disk::{DiskUsage, Partition};
use crate::domain::entities::process::ProcessUsage;
use crate::domain::entities::snapshot::MemoryUsage;
use crate::domain::ports::collector::{CollectionError, HostProbe};

/// Returns `(numerator / denominator) * 100.0`, or `0.0` when `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
fn safe_percent(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        (numerator as f64 / denominator as f64) * 100.0
    } else {
        0.0
    }
}

/// Returns the arithmetic mean of `per_core` usages, or `0.0` when the slice is empty.
#[allow(clippy::cast_precision_loss)]
fn avg_cpu_usage(per_core: &[f32]) -> f32 {
    let count = per_core.len();
    if count > 0 {
        per_core.iter().sum::<f32>() / count as f32
    } else {
        0.0
    }
}

/// Host probe backed by the `sysinfo` crate.
///
/// Uses `Mutex<System>` for interior mutability since `HostProbe` takes
/// `&self` but `sysinfo::System` needs `&mut self` to refresh. CPU figures
/// are deltas between two refreshes: construct the probe, wait at least
/// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`, then call [`SysinfoProbe::refresh`].
pub struct SysinfoProbe {
    sys: Mutex<System>,
    disk_collector: DiskCollector,
}

impl SysinfoProbe {
    /// Creates a new probe with pre-initialized system data.
    #[must_use]
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
            disk_collector: DiskCollector::new(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, System>, CollectionError> {
        self.sys
            .lock()
            .map_err(|e| CollectionError::MetricsUnavailable(format!("system lock poisoned: {e}")))
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn refresh(&self) -> Result<(), CollectionError> {
        self.lock()?.refresh_all();
        Ok(())
    }

    fn os_label(&self) -> Result<String, CollectionError> {
        match (System::name(), System::kernel_version()) {
            (Some(name), Some(release)) => Ok(format!("{name} {release}")),
            (Some(label), None) | (None, Some(label)) => Ok(label),
            (None, None) => Err(CollectionError::MetricsUnavailable(
                "OS identity unknown".to_string(),
            )),
        }
    }

    fn cpu_usage_percent(&self) -> Result<f32, CollectionError> {
        let sys = self.lock()?;
        let per_core: Vec<f32> = sys.cpus().iter().map(sysinfo::Cpu::cpu_usage).collect();
        if per_core.is_empty() {
            return Err(CollectionError::MetricsUnavailable(
                "no CPU reported".to_string(),
            ));
        }
        Ok(avg_cpu_usage(&per_core))
    }

    fn memory(&self) -> Result<MemoryUsage, CollectionError> {
        let sys = self.lock()?;
        let total = sys.total_memory();
        if total == 0 {
            return Err(CollectionError::MetricsUnavailable(
                "total memory reported as zero".to_string(),
            ));
        }
        let available = sys.available_memory();
        Ok(MemoryUsage {
            usage_percent: safe_percent(total.saturating_sub(available), total),
            available_bytes: available,
        })
    }

    fn process_ids(&self) -> Result<Vec<u32>, CollectionError> {
        let sys = self.lock()?;
        Ok(sys.processes().keys().map(|pid| pid.as_u32()).collect())
    }

    fn process_usage(&self, pid: u32) -> Result<ProcessUsage, CollectionError> {
        let sys = self.lock()?;
        let process = sys
            .process(Pid::from_u32(pid))
            .ok_or(CollectionError::NoSuchProcess(pid))?;
        let name = process.name().to_string_lossy().to_string();
        if name.is_empty() {
            return Err(CollectionError::PermissionDenied(format!(
                "name of process {pid} is unreadable"
            )));
        }
        Ok(ProcessUsage {
            name,
            cpu_percent: process.cpu_usage(),
        })
    }

    fn partitions(&self) -> Result<Vec<Partition>, CollectionError> {
        self.disk_collector.partitions()
    }

    fn disk_usage(&self, partition: &Partition) -> Result<DiskUsage, CollectionError> {
        self.disk_collector.usage(partition)
    }

    fn network_interfaces(&self) -> Result<Vec<String>, CollectionError> {
        let networks = Networks::new_with_refreshed_list();
        let mut names: Vec<String> = networks.list().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn environment(&self) -> Result<BTreeMap<String, String>, CollectionError> {
        Ok(std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().to_string(),
                    v.to_string_lossy().to_string(),
                )
            })
            .collect())
    }

    fn boot_time_secs(&self) -> Result<u64, CollectionError> {
        match System::boot_time() {
            0 => Err(CollectionError::MetricsUnavailable(
                "boot time unknown".to_string(),
            )),
            secs => Ok(secs),
        }
    }
}
