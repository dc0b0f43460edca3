use triage::application::services::snapshot::{SnapshotService, TOP_PROCESS_COUNT};
use triage::domain::ports::collector::{HostProbe, SystemCollector};
use triage::infrastructure::collectors::SysinfoProbe;

// Host-dependent: only the shape of the snapshot is asserted.

#[test]
fn live_snapshot_has_sane_shape() {
    let probe = SysinfoProbe::new();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    let snapshot = SnapshotService::new(&probe).collect();

    assert!(snapshot.top_processes.len() <= TOP_PROCESS_COUNT);
    assert!(snapshot
        .top_processes
        .windows(2)
        .all(|pair| pair[0].cpu_percent >= pair[1].cpu_percent));
    assert!((0.0..=100.0).contains(&snapshot.ram_usage_percent));
    for disk in &snapshot.disk_usage {
        assert!((0.0..=100.0).contains(&disk.percent_used));
        assert!(!disk.device.is_empty());
    }
    let mut sorted = snapshot.network_interfaces.clone();
    sorted.sort();
    assert_eq!(sorted, snapshot.network_interfaces);
}

#[test]
fn live_probe_lists_this_process() {
    let probe = SysinfoProbe::new();
    let pids = probe.process_ids().expect("process table readable");
    assert!(pids.contains(&std::process::id()));
}

#[test]
fn snapshot_serializes_for_json_status() {
    let snapshot = super::sample_snapshot();
    let value = serde_json::to_value(&snapshot).expect("serialize");
    assert_eq!(value["os_label"], "Linux 6.8.0");
    assert_eq!(value["top_processes"][0]["name"], "postgres");
    assert_eq!(value["environment_variables"]["HOME"], "/home/ops");
}
