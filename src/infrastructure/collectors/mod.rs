pub mod disk_collector;
pub mod sysinfo_collector;

pub use disk_collector::DiskCollector;
pub use sysinfo_collector::SysinfoProbe;
