use serde::{Deserialize, Serialize};

/// A mounted partition as enumerated by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
}

/// Usage of one partition that was successfully queried
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub device: String,
    pub percent_used: f64,
    pub free_bytes: u64,
}
