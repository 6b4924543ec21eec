use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static host description reported by the `system_info` check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub platform: String,
    pub system: String,
    pub processor: String,
    /// Pointer width and binary linkage, e.g. `["64bit", "ELF"]`
    pub architecture: Vec<String>,
    // Wire name kept for UI compatibility
    #[serde(rename = "python_version")]
    pub runtime_version: String,
    pub hostname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub total_gb: f64,
    pub available_gb: f64,
    pub used_gb: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuUsage {
    pub percentage: f64,
    /// Physical cores, `None` when the OS does not report them
    pub core_count: Option<usize>,
    pub logical_core_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uptime {
    pub uptime_seconds: u64,
    pub uptime_formatted: String,
    pub started_at: DateTime<Utc>,
}
