use crate::core::system_info::types::*;
use crate::core::system_info::{cpu, memory, os, storage};
use crate::error::Result;
use log::warn;
use std::path::Path;
use std::time::Duration;

/// Source of host metrics.
///
/// Every call re-queries the host; implementations hold no snapshot state.
pub trait MetricsSource: Send + Sync {
    fn system_info(&self) -> Result<SystemInfo>;

    fn memory_usage(&self) -> Result<MemoryUsage>;

    fn disk_usage(&self, path: &Path) -> Result<DiskUsage>;

    /// Blocks the caller for roughly `sample`
    fn cpu_usage(&self, sample: Duration) -> Result<CpuUsage>;
}

/// Metrics read from the running host through `sysinfo`
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoSource;

impl MetricsSource for SysinfoSource {
    fn system_info(&self) -> Result<SystemInfo> {
        Ok(os::collect().unwrap_or_else(|e| {
            warn!("Failed to collect OS info: {}", e);
            os::get_fallback()
        }))
    }

    fn memory_usage(&self) -> Result<MemoryUsage> {
        memory::collect()
    }

    fn disk_usage(&self, path: &Path) -> Result<DiskUsage> {
        storage::collect(path)
    }

    fn cpu_usage(&self, sample: Duration) -> Result<CpuUsage> {
        cpu::collect(sample)
    }
}

impl<S: MetricsSource + ?Sized> MetricsSource for std::sync::Arc<S> {
    fn system_info(&self) -> Result<SystemInfo> {
        (**self).system_info()
    }

    fn memory_usage(&self) -> Result<MemoryUsage> {
        (**self).memory_usage()
    }

    fn disk_usage(&self, path: &Path) -> Result<DiskUsage> {
        (**self).disk_usage(path)
    }

    fn cpu_usage(&self, sample: Duration) -> Result<CpuUsage> {
        (**self).cpu_usage(sample)
    }
}
