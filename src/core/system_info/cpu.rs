use crate::core::system_info::types::CpuUsage;
use crate::core::system_info::units::{clamp_percent, round1};
use crate::error::{ProbeError, Result};
use std::time::Duration;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Measure global CPU usage over a blocking window of `sample`.
///
/// The window is never shorter than `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`,
/// below which the second reading would repeat the first.
pub fn collect(sample: Duration) -> Result<CpuUsage> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage());
    let mut sys = System::new_with_specifics(refresh);

    if sys.cpus().is_empty() {
        return Err(ProbeError::metric_collection("OS reported no CPUs"));
    }

    sys.refresh_cpu_usage();
    std::thread::sleep(sample.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_usage();

    Ok(from_sample(
        sys.global_cpu_usage(),
        System::physical_core_count(),
        sys.cpus().len(),
    ))
}

/// Build the record from one reading. A missing physical count stays
/// unknown rather than borrowing the logical one.
pub fn from_sample(usage: f32, physical: Option<usize>, logical: usize) -> CpuUsage {
    if physical.is_none() {
        log::warn!("OS did not report a physical core count");
    }

    CpuUsage {
        percentage: clamp_percent(round1(usage as f64)),
        core_count: physical,
        logical_core_count: logical,
    }
}
