use crate::core::system_info::types::DiskUsage;
use crate::core::system_info::units::{bytes_to_gb, percent_of};
use crate::error::{ProbeError, Result};
use std::path::Path;
use sysinfo::Disks;

/// Usage of the single volume holding `path`.
pub fn collect(path: &Path) -> Result<DiskUsage> {
    let disks = Disks::new_with_refreshed_list();

    let volumes: Vec<(&Path, u64, u64)> = disks
        .list()
        .iter()
        .map(|disk| (disk.mount_point(), disk.total_space(), disk.available_space()))
        .collect();

    let (mount_point, total, available) = select_volume(path, &volumes).ok_or_else(|| {
        ProbeError::metric_collection(format!(
            "no mounted volume contains {}",
            path.display()
        ))
    })?;

    log::debug!(
        "Disk usage for {} read from mount point {}",
        path.display(),
        mount_point.display()
    );

    from_bytes(total, available)
}

/// Pick the volume whose mount point is the longest prefix of `path`,
/// the same resolution `df` performs.
pub fn select_volume<'a>(
    path: &Path,
    volumes: &[(&'a Path, u64, u64)],
) -> Option<(&'a Path, u64, u64)> {
    volumes
        .iter()
        .filter(|(mount_point, _, _)| path.starts_with(mount_point))
        .max_by_key(|(mount_point, _, _)| mount_point.components().count())
        .copied()
}

pub fn from_bytes(total: u64, available: u64) -> Result<DiskUsage> {
    if total == 0 {
        return Err(ProbeError::metric_collection("volume reports zero size"));
    }

    let used = total.saturating_sub(available);

    Ok(DiskUsage {
        total_gb: bytes_to_gb(total),
        used_gb: bytes_to_gb(used),
        free_gb: bytes_to_gb(available),
        percentage: percent_of(used, total),
    })
}
