use crate::core::system_info::types::MemoryUsage;
use crate::core::system_info::units::{bytes_to_gb, percent_of};
use crate::error::{ProbeError, Result};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

pub fn collect() -> Result<MemoryUsage> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(ProbeError::metric_collection(
            "memory statistics are not supported on this platform",
        ));
    }

    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
    let sys = System::new_with_specifics(refresh);

    from_bytes(sys.total_memory(), sys.available_memory(), sys.used_memory())
}

/// Build the memory record from raw byte counts.
///
/// `percentage` follows the OS notion of pressure (memory not available to
/// new allocations), so it can differ from `used / total` when the kernel
/// holds reclaimable caches.
pub fn from_bytes(total: u64, available: u64, used: u64) -> Result<MemoryUsage> {
    if total == 0 {
        return Err(ProbeError::metric_collection(
            "OS reported zero total memory",
        ));
    }

    Ok(MemoryUsage {
        total_gb: bytes_to_gb(total),
        available_gb: bytes_to_gb(available),
        used_gb: bytes_to_gb(used),
        percentage: percent_of(total.saturating_sub(available), total),
    })
}
