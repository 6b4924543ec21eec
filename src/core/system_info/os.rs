use crate::core::system_info::types::SystemInfo;
use crate::error::{ProbeError, Result};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

const UNKNOWN: &str = "Unknown";

pub fn collect() -> Result<SystemInfo> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(ProbeError::metric_collection(
            "system information is not supported on this platform",
        ));
    }

    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing());
    let sys = System::new_with_specifics(refresh);

    let processor = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let system = system_name(std::env::consts::OS);
    let release = System::kernel_version()
        .filter(|version| !version.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    Ok(SystemInfo {
        platform: format!("{}-{}-{}", system, release, std::env::consts::ARCH),
        system,
        processor,
        architecture: architecture(),
        runtime_version: runtime_version(),
        hostname: System::host_name()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
    })
}

pub fn get_fallback() -> SystemInfo {
    SystemInfo {
        platform: UNKNOWN.to_string(),
        system: system_name(std::env::consts::OS),
        processor: UNKNOWN.to_string(),
        architecture: architecture(),
        runtime_version: runtime_version(),
        hostname: UNKNOWN.to_string(),
    }
}

/// Kernel family name as `uname -s` reports it
fn system_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "" => UNKNOWN.to_string(),
        other => other.to_string(),
    }
}

fn architecture() -> Vec<String> {
    let linkage = if cfg!(target_os = "windows") {
        "WindowsPE"
    } else if cfg!(target_vendor = "apple") {
        "Mach-O"
    } else {
        "ELF"
    };

    vec![format!("{}bit", usize::BITS), linkage.to_string()]
}

fn runtime_version() -> String {
    option_env!("SYSPROBE_RUSTC_VERSION")
        .unwrap_or(UNKNOWN)
        .to_string()
}
