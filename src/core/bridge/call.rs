use std::fmt;
use std::str::FromStr;

use crate::error::ProbeError;

/// Functions the bridge exposes to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    GetHealthStatus,
    GetQuickHealth,
    GetSystemInfo,
    Ping,
}

impl Call {
    pub const ALL: [Call; 4] = [
        Call::GetHealthStatus,
        Call::GetQuickHealth,
        Call::GetSystemInfo,
        Call::Ping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Call::GetHealthStatus => "get_health_status",
            Call::GetQuickHealth => "get_quick_health",
            Call::GetSystemInfo => "get_system_info",
            Call::Ping => "ping",
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Call {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Call::ALL
            .into_iter()
            .find(|call| call.as_str() == s)
            .ok_or_else(|| ProbeError::bridge(format!("no bridge function named '{}'", s)))
    }
}
