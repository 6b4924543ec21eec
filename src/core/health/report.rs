use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::{CheckStatus, OverallStatus};

/// The five named checks, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckName {
    SystemInfo,
    MemoryUsage,
    DiskUsage,
    ApplicationUptime,
    CpuUsage,
}

impl CheckName {
    pub const ALL: [CheckName; 5] = [
        CheckName::SystemInfo,
        CheckName::MemoryUsage,
        CheckName::DiskUsage,
        CheckName::ApplicationUptime,
        CheckName::CpuUsage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::SystemInfo => "system_info",
            CheckName::MemoryUsage => "memory_usage",
            CheckName::DiskUsage => "disk_usage",
            CheckName::ApplicationUptime => "application_uptime",
            CheckName::CpuUsage => "cpu_usage",
        }
    }
}

impl std::fmt::Display for CheckName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// Wrap a record as a passing check. Records that do not serialize to
    /// a JSON object are kept under a `value` key.
    pub fn pass<T: Serialize>(record: &T) -> Self {
        match serde_json::to_value(record) {
            Ok(Value::Object(data)) => CheckResult {
                status: CheckStatus::Pass,
                data,
                error: None,
            },
            Ok(other) => {
                let mut data = Map::new();
                data.insert("value".to_string(), other);
                CheckResult {
                    status: CheckStatus::Pass,
                    data,
                    error: None,
                }
            }
            Err(e) => CheckResult::fail(format!("failed to encode check data: {}", e)),
        }
    }

    pub fn fail<S: Into<String>>(message: S) -> Self {
        CheckResult {
            status: CheckStatus::Fail,
            data: Map::new(),
            error: Some(message.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Per-check results keyed by check name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checks {
    pub system_info: CheckResult,
    pub memory_usage: CheckResult,
    pub disk_usage: CheckResult,
    pub application_uptime: CheckResult,
    pub cpu_usage: CheckResult,
}

impl Checks {
    pub fn get(&self, name: CheckName) -> &CheckResult {
        match name {
            CheckName::SystemInfo => &self.system_info,
            CheckName::MemoryUsage => &self.memory_usage,
            CheckName::DiskUsage => &self.disk_usage,
            CheckName::ApplicationUptime => &self.application_uptime,
            CheckName::CpuUsage => &self.cpu_usage,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CheckName, &CheckResult)> + '_ {
        CheckName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }

    pub fn len(&self) -> usize {
        CheckName::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn tally(checks: &Checks) -> Self {
        let passed = checks.iter().filter(|(_, result)| result.passed()).count();
        let total_checks = checks.len();
        Summary {
            total_checks,
            passed,
            failed: total_checks - passed,
        }
    }
}

/// Composite report produced by `get_health_status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: OverallStatus,
    pub timestamp: DateTime<Utc>,
    pub checks: Checks,
    pub summary: Summary,
}

/// Lightweight status for frequent polling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickHealth {
    pub status: OverallStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub uptime_formatted: String,
    pub memory_usage_percent: Option<f64>,
    pub cpu_usage_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ping {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

impl Ping {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Ping {
            message: "pong".to_string(),
            timestamp,
            service: "health".to_string(),
        }
    }
}
