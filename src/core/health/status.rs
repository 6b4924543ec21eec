use serde::{Deserialize, Serialize};

/// Failures at or above this count mark the host unhealthy
pub const DEFAULT_UNHEALTHY_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl OverallStatus {
    /// Classify a failure tally.
    ///
    /// `unhealthy_threshold` below 1 is treated as 1 so that a clean tally
    /// is always healthy.
    pub fn from_failures(failed: usize, unhealthy_threshold: usize) -> Self {
        if failed == 0 {
            OverallStatus::Healthy
        } else if failed >= unhealthy_threshold.max(1) {
            OverallStatus::Unhealthy
        } else {
            OverallStatus::Degraded
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Healthy => "healthy",
            OverallStatus::Degraded => "degraded",
            OverallStatus::Unhealthy => "unhealthy",
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
        }
    }
}
