use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};
use serde::Serialize;

use crate::core::clock::{Clock, ProcessStart, SystemClock};
use crate::core::config::Config;
use crate::core::system_info::{uptime, MetricsSource, SysinfoSource, SystemInfo};
use crate::error::Result;

use super::report::{CheckName, CheckResult, Checks, HealthReport, Ping, QuickHealth, Summary};
use super::status::OverallStatus;

/// Tunables for the aggregator
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSettings {
    pub unhealthy_threshold: usize,
    /// CPU sample window for the full report
    pub cpu_sample: Duration,
    /// CPU sample window for quick health
    pub quick_cpu_sample: Duration,
    pub disk_path: PathBuf,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for HealthSettings {
    fn from(config: &Config) -> Self {
        Self {
            unhealthy_threshold: config.unhealthy_threshold,
            cpu_sample: Duration::from_millis(config.cpu_sample_ms),
            quick_cpu_sample: Duration::from_millis(config.quick_cpu_sample_ms),
            disk_path: PathBuf::from(&config.disk_path),
        }
    }
}

/// Runs the health checks and derives the overall status
pub struct HealthAggregator<S = SysinfoSource, C = SystemClock> {
    source: S,
    clock: C,
    start: ProcessStart,
    settings: HealthSettings,
}

impl HealthAggregator {
    /// Aggregator over the live host, with the start time captured now
    pub fn for_host(settings: HealthSettings) -> Self {
        let clock = SystemClock;
        let start = ProcessStart::capture(&clock);
        Self::new(SysinfoSource, clock, start, settings)
    }
}

impl<S: MetricsSource, C: Clock> HealthAggregator<S, C> {
    pub fn new(source: S, clock: C, start: ProcessStart, settings: HealthSettings) -> Self {
        Self {
            source,
            clock,
            start,
            settings,
        }
    }

    pub fn settings(&self) -> &HealthSettings {
        &self.settings
    }

    pub fn process_start(&self) -> ProcessStart {
        self.start
    }

    /// Run all five checks. A failing check is recorded and never stops
    /// the remaining ones.
    pub fn get_health_status(&self) -> HealthReport {
        let checks = Checks {
            system_info: run_check(CheckName::SystemInfo, || self.source.system_info()),
            memory_usage: run_check(CheckName::MemoryUsage, || self.source.memory_usage()),
            disk_usage: run_check(CheckName::DiskUsage, || {
                self.source.disk_usage(&self.settings.disk_path)
            }),
            application_uptime: run_check(CheckName::ApplicationUptime, || {
                Ok(uptime::collect(&self.start, self.clock.now()))
            }),
            cpu_usage: run_check(CheckName::CpuUsage, || {
                self.source.cpu_usage(self.settings.cpu_sample)
            }),
        };

        let summary = Summary::tally(&checks);
        let status = OverallStatus::from_failures(summary.failed, self.settings.unhealthy_threshold);

        debug!(
            "Health status {} ({} passed, {} failed)",
            status, summary.passed, summary.failed
        );

        HealthReport {
            status,
            timestamp: self.clock.now(),
            checks,
            summary,
        }
    }

    /// Memory, CPU and uptime only, without the per-check wrapping
    pub fn get_quick_health(&self) -> QuickHealth {
        let mut errors = Vec::new();

        let memory_usage_percent = match self.source.memory_usage() {
            Ok(memory) => Some(memory.percentage),
            Err(e) => {
                warn!("Quick memory probe failed: {}", e);
                errors.push(format!("memory: {}", e));
                None
            }
        };

        let cpu_usage_percent = match self.source.cpu_usage(self.settings.quick_cpu_sample) {
            Ok(cpu) => Some(cpu.percentage),
            Err(e) => {
                warn!("Quick CPU probe failed: {}", e);
                errors.push(format!("cpu: {}", e));
                None
            }
        };

        let now = self.clock.now();
        let uptime_seconds = uptime::elapsed_seconds(&self.start, now);

        QuickHealth {
            status: OverallStatus::from_failures(errors.len(), self.settings.unhealthy_threshold),
            timestamp: now,
            uptime_seconds,
            uptime_formatted: uptime::format_uptime(uptime_seconds),
            memory_usage_percent,
            cpu_usage_percent,
            errors,
        }
    }

    pub fn get_system_info(&self) -> Result<SystemInfo> {
        self.source.system_info()
    }

    pub fn ping(&self) -> Ping {
        Ping::at(self.clock.now())
    }
}

/// Isolate one check: its result, or its error, becomes a `CheckResult`
fn run_check<T, F>(name: CheckName, check: F) -> CheckResult
where
    T: Serialize,
    F: FnOnce() -> Result<T>,
{
    match check() {
        Ok(record) => CheckResult::pass(&record),
        Err(e) => {
            warn!("Health check {} failed: {}", name, e);
            CheckResult::fail(e.to_string())
        }
    }
}
