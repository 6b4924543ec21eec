use super::support::{aggregator, aggregator_with, t0, Failures};
use serde_json::{json, Value};
use sysprobe::core::health::{CheckName, CheckStatus};
use sysprobe::{HealthReport, HealthSettings, OverallStatus, QuickHealth};

#[test]
fn test_all_checks_pass_is_healthy() {
    let (health, _clock) = aggregator(Failures::default());
    let report = health.get_health_status();

    assert_eq!(report.status, OverallStatus::Healthy);
    assert_eq!(report.summary.total_checks, 5);
    assert_eq!(report.summary.passed, 5);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.timestamp, t0());
    for (_, result) in report.checks.iter() {
        assert!(result.passed());
        assert!(result.error.is_none());
    }
}

#[test]
fn test_disk_failure_is_isolated() {
    let (health, _clock) = aggregator(Failures {
        disk: true,
        ..Default::default()
    });
    let report = health.get_health_status();

    assert_eq!(report.status, OverallStatus::Degraded);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.passed, 4);

    let disk = report.checks.get(CheckName::DiskUsage);
    assert_eq!(disk.status, CheckStatus::Fail);
    assert!(disk.data.is_empty());
    assert!(disk.error.as_deref().unwrap().contains("no volume mounted"));

    let value = serde_json::to_value(&report).unwrap();
    let checks = value["checks"].as_object().unwrap();
    assert_eq!(checks.len(), 5);
    for name in [
        "system_info",
        "memory_usage",
        "application_uptime",
        "cpu_usage",
    ] {
        assert_eq!(checks[name]["status"], "pass", "{} should pass", name);
        assert!(checks[name].get("error").is_none());
    }
    assert_eq!(checks["disk_usage"]["status"], "fail");
    assert_eq!(checks["disk_usage"]["data"], json!({}));
}

#[test]
fn test_two_failures_are_unhealthy() {
    let (health, _clock) = aggregator(Failures {
        memory: true,
        cpu: true,
        ..Default::default()
    });
    let report = health.get_health_status();

    assert_eq!(report.status, OverallStatus::Unhealthy);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(
        report.summary.passed + report.summary.failed,
        report.summary.total_checks
    );
}

#[test]
fn test_everything_failing_still_reports_every_check() {
    let (health, _clock) = aggregator(Failures {
        system_info: true,
        memory: true,
        disk: true,
        cpu: true,
    });
    let report = health.get_health_status();

    assert_eq!(report.status, OverallStatus::Unhealthy);
    assert_eq!(report.checks.len(), 5);
    // Uptime never fails
    assert!(report.checks.get(CheckName::ApplicationUptime).passed());
    assert_eq!(report.summary.failed, 4);
}

#[test]
fn test_custom_threshold() {
    let settings = HealthSettings {
        unhealthy_threshold: 3,
        ..Default::default()
    };
    let (health, _clock) = aggregator_with(
        Failures {
            memory: true,
            disk: true,
            ..Default::default()
        },
        settings,
    );

    assert_eq!(health.get_health_status().status, OverallStatus::Degraded);
}

#[test]
fn test_check_records_carry_typed_fields() {
    let (health, clock) = aggregator(Failures::default());
    clock.advance(3600);
    let report = health.get_health_status();

    let uptime = report.checks.get(CheckName::ApplicationUptime);
    assert_eq!(uptime.data["uptime_seconds"], 3600);
    assert_eq!(uptime.data["uptime_formatted"], "1:00:00");

    let memory = report.checks.get(CheckName::MemoryUsage);
    assert_eq!(memory.data["percentage"], 62.5);

    let info = report.checks.get(CheckName::SystemInfo);
    assert_eq!(info.data["python_version"], "1.80.0");
    assert_eq!(info.data["architecture"], json!(["64bit", "ELF"]));
}

#[test]
fn test_report_json_round_trip() {
    let (health, clock) = aggregator(Failures {
        cpu: true,
        ..Default::default()
    });
    clock.advance(42);
    let report = health.get_health_status();

    let text = serde_json::to_string(&report).unwrap();
    let decoded: HealthReport = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, report);

    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["status"], "degraded");
    assert!(value["timestamp"].as_str().unwrap().starts_with("2024-01-01T00:00:42"));
}

#[test]
fn test_quick_health_uptime() {
    let (health, clock) = aggregator(Failures::default());
    clock.advance(3600);
    let quick = health.get_quick_health();

    assert_eq!(quick.status, OverallStatus::Healthy);
    assert_eq!(quick.uptime_seconds, 3600);
    assert_eq!(quick.uptime_formatted, "1:00:00");
    assert_eq!(quick.memory_usage_percent, Some(62.5));
    assert_eq!(quick.cpu_usage_percent, Some(12.5));
    assert!(quick.errors.is_empty());

    let value = serde_json::to_value(&quick).unwrap();
    assert!(value.get("errors").is_none());
    assert_eq!(value["uptime_seconds"], 3600);
    assert_eq!(value["uptime_formatted"], "1:00:00");
}

#[test]
fn test_quick_health_uptime_is_monotonic() {
    let (health, clock) = aggregator(Failures::default());
    let mut last = 0;
    for step in [0, 1, 59, 3600] {
        clock.advance(step);
        let uptime = health.get_quick_health().uptime_seconds;
        assert!(uptime >= last);
        last = uptime;
    }
    assert_eq!(last, 3660);
}

#[test]
fn test_quick_health_failed_probe() {
    let (health, _clock) = aggregator(Failures {
        memory: true,
        ..Default::default()
    });
    let quick = health.get_quick_health();

    assert_eq!(quick.status, OverallStatus::Degraded);
    assert_eq!(quick.memory_usage_percent, None);
    assert_eq!(quick.cpu_usage_percent, Some(12.5));
    assert_eq!(quick.errors.len(), 1);
    assert!(quick.errors[0].starts_with("memory: "));

    let text = serde_json::to_string(&quick).unwrap();
    let decoded: QuickHealth = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, quick);
    assert!(text.contains("\"memory_usage_percent\":null"));
}

#[test]
fn test_quick_health_two_failed_probes_are_unhealthy() {
    let (health, clock) = aggregator(Failures {
        memory: true,
        cpu: true,
        ..Default::default()
    });
    clock.advance(61);
    let quick = health.get_quick_health();

    assert_eq!(quick.status, OverallStatus::Unhealthy);
    assert_eq!(quick.memory_usage_percent, None);
    assert_eq!(quick.cpu_usage_percent, None);
    assert_eq!(quick.errors.len(), 2);
    assert!(quick.errors[0].starts_with("memory: "));
    assert!(quick.errors[1].starts_with("cpu: "));
    // Uptime is still reported
    assert_eq!(quick.uptime_formatted, "0:01:01");
}

#[test]
fn test_ping() {
    let (health, clock) = aggregator(Failures::default());
    clock.advance(5);
    let ping = health.ping();

    assert_eq!(ping.message, "pong");
    assert_eq!(ping.service, "health");
    assert_eq!(ping.timestamp, t0() + chrono::Duration::seconds(5));
}

#[test]
fn test_system_info_failure_propagates() {
    let (health, _clock) = aggregator(Failures {
        system_info: true,
        ..Default::default()
    });
    assert!(health.get_system_info().is_err());
}
