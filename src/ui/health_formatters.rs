use colored::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::bridge::Envelope;
use crate::core::health::{CheckName, CheckResult, HealthReport, Ping, QuickHealth};
use crate::core::system_info::types::*;
use crate::ui::formatters::{check_label, colorize_usage, format_percent, status_label, usage_bar};

const BAR_WIDTH: usize = 20;

fn print_section_header(title: &str) {
    println!("\n{}", title.bold().green());
    println!("{}", "-".repeat(title.len()));
}

pub fn format_health_report(report: &HealthReport) {
    println!("\n{}", "HEALTH STATUS".bold().bright_cyan());
    println!("{}", "=".repeat(60));
    println!(
        "  Overall: {}   ({} of {} checks passed)",
        status_label(report.status),
        report.summary.passed,
        report.summary.total_checks
    );
    println!("  Checked at: {}", report.timestamp.to_rfc3339().dimmed());

    for (name, result) in report.checks.iter() {
        print_check(name, result);
    }

    println!();
}

fn print_check(name: CheckName, result: &CheckResult) {
    print_section_header(&format!("{} [{}]", name, result.status.as_str()));
    println!("  Result: {}", check_label(result.status));

    if let Some(ref error) = result.error {
        println!("  Error: {}", error.red());
        return;
    }

    match name {
        CheckName::SystemInfo => {
            if let Some(info) = decode::<SystemInfo>(result) {
                print_system_info_lines(&info);
            }
        }
        CheckName::MemoryUsage => {
            if let Some(memory) = decode::<MemoryUsage>(result) {
                print_usage_line(memory.percentage);
                println!(
                    "  Total: {:.1} GB, Used: {:.1} GB, Available: {:.1} GB",
                    memory.total_gb, memory.used_gb, memory.available_gb
                );
            }
        }
        CheckName::DiskUsage => {
            if let Some(disk) = decode::<DiskUsage>(result) {
                print_usage_line(disk.percentage);
                println!(
                    "  Total: {:.1} GB, Used: {:.1} GB, Free: {:.1} GB",
                    disk.total_gb, disk.used_gb, disk.free_gb
                );
            }
        }
        CheckName::ApplicationUptime => {
            if let Some(uptime) = decode::<Uptime>(result) {
                println!(
                    "  Uptime: {} ({}s)",
                    uptime.uptime_formatted, uptime.uptime_seconds
                );
                println!("  Started: {}", uptime.started_at.to_rfc3339());
            }
        }
        CheckName::CpuUsage => {
            if let Some(cpu) = decode::<CpuUsage>(result) {
                print_usage_line(cpu.percentage);
                let physical = cpu
                    .core_count
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                println!(
                    "  Cores: {} physical, {} logical",
                    physical, cpu.logical_core_count
                );
            }
        }
    }
}

fn decode<T: DeserializeOwned>(result: &CheckResult) -> Option<T> {
    serde_json::from_value(Value::Object(result.data.clone())).ok()
}

fn print_usage_line(percentage: f64) {
    let text = format!("{} {:.1}%", usage_bar(percentage, BAR_WIDTH), percentage);
    println!("  Usage: {}", colorize_usage(percentage, text));
}

pub fn format_quick_health(quick: &QuickHealth) {
    println!(
        "{}  uptime {}  memory {}  cpu {}",
        status_label(quick.status),
        quick.uptime_formatted,
        format_percent(quick.memory_usage_percent),
        format_percent(quick.cpu_usage_percent)
    );
    for error in &quick.errors {
        println!("  {}", error.red());
    }
}

pub fn format_system_info(info: &SystemInfo) {
    println!("\n{}", "SYSTEM INFORMATION".bold().bright_cyan());
    println!("{}", "=".repeat(60));
    print_system_info_lines(info);
    println!();
}

fn print_system_info_lines(info: &SystemInfo) {
    println!("  Platform: {}", info.platform);
    println!("  System: {}", info.system);
    println!("  Processor: {}", info.processor);
    println!("  Architecture: {}", info.architecture.join(", "));
    println!("  Toolchain: {}", info.runtime_version);
    println!("  Hostname: {}", info.hostname);
}

pub fn format_ping(ping: &Ping) {
    println!(
        "{} from {} at {}",
        ping.message.green().bold(),
        ping.service,
        ping.timestamp.to_rfc3339()
    );
}

/// Print a failure envelope with its code, for any call
pub fn format_failure(envelope: &Envelope) {
    let message = envelope.error.as_deref().unwrap_or("unknown error");
    match envelope.code {
        Some(code) => eprintln!(
            "{} {} ({})",
            "Error:".red().bold(),
            message,
            code.as_str().dimmed()
        ),
        None => eprintln!("{} {}", "Error:".red().bold(), message),
    }
}
