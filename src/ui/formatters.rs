use colored::*;

use crate::core::health::{CheckStatus, OverallStatus};

/// Colored status word (green / yellow / red)
pub fn status_label(status: OverallStatus) -> ColoredString {
    match status {
        OverallStatus::Healthy => status.as_str().to_uppercase().green().bold(),
        OverallStatus::Degraded => status.as_str().to_uppercase().yellow().bold(),
        OverallStatus::Unhealthy => status.as_str().to_uppercase().red().bold(),
    }
}

pub fn check_label(status: CheckStatus) -> ColoredString {
    match status {
        CheckStatus::Pass => "PASS".green(),
        CheckStatus::Fail => "FAIL".red(),
    }
}

/// `42.5%`, or `n/a` when the probe failed
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "n/a".to_string(),
    }
}

/// Fixed-width usage bar, e.g. `[#####-----]` for 50%
pub fn usage_bar(percent: f64, width: usize) -> String {
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Color a usage percentage by the usual warning bands
pub fn colorize_usage(percent: f64, text: String) -> ColoredString {
    if percent >= 90.0 {
        text.red()
    } else if percent >= 75.0 {
        text.yellow()
    } else {
        text.green()
    }
}
