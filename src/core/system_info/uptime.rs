use crate::core::clock::ProcessStart;
use crate::core::system_info::types::Uptime;
use chrono::{DateTime, Utc};

/// Process uptime at `now`. A clock that reads earlier than the start
/// instant yields zero rather than a negative duration.
pub fn collect(start: &ProcessStart, now: DateTime<Utc>) -> Uptime {
    let uptime_seconds = elapsed_seconds(start, now);

    Uptime {
        uptime_seconds,
        uptime_formatted: format_uptime(uptime_seconds),
        started_at: start.started_at(),
    }
}

pub fn elapsed_seconds(start: &ProcessStart, now: DateTime<Utc>) -> u64 {
    (now - start.started_at()).num_seconds().max(0) as u64
}

/// `H:MM:SS`; hours are not wrapped into days.
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}
