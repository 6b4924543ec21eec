//! Unit conversions shared by the collectors.

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a byte count to gigabytes (1024³), rounded to one decimal
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round1(bytes as f64 / BYTES_PER_GB)
}

/// `part / whole * 100`, rounded to one decimal and clamped to [0, 100].
/// A zero `whole` yields 0.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    clamp_percent(round1(part as f64 / whole as f64 * 100.0))
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
