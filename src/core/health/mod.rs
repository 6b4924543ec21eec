//! Health aggregation.
//!
//! Runs the named checks against a `MetricsSource`, classifies each one as
//! pass or fail and derives a single overall status from the failure count.

mod aggregator;
mod report;
mod status;

pub use aggregator::{HealthAggregator, HealthSettings};
pub use report::{CheckName, CheckResult, Checks, HealthReport, Ping, QuickHealth, Summary};
pub use status::{CheckStatus, OverallStatus, DEFAULT_UNHEALTHY_THRESHOLD};
