// Command handlers module
pub mod calls;
pub mod completions;
pub mod config;
pub mod serve;
pub mod version;
pub mod watch;

use crate::core::bridge::Bridge;
use crate::core::config::Config;
use crate::core::health::{HealthAggregator, HealthSettings};

// Re-exports for cleaner imports
pub use version::execute as version;

/// Bridge over the live host, started and ready for calls
pub fn build_bridge(config: &Config) -> Bridge {
    let bridge = Bridge::new(HealthAggregator::for_host(HealthSettings::from(config)));
    bridge.start();
    bridge
}
