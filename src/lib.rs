// sysprobe library - public API

// Re-export error types
pub mod error;
pub use error::{ProbeError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use core::bridge::{Bridge, Call, Envelope, ErrorCode};
pub use core::config::Config;
pub use core::health::{HealthAggregator, HealthReport, HealthSettings, OverallStatus, QuickHealth};

// Initialize logging
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
