// UI and formatting module

pub mod formatters;
pub mod health_formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_percent, status_label, usage_bar};
