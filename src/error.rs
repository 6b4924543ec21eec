use std::io;
use thiserror::Error;

/// Custom error type for sysprobe
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Bridge error: {0}")]
    Bridge(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for sysprobe
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ProbeError::Config(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        ProbeError::MetricCollection(msg.into())
    }

    pub fn bridge<S: Into<String>>(msg: S) -> Self {
        ProbeError::Bridge(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ProbeError::Other(msg.into())
    }
}
