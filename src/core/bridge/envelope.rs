use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Machine-readable failure codes carried in `Envelope::code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ServiceNotInitialized,
    ServiceNotFound,
    UnexpectedError,
    InvalidInput,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ServiceNotInitialized => "SERVICE_NOT_INITIALIZED",
            ErrorCode::ServiceNotFound => "SERVICE_NOT_FOUND",
            ErrorCode::UnexpectedError => "UNEXPECTED_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
        }
    }
}

/// Wrapper around every bridge result.
///
/// Success: `{ "success": true, "data": ... }`
/// Failure: `{ "success": false, "error": "...", "code": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl Envelope {
    pub fn success<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Envelope {
                success: true,
                data: Some(data),
                error: None,
                code: None,
            },
            Err(e) => Envelope::error(
                format!("Failed to encode response: {}", e),
                ErrorCode::UnexpectedError,
            ),
        }
    }

    pub fn error<S: Into<String>>(message: S, code: ErrorCode) -> Self {
        Envelope {
            success: false,
            data: None,
            error: Some(message.into()),
            code: Some(code),
        }
    }

    pub fn service_not_initialized(service: &str) -> Self {
        Envelope::error(
            format!("{} service not initialized", service),
            ErrorCode::ServiceNotInitialized,
        )
    }

    pub fn service_not_found(name: &str) -> Self {
        Envelope::error(
            format!("{} service not found", name),
            ErrorCode::ServiceNotFound,
        )
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Envelope::error(message, ErrorCode::InvalidInput)
    }

    /// Decode the payload into a typed record
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }
}
