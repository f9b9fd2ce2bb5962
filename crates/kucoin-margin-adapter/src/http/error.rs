/*
[INPUT]:  Error sources (HTTP transport, serialization, URL building, configuration)
[OUTPUT]: Structured error type passed through unchanged by the endpoint bindings
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the margin adapter
#[derive(Error, Debug)]
pub enum MarginError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status.
    ///
    /// The raw body is kept so the API's `code`/`msg` fields stay visible.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MarginError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            MarginError::Http(err) => err.is_timeout() || err.is_connect(),
            MarginError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            _ => false,
        }
    }

    /// HTTP status of the failed response, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            MarginError::Status { status, .. } => Some(*status),
            MarginError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// API error code embedded in a non-success response body
    pub fn api_code(&self) -> Option<String> {
        let MarginError::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get("code")? {
            serde_json::Value::String(code) => Some(code.clone()),
            serde_json::Value::Number(code) => Some(code.to_string()),
            _ => None,
        }
    }

    /// Create a status error from a response status and body
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        MarginError::Status {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for margin operations
pub type Result<T> = std::result::Result<T, MarginError>;
