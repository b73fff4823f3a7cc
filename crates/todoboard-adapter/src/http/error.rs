/*
[INPUT]:  Error sources (HTTP, non-2xx status, serialization, configuration)
[OUTPUT]: Structured transport error type for the adapter
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failure talking to the todo service.
///
/// Domain rejections (non-zero result codes) are not errors at this layer;
/// they come back inside a successful envelope.
#[derive(Error, Debug)]
pub enum TodoApiError {
    /// HTTP request failed (connect, timeout, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success HTTP status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TodoApiError {
    /// Check if the error came from a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, TodoApiError::Http(err) if err.is_timeout())
    }

    /// Check if the service rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            TodoApiError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED.as_u16()
                    || *status == StatusCode::FORBIDDEN.as_u16()
        )
    }

    /// Whether the failure happened talking to the service, as opposed to
    /// building the client or the request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TodoApiError::Http(_) | TodoApiError::Api { .. } | TodoApiError::Serialization(_)
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TodoApiError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, TodoApiError>;
