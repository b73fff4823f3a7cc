/*
[INPUT]:  Transport errors, rejected envelopes, local precondition checks
[OUTPUT]: `SyncError` returned by every engine operation
[POS]:    Error handling layer - engine failure taxonomy
[UPDATE]: When adding a new failure class or precondition
*/

use thiserror::Error;
use todoboard_adapter::{ApiEnvelope, FieldError, TodoApiError};

/// Message surfaced when the service rejects a request without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Some error occurred";

/// Broad failure class, used to decide whether global status is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote call did not complete.
    Transport,
    /// The call completed but the result code rejected it.
    Domain,
    /// A local check failed before any remote call.
    Precondition,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("request rejected: {}", .messages.first().map(String::as_str).unwrap_or(FALLBACK_ERROR_MESSAGE))]
    Domain {
        messages: Vec<String>,
        field_errors: Vec<FieldError>,
    },

    /// Transport succeeded but the payload did not carry what the contract promises.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("list {list_id} not found")]
    ListNotFound { list_id: String },

    #[error("item {item_id} not found in list {list_id}")]
    ItemNotFound { list_id: String, item_id: String },

    #[error("title must not be empty")]
    InvalidTitle,
}

impl SyncError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::Transport { .. } | SyncError::MalformedResponse(_) => ErrorKind::Transport,
            SyncError::Domain { .. } => ErrorKind::Domain,
            SyncError::ListNotFound { .. }
            | SyncError::ItemNotFound { .. }
            | SyncError::InvalidTitle => ErrorKind::Precondition,
        }
    }

    /// Human-readable text for the global error slot.
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Transport { message } => message.clone(),
            SyncError::Domain { messages, .. } => messages
                .first()
                .cloned()
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            other => other.to_string(),
        }
    }

    /// Field-level messages of a domain rejection, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SyncError::Domain { field_errors, .. } => field_errors,
            _ => &[],
        }
    }

    pub(crate) fn domain<T>(envelope: ApiEnvelope<T>) -> Self {
        SyncError::Domain {
            messages: envelope.messages,
            field_errors: envelope.field_errors,
        }
    }
}

impl From<TodoApiError> for SyncError {
    fn from(err: TodoApiError) -> Self {
        SyncError::Transport {
            message: err.to_string(),
        }
    }
}

/// Splits a remote outcome into its payload or a typed failure.
pub(crate) fn confirm<T>(outcome: todoboard_adapter::Result<ApiEnvelope<T>>) -> Result<T> {
    let envelope = outcome?;
    if envelope.is_success() {
        Ok(envelope.data)
    } else {
        Err(SyncError::domain(envelope))
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(messages: &[&str]) -> ApiEnvelope<()> {
        ApiEnvelope {
            result_code: 1,
            messages: messages.iter().map(|m| m.to_string()).collect(),
            field_errors: vec![FieldError {
                field: "title".to_string(),
                error: "too long".to_string(),
            }],
            data: (),
        }
    }

    #[test]
    fn confirm_passes_success_payload() {
        let envelope = ApiEnvelope {
            result_code: 0,
            messages: vec![],
            field_errors: vec![],
            data: 7,
        };
        assert_eq!(confirm(Ok(envelope)), Ok(7));
    }

    #[test]
    fn confirm_maps_nonzero_code_to_domain() {
        let err = confirm(Ok(rejected(&["Title too long", "second"]))).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(err.user_message(), "Title too long");
        assert_eq!(err.field_errors().len(), 1);
    }

    #[test]
    fn domain_without_messages_uses_fallback() {
        let err = confirm(Ok(rejected(&[]))).unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn transport_error_keeps_display_text() {
        let err = confirm::<()>(Err(TodoApiError::Config("offline".to_string()))).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.user_message(), "Configuration error: offline");
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn preconditions_are_classified() {
        assert_eq!(SyncError::InvalidTitle.kind(), ErrorKind::Precondition);
        let err = SyncError::ItemNotFound {
            list_id: "l1".to_string(),
            item_id: "t1".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert_eq!(err.to_string(), "item t1 not found in list l1");
    }
}
