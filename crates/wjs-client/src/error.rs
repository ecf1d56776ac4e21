//! Error types for the Wiki.js client.

use wjs_reconcile::{RemoteErrorKind, StoreError};

/// Error from Wiki.js API operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// GraphQL-level failure reported by the service.
    #[error("API error: {message}")]
    Api {
        /// Wiki.js error code, when the service supplied one.
        code: Option<i64>,
        /// Error message from the service.
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// The requested page does not exist.
    #[error("page not found")]
    NotFound,
}

impl From<ClientError> for StoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound => StoreError::NotFound,
            ClientError::HttpRequest(e) => StoreError::Remote {
                kind: RemoteErrorKind::Transport,
                detail: format!("HTTP request failed: {e}"),
            },
            ClientError::HttpResponse { status, body } => StoreError::Remote {
                kind: RemoteErrorKind::Http,
                detail: format!("HTTP error: {status} - {body}"),
            },
            ClientError::Api { code, message } => StoreError::Remote {
                kind: RemoteErrorKind::Api,
                detail: match code {
                    Some(code) => format!("API error {code}: {message}"),
                    None => format!("API error: {message}"),
                },
            },
            ClientError::Json(e) => StoreError::Remote {
                kind: RemoteErrorKind::Decode,
                detail: format!("JSON error: {e}"),
            },
        }
    }
}
