//! Client error taxonomy.
//!
//! Transport failures propagate untouched; a non-2xx response after the
//! refresh policy has run becomes [`ClientError::RequestFailed`] carrying the
//! status and body text for diagnostics. A refresh failure is never surfaced
//! as its own variant - it only causes fallthrough to the original response.

use ll_core::StoreError;
use thiserror::Error;

/// Errors surfaced by the API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection refused, timeout)
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response after the retry policy has run its course
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// A 2xx body that does not match the declared response shape
    #[error("Malformed response: {context}")]
    MalformedResponse { context: String },

    /// Request input rejected before any network call was made
    #[error("Invalid request: {message}")]
    Validation { message: String },

    /// Token store failure
    #[error("Token store failure: {0}")]
    Store(#[from] StoreError),

    /// Invalid client configuration
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl ClientError {
    /// Builds a `RequestFailed` from a status code and response body text
    ///
    /// An empty body is replaced with a generic message so callers always get
    /// something to display.
    pub(crate) fn request_failed(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            "Request failed".to_string()
        } else {
            body
        };
        Self::RequestFailed { status, message }
    }

    /// Builds a `MalformedResponse` with the given context
    pub(crate) fn malformed(context: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context: context.into(),
        }
    }

    /// Whether this error is an unresolved 401
    ///
    /// Route guards treat this as "session invalid" and redirect to login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 401, .. })
    }
}
