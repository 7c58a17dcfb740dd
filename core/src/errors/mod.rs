//! Domain error types shared by every token store backend.

use thiserror::Error;

/// Errors raised by a token store implementation
///
/// Store operations are whole-pair reads and writes, so a failure here means
/// the credential pair could not be read, persisted, or removed at all; a
/// partially applied write is never reported as success.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Token store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token store serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Token store backend failure: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Creates a backend failure with the given message
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
