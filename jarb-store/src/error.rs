//! Error types for the constraints store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading constraints.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The fetch failed or the server answered with a non-success status.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The fetched body is not a constraint map.
    #[error("invalid constraints payload: {0}")]
    InvalidPayload(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns true if the failure happened while talking to the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Transport(_) | StoreError::Http(_))
    }
}

impl From<jarb_types::Error> for StoreError {
    fn from(err: jarb_types::Error) -> Self {
        StoreError::InvalidPayload(err.to_string())
    }
}
