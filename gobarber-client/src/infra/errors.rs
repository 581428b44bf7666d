//! Request error types
//!
//! Anything that goes wrong between building a request and decoding its
//! response collapses into [`RequestError`]. Workflows never branch on the
//! variant; it exists for logs and tests.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for API operations
pub type RequestResult<T> = Result<T, RequestError>;

#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection, TLS, timeout or other transport failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The file to upload could not be read
    #[error("Failed to read upload: {0}")]
    Upload(#[from] std::io::Error),
}

impl RequestError {
    /// HTTP status of the response, when the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport(err) => err.status(),
            _ => None,
        }
    }
}
