//! Error types for the wiki documents client

use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error types
///
/// Transport failures are surfaced once and never retried. No error kind
/// tears down the process; the owning UI decides how to render failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote service answered with a non-2xx status. The body of such
    /// responses is plain text or empty, never JSON.
    #[error("request to {url} failed: {status_code} {message}")]
    Api {
        status_code: u16,
        message: String,
        url: String,
    },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("unable to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status code of the failed request, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api { status_code, .. } => Some(*status_code),
            ClientError::Network(err) => err.status().map(|s| s.as_u16()),
            ClientError::Decode(_) => None,
        }
    }
}
