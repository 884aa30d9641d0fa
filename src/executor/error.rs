//! Transport error types.
//!
//! Every failure to complete a request, or a completed request the service
//! rejected, ends up here with enough context to diagnose it.

use thiserror::Error;

/// Errors raised while talking to the service.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failures, DNS resolution errors and other network-level issues.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The target URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built or the request could not be assembled.
    #[error("Request build error: {0}")]
    BuildError(String),

    /// The service answered with a non-2xx status.
    #[error("{method} {url} failed with {status} {reason}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        reason: String,
        body: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Unexpected response body from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// An update was requested for a group the project does not contain.
    #[error("Variable group '{name}' was not found in project '{project}'")]
    GroupNotFound { project: String, name: String },
}

impl TransportError {
    /// Returns the HTTP status if the service rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convert reqwest errors to TransportError.
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::BuildError(err.to_string())
        } else if err.is_connect() {
            TransportError::NetworkError(format!("Connection failed: {}", err))
        } else {
            TransportError::NetworkError(err.to_string())
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}
