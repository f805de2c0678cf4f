//! Error types for request execution and JSON handling.
//!
//! Errors fall in two groups: transport errors, raised while building or
//! performing the network exchange, and serialization errors, raised by the
//! JSON helpers on [`Request`](crate::Request) and
//! [`Response`](crate::Response).

use thiserror::Error;

/// Errors returned by the client and its request/response objects.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the underlying HTTP client.
    ///
    /// This includes connection failures, DNS resolution errors, timeouts
    /// and I/O errors while reading the response. The original error is
    /// kept unchanged.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The URL is empty, cannot be parsed, or does not use http/https.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value cannot be sent on the wire.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The method name is not a known HTTP method.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for errors raised while building or sending a request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::InvalidUrl(_) | Error::InvalidHeader(_)
        )
    }

    /// Returns true for JSON encode/decode failures.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Json(_))
    }

    /// Returns true if the request exceeded the configured timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
