//! Client error types.

use thiserror::Error;
use todo_types::ErrorCode;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the item store API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("API request failed ({status}): {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    #[error("not found: {0}")]
    NotFound(String),

    /// Transport failure: no usable response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns true when the request never produced a server response
    /// (connection refused, timeout, DNS failure).
    pub fn is_transport(&self) -> bool {
        match self {
            ClientError::Http(e) => e.status().is_none() && !e.is_decode(),
            _ => false,
        }
    }

    /// Returns the HTTP status the server answered with, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::NotFound(_) => Some(404),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
