//! Error type shared by the authenticator, the HTTP transport and the runner.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Value could not be decoded as JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body could not be decoded as JSON
    #[error("json error: {source}")]
    InvalidBody {
        /// Decoder error
        #[source]
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// Writing the report failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Server answered with a non-success status
    #[error("request rejected: {status}")]
    Rejected {
        /// Status code returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// Login succeeded but no usable `access_token` came back
    #[error("missing access token")]
    MissingToken {
        /// Raw response body, empty when no response was involved
        body: String,
    },
}

impl AppError {
    /// Response body attached to the error, if the server sent one
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            AppError::Rejected { body, .. }
            | AppError::InvalidBody { body, .. }
            | AppError::MissingToken { body } => Some(body.as_str()).filter(|b| !b.is_empty()),
            _ => None,
        }
    }

    /// Status code attached to the error, if a response was received
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Rejected { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
