//! Client error types.
//!
//! This module defines the error type that can occur during Elasticsearch
//! client operations. Failures are never retried or recovered; they propagate
//! directly to the caller.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during Elasticsearch client operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The configured base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request failed below the HTTP layer (connection refused, timeout,
    /// DNS failure).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Elasticsearch answered with a non-success HTTP status code. The decoded
    /// error payload is attached when the response carried one.
    #[error("Response failure: status {status}")]
    ResponseFailure { status: u16, body: Option<Value> },

    /// The response claimed success but its body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a response failure from a status code and optional error payload.
    pub fn response_failure(status: u16, body: Option<Value>) -> Self {
        Self::ResponseFailure { status, body }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// The HTTP status code carried by this error, if any.
    ///
    /// Only `ResponseFailure` carries a status code; transport and decode
    /// failures happen outside a completed HTTP exchange.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ResponseFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is an HTTP 404 from the server.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// The decoded error payload returned by the server, if any.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::ResponseFailure { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
