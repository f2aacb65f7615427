//! Errors raised at the REST boundary.
//!
//! Every variant ends up in the same user-facing banner; the split only
//! matters for logs and tests.

use thiserror::Error;

use super::Operation;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("{operation} failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON we expected.
    #[error("{operation} returned an unreadable response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The same mutating operation is already in flight.
    #[error("{operation} is already in progress")]
    Busy { operation: Operation },
}

impl GatewayError {
    /// The operation that failed, when known.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            GatewayError::Client(_) => None,
            GatewayError::Transport { operation, .. }
            | GatewayError::Decode { operation, .. }
            | GatewayError::Busy { operation } => Some(*operation),
        }
    }

    /// Whether the failure happened on the wire rather than in client setup
    /// or the in-flight guard.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GatewayError::Transport { .. } | GatewayError::Decode { .. }
        )
    }
}
