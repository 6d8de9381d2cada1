//! Error types for the jsonplaceholder client.
//!
//! # Design
//! Only primary fetches surface errors. Failures while hydrating nested
//! collections are absorbed by [`crate::hydrate::best_effort`] and never reach
//! the caller. Transport-level failures (network, cancellation, non-2xx
//! status) share one [`TransportError`] so callers can match on "the request
//! did not succeed" without caring which layer gave up.

use thiserror::Error;

/// Errors returned by the resource services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A guard value (ID 0) was supplied where a real identifier is required.
    /// Raised before any request is issued.
    #[error("invalid {0}: identifiers start at 1")]
    InvalidArgument(&'static str),

    /// The request could not be completed or the server answered non-2xx.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code of the upstream response, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failures of the HTTP round-trip itself.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The default HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, TLS, timeout or body-read failure.
    #[error("failed to execute request: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The caller's cancellation token fired before the response arrived.
    #[error("request cancelled")]
    Cancelled,

    /// The server answered with a non-2xx status.
    #[error("request returned status {status}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
