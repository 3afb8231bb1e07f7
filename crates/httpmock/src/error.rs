//! Error type shared by responders, transports and the client.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure returned from a round trip.
#[derive(Debug, Error)]
pub enum Error {
    /// No responder is registered for the request's method and URL.
    #[error("no responder found for {method} {url}")]
    NoResponderFound { method: String, url: String },
    /// Failure produced by a registered responder. Shown verbatim.
    #[error("{0}")]
    Responder(String),
    /// The method is not a valid HTTP token, so the request cannot go on the wire.
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),
    /// The real network transport failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Build the failure a responder returns to simulate an error (timeouts, resets, ...).
    pub fn responder(message: impl Into<String>) -> Self {
        Error::Responder(message.into())
    }

    /// Whether this is the "nothing registered" miss rather than a responder or network failure.
    pub fn is_no_responder_found(&self) -> bool {
        matches!(self, Error::NoResponderFound { .. })
    }
}
