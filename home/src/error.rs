//! Error types for gateway operations.

use thiserror::Error;

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Failure modes of the remote collection and profile gateways.
///
/// Every variant is terminal for the single operation attempt: the reducer
/// surfaces the message through the alert channel and performs no automatic
/// retry. `Clone` and `PartialEq` are required because errors travel inside
/// actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The server answered with an error status or error body.
    #[error("{0}")]
    Remote(String),

    /// The request never produced a usable response (connect, DNS, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response format: {0}")]
    Decode(String),
}

impl GatewayError {
    /// The user-facing message for the alert channel.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
