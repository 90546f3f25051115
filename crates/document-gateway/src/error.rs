//! Error types for gateway operations.

use thiserror::Error;

/// Errors surfaced by [`DocumentGateway`](crate::DocumentGateway) operations.
///
/// A well-formed identifier that matches nothing is not an error; see the
/// individual operations for their not-found results.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No live store connection: never connected, disconnected, or the
    /// liveness probe failed.
    #[error("Database not connected")]
    NotConnected,

    /// External identifier does not parse as a store identifier.
    #[error("Invalid document ID format '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// The store rejected or failed the operation.
    #[error("Store error: {0:#}")]
    Store(#[from] anyhow::Error),

    /// Document could not be encoded for the store.
    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
}

impl GatewayError {
    pub fn is_not_connected(&self) -> bool {
        matches!(self, GatewayError::NotConnected)
    }

    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, GatewayError::InvalidIdentifier { .. })
    }
}
