//! Error taxonomy for backend interactions.
//!
//! # Design
//! Three failure classes matter to the refresh contract: the request never
//! completed, the server answered with a non-success status, or the payload
//! did not decode into what the operation expected. All of them are
//! recoverable — operations log the error and fall back to degraded state
//! rather than surfacing it to the caller.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors produced while talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connection refused, DNS, broken stream).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server responded with a non-2xx status.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// The response body was not valid JSON, or not the expected shape
    /// (a JSON array for collection reads).
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The request payload could not be encoded as JSON.
    #[error("payload encoding failed: {0}")]
    Serialize(String),
}
