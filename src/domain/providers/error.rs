//! Errors reported by upstream providers.

use thiserror::Error;

/// Failure talking to an upstream service.
///
/// Messages never contain request URLs, since upstream credentials travel in them.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The upstream reports that the queried entity does not exist.
    #[error("not found upstream")]
    NotFound,

    /// The upstream answered with a non-success status.
    #[error("upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request could not be sent or the response could not be read.
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The upstream answered successfully but the payload is unusable.
    #[error("malformed upstream payload: {0}")]
    Malformed(String),
}
