//! Cache request error types.

use thiserror::Error;

/// Errors a cache client can report for a delete request.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The site answered with a non-success status.
    #[error("HTTP error: {status} for {path}")]
    Http { status: u16, path: String },

    /// The request never reached the site.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to encode the request body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
