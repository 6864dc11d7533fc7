//! Error types for index queries.
//!
//! Every failure mode collapses into one of these variants locally; nothing
//! propagates to the rendering layer as an unhandled fault. A failed query
//! is distinct from an empty result set.

use thiserror::Error;

/// Errors that can occur while querying the product index.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Failed to construct the HTTP client.
    #[error("Failed to build search client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to reach the index endpoint.
    #[error("Connection failed to '{endpoint}': {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout.
    #[error("Query timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Index returned a non-success status.
    #[error("Index error: {status} - {message}")]
    Index { status: u16, message: String },

    /// Response body was not a well-formed hit list.
    #[error("Malformed response from index: {0}")]
    Decode(#[source] reqwest::Error),
}

impl QueryError {
    /// Short classification string for logging and the failure view.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::ClientBuild(_) => "client_build",
            QueryError::Connection { .. } => "connection",
            QueryError::Timeout { .. } => "timeout",
            QueryError::Index { .. } => "index_error",
            QueryError::Decode(_) => "decode",
        }
    }
}
