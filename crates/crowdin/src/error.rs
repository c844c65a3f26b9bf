//! Error types for the Crowdin API client.

use thiserror::Error;

/// Errors that can occur when calling the Crowdin API.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The credential was rejected
    #[error("Crowdin authentication failed: {status} - {message}")]
    Auth { status: u16, message: String },

    /// API returned a non-success response
    #[error("Crowdin API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
