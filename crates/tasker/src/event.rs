//! GitHub Actions event payload access.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while reading the event payload.
#[derive(Debug, Error)]
pub enum EventError {
    /// Payload file could not be read
    #[error("failed to read event payload: {0}")]
    Io(#[from] std::io::Error),

    /// Payload did not contain the expected fields
    #[error("failed to parse event payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pull request event payload, reduced to the fields this tool reads.
#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    pull_request: PullRequest,
}

/// Pull request details.
#[derive(Debug, Deserialize)]
struct PullRequest {
    /// PR number
    number: u64,
}

/// Read the pull request number from the Actions event payload file.
///
/// # Errors
/// Returns an error if the file cannot be read or the payload carries no
/// pull request.
pub fn pull_number(path: &Path) -> Result<u64, EventError> {
    let raw = fs::read_to_string(path)?;
    let event: PullRequestEvent = serde_json::from_str(&raw)?;
    Ok(event.pull_request.number)
}
