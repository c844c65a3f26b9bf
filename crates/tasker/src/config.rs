//! Run configuration resolved from CLI flags and the Actions environment.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::github;

/// Errors produced while resolving run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Repository was not in `owner/repo` form
    #[error("invalid repository (expected owner/repo): {0}")]
    InvalidRepository(String),
}

/// Command-line arguments. Every flag falls back to the environment variable
/// GitHub Actions sets for it, so inside a workflow the binary runs with no
/// arguments at all.
#[derive(Debug, Parser)]
#[command(
    name = "crowdin-tasker",
    about = "Create Crowdin translation tasks for a pull request and label it with the outcome",
    version
)]
pub struct Cli {
    /// GitHub token used to label the pull request
    #[arg(long, env = "INPUT_REPO-TOKEN", hide_env_values = true)]
    pub repo_token: String,

    /// Source branch name of the pull request
    #[arg(long, env = "INPUT_BRANCH", default_value = "")]
    pub branch: String,

    /// Crowdin API credential
    #[arg(long, env = "CROWDIN_TOKEN", default_value = "", hide_env_values = true)]
    pub crowdin_token: String,

    /// Repository the pull request belongs to, in owner/repo form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Path to the Actions event payload file
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Crowdin API root
    #[arg(long, env = "CROWDIN_API_URL", default_value = crowdin::API_BASE_URL)]
    pub crowdin_api_url: String,

    /// GitHub API root
    #[arg(long, env = "GITHUB_API_URL", default_value = github::API_BASE_URL)]
    pub github_api_url: String,
}

/// Resolved run configuration handed to the flow. Leaf components receive
/// everything they need from here; none of them read the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub token.
    pub repo_token: String,
    /// Source branch name.
    pub branch: String,
    /// Crowdin credential.
    pub crowdin_token: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Event payload path.
    pub event_path: PathBuf,
    /// Crowdin API root.
    pub crowdin_api_url: String,
    /// GitHub API root.
    pub github_api_url: String,
}

impl Config {
    /// Resolve parsed arguments into a configuration.
    ///
    /// # Errors
    /// Returns an error if the repository is not in `owner/repo` form.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let (owner, repo) = split_repository(&cli.repository)?;

        Ok(Self {
            repo_token: cli.repo_token,
            branch: cli.branch,
            crowdin_token: cli.crowdin_token,
            owner,
            repo,
            event_path: cli.event_path,
            crowdin_api_url: cli.crowdin_api_url,
            github_api_url: cli.github_api_url,
        })
    }
}

/// Split an `owner/repo` string into its two parts.
fn split_repository(repository: &str) -> Result<(String, String), ConfigError> {
    let parts: Vec<&str> = repository.split('/').collect();
    match parts.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok(((*owner).to_string(), (*repo).to_string()))
        }
        _ => Err(ConfigError::InvalidRepository(repository.to_string())),
    }
}
