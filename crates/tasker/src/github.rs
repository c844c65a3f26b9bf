//! GitHub API client for pull request label operations.

use std::time::Duration;

use reqwest::{header, Client as HttpClient, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Base URL for the GitHub API.
pub const API_BASE_URL: &str = "https://api.github.com";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during label operations.
#[derive(Debug, Error)]
pub enum LabelError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The token was rejected
    #[error("GitHub authentication failed")]
    Auth,

    /// API returned a non-success response
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct GitHubError {
    message: String,
}

/// GitHub API client scoped to a single repository.
#[derive(Debug, Clone)]
pub struct LabelClient {
    /// HTTP client.
    http: HttpClient,
    /// API root, overridable for tests.
    base_url: String,
    /// GitHub token.
    token: String,
    /// Repository owner.
    owner: String,
    /// Repository name.
    repo: String,
}

impl LabelClient {
    /// Create a new label client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, LabelError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );

        let http = HttpClient::builder()
            .user_agent("crowdin-tasker/0.1")
            .default_headers(headers)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
        })
    }

    /// Override the API root. Intended for tests against a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Add labels to a pull request.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<(), LabelError> {
        if labels.is_empty() {
            return Ok(());
        }

        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.base_url, self.owner, self.repo, pr_number
        );
        debug!(url = %url, "POST request");

        let body = serde_json::json!({ "labels": labels });
        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(pr_number, count = labels.len(), "Added labels to pull request");
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED {
            Err(LabelError::Auth)
        } else {
            let message = response
                .json::<GitHubError>()
                .await
                .map(|e| e.message)
                .unwrap_or_default();
            Err(LabelError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
