//! Crowdin v2 REST API client.

use std::time::Duration;

use reqwest::{header, Client as HttpClient, Response, StatusCode};
use tracing::{debug, warn};

use crate::error::Error;
use crate::models::{Branch, Directory, File, ListResponse, NewTask, Project, Task, Wrapped};

/// Base URL for the Crowdin v2 API.
pub const API_BASE_URL: &str = "https://api.crowdin.com/api/v2";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Crowdin v2 API client.
#[derive(Debug, Clone)]
pub struct Client {
    /// HTTP client.
    http: HttpClient,
    /// API root, overridable for tests.
    base_url: String,
    /// Personal access token.
    token: String,
}

impl Client {
    /// Create a new Crowdin client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            token: token.into(),
        })
    }

    /// Override the API root. Intended for tests against a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Make an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Make an authenticated POST request.
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "POST request");

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle an API response, parsing JSON or mapping the error status.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, Error> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse Crowdin response");
                Error::Serialization(e)
            })
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(Error::Auth {
                status: status.as_u16(),
                message: text,
            })
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// List the projects visible to the credential.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn list_projects(&self) -> Result<Vec<Project>, Error> {
        let response: ListResponse<Project> = self.get("/projects", &[]).await?;
        Ok(response.data.into_iter().map(|w| w.data).collect())
    }

    /// List project branches matching an exact name.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn list_branches(&self, project_id: u64, name: &str) -> Result<Vec<Branch>, Error> {
        let response: ListResponse<Branch> = self
            .get(
                &format!("/projects/{project_id}/branches"),
                &[("name", name.to_string())],
            )
            .await?;
        Ok(response.data.into_iter().map(|w| w.data).collect())
    }

    /// List directories under a branch, filtered by name.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn list_directories(
        &self,
        project_id: u64,
        branch_id: u64,
        filter: &str,
        recursive: bool,
    ) -> Result<Vec<Directory>, Error> {
        let response: ListResponse<Directory> = self
            .get(
                &format!("/projects/{project_id}/directories"),
                &[
                    ("branchId", branch_id.to_string()),
                    ("filter", filter.to_string()),
                    ("recursion", recursive.to_string()),
                ],
            )
            .await?;
        Ok(response.data.into_iter().map(|w| w.data).collect())
    }

    /// List files under a directory, in the order the API returns them.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn list_files(&self, project_id: u64, directory_id: u64) -> Result<Vec<File>, Error> {
        let response: ListResponse<File> = self
            .get(
                &format!("/projects/{project_id}/files"),
                &[("directoryId", directory_id.to_string())],
            )
            .await?;
        Ok(response.data.into_iter().map(|w| w.data).collect())
    }

    /// Create a translation task.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn create_task(&self, project_id: u64, task: &NewTask) -> Result<Task, Error> {
        let response: Wrapped<Task> = self
            .post(&format!("/projects/{project_id}/tasks"), task)
            .await?;
        Ok(response.data)
    }
}
