//! Typed client for the Crowdin v2 REST API.
//!
//! Covers the slice of the API used by the pull request localization flow:
//! listing projects, branches, directories, and files, and creating
//! translation tasks.
//!
//! # Usage
//!
//! ```no_run
//! use crowdin::Client;
//!
//! # async fn example() -> Result<(), crowdin::Error> {
//! let client = Client::new("crowdin-token")?;
//!
//! let projects = client.list_projects().await?;
//! let branches = client.list_branches(projects[0].id, "main").await?;
//! # Ok(())
//! # }
//! ```
//!
//! List endpoints return a single page with the API's default page size;
//! callers that need more than one page must not rely on this client.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod models;

pub use client::{Client, API_BASE_URL};
pub use error::Error;
pub use models::{Branch, Directory, File, NewTask, Project, Task};
