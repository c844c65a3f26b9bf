//! Wire types for the Crowdin v2 REST API.
//!
//! Crowdin wraps every resource in a `data` envelope, and list responses
//! wrap each element again. [`ListResponse`] and [`Wrapped`] mirror that
//! shape so the client can peel both layers in one place.

use serde::{Deserialize, Serialize};

/// Envelope around a Crowdin list response.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    pub data: Vec<Wrapped<T>>,
}

/// Envelope around a single Crowdin resource.
#[derive(Debug, Deserialize)]
pub(crate) struct Wrapped<T> {
    pub data: T,
}

/// A Crowdin project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier.
    pub id: u64,
    /// Locale identifiers the project translates into.
    #[serde(default)]
    pub target_language_ids: Vec<String>,
}

/// A project branch mirroring a source-control branch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Branch identifier.
    pub id: u64,
    /// Branch name.
    pub name: String,
}

/// A directory in the project file tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    /// Directory identifier.
    pub id: u64,
    /// Directory name.
    pub name: String,
}

/// A source file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// File identifier.
    pub id: u64,
    /// File name.
    pub name: String,
}

/// Payload for creating a translation task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Task title shown in the Crowdin UI.
    pub title: String,
    /// Numeric task type code.
    #[serde(rename = "type")]
    pub task_type: u8,
    /// Source files the task covers.
    pub file_ids: Vec<u64>,
    /// Target language the task translates into.
    pub language_id: String,
    /// Translation vendor tag.
    pub vendor: String,
    /// Skip strings already assigned to another task.
    pub skip_assigned_strings: bool,
    /// Skip strings that have no translation yet.
    pub skip_untranslated_strings: bool,
    /// Restrict the task to untranslated strings.
    pub include_untranslated_strings_only: bool,
}

/// A created translation task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier.
    pub id: u64,
    /// Task status reported by the API.
    #[serde(default)]
    pub status: Option<String>,
}
