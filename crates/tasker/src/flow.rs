//! Orchestration flow: locate the Crowdin resources for a pull request,
//! create translation tasks, and label the pull request with the outcome.

use anyhow::Result;
use crowdin::{Client, Error as CrowdinError, NewTask};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::event;
use crate::github::LabelClient;

/// Prefix carried by Crowdin branches mirroring this repository.
const BRANCH_PREFIX: &str = "[SpringCare.arceus] ";
/// Name of the source-locale directory.
const SOURCE_LOCALE: &str = "en";

/// Title used for every created task.
const TASK_TITLE: &str = "SH Internal Task";
/// Crowdin task type code for vendor translation.
const TASK_TYPE: u8 = 2;
/// Translation vendor tag.
const TASK_VENDOR: &str = "oht";

/// Label applied when all tasks were created.
const LABEL_IN_PROGRESS: &str = "Translations In Progress";
/// Label applied when task creation failed.
const LABEL_MANUAL: &str = "Manual Translations Needed";

/// Errors from resolving Crowdin resources. All of these are fatal to the
/// run; no label is applied when resolution fails.
#[derive(Debug, Error)]
pub enum LocateError {
    /// API call failed
    #[error(transparent)]
    Api(#[from] CrowdinError),

    /// The credential sees no projects
    #[error("no Crowdin projects visible to this credential")]
    NoProject,

    /// No branch matched the computed label
    #[error("no Crowdin branch named {0:?}")]
    BranchNotFound(String),

    /// The branch has no source-locale directory
    #[error("no \"en\" source directory under branch {0}")]
    DirectoryNotFound(u64),
}

/// Failure of a per-language task batch.
///
/// Requests after the failing one are never issued; `created` reports how
/// many tasks had already been created so partial success stays visible.
#[derive(Debug, Error)]
#[error("task creation failed for language {language:?} after {created} of {total} tasks: {source}")]
pub struct TaskBatchError {
    /// Language whose request failed.
    pub language: String,
    /// Tasks created before the failure.
    pub created: usize,
    /// Languages in the batch.
    pub total: usize,
    /// Underlying API error.
    #[source]
    pub source: CrowdinError,
}

/// Crowdin branch label for a source branch: the fixed prefix plus the
/// branch name with only the first path separator replaced by a period.
#[must_use]
pub fn branch_label(branch: &str) -> String {
    format!("{BRANCH_PREFIX}{}", branch.replacen('/', ".", 1))
}

/// Identifier of the first project visible to the credential.
///
/// # Errors
/// Returns an error if the listing fails or is empty.
pub async fn project_id(client: &Client) -> Result<u64, LocateError> {
    let projects = client.list_projects().await?;
    if projects.len() > 1 {
        debug!(count = projects.len(), "Multiple projects visible, using the first");
    }
    projects.first().map(|p| p.id).ok_or(LocateError::NoProject)
}

/// Target languages configured on the first visible project.
///
/// Issues its own listing call; callers that also resolve the project id
/// make two listings per run, both assuming the same first project.
///
/// # Errors
/// Returns an error if the listing fails or is empty.
pub async fn target_languages(client: &Client) -> Result<Vec<String>, LocateError> {
    let projects = client.list_projects().await?;
    projects
        .into_iter()
        .next()
        .map(|p| p.target_language_ids)
        .ok_or(LocateError::NoProject)
}

/// Identifier of the branch matching the given label exactly.
///
/// # Errors
/// Returns an error if the listing fails or no branch matches.
pub async fn branch_id(client: &Client, project_id: u64, label: &str) -> Result<u64, LocateError> {
    let branches = client.list_branches(project_id, label).await?;
    branches
        .first()
        .map(|b| b.id)
        .ok_or_else(|| LocateError::BranchNotFound(label.to_string()))
}

/// Identifier of the English source directory under the branch.
///
/// # Errors
/// Returns an error if the listing fails or no directory matches.
pub async fn en_directory_id(
    client: &Client,
    project_id: u64,
    branch_id: u64,
) -> Result<u64, LocateError> {
    let directories = client
        .list_directories(project_id, branch_id, SOURCE_LOCALE, true)
        .await?;
    directories
        .first()
        .map(|d| d.id)
        .ok_or(LocateError::DirectoryNotFound(branch_id))
}

/// All file ids under the directory, in listing order.
///
/// The listing is unfiltered: every file under the source directory goes
/// into the task, not only the ones the pull request changed.
///
/// # Errors
/// Returns an error if the listing fails.
pub async fn file_ids(
    client: &Client,
    project_id: u64,
    directory_id: u64,
) -> Result<Vec<u64>, LocateError> {
    let files = client.list_files(project_id, directory_id).await?;
    Ok(files.into_iter().map(|f| f.id).collect())
}

/// Create one translation task per target language, strictly in order.
///
/// Stops at the first failing request and reports a single typed failure
/// for the whole batch.
///
/// # Errors
/// Returns an error carrying the failing language and the count of tasks
/// already created.
pub async fn create_tasks(
    client: &Client,
    project_id: u64,
    file_ids: &[u64],
    languages: &[String],
) -> Result<(), TaskBatchError> {
    for (created, language) in languages.iter().enumerate() {
        let task = NewTask {
            title: TASK_TITLE.to_string(),
            task_type: TASK_TYPE,
            file_ids: file_ids.to_vec(),
            language_id: language.clone(),
            vendor: TASK_VENDOR.to_string(),
            skip_assigned_strings: true,
            skip_untranslated_strings: false,
            include_untranslated_strings_only: false,
        };

        match client.create_task(project_id, &task).await {
            Ok(t) => info!(task_id = t.id, language = %language, "Created translation task"),
            Err(source) => {
                return Err(TaskBatchError {
                    language: language.clone(),
                    created,
                    total: languages.len(),
                    source,
                });
            }
        }
    }

    Ok(())
}

/// Run the whole flow for one pull request.
///
/// Resolution failures are fatal and leave the pull request unlabeled; a
/// task-creation failure is downgraded to the manual-translation label. A
/// failure to apply the label itself propagates.
///
/// # Errors
/// Returns an error on any unrecovered failure.
pub async fn run(config: &Config) -> Result<()> {
    let labels = LabelClient::new(&config.repo_token, &config.owner, &config.repo)?
        .with_base_url(&config.github_api_url);
    let crowdin = Client::new(&config.crowdin_token)?.with_base_url(&config.crowdin_api_url);

    let label = branch_label(&config.branch);
    info!(branch = %config.branch, crowdin_branch = %label, "Resolving Crowdin resources");

    let project = project_id(&crowdin).await?;
    let branch = branch_id(&crowdin, project, &label).await?;
    let directory = en_directory_id(&crowdin, project, branch).await?;
    let files = file_ids(&crowdin, project, directory).await?;
    let languages = target_languages(&crowdin).await?;

    let pull_number = event::pull_number(&config.event_path)?;
    debug!(
        project,
        branch,
        directory,
        files = files.len(),
        languages = languages.len(),
        pull_number,
        "Resolved Crowdin resources"
    );

    match create_tasks(&crowdin, project, &files, &languages).await {
        Ok(()) => {
            info!(pull_number, "All translation tasks created");
            labels
                .add_labels(pull_number, &[LABEL_IN_PROGRESS.to_string()])
                .await?;
        }
        Err(err) => {
            warn!(
                language = %err.language,
                created = err.created,
                total = err.total,
                error = %err.source,
                "Task creation failed, requesting manual translation"
            );
            labels
                .add_labels(pull_number, &[LABEL_MANUAL.to_string()])
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_label_replaces_only_the_first_slash() {
        assert_eq!(branch_label("feature/x"), "[SpringCare.arceus] feature.x");
        assert_eq!(
            branch_label("release/2024/june"),
            "[SpringCare.arceus] release.2024/june"
        );
    }

    #[test]
    fn branch_label_without_slash_is_prefixed_unchanged() {
        assert_eq!(branch_label("main"), "[SpringCare.arceus] main");
        assert_eq!(branch_label(""), "[SpringCare.arceus] ");
    }
}
