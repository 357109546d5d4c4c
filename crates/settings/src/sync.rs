//! Writing the compiled workflow to `.github/workflows/`.

use crate::config::WorkflowSettings;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory holding GitHub Actions workflow files, relative to the project root
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Path of the workflow file for `settings` under `root`.
#[must_use]
pub fn workflow_path(root: &Path, settings: &WorkflowSettings) -> PathBuf {
    root.join(WORKFLOWS_DIR)
        .join(format!("{}.yml", settings.file_name))
}

/// Status of a workflow file write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File was newly created.
    Created,
    /// File existed and was updated with new content.
    Updated,
    /// File existed and content was unchanged.
    Unchanged,
    /// Would be created (dry-run mode).
    WouldCreate,
    /// Would be updated (dry-run mode).
    WouldUpdate,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "Created"),
            Self::Updated => write!(f, "Updated"),
            Self::Unchanged => write!(f, "Unchanged"),
            Self::WouldCreate => write!(f, "Would create"),
            Self::WouldUpdate => write!(f, "Would update"),
        }
    }
}

/// Whether a committed workflow file matches the generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// File content equals the generated workflow
    UpToDate,
    /// File does not exist
    Missing,
    /// File exists with different content
    Stale,
}

impl CheckStatus {
    /// Whether the file needs regenerating
    #[must_use]
    pub const fn is_outdated(self) -> bool {
        !matches!(self, Self::UpToDate)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpToDate => write!(f, "Up to date"),
            Self::Missing => write!(f, "Missing"),
            Self::Stale => write!(f, "Stale"),
        }
    }
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| Error::io(e, path, "read"))
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// In dry-run mode nothing is written and the returned status describes
/// what would happen.
///
/// # Errors
///
/// Returns [`Error::Io`] if the existing file cannot be read or the new
/// content cannot be written.
pub fn sync_workflow(path: &Path, content: &str, dry_run: bool) -> Result<FileStatus> {
    let existing = read_existing(path)?;

    let status = match (existing.as_deref(), dry_run) {
        (Some(current), _) if current == content => FileStatus::Unchanged,
        (Some(_), true) => FileStatus::WouldUpdate,
        (None, true) => FileStatus::WouldCreate,
        (Some(_), false) => FileStatus::Updated,
        (None, false) => FileStatus::Created,
    };

    if matches!(status, FileStatus::Created | FileStatus::Updated) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(e, parent, "create"))?;
        }
        std::fs::write(path, content).map_err(|e| Error::io(e, path, "write"))?;
    }

    tracing::debug!(path = %path.display(), %status, "Synced workflow file");

    Ok(status)
}

/// Compare the file at `path` against `content` without writing.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file exists but cannot be read.
pub fn check_workflow(path: &Path, content: &str) -> Result<CheckStatus> {
    let status = match read_existing(path)? {
        None => CheckStatus::Missing,
        Some(current) if current == content => CheckStatus::UpToDate,
        Some(_) => CheckStatus::Stale,
    };

    tracing::debug!(path = %path.display(), %status, "Checked workflow file");

    Ok(status)
}
