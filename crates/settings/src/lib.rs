//! Workflow settings for actionsmith.
//!
//! Loads `actionsmith.toml`, synthesizes the default build and publish jobs,
//! and keeps `.github/workflows/<file-name>.yml` in sync with the compiled
//! output of [`actionsmith_workflow`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod jobs;
pub mod sync;

pub use config::{DEFAULT_SETTINGS_FILE, WorkflowSettings};
pub use error::{Error, Result};
pub use sync::{CheckStatus, FileStatus, check_workflow, sync_workflow, workflow_path};

use actionsmith_workflow::Document;
use actionsmith_workflow::render::is_valid_key;
use std::collections::HashSet;

/// Banner prepended to every generated workflow file
pub const GENERATED_HEADER: &str = "\
# This file was automatically generated by actionsmith.
# Edit actionsmith.toml and run `actionsmith generate` instead of editing it by hand.

";

impl WorkflowSettings {
    /// Check the invariants the workflow compiler relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invalid`] describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.tool_command.trim().is_empty() {
            return Err(Error::invalid("tool-command must not be blank"));
        }
        if self.oses.is_empty() {
            return Err(Error::invalid("oses must list at least one runner"));
        }
        if self.scala_versions.is_empty() {
            return Err(Error::invalid("scala-versions must not be empty"));
        }
        if self.java_versions.is_empty() {
            return Err(Error::invalid("java-versions must not be empty"));
        }

        let mut seen = HashSet::new();
        for job in jobs::generated_jobs(self) {
            if !is_valid_key(&job.id) {
                return Err(Error::invalid(format!(
                    "job id '{}' is not a valid mapping key",
                    job.id
                )));
            }
            if job.oses.is_empty() {
                return Err(Error::invalid(format!("job '{}' has no oses", job.id)));
            }
            if !seen.insert(job.id.clone()) {
                return Err(Error::invalid(format!("duplicate job id '{}'", job.id)));
            }
        }

        Ok(())
    }

    /// Build the workflow document described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invalid`] if the settings fail [`Self::validate`].
    pub fn document(&self) -> Result<Document> {
        self.validate()?;

        Ok(Document::new(self.name.clone())
            .with_branches(self.target_branches.iter().cloned())
            .with_env_map(self.env.clone())
            .with_jobs(jobs::generated_jobs(self)))
    }
}

/// Render the complete workflow file: the generated-file banner followed by
/// the compiled document.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the document contains an
/// invalid `env`/`with` key.
pub fn render_workflow(settings: &WorkflowSettings) -> Result<String> {
    let document = settings.document()?;
    let yaml = actionsmith_workflow::compile(&document, &settings.tool_command)?;

    tracing::debug!(
        name = %settings.name,
        jobs = document.jobs.len(),
        bytes = yaml.len(),
        "Rendered workflow"
    );

    Ok(format!("{GENERATED_HEADER}{yaml}"))
}
