//! Workflow settings and their TOML representation.
//!
//! Every field has a default, so an absent or empty `actionsmith.toml`
//! describes a build-and-test workflow for a single Scala version on Ubuntu.
//!
//! ```toml
//! name = "CI"
//! scala-versions = ["2.12.10", "2.13.1"]
//! java-versions = ["adopt@1.8", "adopt@11"]
//! publish-target-branches = ["main"]
//!
//! [[build]]
//! type = "tool"
//! name = "Build project"
//! commands = ["test", "mimaReportBinaryIssues"]
//! ```

use crate::error::{Error, Result};
use actionsmith_workflow::{EnvMap, WorkflowJob, WorkflowStep};
use serde::Deserialize;
use std::path::Path;

/// Default settings file name, relative to the project root
pub const DEFAULT_SETTINGS_FILE: &str = "actionsmith.toml";

/// Settings driving workflow generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct WorkflowSettings {
    /// Workflow name displayed in the GitHub UI
    pub name: String,

    /// Workflow file stem, written to `.github/workflows/<file-name>.yml`
    pub file_name: String,

    /// Build tool invocation prefix used by tool steps
    pub tool_command: String,

    /// Runner labels for the build matrix
    pub oses: Vec<String>,

    /// Scala versions for the build matrix
    pub scala_versions: Vec<String>,

    /// Java versions for the build matrix
    pub java_versions: Vec<String>,

    /// Branch patterns triggering the workflow on push and pull request
    pub target_branches: Vec<String>,

    /// Workflow-level environment variables
    pub env: EnvMap,

    /// Steps run before the build steps
    pub build_preamble: Vec<WorkflowStep>,

    /// Build steps
    pub build: Vec<WorkflowStep>,

    /// Steps run before the publish steps
    pub publish_preamble: Vec<WorkflowStep>,

    /// Publish steps
    pub publish: Vec<WorkflowStep>,

    /// Branches whose pushes are published; empty disables the publish job
    pub publish_target_branches: Vec<String>,

    /// Explicit publish job condition, replacing the branch-derived one
    pub publish_cond: Option<String>,

    /// Directories archived after the build and restored before publishing
    pub artifact_directories: Vec<String>,

    /// Whether to cache the sbt, ivy and coursier directories
    pub cache: bool,

    /// Extra jobs appended after the generated ones
    pub added_jobs: Vec<WorkflowJob>,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            name: "Continuous Integration".to_string(),
            file_name: "ci".to_string(),
            tool_command: "sbt".to_string(),
            oses: vec!["ubuntu-latest".to_string()],
            scala_versions: vec!["2.13.1".to_string()],
            java_versions: vec!["adopt@1.8".to_string()],
            target_branches: vec!["*".to_string()],
            env: [(
                "GITHUB_TOKEN".to_string(),
                "${{ secrets.GITHUB_TOKEN }}".to_string(),
            )]
            .into_iter()
            .collect(),
            build_preamble: Vec::new(),
            build: vec![WorkflowStep::tool(["test"]).with_name("Build project")],
            publish_preamble: Vec::new(),
            publish: vec![WorkflowStep::tool(["+publish"]).with_name("Publish project")],
            publish_target_branches: vec!["master".to_string()],
            publish_cond: None,
            artifact_directories: vec!["target".to_string(), "project/target".to_string()],
            cache: true,
            added_jobs: Vec::new(),
        }
    }
}

impl WorkflowSettings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not valid settings TOML.
    pub fn from_toml(content: &str, path: impl AsRef<Path>) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Parse {
            source: Box::new(source),
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Parse`]
    /// if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(e, path, "read"))?;
        let settings = Self::from_toml(&content, path)?;

        tracing::info!(
            path = %path.display(),
            jobs = settings.added_jobs.len(),
            "Loaded workflow settings"
        );

        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(
                path = %path.display(),
                "No settings file found, using defaults"
            );
            Ok(Self::default())
        }
    }

    /// Whether the publish job is generated
    #[must_use]
    pub fn publishing_enabled(&self) -> bool {
        !self.publish_target_branches.is_empty()
    }
}
