//! Workflow model types
//!
//! The typed entities consumed by the compiler. Values are built once by the
//! settings layer (or deserialized from its configuration file), handed to
//! [`crate::compile`], and discarded.

use indexmap::IndexMap;
use serde::Deserialize;

/// Environment variables or action parameters.
///
/// Semantically unordered; insertion order is kept so output is stable.
pub type EnvMap = IndexMap<String, String>;

/// A single step within a job.
///
/// The `name`/`cond`/`env` metadata is shared by every step kind; the body is
/// selected by [`StepKind`].
///
/// # Example
///
/// ```rust
/// use actionsmith_workflow::WorkflowStep;
///
/// let step = WorkflowStep::use_action("actions", "checkout", 2)
///     .with_name("Checkout current branch (full)")
///     .with_param("fetch-depth", "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowStep {
    /// Step display name
    #[serde(default)]
    pub name: Option<String>,

    /// Conditional execution expression
    #[serde(default, rename = "if")]
    pub cond: Option<String>,

    /// Step environment variables
    #[serde(default)]
    pub env: EnvMap,

    /// What the step does
    #[serde(flatten)]
    pub kind: StepKind,
}

/// The body of a [`WorkflowStep`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StepKind {
    /// Shell commands, one per line
    Run {
        /// Commands executed in order by the shell
        commands: Vec<String>,
    },

    /// Build tool commands run in a single tool invocation against the
    /// matrix-selected Scala version
    #[serde(rename = "tool")]
    ToolInvocation {
        /// Tool sub-commands (e.g. `test`, `+publish`)
        commands: Vec<String>,
    },

    /// A versioned reusable action (`owner/repo@vN`)
    #[serde(rename = "use")]
    UseAction {
        /// Action owner (user or organization)
        owner: String,
        /// Action repository
        repo: String,
        /// Major version tag
        version: u32,
        /// Keyword parameters rendered under `with:`
        #[serde(default)]
        params: EnvMap,
    },
}

impl WorkflowStep {
    fn from_kind(kind: StepKind) -> Self {
        Self {
            name: None,
            cond: None,
            env: EnvMap::new(),
            kind,
        }
    }

    /// Create a step running shell commands
    pub fn run(commands: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::from_kind(StepKind::Run {
            commands: commands.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a step running build tool commands
    pub fn tool(commands: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::from_kind(StepKind::ToolInvocation {
            commands: commands.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a step using a reusable action
    pub fn use_action(owner: impl Into<String>, repo: impl Into<String>, version: u32) -> Self {
        Self::from_kind(StepKind::UseAction {
            owner: owner.into(),
            repo: repo.into(),
            version,
            params: EnvMap::new(),
        })
    }

    /// Set the step name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a condition
    #[must_use]
    pub fn with_if(mut self, cond: impl Into<String>) -> Self {
        self.cond = Some(cond.into());
        self
    }

    /// Add an environment variable
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Add an action parameter.
    ///
    /// Only action steps carry parameters. On run and tool steps the
    /// parameter is dropped and a warning is logged.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self.kind {
            StepKind::UseAction { params, .. } => {
                params.insert(key.into(), value.into());
            }
            StepKind::Run { .. } | StepKind::ToolInvocation { .. } => {
                let key: String = key.into();
                tracing::warn!(
                    step = self.name.as_deref().unwrap_or("<unnamed>"),
                    key = %key,
                    "Ignoring action parameter on a step that does not use an action"
                );
            }
        }
        self
    }
}

/// A job executed across an `os` x `scala` x `java` matrix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkflowJob {
    /// Job key under `jobs:`
    pub id: String,

    /// Job display name
    pub name: String,

    /// Steps executed in order
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,

    /// Runner labels for the `os` matrix dimension (must be non-empty)
    #[serde(default)]
    pub oses: Vec<String>,

    /// Scala versions for the `scala` matrix dimension
    #[serde(default)]
    pub scalas: Vec<String>,

    /// Java versions for the `java` matrix dimension
    #[serde(default)]
    pub javas: Vec<String>,

    /// Job environment variables
    #[serde(default)]
    pub env: EnvMap,

    /// Conditional execution expression
    #[serde(default, rename = "if")]
    pub cond: Option<String>,

    /// Ids of jobs that must complete first
    #[serde(default)]
    pub needs: Vec<String>,
}

impl WorkflowJob {
    /// Create a job with no steps and empty matrix dimensions
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: Vec::new(),
            oses: Vec::new(),
            scalas: Vec::new(),
            javas: Vec::new(),
            env: EnvMap::new(),
            cond: None,
            needs: Vec::new(),
        }
    }

    /// Append a step
    #[must_use]
    pub fn with_step(mut self, step: WorkflowStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps
    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = WorkflowStep>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Set the `os` matrix dimension
    #[must_use]
    pub fn with_oses(mut self, oses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.oses = oses.into_iter().map(Into::into).collect();
        self
    }

    /// Set the `scala` matrix dimension
    #[must_use]
    pub fn with_scalas(mut self, scalas: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scalas = scalas.into_iter().map(Into::into).collect();
        self
    }

    /// Set the `java` matrix dimension
    #[must_use]
    pub fn with_javas(mut self, javas: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.javas = javas.into_iter().map(Into::into).collect();
        self
    }

    /// Add an environment variable
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set a condition
    #[must_use]
    pub fn with_if(mut self, cond: impl Into<String>) -> Self {
        self.cond = Some(cond.into());
        self
    }

    /// Set the job dependencies
    #[must_use]
    pub fn with_needs(mut self, needs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.needs = needs.into_iter().map(Into::into).collect();
        self
    }
}

/// A complete workflow document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Workflow name
    pub name: String,
    /// Branch glob patterns for the `pull_request` and `push` triggers
    pub branches: Vec<String>,
    /// Environment variables available to all jobs
    pub env: EnvMap,
    /// Jobs in output order
    pub jobs: Vec<WorkflowJob>,
}

impl Document {
    /// Create an empty document with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the trigger branches
    #[must_use]
    pub fn with_branches(mut self, branches: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.branches = branches.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the document environment
    #[must_use]
    pub fn with_env_map(mut self, env: EnvMap) -> Self {
        self.env = env;
        self
    }

    /// Add an environment variable
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Append a job
    #[must_use]
    pub fn with_job(mut self, job: WorkflowJob) -> Self {
        self.jobs.push(job);
        self
    }

    /// Append several jobs
    #[must_use]
    pub fn with_jobs(mut self, jobs: impl IntoIterator<Item = WorkflowJob>) -> Self {
        self.jobs.extend(jobs);
        self
    }
}
