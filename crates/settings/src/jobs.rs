//! Synthesis of the default build and publish jobs.
//!
//! The build job checks out the repository, sets up Java and Scala, restores
//! the dependency caches and runs the build steps across the full matrix.
//! When publishing is enabled it also archives the artifact directories so
//! the publish job can restore them instead of rebuilding.

use crate::config::WorkflowSettings;
use actionsmith_workflow::{WorkflowJob, WorkflowStep};

/// Id of the generated build job
pub const BUILD_JOB_ID: &str = "build";

/// Id of the generated publish job
pub const PUBLISH_JOB_ID: &str = "publish";

const ARTIFACT_ARCHIVE: &str = "targets.tar";

const CACHE_PATHS: &[&str] = &[
    "~/.sbt",
    "~/.ivy2/cache",
    "~/.coursier/cache/v1",
    "~/.cache/coursier/v1",
];

const CACHE_KEY: &str = "${{ runner.os }}-sbt-cache-v2-${{ hashFiles('**/*.sbt') }}-${{ hashFiles('project/build.properties') }}";

/// Checkout with full history, then install Java and Scala for the matrix Java version.
#[must_use]
pub fn checkout_steps() -> Vec<WorkflowStep> {
    vec![
        WorkflowStep::use_action("actions", "checkout", 2)
            .with_name("Checkout current branch (full)")
            .with_param("fetch-depth", "0"),
        WorkflowStep::use_action("olafurpg", "setup-scala", 10)
            .with_name("Setup Java and Scala")
            .with_param("java-version", "${{ matrix.java }}"),
    ]
}

/// Cache the sbt, ivy and coursier directories keyed on the build definition.
#[must_use]
pub fn cache_steps() -> Vec<WorkflowStep> {
    vec![
        WorkflowStep::use_action("actions", "cache", 2)
            .with_name("Cache sbt")
            .with_param("path", CACHE_PATHS.join("\n"))
            .with_param("key", CACHE_KEY),
    ]
}

/// Archive `directories` and upload them as a per-matrix-cell artifact.
#[must_use]
pub fn upload_steps(directories: &[String]) -> Vec<WorkflowStep> {
    if directories.is_empty() {
        return Vec::new();
    }

    vec![
        WorkflowStep::run([format!(
            "tar cf {ARTIFACT_ARCHIVE} {}",
            directories.join(" ")
        )])
        .with_name("Compress target directories"),
        WorkflowStep::use_action("actions", "upload-artifact", 2)
            .with_name("Upload target directories")
            .with_param(
                "name",
                "target-${{ matrix.os }}-${{ matrix.scala }}-${{ matrix.java }}",
            )
            .with_param("path", ARTIFACT_ARCHIVE),
    ]
}

/// Download and inflate the artifacts uploaded for each Scala version.
#[must_use]
pub fn download_steps(directories: &[String], scala_versions: &[String]) -> Vec<WorkflowStep> {
    if directories.is_empty() {
        return Vec::new();
    }

    scala_versions
        .iter()
        .flat_map(|scala| {
            [
                WorkflowStep::use_action("actions", "download-artifact", 2)
                    .with_name(format!("Download target directories ({scala})"))
                    .with_param(
                        "name",
                        format!("target-${{{{ matrix.os }}}}-{scala}-${{{{ matrix.java }}}}"),
                    ),
                WorkflowStep::run([
                    format!("tar xf {ARTIFACT_ARCHIVE}"),
                    format!("rm {ARTIFACT_ARCHIVE}"),
                ])
                .with_name(format!("Inflate target directories ({scala})")),
            ]
        })
        .collect()
}

/// Condition gating the publish job.
///
/// Uses the explicit `publish-cond` when set, otherwise restricts publishing
/// to pushes on one of the publish target branches.
#[must_use]
pub fn publication_condition(settings: &WorkflowSettings) -> String {
    let refs = settings.publish_cond.clone().unwrap_or_else(|| {
        settings
            .publish_target_branches
            .iter()
            .map(|branch| format!("github.ref == 'refs/heads/{branch}'"))
            .collect::<Vec<_>>()
            .join(" || ")
    });

    format!("github.event_name != 'pull_request' && ({refs})")
}

fn setup_steps(settings: &WorkflowSettings) -> Vec<WorkflowStep> {
    let mut steps = checkout_steps();
    if settings.cache {
        steps.extend(cache_steps());
    }
    steps
}

/// The build job running the build steps across the full matrix.
#[must_use]
pub fn build_job(settings: &WorkflowSettings) -> WorkflowJob {
    let mut steps = setup_steps(settings);
    steps.extend(settings.build_preamble.iter().cloned());
    steps.extend(settings.build.iter().cloned());
    if settings.publishing_enabled() {
        steps.extend(upload_steps(&settings.artifact_directories));
    }

    WorkflowJob::new(BUILD_JOB_ID, "Build and Test")
        .with_oses(settings.oses.iter().cloned())
        .with_scalas(settings.scala_versions.iter().cloned())
        .with_javas(settings.java_versions.iter().cloned())
        .with_steps(steps)
}

/// The publish job, or `None` when publishing is disabled.
///
/// Runs once, on the first OS, Scala and Java version, after the build job.
#[must_use]
pub fn publish_job(settings: &WorkflowSettings) -> Option<WorkflowJob> {
    if !settings.publishing_enabled() {
        return None;
    }

    let mut steps = setup_steps(settings);
    steps.extend(download_steps(
        &settings.artifact_directories,
        &settings.scala_versions,
    ));
    steps.extend(settings.publish_preamble.iter().cloned());
    steps.extend(settings.publish.iter().cloned());

    Some(
        WorkflowJob::new(PUBLISH_JOB_ID, "Publish Artifacts")
            .with_needs([BUILD_JOB_ID])
            .with_if(publication_condition(settings))
            .with_oses(settings.oses.iter().take(1).cloned())
            .with_scalas(settings.scala_versions.iter().take(1).cloned())
            .with_javas(settings.java_versions.iter().take(1).cloned())
            .with_steps(steps),
    )
}

/// All jobs of the workflow: build, publish (when enabled), then added jobs.
#[must_use]
pub fn generated_jobs(settings: &WorkflowSettings) -> Vec<WorkflowJob> {
    let mut jobs = vec![build_job(settings)];
    jobs.extend(publish_job(settings));
    jobs.extend(settings.added_jobs.iter().cloned());
    jobs
}
