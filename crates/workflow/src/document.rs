//! Document compilation, the entry point of the compiler.

use crate::error::Result;
use crate::job::compile_job;
use crate::model::Document;
use crate::render::{indent, render_env, render_list};
use crate::scalar::encode;

/// Compile a complete workflow document.
///
/// The branch list restricts both the `pull_request` and `push` triggers.
/// Compilation is all-or-nothing: on error no partial document is returned.
///
/// # Example
///
/// ```rust
/// use actionsmith_workflow::{Document, WorkflowJob, WorkflowStep, compile};
///
/// let document = Document::new("CI")
///     .with_branches(["main"])
///     .with_job(
///         WorkflowJob::new("build", "Build and Test")
///             .with_oses(["ubuntu-latest"])
///             .with_scalas(["2.13.1"])
///             .with_javas(["adopt@1.8"])
///             .with_step(WorkflowStep::run(["test"]).with_name("Run tests")),
///     );
///
/// let yaml = compile(&document, "sbt")?;
/// assert!(yaml.contains("    steps:\n      - name: Run tests\n        run: test"));
/// # Ok::<(), actionsmith_workflow::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::InvalidKey`] if any environment or action
/// parameter key in the document cannot be emitted bare.
pub fn compile(document: &Document, tool_command: &str) -> Result<String> {
    tracing::debug!(
        workflow = %document.name,
        jobs = document.jobs.len(),
        branches = document.branches.len(),
        "Compiling workflow"
    );

    let branches = indent(&render_list(&document.branches), 2);

    let mut output = format!("name: {}\n\n", encode(&document.name));
    output.push_str("on:\n");
    for trigger in ["pull_request", "push"] {
        output.push_str(&format!("  {trigger}:\n    branches:\n{branches}\n"));
    }
    output.push('\n');

    let env = render_env(&document.env)?;
    if !env.is_empty() {
        output.push_str(&env);
        output.push_str("\n\n");
    }

    let jobs = document
        .jobs
        .iter()
        .map(|job| compile_job(job, tool_command))
        .collect::<Result<Vec<_>>>()?;

    output.push_str("jobs:\n");
    output.push_str(&indent(&jobs.join("\n\n"), 1));
    output.push('\n');

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::model::{WorkflowJob, WorkflowStep};

    fn job() -> WorkflowJob {
        WorkflowJob::new("build", "Build and Test")
            .with_oses(["ubuntu-latest"])
            .with_scalas(["2.13.1"])
            .with_javas(["adopt@1.8"])
            .with_step(WorkflowStep::run(["test"]).with_name("Run tests"))
    }

    #[test]
    fn test_compile_document() {
        let document = Document::new("CI").with_branches(["main"]).with_job(job());
        let expected = "\
name: CI

on:
  pull_request:
    branches:
    - main
  push:
    branches:
    - main

jobs:
  build:
    name: Build and Test
    strategy:
      matrix:
        os: [ubuntu-latest]
        scala: [2.13.1]
        java: [adopt@1.8]
    runs-on: ${{ matrix.os }}
    steps:
      - name: Run tests
        run: test
";
        assert_eq!(compile(&document, "sbt").unwrap(), expected);
    }

    #[test]
    fn test_document_env_followed_by_blank_line() {
        let document = Document::new("CI")
            .with_branches(["*"])
            .with_env("GITHUB_TOKEN", "${{ secrets.GITHUB_TOKEN }}")
            .with_job(job());
        let compiled = compile(&document, "sbt").unwrap();
        assert!(compiled.contains(
            "    - '*'\n\nenv:\n  GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}\n\njobs:\n"
        ));
    }

    #[test]
    fn test_jobs_separated_by_blank_line() {
        let publish = WorkflowJob::new("publish", "Publish Artifacts")
            .with_oses(["ubuntu-latest"])
            .with_needs(["build"]);
        let document = Document::new("CI")
            .with_branches(["main"])
            .with_job(job())
            .with_job(publish);
        let compiled = compile(&document, "sbt").unwrap();
        assert!(compiled.contains("        run: test\n\n  publish:\n    name: Publish Artifacts\n"));
    }

    #[test]
    fn test_quoted_workflow_name() {
        let document = Document::new("CI: nightly").with_branches(["main"]);
        let compiled = compile(&document, "sbt").unwrap();
        assert!(compiled.starts_with("name: 'CI: nightly'\n\n"));
    }

    #[test]
    fn test_invalid_key_yields_no_output() {
        let document = Document::new("CI")
            .with_branches(["main"])
            .with_env("BAD KEY", "1")
            .with_job(job());
        assert!(matches!(
            compile(&document, "sbt"),
            Err(Error::InvalidKey { .. })
        ));
    }
}
