//! Job compilation.

use crate::error::Result;
use crate::model::WorkflowJob;
use crate::render::{indent, render_env};
use crate::scalar::encode;
use crate::step::compile_step;

/// Substring identifying Windows runner labels (case-sensitive)
pub const WINDOWS_MARKER: &str = "windows";

/// Whether steps running on `oses` need an explicit `shell: bash`.
#[must_use]
pub fn requires_explicit_shell(oses: &[String]) -> bool {
    oses.iter().any(|os| os.contains(WINDOWS_MARKER))
}

/// Compile a job into its `<id>:` block.
///
/// Matrix values are emitted raw inside flow sequences; they are expected to
/// be plain tokens such as `ubuntu-latest` or `2.13.1`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidKey`] if the job or any of its steps has an
/// environment or parameter key that cannot be emitted bare.
pub fn compile_job(job: &WorkflowJob, tool_command: &str) -> Result<String> {
    let mut body = format!("name: {}", encode(&job.name));

    if !job.needs.is_empty() {
        body.push_str(&format!("\nneeds: [{}]", job.needs.join(", ")));
    }
    if let Some(cond) = &job.cond {
        body.push_str(&format!("\nif: {}", encode(cond)));
    }

    body.push_str(&format!(
        "\nstrategy:\n  matrix:\n    os: [{}]\n    scala: [{}]\n    java: [{}]",
        job.oses.join(", "),
        job.scalas.join(", "),
        job.javas.join(", ")
    ));
    body.push_str("\nruns-on: ${{ matrix.os }}");

    let env = render_env(&job.env)?;
    if !env.is_empty() {
        body.push('\n');
        body.push_str(&env);
    }

    let declare_shell = requires_explicit_shell(&job.oses);
    let steps = job
        .steps
        .iter()
        .map(|step| compile_step(step, tool_command, declare_shell))
        .collect::<Result<Vec<_>>>()?;

    body.push_str("\nsteps:");
    if !steps.is_empty() {
        body.push('\n');
        body.push_str(&indent(&steps.join("\n\n"), 1));
    }

    tracing::trace!(
        job = %job.id,
        steps = job.steps.len(),
        declare_shell,
        "Compiled job"
    );

    Ok(format!("{}:\n{}", job.id, indent(&body, 1)))
}
