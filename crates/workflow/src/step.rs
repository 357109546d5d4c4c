//! Step compilation.

use crate::error::Result;
use crate::model::{StepKind, WorkflowStep};
use crate::render::{as_sequence_item, render_env, render_params};
use crate::scalar::encode;

/// Matrix expression selecting the Scala version of the current job
pub const SCALA_MATRIX_TOKEN: &str = "${{ matrix.scala }}";

/// Compile a step into a YAML sequence item.
///
/// `tool_command` prefixes [`StepKind::ToolInvocation`] bodies, and
/// `declare_shell` adds an explicit `shell: bash` line (needed on Windows
/// runners, whose default shell is PowerShell).
///
/// # Errors
///
/// Returns [`crate::Error::InvalidKey`] if the step environment or action
/// parameters contain a key that cannot be emitted bare.
pub fn compile_step(step: &WorkflowStep, tool_command: &str, declare_shell: bool) -> Result<String> {
    let mut preamble = String::new();

    if let Some(name) = &step.name {
        preamble.push_str(&format!("name: {}\n", encode(name)));
    }
    if let Some(cond) = &step.cond {
        preamble.push_str(&format!("if: {}\n", encode(cond)));
    }
    if declare_shell {
        preamble.push_str("shell: bash\n");
    }
    let env = render_env(&step.env)?;
    if !env.is_empty() {
        preamble.push_str(&env);
        preamble.push('\n');
    }

    let body = match &step.kind {
        StepKind::Run { commands } => format!("run: {}", encode(&commands.join("\n"))),
        StepKind::ToolInvocation { commands } => {
            let commands = commands
                .iter()
                .map(|command| {
                    if command.contains(' ') {
                        format!("'{command}'")
                    } else {
                        command.clone()
                    }
                })
                .collect::<Vec<_>>();
            format!(
                "run: {}",
                encode(&format!(
                    "{tool_command} ++{SCALA_MATRIX_TOKEN} {}",
                    commands.join(" ")
                ))
            )
        }
        StepKind::UseAction {
            owner,
            repo,
            version,
            params,
        } => {
            let params = render_params(params)?;
            if params.is_empty() {
                format!("uses: {owner}/{repo}@v{version}")
            } else {
                format!("uses: {owner}/{repo}@v{version}\n{params}")
            }
        }
    };

    Ok(as_sequence_item(&format!("{preamble}{body}")))
}
