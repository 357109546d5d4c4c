//! Command implementations

use crate::cli::{Cli, Commands};
use crate::errors::CliError;
use actionsmith_settings::{
    CheckStatus, WorkflowSettings, check_workflow, render_workflow, sync_workflow, workflow_path,
};
use std::path::PathBuf;

/// Settings and generated content shared by every command
struct Prepared {
    path: PathBuf,
    content: String,
}

fn prepare(cli: &Cli) -> miette::Result<Prepared> {
    let settings = WorkflowSettings::load_or_default(cli.config_path())?;
    let content = render_workflow(&settings)?;
    Ok(Prepared {
        path: workflow_path(&cli.root, &settings),
        content,
    })
}

/// Run the selected subcommand
pub fn execute(cli: &Cli) -> miette::Result<()> {
    let prepared = prepare(cli)?;

    match cli.command {
        Commands::Generate { dry_run } => {
            let status = sync_workflow(&prepared.path, &prepared.content, dry_run)?;
            tracing::info!(path = %prepared.path.display(), %status, dry_run, "Generated workflow");
            println!("{status}: {}", prepared.path.display());
        }
        Commands::Check => match check_workflow(&prepared.path, &prepared.content)? {
            CheckStatus::UpToDate => println!("Up to date: {}", prepared.path.display()),
            CheckStatus::Missing => return Err(CliError::missing_workflow(&prepared.path).into()),
            CheckStatus::Stale => return Err(CliError::stale_workflow(&prepared.path).into()),
        },
        Commands::Print => print!("{}", prepared.content),
    }

    Ok(())
}
