//! actionsmith CLI
//!
//! Generates `.github/workflows/<file-name>.yml` for sbt projects from an
//! `actionsmith.toml` settings file, and verifies the committed file is current.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod commands;
mod errors;
mod tracing;

use crate::tracing::{TracingConfig, TracingFormat};

fn main() -> miette::Result<()> {
    let cli = cli::parse();

    tracing::init_tracing(&TracingConfig {
        format: if cli.json {
            TracingFormat::Json
        } else {
            TracingFormat::Pretty
        },
        level: cli.level.into(),
    })?;

    commands::execute(&cli)
}
