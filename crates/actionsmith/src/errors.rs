//! CLI-specific errors reported through miette

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of `actionsmith check`
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// No workflow file has been generated yet
    #[error("Workflow file not found: {}", path.display())]
    #[diagnostic(
        code(actionsmith::cli::missing_workflow),
        help("Run 'actionsmith generate' to create it")
    )]
    MissingWorkflow {
        /// Expected workflow path
        path: PathBuf,
    },

    /// The workflow file differs from what the settings generate
    #[error("Workflow file is out of date: {}", path.display())]
    #[diagnostic(
        code(actionsmith::cli::stale_workflow),
        help("Run 'actionsmith generate' and commit the result")
    )]
    StaleWorkflow {
        /// Workflow path
        path: PathBuf,
    },
}

impl CliError {
    pub fn missing_workflow(path: impl AsRef<Path>) -> Self {
        Self::MissingWorkflow {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn stale_workflow(path: impl AsRef<Path>) -> Self {
        Self::StaleWorkflow {
            path: path.as_ref().to_path_buf(),
        }
    }
}
