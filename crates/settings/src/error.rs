//! Error types for the settings crate

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for settings and workflow file operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// I/O error while reading settings or syncing the workflow file
    #[error("I/O {operation} failed: {}", path.display())]
    #[diagnostic(
        code(actionsmith::settings::io),
        help("Check file permissions and ensure the path exists")
    )]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Path that caused the error
        path: PathBuf,
        /// Operation that failed (e.g., "read", "write", "create")
        operation: String,
    },

    /// The settings file is not valid TOML or does not match the schema
    #[error("Failed to parse settings file: {}", path.display())]
    #[diagnostic(code(actionsmith::settings::parse))]
    Parse {
        /// The underlying TOML error
        #[source]
        source: Box<toml::de::Error>,
        /// Settings file path
        path: PathBuf,
    },

    /// Settings violate an invariant the workflow compiler relies on
    #[error("Invalid settings: {message}")]
    #[diagnostic(code(actionsmith::settings::invalid))]
    Invalid {
        /// Description of the violated invariant
        message: String,
    },

    /// Workflow compilation failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Compile(#[from] actionsmith_workflow::Error),
}

impl Error {
    /// Create an I/O error with path context
    #[must_use]
    pub fn io(source: std::io::Error, path: impl AsRef<Path>, operation: impl Into<String>) -> Self {
        Self::Io {
            source,
            path: path.as_ref().to_path_buf(),
            operation: operation.into(),
        }
    }

    /// Create a settings validation error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, Error>;
