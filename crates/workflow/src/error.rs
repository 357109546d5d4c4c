//! Error types for workflow compilation

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Error type for workflow compilation
#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum Error {
    /// A mapping key cannot be emitted as a bare YAML key
    #[error("Invalid {section} key '{key}' in {{{keys}}}")]
    #[diagnostic(
        code(actionsmith::workflow::invalid_key),
        help(
            "Keys must be non-empty bare identifiers: no spaces, ':' or '#', and no leading YAML indicator character"
        )
    )]
    InvalidKey {
        /// Block the key belongs to (`env` or `with`)
        section: &'static str,
        /// The offending key
        key: String,
        /// All keys of the offending map, comma separated
        keys: String,
    },
}

impl Error {
    /// Create an invalid key error for the given map section
    #[must_use]
    pub fn invalid_key<'a>(
        section: &'static str,
        key: impl Into<String>,
        keys: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        Self::InvalidKey {
            section,
            key: key.into(),
            keys: keys
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Result type for workflow compilation
pub type Result<T> = std::result::Result<T, Error>;
