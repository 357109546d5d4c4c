//! Rendering of sequences, mappings and nested blocks.

use crate::error::{Error, Result};
use crate::model::EnvMap;
use crate::scalar::{encode, is_safe};

/// Indentation unit of the emitted YAML
pub const INDENT_UNIT: &str = "  ";

/// Indent every line of `text` by `levels` units.
///
/// The first line is indented too. Empty lines are left empty so blank
/// separators between blocks carry no trailing whitespace.
#[must_use]
pub fn indent(text: &str, levels: usize) -> String {
    let prefix = INDENT_UNIT.repeat(levels);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn a rendered block into a YAML sequence item.
///
/// The block is indented one level and its first character replaced with
/// `-`, so the first line carries the dash and continuation lines stay
/// aligned under it.
#[must_use]
pub fn as_sequence_item(block: &str) -> String {
    let indented = indent(block, 1);
    match indented.char_indices().nth(1) {
        Some((idx, _)) => format!("-{}", &indented[idx..]),
        None => "-".to_string(),
    }
}

/// Render items as a block sequence, one `- item` per line.
#[must_use]
pub fn render_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", encode(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an `env:` block.
///
/// Returns an empty string for an empty map so the key is omitted entirely.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] if any key is not a bare identifier.
pub fn render_env(env: &EnvMap) -> Result<String> {
    render_map("env", env)
}

/// Render a `with:` block of action parameters.
///
/// Same shape and validation as [`render_env`].
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] if any key is not a bare identifier.
pub fn render_params(params: &EnvMap) -> Result<String> {
    render_map("with", params)
}

/// Whether `key` can be used as a bare mapping key
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(' ') && is_safe(key)
}

fn render_map(section: &'static str, map: &EnvMap) -> Result<String> {
    if map.is_empty() {
        return Ok(String::new());
    }

    let mut lines = Vec::with_capacity(map.len());
    for (key, value) in map {
        if !is_valid_key(key) {
            tracing::debug!(section, key = %key, "Rejecting mapping key");
            return Err(Error::invalid_key(section, key.as_str(), map.keys()));
        }
        lines.push(format!("{key}: {}", encode(value)));
    }

    Ok(format!("{section}:\n{}", indent(&lines.join("\n"), 1)))
}
