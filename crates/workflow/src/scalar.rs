//! YAML scalar encoding.
//!
//! A conservative subset of the YAML scalar rules: a value is emitted bare
//! only when it cannot possibly be misread, otherwise it is single-quoted.
//! Multi-line values become block literals so shell scripts survive verbatim.
//!
//! The safety check pretends `:` and `#` are illegal anywhere in a plain
//! scalar. That over-quotes some values YAML would accept bare, and it is kept
//! that way so output for existing inputs does not change.

use crate::render::indent;

/// Characters that may not start a plain scalar
const INDICATORS: &[char] = &[
    '!', '*', '-', '?', '{', '}', '[', ']', ',', '|', '>', '@', '`', '"', '\'', '&',
];

/// Whether `value` can be emitted as a plain (unquoted) scalar.
///
/// # Example
///
/// ```rust
/// use actionsmith_workflow::scalar::is_safe;
///
/// assert!(is_safe("ubuntu-latest"));
/// assert!(!is_safe("-Xmx2G"));
/// assert!(!is_safe("key: value"));
/// ```
#[must_use]
pub fn is_safe(value: &str) -> bool {
    !(value.contains(':') || value.contains('#') || value.starts_with(INDICATORS))
}

/// Encode a string as a YAML scalar.
///
/// Values containing a newline become a block literal (`|` followed by the
/// value indented one level on the next lines). When the first non-empty
/// line starts with a space the header carries an explicit indentation
/// indicator (`|2`), since YAML would otherwise take that line's extra
/// spaces as the block indentation. Safe single-line values are
/// returned unchanged, and anything else is single-quoted with embedded `'`
/// doubled.
///
/// # Example
///
/// ```rust
/// use actionsmith_workflow::scalar::encode;
///
/// assert_eq!(encode("test"), "test");
/// assert_eq!(encode("it's: here"), "'it''s: here'");
/// assert_eq!(encode("a\nb"), "|\n  a\n  b");
/// ```
#[must_use]
pub fn encode(value: &str) -> String {
    if value.contains('\n') {
        let header = if starts_indented(value) { "|2" } else { "|" };
        format!("{header}\n{}", indent(value, 1))
    } else if is_safe(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "''"))
    }
}

fn starts_indented(value: &str) -> bool {
    value
        .split('\n')
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.starts_with(' '))
}
