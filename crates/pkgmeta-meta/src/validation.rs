//! Validation for dependency names

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Plausible package identifiers: an alphanumeric or `_` first character
/// followed by alphanumerics, `_`, `-` or `.`.
static DEPENDENCY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.\-]*$").unwrap());

/// Check that `name` is usable as a dependency name.
pub fn validate_dependency_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.trim().is_empty() {
        "name is blank"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else if !DEPENDENCY_NAME_PATTERN.is_match(name) {
        "name must start with a letter, digit or '_' and contain only letters, digits, '_', '-' or '.'"
    } else {
        return Ok(());
    };

    Err(Error::InvalidDependencyName {
        name: name.to_string(),
        reason,
    })
}

/// Check if `name` is usable as a dependency name.
pub fn is_valid_dependency_name(name: &str) -> bool {
    validate_dependency_name(name).is_ok()
}
