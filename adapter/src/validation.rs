//! Natural-key validation helpers.
//!
//! Write fragments are only composed for entities whose key fields are
//! complete and well-formed; anything else fails here first.

use crate::error::{AdapterError, AdapterResult};

/// Check that an identifier field is present and matches the accepted
/// identifier format: alphanumeric start, then alphanumerics, dots,
/// underscores, colons and dashes.
pub fn require_identifier(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> AdapterResult<()> {
    if value.is_empty() {
        return Err(AdapterError::incomplete_entity(entity, field));
    }

    let pattern = regex_lite::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._:-]*$")
        .expect("identifier pattern is valid");
    if !pattern.is_match(value) {
        return Err(AdapterError::malformed_identifier(entity, field, value));
    }

    Ok(())
}

/// Check that a path field is present.
pub fn require_path(entity: &'static str, field: &'static str, value: &str) -> AdapterResult<()> {
    if value.is_empty() {
        return Err(AdapterError::incomplete_entity(entity, field));
    }
    Ok(())
}
