//! Name and label validation
//!
//! Hashing is only meaningful on normalized input; these checks catch the
//! usual mistakes before a hash is computed.

use crate::error::{CliError, CliResult};

fn invalid(name: &str, reason: &str) -> CliError {
    CliError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate a single label fragment such as `moody`
pub fn validate_fragment(fragment: &str) -> CliResult<()> {
    if fragment.is_empty() {
        return Err(invalid(fragment, "label cannot be empty"));
    }
    if fragment.contains('.') {
        return Err(invalid(fragment, "labels cannot contain '.'"));
    }
    if fragment != fragment.to_lowercase() {
        return Err(invalid(fragment, "label must be normalized to lowercase"));
    }
    Ok(())
}

/// Validate a dotted name such as `moody.ethvault.xyz`. The empty name is allowed.
pub fn validate_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Ok(());
    }
    for part in name.split('.') {
        validate_fragment(part).map_err(|_| invalid(name, "every label must be non-empty lowercase"))?;
    }
    Ok(())
}
