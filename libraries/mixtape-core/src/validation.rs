//! Field normalization shared by the creation drafts

use crate::error::{MixtapeError, Result};

/// Trim a required field, rejecting blank values.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MixtapeError::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_owned())
}

/// Trim an optional field; blank collapses to `None`.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

pub(crate) fn email(value: &str) -> Result<String> {
    let email = required("email", value)?;
    if !email.contains('@') {
        return Err(MixtapeError::validation("email", "must be a valid address"));
    }
    Ok(email)
}
