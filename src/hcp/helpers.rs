//! Identifier validation and path building shared by resource APIs

use crate::error::{Result, TfeError};

/// Check that a string can be used as a resource identifier
///
/// Identifiers must be non-empty and free of whitespace and control
/// characters. `.` and `..` are rejected since URL parsing resolves them as
/// dot-segments. Everything else is accepted and percent-encoded when placed
/// in a path.
pub fn valid_string_id(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
}

/// Validate an identifier and percent-encode it as a single path segment
///
/// `param` names the argument in the returned `InvalidIdentifier` error.
pub fn encode_id(value: &str, param: &'static str) -> Result<String> {
    if !valid_string_id(value) {
        return Err(TfeError::InvalidIdentifier(param));
    }
    Ok(urlencoding::encode(value).into_owned())
}
