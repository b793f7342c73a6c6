use crate::error::MindshareError;

pub const MAX_USERNAME_LENGTH: usize = 100;

/// Message returned for a missing or blank username.
pub const MISSING_USERNAME: &str = "missing username";

/// Turns the raw `username` parameter into the lookup key: trimmed, one
/// leading `@` removed, lower-cased.
pub fn normalize_username(raw: &str) -> Result<String, MindshareError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MindshareError::InvalidInput(MISSING_USERNAME.to_string()));
    }
    if trimmed.len() > MAX_USERNAME_LENGTH {
        return Err(MindshareError::InvalidInput(format!(
            "username exceeds maximum length of {} bytes",
            MAX_USERNAME_LENGTH
        )));
    }
    let without_at = trimmed.strip_prefix('@').unwrap_or(trimmed);
    Ok(without_at.to_lowercase())
}
