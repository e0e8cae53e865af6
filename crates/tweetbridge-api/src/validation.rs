//! Request field validation helpers.

use tweetbridge_core::AppError;

/// Require a non-empty string field, naming it in the error.
pub fn require_field<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.as_str()),
        _ => Err(AppError::InvalidInput(format!("{} is required", name))),
    }
}
