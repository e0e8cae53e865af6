//! Error types module
//!
//! This module provides the core error types used throughout the Tweetbridge
//! application. All errors are unified under the `AppError` enum which can
//! represent validation, database (Supabase), storage, and auth failures.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

// Error conversions
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::NotFound(_) => 404,
            // Login failures against the identity provider surface as internal
            // errors to callers; the bot credentials are not the caller's fault.
            AppError::Unauthorized(_) => 500,
            AppError::Database(_) => 500,
            AppError::S3(_) => 500,
            AppError::Internal(_) => 500,
            AppError::InternalWithSource { .. } => 500,
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::S3(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
            AppError::InternalWithSource { message, .. } => message.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::Unauthorized(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidInput("content is required".into()).http_status_code(),
            400
        );
        assert_eq!(
            AppError::NotFound("Twitter post not found".into()).http_status_code(),
            404
        );
        assert_eq!(
            AppError::Database("insert failed".into()).http_status_code(),
            500
        );
        assert_eq!(
            AppError::Unauthorized("Bot login failed".into()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_client_message_passes_through() {
        let err = AppError::InvalidInput("twitter_unique_id is required".into());
        assert_eq!(err.client_message(), "twitter_unique_id is required");
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(
            AppError::InvalidInput("x".into()).log_level(),
            LogLevel::Debug
        );
        assert_eq!(AppError::Unauthorized("x".into()).log_level(), LogLevel::Warn);
        assert_eq!(AppError::S3("x".into()).log_level(), LogLevel::Error);
    }
}
