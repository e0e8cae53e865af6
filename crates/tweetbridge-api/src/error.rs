//! HTTP error response conversion
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that convert into it) for errors and `?` so they
//! become `HttpAppError` and render consistently (status, body, logging).

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use tweetbridge_core::{AppError, ErrorMetadata, LogLevel};
use tweetbridge_storage::StorageError;
use utoipa::ToSchema;

/// Error body returned for every failure: `success` is always false and
/// `error` is a human-readable description. No structured codes are exposed.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse.
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from tweetbridge-core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::SignFailed(msg)
            | StorageError::DeleteFailed(msg)
            | StorageError::BackendError(msg) => AppError::S3(msg),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

/// Convert JSON body deserialization failures into a 400 with our ErrorResponse format.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

/// JSON body extractor that returns our ErrorResponse format (400 + JSON) on
/// deserialization failure, instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, Json(ErrorResponse::new(app_error.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_sign_failed() {
        let HttpAppError(app) = StorageError::SignFailed("expired creds".to_string()).into();
        match app {
            AppError::S3(msg) => assert_eq!(msg, "expired creds"),
            _ => panic!("Expected S3 variant"),
        }
    }

    #[test]
    fn test_from_storage_error_invalid_key() {
        let HttpAppError(app) = StorageError::InvalidKey("bad key".to_string()).into();
        match app {
            AppError::InvalidInput(msg) => assert_eq!(msg, "bad key"),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    /// The public error contract: `{"success": false, "error": "..."}`.
    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("content is required")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "content is required");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
