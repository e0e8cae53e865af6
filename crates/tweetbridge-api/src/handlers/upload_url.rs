//! Presigned upload URL issuance.
//!
//! The broker never proxies file bytes: clients upload directly to storage
//! with a short-lived signed URL and later reference the public URL on the
//! post record.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use crate::validation::require_field;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tweetbridge_core::constants::UPLOAD_URL_TTL_SECS;
use tweetbridge_core::models::{AvatarUploadUrlRequest, UploadUrlRequest, UploadUrlResponse};
use tweetbridge_storage::keys;

/// Generate a presigned URL for a post media upload
#[utoipa::path(
    post,
    path = "/api/get-upload-url",
    tag = "uploads",
    request_body = UploadUrlRequest,
    responses(
        (status = 200, description = "Presigned URL generated", body = UploadUrlResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "get_upload_url"))]
pub async fn get_upload_url(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UploadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let user_id = require_field(&request.user_id, "user_id")?;
    let file_type = require_field(&request.file_type, "file_type")?;
    let file_name = require_field(&request.file_name, "file_name")?;
    let content_type = require_field(&request.content_type, "content_type")?;

    // Millisecond timestamp keeps keys unique per request.
    let key = keys::post_media_key(
        file_type,
        user_id,
        Utc::now().timestamp_millis(),
        file_name,
    );

    sign_and_respond(&state, key, content_type).await
}

/// Generate a presigned URL for uploading/updating a user avatar
#[utoipa::path(
    post,
    path = "/api/get-avatar-upload-url",
    tag = "uploads",
    request_body = AvatarUploadUrlRequest,
    responses(
        (status = 200, description = "Presigned URL generated", body = UploadUrlResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "get_avatar_upload_url"))]
pub async fn get_avatar_upload_url(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<AvatarUploadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let user_id = require_field(&request.user_id, "user_id")?;
    let file_name = require_field(&request.file_name, "file_name")?;
    let content_type = require_field(&request.content_type, "content_type")?;

    // Fixed key per user: a new avatar upload overwrites the old object.
    let key = keys::avatar_key(user_id, file_name);

    sign_and_respond(&state, key, content_type).await
}

async fn sign_and_respond(
    state: &AppState,
    key: String,
    content_type: &str,
) -> Result<Json<UploadUrlResponse>, HttpAppError> {
    let upload_url = state
        .storage
        .presigned_put_url(&key, content_type, Duration::from_secs(UPLOAD_URL_TTL_SECS))
        .await?;
    let public_url = state.storage.public_url(&key);

    tracing::info!(s3_key = %key, "Issued presigned upload URL");

    Ok(Json(UploadUrlResponse {
        upload_url,
        public_url,
        s3_key: key,
    }))
}
