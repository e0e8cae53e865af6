//! Standalone media deletion endpoint.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::responses::MessageResponse;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tweetbridge_core::models::DeleteMediaRequest;
use tweetbridge_core::AppError;
use tweetbridge_storage::cleanup::delete_media_urls;

/// Delete media objects from storage by their public URLs
#[utoipa::path(
    post,
    path = "/delete-media",
    tag = "media",
    request_body = DeleteMediaRequest,
    responses(
        (status = 200, description = "Deletion attempted for every URL", body = MessageResponse),
        (status = 400, description = "No media URLs provided", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "delete_media"))]
pub async fn delete_media(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteMediaRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if request.media_urls.is_empty() {
        return Err(AppError::InvalidInput("No media URLs provided".to_string()).into());
    }

    let count = request.media_urls.len();
    let report = delete_media_urls(state.storage.as_ref(), &request.media_urls).await;

    // Best-effort contract: per-object failures stay out of the HTTP result.
    if !report.fully_deleted() {
        tracing::warn!(
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            skipped = report.skipped.len(),
            "Some media objects were not deleted"
        );
    }

    Ok(Json(MessageResponse::new(format!(
        "Deleted {} media files",
        count
    ))))
}
