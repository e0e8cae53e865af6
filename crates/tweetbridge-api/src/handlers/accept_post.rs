//! Approval transfer: move a pending post to the live table.
//!
//! The two table operations are not transactional on the platform side, so
//! the handler is written to be safely re-drivable: accepting an id whose
//! post already exists in the live table returns that row instead of
//! inserting a duplicate. A crash between the status update and the insert
//! is repaired by simply calling the endpoint again.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::responses::PostResponse;
use crate::state::AppState;
use crate::validation::require_field;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tweetbridge_core::models::{AcceptPostRequest, NewPost, PendingPostRow};
use tweetbridge_core::AppError;

/// Accept a pending twitter post and publish it
#[utoipa::path(
    post,
    path = "/admin/accept-twitter-post",
    tag = "admin",
    request_body = AcceptPostRequest,
    responses(
        (status = 200, description = "Post accepted and published", body = PostResponse),
        (status = 400, description = "Missing twitter_unique_id", body = ErrorResponse),
        (status = 404, description = "No pending post with this id", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "accept_twitter_post"))]
pub async fn accept_twitter_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<AcceptPostRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let unique_id = require_field(&request.twitter_unique_id, "twitter_unique_id")?;

    let existing = state.posts.find_published(unique_id).await?;
    if !existing.is_empty() {
        tracing::info!(twitter_unique_id = %unique_id, "Post already published, returning existing row");
        return Ok(Json(PostResponse::new(
            existing,
            "Post already accepted and published",
        )));
    }

    let updated = state.posts.mark_accepted(unique_id).await?;
    let Some(row) = updated.into_iter().next() else {
        return Err(AppError::NotFound("Twitter post not found".to_string()).into());
    };

    let pending: PendingPostRow = serde_json::from_value(row).map_err(|e| {
        AppError::Database(format!("Pending post row had unexpected shape: {}", e))
    })?;

    let inserted = state.posts.publish(&NewPost::from(pending)).await?;

    tracing::info!(twitter_unique_id = %unique_id, "Post transferred to live table");

    Ok(Json(PostResponse::new(
        inserted,
        "Post accepted and published successfully",
    )))
}
