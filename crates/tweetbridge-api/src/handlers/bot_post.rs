//! Bot post ingestion: direct publication and the approval queue.
//!
//! Both handlers validate before any I/O, then run the fallible part as one
//! block so any failure after media was uploaded triggers the compensating
//! delete over the request's media URLs.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::responses::PostResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tweetbridge_core::models::CreatePostRequest;
use tweetbridge_storage::cleanup::delete_media_urls;

/// Create a post from imported tweet data as the bot identity
#[utoipa::path(
    post,
    path = "/botposts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Insert failed; uploaded media was cleaned up", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_bot_post"))]
pub async fn create_bot_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate()?;

    let media_urls = request.media_urls();
    log_ingestion(&request, media_urls.len());

    let result = async {
        let credential = state.credentials.credential().await?;
        let post = request.into_new_post(credential.user_id);
        state.posts.insert_post(&post, &credential.token).await
    }
    .await;

    finish_ingestion(&state, result, &media_urls).await
}

/// Create a post in the approval queue, resolving the author by username mapping
#[utoipa::path(
    post,
    path = "/pendingbotposts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Pending post created", body = PostResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Insert failed; uploaded media was cleaned up", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_pending_bot_post"))]
pub async fn create_pending_bot_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate()?;

    let media_urls = request.media_urls();
    log_ingestion(&request, media_urls.len());

    let result = async {
        let user_id = resolve_pending_identity(&state, request.twitter_username.as_deref()).await;
        let post = request.into_new_post(user_id);
        state.posts.insert_pending(&post).await
    }
    .await;

    finish_ingestion(&state, result, &media_urls).await
}

/// Map a Twitter username to a platform identity, falling back to the fixed
/// default on a miss, on a lookup error, or when no username was supplied.
/// Lookup failures are swallowed: a broken mapping table must not block ingestion.
async fn resolve_pending_identity(state: &AppState, username: Option<&str>) -> String {
    let default_id = || state.config.bot.default_user_id.clone();

    let Some(username) = username.map(str::trim).filter(|u| !u.is_empty()) else {
        tracing::debug!("No twitter_username provided, using default identity");
        return default_id();
    };

    match state.posts.user_id_for_username(username).await {
        Ok(Some(user_id)) => {
            tracing::debug!(username = %username, user_id = %user_id, "Resolved username mapping");
            user_id
        }
        Ok(None) => {
            tracing::debug!(username = %username, "Username not in mapping, using default identity");
            default_id()
        }
        Err(e) => {
            tracing::warn!(username = %username, error = %e, "Username mapping lookup failed, using default identity");
            default_id()
        }
    }
}

fn log_ingestion(request: &CreatePostRequest, media_count: usize) {
    tracing::info!(
        twitter_unique_id = request.twitter_unique_id.as_deref().unwrap_or_default(),
        media_count,
        "Creating post from tweet"
    );
}

/// On success return 201 with the inserted rows; on failure delete the
/// request's uploaded media before surfacing the error, so storage does not
/// accumulate orphaned objects.
async fn finish_ingestion(
    state: &AppState,
    result: Result<Vec<serde_json::Value>, tweetbridge_core::AppError>,
    media_urls: &[String],
) -> Result<(StatusCode, Json<PostResponse>), HttpAppError> {
    match result {
        Ok(rows) => Ok((
            StatusCode::CREATED,
            Json(PostResponse::new(rows, "Post created successfully")),
        )),
        Err(e) => {
            if !media_urls.is_empty() {
                tracing::warn!(
                    count = media_urls.len(),
                    "Post insertion failed - cleaning up uploaded media"
                );
                let report = delete_media_urls(state.storage.as_ref(), media_urls).await;
                if !report.fully_deleted() {
                    tracing::warn!(
                        failed = report.failed.len(),
                        skipped = report.skipped.len(),
                        "Compensating media cleanup was incomplete"
                    );
                }
            }
            Err(HttpAppError::from(e))
        }
    }
}
