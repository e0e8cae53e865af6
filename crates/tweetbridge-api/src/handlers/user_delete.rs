//! User account deletion via the identity provider's admin API.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::responses::MessageResponse;
use crate::state::AppState;
use crate::validation::require_field;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tweetbridge_core::models::DeleteUserRequest;

/// Delete a user account
#[utoipa::path(
    post,
    path = "/api/delete-user",
    tag = "admin",
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Missing user_id", body = ErrorResponse),
        (status = 500, description = "Provider error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "delete_user"))]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteUserRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let user_id = require_field(&request.user_id, "user_id")?;

    state.users.delete_user(user_id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
