use axum::{response::IntoResponse, Json};

use crate::responses::MessageResponse;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(MessageResponse::new("Server is running"))
}
