//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tweetbridge_core::Config;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/get-upload-url", post(handlers::upload_url::get_upload_url))
        .route(
            "/api/get-avatar-upload-url",
            post(handlers::upload_url::get_avatar_upload_url),
        )
        .route("/botposts", post(handlers::bot_post::create_bot_post))
        .route(
            "/pendingbotposts",
            post(handlers::bot_post::create_pending_bot_post),
        )
        .route("/delete-media", post(handlers::media_delete::delete_media))
        .route("/api/delete-user", post(handlers::user_delete::delete_user))
        .route(
            "/admin/accept-twitter-post",
            post(handlers::accept_post::accept_twitter_post),
        )
        .route("/api/openapi.json", get(openapi_spec))
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::api_doc::ApiDoc::openapi())
}

/// Setup CORS configuration
///
/// Origins are enumerated in configuration; preflight OPTIONS requests are
/// answered by the layer, and CORS headers are only echoed for listed origins.
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
