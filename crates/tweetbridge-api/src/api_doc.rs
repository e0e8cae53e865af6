//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::responses;
use tweetbridge_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tweetbridge API",
        version = "0.1.0",
        description = "Broker between the import bot and the hosted platform: issues presigned media upload URLs, ingests posts directly or into the approval queue, and cleans up orphaned media."
    ),
    paths(
        handlers::health::health_check,
        handlers::upload_url::get_upload_url,
        handlers::upload_url::get_avatar_upload_url,
        handlers::bot_post::create_bot_post,
        handlers::bot_post::create_pending_bot_post,
        handlers::media_delete::delete_media,
        handlers::user_delete::delete_user,
        handlers::accept_post::accept_twitter_post,
    ),
    components(schemas(
        models::CreatePostRequest,
        models::NewPost,
        models::UploadUrlRequest,
        models::AvatarUploadUrlRequest,
        models::UploadUrlResponse,
        models::DeleteMediaRequest,
        models::DeleteUserRequest,
        models::AcceptPostRequest,
        responses::MessageResponse,
        responses::PostResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "system", description = "Health and diagnostics"),
        (name = "uploads", description = "Presigned upload URLs"),
        (name = "posts", description = "Bot post ingestion"),
        (name = "media", description = "Media management"),
        (name = "admin", description = "Administrative operations")
    )
)]
pub struct ApiDoc;
