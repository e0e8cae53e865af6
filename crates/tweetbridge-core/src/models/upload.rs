use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to generate a presigned URL for a post media upload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadUrlRequest {
    pub user_id: Option<String>,
    /// "image" or "video"; anything that is not "image" goes to the video folder.
    pub file_type: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// Request to generate a presigned URL for an avatar upload. The storage key
/// is fixed per user so a new upload overwrites the previous avatar.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AvatarUploadUrlRequest {
    pub user_id: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// Response containing the signed upload URL and where the object will live.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadUrlResponse {
    /// Presigned URL authorizing one PUT of the given content type.
    pub upload_url: String,
    /// Public URL to store alongside the post record.
    pub public_url: String,
    pub s3_key: String,
}

/// Request to delete previously uploaded media objects by public URL.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteMediaRequest {
    #[serde(default)]
    pub media_urls: Vec<String>,
}

/// Request to delete a user account via the identity provider's admin API.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteUserRequest {
    pub user_id: Option<String>,
}

/// Request to accept a pending post and publish it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AcceptPostRequest {
    pub twitter_unique_id: Option<String>,
}
