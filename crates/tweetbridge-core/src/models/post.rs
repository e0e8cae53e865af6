use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{DEFAULT_POST_SOURCE, DEFAULT_POST_TYPE};
use crate::error::AppError;

/// Inbound payload for `/botposts` and `/pendingbotposts`.
///
/// Everything is optional at the wire level; `validate()` enforces the fields
/// the ingestion contract requires before any I/O happens.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub content: Option<String>,
    pub post_type: Option<String>,
    /// Public URLs of media already uploaded to storage, or null.
    pub media_url: Option<Vec<String>>,
    pub twitter_unique_id: Option<String>,
    pub twitter_username: Option<String>,
    pub source: Option<String>,
    pub location: Option<String>,
    pub link_preview: Option<String>,
}

impl CreatePostRequest {
    /// Check the required fields, naming the first one that is missing.
    pub fn validate(&self) -> Result<(), AppError> {
        if self
            .content
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
        {
            return Err(AppError::InvalidInput("content is required".to_string()));
        }
        if self
            .twitter_unique_id
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
        {
            return Err(AppError::InvalidInput(
                "twitter_unique_id is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Media URLs attached to the request, empty when absent. Used for the
    /// compensating delete when a later step fails.
    pub fn media_urls(&self) -> Vec<String> {
        self.media_url.clone().unwrap_or_default()
    }

    /// Assemble the row to insert, attributing it to `user_id`.
    /// Must be called after `validate()`; the required fields are taken as present.
    pub fn into_new_post(self, user_id: String) -> NewPost {
        NewPost {
            user_id,
            content: self.content.unwrap_or_default(),
            post_type: self
                .post_type
                .unwrap_or_else(|| DEFAULT_POST_TYPE.to_string()),
            media_url: self.media_url,
            twitter_unique_id: self.twitter_unique_id.unwrap_or_default(),
            twitter_username: self.twitter_username,
            source: self
                .source
                .unwrap_or_else(|| DEFAULT_POST_SOURCE.to_string()),
            location: self.location,
            link_preview: self.link_preview,
        }
    }
}

/// Row shape inserted into `posts` / `twitter_posts`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewPost {
    pub user_id: String,
    pub content: String,
    pub post_type: String,
    pub media_url: Option<Vec<String>>,
    pub twitter_unique_id: String,
    pub twitter_username: Option<String>,
    pub source: String,
    pub location: Option<String>,
    pub link_preview: Option<String>,
}

/// The substantive fields of a row in the approval queue, as returned by the
/// database. Extra columns (id, status, created_at, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingPostRow {
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub post_type: Option<String>,
    #[serde(default)]
    pub media_url: Option<Vec<String>>,
    pub twitter_unique_id: String,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub link_preview: Option<String>,
}

impl From<PendingPostRow> for NewPost {
    /// Copy a pending row's fields verbatim for publication.
    fn from(row: PendingPostRow) -> Self {
        NewPost {
            user_id: row.user_id,
            content: row.content,
            post_type: row
                .post_type
                .unwrap_or_else(|| DEFAULT_POST_TYPE.to_string()),
            media_url: row.media_url,
            twitter_unique_id: row.twitter_unique_id,
            twitter_username: row.twitter_username,
            source: row
                .source
                .unwrap_or_else(|| DEFAULT_POST_SOURCE.to_string()),
            location: row.location,
            link_preview: row.link_preview,
        }
    }
}
