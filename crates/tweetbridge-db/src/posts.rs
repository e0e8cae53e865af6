//! Repository for post ingestion and the approval queue.

use serde_json::Value;
use tweetbridge_core::constants::{
    PENDING_POSTS_TABLE, POSTS_TABLE, STATUS_ACCEPTED, USER_MAP_TABLE,
};
use tweetbridge_core::models::NewPost;
use tweetbridge_core::AppError;

use crate::client::SupabaseClient;

/// Data access for `posts`, `twitter_posts`, and the username mapping.
///
/// Direct bot posts go through the anon-key client with the bot's own token
/// so row-level security applies; queue and transfer operations use the
/// service-role client.
#[derive(Clone)]
pub struct PostRepository {
    client: SupabaseClient,
    admin: SupabaseClient,
}

impl PostRepository {
    pub fn new(client: SupabaseClient, admin: SupabaseClient) -> Self {
        Self { client, admin }
    }

    /// Insert into the live table as the bot identity.
    pub async fn insert_post(&self, post: &NewPost, token: &str) -> Result<Vec<Value>, AppError> {
        self.client.insert(POSTS_TABLE, post, Some(token)).await
    }

    /// Insert into the approval queue.
    pub async fn insert_pending(&self, post: &NewPost) -> Result<Vec<Value>, AppError> {
        self.admin.insert(PENDING_POSTS_TABLE, post, None).await
    }

    /// Insert into the live table with service credentials (approval transfer).
    pub async fn publish(&self, post: &NewPost) -> Result<Vec<Value>, AppError> {
        self.admin.insert(POSTS_TABLE, post, None).await
    }

    /// Resolve a Twitter username to a platform user id via the mapping table.
    pub async fn user_id_for_username(&self, username: &str) -> Result<Option<String>, AppError> {
        let rows = self
            .admin
            .select_eq(USER_MAP_TABLE, "user_id", "username", username, None)
            .await?;

        Ok(rows
            .first()
            .and_then(|row| row.get("user_id"))
            .and_then(Value::as_str)
            .map(String::from))
    }

    /// Live rows already published for this tweet, if any.
    pub async fn find_published(&self, twitter_unique_id: &str) -> Result<Vec<Value>, AppError> {
        self.admin
            .select_eq(POSTS_TABLE, "*", "twitter_unique_id", twitter_unique_id, None)
            .await
    }

    /// Mark the matching queue rows accepted, returning the updated rows
    /// (empty when no row matches).
    pub async fn mark_accepted(&self, twitter_unique_id: &str) -> Result<Vec<Value>, AppError> {
        self.admin
            .update_eq(
                PENDING_POSTS_TABLE,
                &serde_json::json!({ "status": STATUS_ACCEPTED }),
                "twitter_unique_id",
                twitter_unique_id,
                None,
            )
            .await
    }
}
