//! Cached bot credentials.
//!
//! The bot logs in with fixed service-account credentials; the resulting
//! token and user id are cached until expiry so each request does not pay a
//! login round-trip. The cache lock is held across refresh, so concurrent
//! expiry triggers exactly one login (single-flight) and the others observe
//! the fresh credential.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tweetbridge_core::constants::TOKEN_TTL_SECS;
use tweetbridge_core::AppError;

use crate::client::SupabaseClient;

/// A valid bot identity: bearer token plus the user id it belongs to.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Token cache for the bot service account. Not persisted; lost on restart.
pub struct CredentialCache {
    client: SupabaseClient,
    email: String,
    password: String,
    cached: Mutex<Option<Credential>>,
}

impl CredentialCache {
    pub fn new(client: SupabaseClient, email: String, password: String) -> Self {
        Self {
            client,
            email,
            password,
            cached: Mutex::new(None),
        }
    }

    /// Return a valid credential, logging in first when the cache is empty or
    /// past expiry.
    pub async fn credential(&self) -> Result<Credential, AppError> {
        let mut cached = self.cached.lock().await;

        let now = Utc::now();
        if let Some(credential) = cached.as_ref() {
            if credential.is_valid_at(now) {
                tracing::debug!("Using cached bot token");
                return Ok(credential.clone());
            }
        }

        let session = self
            .client
            .sign_in_with_password(&self.email, &self.password)
            .await?;

        // Trust the provider's reported lifetime, but never beyond our own
        // conservative cap.
        let ttl_secs = session
            .expires_in
            .map(|s| s.min(TOKEN_TTL_SECS))
            .unwrap_or(TOKEN_TTL_SECS)
            .max(0);

        let credential = Credential {
            token: session.access_token,
            user_id: session.user_id,
            expires_at: now + Duration::seconds(ttl_secs),
        };

        tracing::info!(user_id = %credential.user_id, "Logged in and refreshed bot token");
        *cached = Some(credential.clone());
        Ok(credential)
    }

    /// Bearer token for the bot, refreshing as needed.
    pub async fn token(&self) -> Result<String, AppError> {
        Ok(self.credential().await?.token)
    }

    /// The bot's user id, forcing a valid token first.
    pub async fn user_id(&self) -> Result<String, AppError> {
        Ok(self.credential().await?.user_id)
    }
}
