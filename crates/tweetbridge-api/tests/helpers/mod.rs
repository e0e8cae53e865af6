//! Shared test fixtures: a recording fake storage backend and an app wired
//! against a mock Supabase server.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tweetbridge_api::setup::routes::setup_routes;
use tweetbridge_api::state::AppState;
use tweetbridge_core::{BotConfig, Config, S3Config, SupabaseConfig};
use tweetbridge_db::{CredentialCache, PostRepository, SupabaseClient, UserAdmin};
use tweetbridge_storage::{keys, ObjectStorage, StorageError, StorageResult};

pub const BUCKET: &str = "tweets-media";
pub const REGION: &str = "us-east-1";
pub const DEFAULT_USER_ID: &str = "default-bot-user";

/// Records every delete; keys containing "poison" fail.
pub struct FakeStorage {
    pub deleted: Mutex<Vec<String>>,
}

impl FakeStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(FakeStorage {
            deleted: Mutex::new(Vec::new()),
        })
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for FakeStorage {
    async fn presigned_put_url(
        &self,
        key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://signed.test/{}?X-Amz-Expires={}",
            key,
            expires_in.as_secs()
        ))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        if key.contains("poison") {
            return Err(StorageError::DeleteFailed("access denied".to_string()));
        }
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        keys::public_url(BUCKET, REGION, None, key)
    }

    fn key_for_public_url(&self, url: &str) -> Option<String> {
        keys::key_for_public_url(BUCKET, None, url)
    }
}

pub fn test_config(supabase_url: &str) -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        environment: "test".to_string(),
        supabase: SupabaseConfig {
            url: supabase_url.trim_end_matches('/').to_string(),
            anon_key: "anon".to_string(),
            service_key: "service".to_string(),
        },
        bot: BotConfig {
            email: "bot@example.com".to_string(),
            password: "secret".to_string(),
            default_user_id: DEFAULT_USER_ID.to_string(),
        },
        s3: S3Config {
            bucket: BUCKET.to_string(),
            region: REGION.to_string(),
            endpoint: None,
        },
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<FakeStorage>,
}

/// Spin up the app with the fake storage backend and every Supabase call
/// pointed at `supabase_url`.
pub fn spawn_app(supabase_url: &str) -> TestApp {
    let config = test_config(supabase_url);
    let storage = FakeStorage::new();

    let client = SupabaseClient::new(
        config.supabase.url.clone(),
        config.supabase.anon_key.clone(),
    )
    .unwrap();
    let admin = SupabaseClient::new(
        config.supabase.url.clone(),
        config.supabase.service_key.clone(),
    )
    .unwrap();

    let credentials = Arc::new(CredentialCache::new(
        client.clone(),
        config.bot.email.clone(),
        config.bot.password.clone(),
    ));
    let posts = PostRepository::new(client, admin.clone());
    let users = UserAdmin::new(admin);

    let state = Arc::new(AppState {
        config: config.clone(),
        storage: storage.clone(),
        credentials,
        posts,
        users,
    });

    let router = setup_routes(&config, state).unwrap();
    TestApp {
        server: TestServer::new(router).unwrap(),
        storage,
    }
}

/// Mock a successful password-grant login for the bot account.
pub async fn mock_bot_login(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/auth/v1/token")
        .match_query(mockito::Matcher::UrlEncoded(
            "grant_type".into(),
            "password".into(),
        ))
        .with_status(200)
        .with_body(r#"{"access_token":"bot-token","expires_in":3600,"user":{"id":"bot-user"}}"#)
        .create_async()
        .await
}

/// Public URL in the fake bucket for a key.
pub fn media_url(key: &str) -> String {
    keys::public_url(BUCKET, REGION, None, key)
}
