//! Application initialization: storage, Supabase clients, state, and routes.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tweetbridge_core::Config;
use tweetbridge_db::{CredentialCache, PostRepository, SupabaseClient, UserAdmin};
use tweetbridge_storage::{ObjectStorage, S3Storage};

use crate::state::AppState;

/// Build the application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let storage: Arc<dyn ObjectStorage> = Arc::new(
        S3Storage::new(
            config.s3.bucket.clone(),
            config.s3.region.clone(),
            config.s3.endpoint.clone(),
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize S3 storage: {}", e))?,
    );

    let client = SupabaseClient::new(config.supabase.url.clone(), config.supabase.anon_key.clone())?;
    let admin =
        SupabaseClient::new(config.supabase.url.clone(), config.supabase.service_key.clone())?;

    let credentials = Arc::new(CredentialCache::new(
        client.clone(),
        config.bot.email.clone(),
        config.bot.password.clone(),
    ));
    let posts = PostRepository::new(client, admin.clone());
    let users = UserAdmin::new(admin);

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        credentials,
        posts,
        users,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
