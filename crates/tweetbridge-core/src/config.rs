//! Configuration module
//!
//! All configuration comes from environment variables (optionally a `.env`
//! file via dotenvy). The Supabase keys and bot credentials are opaque
//! secrets; they are never logged.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_AWS_REGION: &str = "us-east-1";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8081,http://localhost:5173";

/// Supabase project endpoint and API keys.
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    /// Anon/publishable key, sent as the `apikey` header on every request.
    pub anon_key: String,
    /// Service-role key used for admin operations and approval-queue writes.
    pub service_key: String,
}

/// Bot service account used for direct post ingestion.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub email: String,
    pub password: String,
    /// Identity used for pending posts whose username has no mapping.
    pub default_user_id: String,
}

/// Object storage bucket settings. AWS credentials themselves are picked up
/// from the environment by the S3 client builder.
#[derive(Clone, Debug)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...).
    pub endpoint: Option<String>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub supabase: SupabaseConfig,
    pub bot: BotConfig,
    pub s3: S3Config,
}

impl Config {
    /// Load configuration from the environment (and `.env` when present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server_port = env::var("SERVER_PORT")
            .ok()
            .map(|p| p.parse::<u16>().context("SERVER_PORT must be a port number"))
            .transpose()?
            .unwrap_or(DEFAULT_SERVER_PORT);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let anon_key = required_env("SUPABASE_KEY")?;
        let supabase = SupabaseConfig {
            url: required_env("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            service_key: env::var("SUPABASE_SERVICE_ROLE_KEY").unwrap_or_else(|_| anon_key.clone()),
            anon_key,
        };

        let bot = BotConfig {
            email: required_env("BOT_EMAIL")?,
            password: required_env("BOT_PASSWORD")?,
            default_user_id: required_env("DEFAULT_BOT_USER_ID")?,
        };

        let s3 = S3Config {
            bucket: required_env("AWS_S3_BUCKET")?,
            region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string()),
            endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
        };

        Ok(Config {
            server_port,
            cors_origins,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            supabase,
            bot,
            s3,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn required_env(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} environment variable not set", name))
}
