//! Tweetbridge Supabase access layer
//!
//! The hosted platform exposes the database over PostgREST (`/rest/v1`) and
//! identity over GoTrue (`/auth/v1`); this crate wraps both behind a small
//! reqwest client and the repositories the API handlers use. There is no
//! direct Postgres connection anywhere in the service.

pub mod admin;
pub mod auth;
pub mod client;
pub mod posts;

// Re-export commonly used types
pub use admin::UserAdmin;
pub use auth::{Credential, CredentialCache};
pub use client::{Session, SupabaseClient};
pub use posts::PostRepository;
