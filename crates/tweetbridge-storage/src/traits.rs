//! Storage abstraction trait
//!
//! This module defines the `ObjectStorage` trait the API is written against.
//! The production backend is S3; tests substitute recording fakes.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Signing failed: {0}")]
    SignFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The broker never proxies file bytes; it only signs upload URLs and deletes
/// objects, so the surface is deliberately small.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Generate a presigned PUT URL authorizing one upload of the given
    /// content type to `key`, valid for `expires_in`.
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Delete an object by its storage key.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Public URL for an object, a pure function of bucket and key.
    fn public_url(&self, key: &str) -> String;

    /// Invert `public_url`: recover the storage key from a public URL.
    /// Returns `None` when the URL does not belong to this bucket.
    fn key_for_public_url(&self, url: &str) -> Option<String>;
}
