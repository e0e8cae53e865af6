//! Tweetbridge Storage Library
//!
//! Object-storage access for uploaded media. Provides the `ObjectStorage`
//! trait, the S3 implementation (presigned PUT URLs and deletes), storage-key
//! derivation, and the best-effort cleanup used to compensate failed inserts.
//!
//! # Storage key format
//!
//! - Post media: `post-images/{user_id}/{epoch_millis}.{ext}` or
//!   `post-videos/{user_id}/{epoch_millis}.{ext}`
//! - Avatars: `avatars/{user_id}/avatar.{ext}` (fixed key, overwrite on re-upload)
//!
//! Key derivation is centralized in the `keys` module so public URLs stay
//! invertible for cleanup.

pub mod cleanup;
pub mod keys;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use cleanup::{delete_media_urls, CleanupFailure, CleanupReport};
pub use s3::S3Storage;
pub use traits::{ObjectStorage, StorageError, StorageResult};
