//! Best-effort deletion of uploaded media by public URL.
//!
//! Used both by the standalone delete endpoint and as the compensating step
//! when a post insert fails after its media was already uploaded. The
//! operation itself never fails; per-object outcomes are collected in a
//! `CleanupReport` so callers can log exactly what happened.

use serde::Serialize;

use crate::traits::ObjectStorage;

/// One object that could not be deleted.
#[derive(Debug, Clone, Serialize)]
pub struct CleanupFailure {
    pub url: String,
    pub reason: String,
}

/// Per-object outcome of a cleanup pass.
#[derive(Debug, Default, Serialize)]
pub struct CleanupReport {
    /// Storage keys that were deleted.
    pub deleted: Vec<String>,
    /// URLs whose delete call failed.
    pub failed: Vec<CleanupFailure>,
    /// URLs that did not resolve to a key in the configured bucket.
    pub skipped: Vec<String>,
}

impl CleanupReport {
    /// True when every input URL resolved to a key and was deleted.
    pub fn fully_deleted(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Delete each object referenced by `media_urls` from storage.
///
/// Each deletion is attempted independently; one failure neither aborts the
/// rest nor raises to the caller.
pub async fn delete_media_urls(storage: &dyn ObjectStorage, media_urls: &[String]) -> CleanupReport {
    let mut report = CleanupReport::default();

    if media_urls.is_empty() {
        return report;
    }

    tracing::info!(count = media_urls.len(), "Deleting media files from storage");

    for url in media_urls {
        let Some(key) = storage.key_for_public_url(url) else {
            tracing::warn!(url = %url, "Invalid media URL format, skipping");
            report.skipped.push(url.clone());
            continue;
        };

        match storage.delete(&key).await {
            Ok(()) => {
                tracing::debug!(key = %key, "Deleted media object");
                report.deleted.push(key);
            }
            Err(e) => {
                tracing::warn!(url = %url, key = %key, error = %e, "Failed to delete media object");
                report.failed.push(CleanupFailure {
                    url: url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        deleted = report.deleted.len(),
        failed = report.failed.len(),
        skipped = report.skipped.len(),
        "Media cleanup finished"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::traits::{StorageError, StorageResult};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records deletes; fails any key containing "poison".
    struct FakeStorage {
        deleted: Mutex<Vec<String>>,
    }

    impl FakeStorage {
        fn new() -> Self {
            FakeStorage {
                deleted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ObjectStorage for FakeStorage {
        async fn presigned_put_url(
            &self,
            key: &str,
            _content_type: &str,
            _expires_in: Duration,
        ) -> StorageResult<String> {
            Ok(format!("https://signed.test/{}", key))
        }

        async fn delete(&self, key: &str) -> StorageResult<()> {
            if key.contains("poison") {
                return Err(StorageError::DeleteFailed("access denied".to_string()));
            }
            self.deleted.lock().unwrap().push(key.to_string());
            Ok(())
        }

        fn public_url(&self, key: &str) -> String {
            keys::public_url("bucket", "us-east-1", None, key)
        }

        fn key_for_public_url(&self, url: &str) -> Option<String> {
            keys::key_for_public_url("bucket", None, url)
        }
    }

    fn url(key: &str) -> String {
        format!("https://bucket.s3.us-east-1.amazonaws.com/{}", key)
    }

    #[tokio::test]
    async fn test_empty_input_deletes_nothing() {
        let storage = FakeStorage::new();
        let report = delete_media_urls(&storage, &[]).await;
        assert!(report.fully_deleted());
        assert!(report.deleted.is_empty());
        assert!(storage.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deletes_every_url() {
        let storage = FakeStorage::new();
        let urls = vec![url("post-images/u1/1.png"), url("post-images/u1/2.png")];
        let report = delete_media_urls(&storage, &urls).await;
        assert!(report.fully_deleted());
        assert_eq!(
            *storage.deleted.lock().unwrap(),
            vec!["post-images/u1/1.png", "post-images/u1/2.png"]
        );
    }

    #[tokio::test]
    async fn test_malformed_url_is_skipped_not_fatal() {
        let storage = FakeStorage::new();
        let urls = vec![
            "https://elsewhere.example.com/a.png".to_string(),
            url("post-images/u1/1.png"),
        ];
        let report = delete_media_urls(&storage, &urls).await;
        assert_eq!(report.skipped, vec!["https://elsewhere.example.com/a.png"]);
        assert_eq!(report.deleted, vec!["post-images/u1/1.png"]);
        assert!(report.failed.is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_rest() {
        let storage = FakeStorage::new();
        let urls = vec![
            url("post-images/u1/poison.png"),
            url("post-images/u1/ok.png"),
        ];
        let report = delete_media_urls(&storage, &urls).await;
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].url, urls[0]);
        assert_eq!(report.deleted, vec!["post-images/u1/ok.png"]);
        assert!(!report.fully_deleted());
    }
}
