//! S3 storage implementation built on `object_store`.

use crate::keys;
use crate::traits::{ObjectStorage, StorageError, StorageResult};
use async_trait::async_trait;
use http::Method;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::signer::Signer;
use object_store::ObjectStoreExt;
use std::env;
use std::time::Duration;

/// S3 storage backend. Credentials come from the environment via
/// `AmazonS3Builder::from_env()`.
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    region: String,
    endpoint_url: Option<String>,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        // Keep AWS_REGION for compatibility with existing tooling if not already set.
        if env::var("AWS_REGION").is_err() {
            env::set_var("AWS_REGION", &region);
        }

        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
        })
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    #[tracing::instrument(skip(self), fields(
        s3.bucket = %self.bucket,
        s3.key = %key,
        s3.operation = "PutObject"
    ))]
    async fn presigned_put_url(
        &self,
        key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let location = Path::from(key.to_string());
        let url = self
            .store
            .signed_url(Method::PUT, &location, expires_in)
            .await
            .map_err(|e| StorageError::SignFailed(e.to_string()))?;

        tracing::info!(
            expires_in_seconds = expires_in.as_secs(),
            "Generated presigned PUT URL"
        );

        Ok(url.to_string())
    }

    #[tracing::instrument(skip(self), fields(
        s3.bucket = %self.bucket,
        s3.key = %key,
        s3.operation = "DeleteObject"
    ))]
    async fn delete(&self, key: &str) -> StorageResult<()> {
        let start = std::time::Instant::now();
        let location = Path::from(key.to_string());

        let result = self.store.delete(&location).await;
        let duration = start.elapsed().as_secs_f64();

        match result {
            Ok(_) => {
                tracing::info!(duration_ms = duration * 1000.0, "S3 delete successful");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    duration_ms = duration * 1000.0,
                    "S3 delete failed"
                );
                Err(StorageError::DeleteFailed(e.to_string()))
            }
        }
    }

    fn public_url(&self, key: &str) -> String {
        keys::public_url(&self.bucket, &self.region, self.endpoint_url.as_deref(), key)
    }

    fn key_for_public_url(&self, url: &str) -> Option<String> {
        keys::key_for_public_url(&self.bucket, self.endpoint_url.as_deref(), url)
    }
}
