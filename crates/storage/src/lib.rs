//! S3-backed media storage.
//!
//! Media files have no relational ownership; the bucket is the source
//! of truth. This crate wraps the four operations the site needs --
//! upload, list, remove, public-URL construction -- behind a
//! [`MediaStore`] handle.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use chrono::Utc;
use serde::Serialize;
use taramind_core::types::Timestamp;

/// Storage configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket holding post media.
    pub bucket: String,
    /// AWS region (default: `us-east-1`).
    pub region: String,
    /// Custom endpoint for S3-compatible stores (MinIO, Supabase storage).
    pub endpoint: Option<String>,
    /// Base URL public object URLs are built from, no trailing slash.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var              | Required | Default     |
    /// |----------------------|----------|-------------|
    /// | `S3_BUCKET`          | **yes**  | --          |
    /// | `S3_REGION`          | no       | `us-east-1` |
    /// | `S3_ENDPOINT`        | no       | --          |
    /// | `S3_PUBLIC_BASE_URL` | **yes**  | --          |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing.
    pub fn from_env() -> Self {
        let bucket = std::env::var("S3_BUCKET").expect("S3_BUCKET must be set");
        let region = std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into());
        let endpoint = std::env::var("S3_ENDPOINT").ok();
        let public_base_url = std::env::var("S3_PUBLIC_BASE_URL")
            .expect("S3_PUBLIC_BASE_URL must be set")
            .trim_end_matches('/')
            .to_string();

        Self {
            bucket,
            region,
            endpoint,
            public_base_url,
        }
    }
}

/// Storage-layer error.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage request failed: {0}")]
    Request(String),
}

/// A stored media object as shown in the admin media library.
#[derive(Debug, Clone, Serialize)]
pub struct MediaObject {
    pub name: String,
    pub created_at: Option<Timestamp>,
    pub url: String,
}

/// Handle to the media bucket. Cheap to clone.
#[derive(Clone)]
pub struct MediaStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl MediaStore {
    /// Build a store from configuration, resolving AWS credentials from
    /// the default provider chain.
    pub async fn new(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint {
            // Path-style addressing for S3-compatible stores.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }

    /// Object key for a fresh upload: millisecond timestamp prefix plus
    /// the original file name, so repeated uploads of the same file
    /// never collide.
    pub fn timestamped_key(&self, file_name: &str) -> String {
        format!("{}-{}", Utc::now().timestamp_millis(), file_name)
    }

    /// Upload bytes under `key` with the given content type.
    pub async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        tracing::debug!(key, "uploaded media object");
        Ok(())
    }

    /// List every object in the bucket with its public URL.
    pub async fn list(&self) -> Result<Vec<MediaObject>, StorageError> {
        let mut objects = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let mut request = self.client.list_objects_v2().bucket(&self.bucket);
            if let Some(token) = &continuation {
                request = request.continuation_token(token);
            }
            let page = request
                .send()
                .await
                .map_err(|e| StorageError::Request(e.to_string()))?;

            for object in page.contents() {
                let Some(name) = object.key() else { continue };
                let created_at = object
                    .last_modified()
                    .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos()));
                objects.push(MediaObject {
                    name: name.to_string(),
                    created_at,
                    url: self.public_url(name),
                });
            }

            match page.next_continuation_token() {
                Some(token) => continuation = Some(token.to_string()),
                None => break,
            }
        }

        Ok(objects)
    }

    /// Remove an object by name.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        tracing::debug!(key, "removed media object");
        Ok(())
    }

    /// Public URL for an object name.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, key)
    }
}
