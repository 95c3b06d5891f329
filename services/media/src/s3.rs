//! S3-backed object store

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{
    Client,
    config::Credentials,
    error::DisplayErrorContext,
    primitives::ByteStream,
};
use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};
use crate::store::{ObjectStore, bucket_url};

#[derive(Clone)]
pub struct S3ObjectStore {
    s3_client: Client,
    bucket_name: String,
}

impl S3ObjectStore {
    pub fn new(s3_client: Client, bucket_name: String) -> Self {
        Self {
            s3_client,
            bucket_name,
        }
    }

    /// Build a client from the storage configuration
    ///
    /// Returns `None` when the bucket or the credential pair is missing.
    pub async fn from_config(config: &StorageConfig) -> Option<Self> {
        let (Some(bucket), Some(access_key_id), Some(secret_access_key)) = (
            config.bucket.clone(),
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
        ) else {
            warn!(missing = ?config.missing(), "S3 storage is not configured");
            return None;
        };

        let credentials =
            Credentials::new(access_key_id, secret_access_key, None, None, "environment");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        info!("S3 client initialized for bucket {} in {}", bucket, config.region);
        Some(Self::new(Client::new(&sdk_config), bucket))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> StorageResult<()> {
        info!("Uploading object to S3: {}", key);

        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Put {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut continuation_token = None;

        loop {
            let mut request = self
                .s3_client
                .list_objects_v2()
                .bucket(&self.bucket_name)
                .prefix(prefix);

            if let Some(token) = continuation_token {
                request = request.continuation_token(token);
            }

            let response = request.send().await.map_err(|e| StorageError::List {
                prefix: prefix.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

            if let Some(contents) = response.contents {
                keys.extend(contents.into_iter().filter_map(|obj| obj.key));
            }

            if response.is_truncated.unwrap_or(false) {
                continuation_token = response.next_continuation_token;
                if continuation_token.is_none() {
                    break;
                }
            } else {
                break;
            }
        }

        info!("Found {} objects under {}", keys.len(), prefix);
        Ok(keys)
    }

    fn public_url(&self, key: &str) -> String {
        bucket_url(&self.bucket_name, key)
    }
}
