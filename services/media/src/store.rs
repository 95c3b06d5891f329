//! Object store abstraction

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StorageResult;

/// Minimal object store used by the upload and gallery endpoints
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write an object, replacing any existing object under the same key
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> StorageResult<()>;

    /// List every key starting with `prefix`
    async fn list_keys(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Public URL of the object stored under `key`
    fn public_url(&self, key: &str) -> String;
}

/// Public URL of an object in a bucket using virtual-hosted addressing
pub fn bucket_url(bucket: &str, key: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", bucket, key)
}

/// Object kept by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// In-memory object store
///
/// Keys are kept sorted, matching the lexicographic order S3 lists them in.
#[derive(Debug, Clone)]
pub struct MemoryObjectStore {
    bucket: String,
    objects: Arc<RwLock<BTreeMap<String, StoredObject>>>,
}

impl MemoryObjectStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Fetch a stored object
    pub async fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().await.get(key).cloned()
    }

    /// All stored keys in order
    pub async fn keys(&self) -> Vec<String> {
        self.objects.read().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> StorageResult<()> {
        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let objects = self.objects.read().await;
        Ok(objects
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn public_url(&self, key: &str) -> String {
        bucket_url(&self.bucket, key)
    }
}
