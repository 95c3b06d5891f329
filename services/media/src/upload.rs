//! Writing uploads to the object store

use tracing::info;

use crate::error::StorageResult;
use crate::key::{Folder, new_object_key};
use crate::store::ObjectStore;

/// Content type recorded when the client sends none
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file received from a client
#[derive(Debug, Clone)]
pub struct MediaUpload {
    /// Owner prefix of the key
    pub owner: Option<String>,
    /// Folder segment of the key
    pub folder: Option<Folder>,
    /// Original filename, used verbatim as the key suffix
    pub filename: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Location of a stored upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    pub key: String,
    pub url: String,
}

/// Store an upload under a freshly derived key
pub async fn store_media(store: &dyn ObjectStore, upload: MediaUpload) -> StorageResult<StoredMedia> {
    let key = new_object_key(
        upload.owner.as_deref(),
        upload.folder.as_ref(),
        &upload.filename,
    );
    let content_type = upload
        .content_type
        .filter(|ct| !ct.is_empty())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
    let size = upload.body.len();

    store.put_object(&key, upload.body, &content_type).await?;

    let url = store.public_url(&key);
    info!(key = %key, size, content_type = %content_type, "Stored upload");

    Ok(StoredMedia { key, url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryObjectStore;

    #[tokio::test]
    async fn test_store_media_writes_object_and_returns_url() {
        let store = MemoryObjectStore::new("parks");
        let stored = store_media(
            &store,
            MediaUpload {
                owner: Some("5".into()),
                folder: Some(Folder::Gallery),
                filename: "arch.png".into(),
                content_type: Some("image/png".into()),
                body: vec![1, 2, 3],
            },
        )
        .await
        .unwrap();

        assert!(stored.key.starts_with("5/gallery/"));
        assert!(stored.key.ends_with("_arch.png"));
        assert_eq!(
            stored.url,
            format!("https://parks.s3.amazonaws.com/{}", stored.key)
        );

        let object = store.get(&stored.key).await.unwrap();
        assert_eq!(object.body, vec![1, 2, 3]);
        assert_eq!(object.content_type, "image/png");
    }

    #[tokio::test]
    async fn test_missing_content_type_defaults() {
        let store = MemoryObjectStore::new("parks");
        let stored = store_media(
            &store,
            MediaUpload {
                owner: None,
                folder: None,
                filename: "blob".into(),
                content_type: None,
                body: Vec::new(),
            },
        )
        .await
        .unwrap();

        let object = store.get(&stored.key).await.unwrap();
        assert_eq!(object.content_type, DEFAULT_CONTENT_TYPE);
    }
}
