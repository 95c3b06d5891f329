//! Gallery listing

use crate::error::StorageResult;
use crate::key::gallery_prefix;
use crate::store::ObjectStore;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

/// Media type filter of a gallery listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Image,
    Video,
}

impl GalleryFilter {
    /// Parse the `filter` query value; unknown or absent values list everything
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("image") => GalleryFilter::Image,
            Some("video") => GalleryFilter::Video,
            _ => GalleryFilter::All,
        }
    }

    /// Extensions accepted by this filter, `None` when any file passes
    pub fn extensions(&self) -> Option<&'static [&'static str]> {
        match self {
            GalleryFilter::All => None,
            GalleryFilter::Image => Some(IMAGE_EXTENSIONS),
            GalleryFilter::Video => Some(VIDEO_EXTENSIONS),
        }
    }

    /// Whether `key` names a file this filter keeps
    ///
    /// Directory markers (keys ending in `/`) never pass.
    pub fn matches(&self, key: &str) -> bool {
        if key.is_empty() || key.ends_with('/') {
            return false;
        }

        let Some(allowed) = self.extensions() else {
            return true;
        };

        key.rsplit_once('.')
            .map(|(_, ext)| {
                let ext = ext.to_ascii_lowercase();
                allowed.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}

/// List the public URLs of a user's gallery items
///
/// The listing is exhaustive: every page under the gallery prefix is read.
pub async fn list_gallery(
    store: &dyn ObjectStore,
    owner: &str,
    filter: GalleryFilter,
) -> StorageResult<Vec<String>> {
    let prefix = gallery_prefix(owner);
    let keys = store.list_keys(&prefix).await?;

    Ok(keys
        .iter()
        .filter(|key| filter.matches(key))
        .map(|key| store.public_url(key))
        .collect())
}
