//! Media models for the API service

use serde::{Deserialize, Serialize};

/// Response of a successful upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Query parameters of the gallery listing
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// "image", "video" or "all" (default)
    pub filter: Option<String>,
}
