//! Upload and gallery endpoints

use axum::{Json, extract::State};
use media::{Folder, GalleryFilter, MediaUpload};
use tracing::{error, info, warn};

use super::internal_error;
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::{AppQuery, UploadForm},
    models::{
        media::{GalleryQuery, UploadResponse},
        parse_id,
    },
};

/// File part of an upload form
struct FilePart {
    filename: String,
    content_type: Option<String>,
    body: Vec<u8>,
}

/// Store a file in the media bucket
///
/// POST /api/upload
///
/// Expects multipart form with:
/// - `file`: The file data
/// - `userId`: Optional owner prefix
/// - `folder`: Optional folder, "profile" also updates the owner's profile image
pub async fn upload_media(
    State(state): State<AppState>,
    UploadForm(mut multipart): UploadForm,
) -> ApiResult<Json<UploadResponse>> {
    let mut file: Option<FilePart> = None;
    let mut owner: Option<String> = None;
    let mut folder: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                // A text part named "file" is not a file
                let Some(filename) = field.file_name().map(String::from) else {
                    continue;
                };
                let content_type = field.content_type().map(String::from);
                let body = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid file part: {}", e)))?;

                file = Some(FilePart {
                    filename,
                    content_type,
                    body: body.to_vec(),
                });
            }
            "userId" => {
                owner = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_request(format!("Invalid userId: {}", e)))?,
                );
            }
            "folder" => {
                folder = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_request(format!("Invalid folder: {}", e)))?,
                );
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    // The key prefix and the profile lookup use the same trimmed owner
    let owner = owner
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty());
    let folder = folder.as_deref().and_then(Folder::parse);

    let profile_owner = match folder {
        Some(Folder::Profile) => Some(parse_id(owner.as_deref()).ok_or_else(|| {
            ApiError::bad_request("A valid userId is required for profile uploads")
        })?),
        _ => None,
    };

    let store = state.object_store.as_ref().ok_or_else(|| {
        error!("Upload rejected: S3 storage is not configured");
        ApiError::internal("AWS configuration missing")
    })?;

    let stored = media::store_media(
        store.as_ref(),
        MediaUpload {
            owner,
            folder,
            filename: file.filename,
            content_type: file.content_type,
            body: file.body,
        },
    )
    .await
    .map_err(internal_error("Upload to S3 failed"))?;

    // The object stays in the bucket even if this update fails
    if let Some(user_id) = profile_owner {
        let updated = state
            .account_repository
            .set_profile_image(user_id, &stored.url)
            .await
            .map_err(internal_error("Upload to S3 failed"))?;

        if updated {
            info!(user_id, url = %stored.url, "Profile image updated");
        } else {
            warn!(user_id, "Profile upload for unknown account");
        }
    }

    Ok(Json(UploadResponse { url: stored.url }))
}

/// List a user's gallery, optionally filtered by media type
///
/// GET /api/gallery?userId=&filter=
pub async fn list_gallery(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<GalleryQuery>,
) -> ApiResult<Json<Vec<String>>> {
    let user_id = query
        .user_id
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::bad_request("No userId provided"))?;
    let filter = GalleryFilter::from_query(query.filter.as_deref());

    let store = state.object_store.as_ref().ok_or_else(|| {
        error!("Gallery listing rejected: S3 storage is not configured");
        ApiError::internal("Failed to list gallery")
    })?;

    let urls = media::list_gallery(store.as_ref(), &user_id, filter)
        .await
        .map_err(internal_error("Failed to list gallery"))?;

    Ok(Json(urls))
}
