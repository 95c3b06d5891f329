//! Request extractors that reject with [`ApiError`]
//!
//! axum's own extractors answer malformed input with plain-text bodies; these
//! wrappers route every rejection through `{"error": msg}`.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Multipart, Request},
};

use crate::error::ApiError;

/// JSON request body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Path parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

/// Query string
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

/// Multipart form body
pub struct UploadForm(pub Multipart);

#[async_trait]
impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Ok(Self(multipart))
    }
}
