//! Likes, reviews and visit history endpoints

use axum::{Json, extract::State};
use tracing::info;

use super::internal_error;
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::{AppJson, AppPath, AppQuery},
    models::{
        MessageResponse, NumericField,
        parks::{
            CreateReviewRequest, CreateVisitRequest, LikeRequest, LikedPark, LikedParksQuery,
            NewReview, Review, ReviewsQuery, VisitCreated, VisitEntry, VisitHistoryQuery,
            parse_visit_date,
        },
        parse_id,
    },
};

fn numeric_id(value: Option<&NumericField>) -> Option<i64> {
    value.and_then(NumericField::as_i64)
}

/// Parks liked by the user named in the path
pub async fn list_liked_parks_for_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> ApiResult<Json<Vec<LikedPark>>> {
    fetch_liked_parks(&state, user_id).await
}

/// Parks liked by the user named in the query
pub async fn list_liked_parks(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<LikedParksQuery>,
) -> ApiResult<Json<Vec<LikedPark>>> {
    let user_id = parse_id(query.user_id.as_deref())
        .ok_or_else(|| ApiError::bad_request("No userId provided"))?;
    fetch_liked_parks(&state, user_id).await
}

async fn fetch_liked_parks(state: &AppState, user_id: i64) -> ApiResult<Json<Vec<LikedPark>>> {
    let parks = state
        .like_repository
        .list_for_user(user_id)
        .await
        .map_err(internal_error("Failed to fetch liked parks"))?;

    Ok(Json(parks))
}

/// Validate a like body and check that the acting user exists
async fn like_target(state: &AppState, payload: LikeRequest) -> ApiResult<(i64, String)> {
    let (Some(user_id), Some(park_name)) = (
        numeric_id(payload.user_id.as_ref()),
        payload.park_name.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("userId and parkName are required"));
    };

    let exists = state
        .account_repository
        .exists(user_id)
        .await
        .map_err(internal_error("Failed to look up user"))?;
    if !exists {
        return Err(ApiError::not_found("User not found"));
    }

    Ok((user_id, park_name))
}

/// Like a park
pub async fn like_park(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LikeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let (user_id, park_name) = like_target(&state, payload).await?;

    let inserted = state
        .like_repository
        .like(user_id, &park_name)
        .await
        .map_err(internal_error("Failed to add liked park"))?;
    if !inserted {
        return Err(ApiError::bad_request("Park already liked"));
    }

    info!(user_id, park = %park_name, "Park liked");
    Ok(Json(MessageResponse::new("Park liked successfully")))
}

/// Remove a like; succeeds whether or not the like existed
pub async fn unlike_park(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LikeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let (user_id, park_name) = like_target(&state, payload).await?;

    state
        .like_repository
        .unlike(user_id, &park_name)
        .await
        .map_err(internal_error("Failed to remove liked park"))?;

    Ok(Json(MessageResponse::new("Park unliked successfully")))
}

/// Reviews for one park
pub async fn list_reviews(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ReviewsQuery>,
) -> ApiResult<Json<Vec<Review>>> {
    let park_code = query
        .park_code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::bad_request("No parkCode provided"))?;

    let reviews = state
        .review_repository
        .list_for_park(&park_code)
        .await
        .map_err(internal_error("Failed to fetch reviews"))?;

    Ok(Json(reviews))
}

/// Add a review; the rating is stored as given
pub async fn create_review(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateReviewRequest>,
) -> ApiResult<Json<Review>> {
    let park_code = payload
        .park_code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::bad_request("No parkCode provided"))?;

    let star_rating = match payload.star_rating {
        None => None,
        Some(rating) => Some(
            rating
                .as_i64()
                .and_then(|r| i32::try_from(r).ok())
                .ok_or_else(|| ApiError::bad_request("star_rating must be a whole number"))?,
        ),
    };

    let review = state
        .review_repository
        .create(&NewReview {
            name: payload.name,
            review: payload.review,
            star_rating,
            park_code,
        })
        .await
        .map_err(internal_error("Failed to add review"))?;

    Ok(Json(review))
}

/// A user's visits, oldest first
pub async fn list_visits(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<VisitHistoryQuery>,
) -> ApiResult<Json<Vec<VisitEntry>>> {
    let user_id = parse_id(query.user_id.as_deref())
        .ok_or_else(|| ApiError::bad_request("No user_id provided"))?;

    let visits = state
        .visit_repository
        .list_for_user(user_id)
        .await
        .map_err(internal_error("Failed to fetch visit history"))?;

    Ok(Json(visits))
}

/// Record a visit
pub async fn create_visit(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateVisitRequest>,
) -> ApiResult<Json<VisitCreated>> {
    let (Some(user_id), Some(park), Some(date)) = (
        numeric_id(payload.user_id.as_ref()),
        payload.park.filter(|p| !p.is_empty()),
        payload.date,
    ) else {
        return Err(ApiError::bad_request("user_id, park and date are required"));
    };

    let date =
        parse_visit_date(&date).ok_or_else(|| ApiError::bad_request("date must be YYYY-MM-DD"))?;

    let id = state
        .visit_repository
        .create(user_id, &park, date)
        .await
        .map_err(internal_error("Failed to add visit to history"))?;

    Ok(Json(VisitCreated {
        id,
        user_id,
        park,
        date,
    }))
}
