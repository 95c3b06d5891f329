//! Models for likes, reviews and visit history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::NumericField;

/// Body of like and unlike requests
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<NumericField>,
    #[serde(rename = "parkName")]
    pub park_name: Option<String>,
}

/// Query of the liked parks listing
#[derive(Debug, Deserialize)]
pub struct LikedParksQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LikedPark {
    pub liked_park: String,
}

/// Review row
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub review_id: i64,
    pub name: Option<String>,
    pub review: Option<String>,
    pub star_rating: Option<i32>,
    pub park_code: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    #[serde(rename = "parkCode")]
    pub park_code: Option<String>,
}

/// Request for a new review
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub name: Option<String>,
    pub review: Option<String>,
    pub star_rating: Option<NumericField>,
    #[serde(rename = "parkCode")]
    pub park_code: Option<String>,
}

/// Review ready to be inserted; the rating range is not checked
#[derive(Debug, Clone)]
pub struct NewReview {
    pub name: Option<String>,
    pub review: Option<String>,
    pub star_rating: Option<i32>,
    pub park_code: String,
}

/// Visit history row as listed
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VisitEntry {
    pub park_name: String,
    pub visit_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct VisitHistoryQuery {
    pub user_id: Option<String>,
}

/// Request for a new visit
#[derive(Debug, Deserialize)]
pub struct CreateVisitRequest {
    pub user_id: Option<NumericField>,
    pub park: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

/// Response for a recorded visit
#[derive(Debug, Serialize)]
pub struct VisitCreated {
    pub id: i64,
    pub user_id: i64,
    pub park: String,
    pub date: NaiveDate,
}

/// Parse a visit date, accepting a trailing time part
pub fn parse_visit_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
