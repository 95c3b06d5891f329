//! Park review repository

use anyhow::Result;
use sqlx::PgPool;

use crate::models::parks::{NewReview, Review};

#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reviews of one park, oldest first
    pub async fn list_for_park(&self, park_code: &str) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT review_id, name, review, star_rating, park_code
            FROM user_reviews
            WHERE park_code = $1
            ORDER BY review_id
            "#,
        )
        .bind(park_code)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    pub async fn create(&self, review: &NewReview) -> Result<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO user_reviews (name, review, star_rating, park_code)
            VALUES ($1, $2, $3, $4)
            RETURNING review_id, name, review, star_rating, park_code
            "#,
        )
        .bind(&review.name)
        .bind(&review.review)
        .bind(review.star_rating)
        .bind(&review.park_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }
}
