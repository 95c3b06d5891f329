//! Liked parks repository

use anyhow::Result;
use sqlx::PgPool;

use crate::models::parks::LikedPark;

#[derive(Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Parks liked by a user
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<LikedPark>> {
        let parks = sqlx::query_as::<_, LikedPark>(
            "SELECT liked_park FROM liked_parks WHERE user_id = $1 ORDER BY liked_park",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(parks)
    }

    /// Record a like
    ///
    /// The insert is conditional on the `(user_id, liked_park)` unique
    /// constraint, so concurrent duplicates cannot both land. Returns false
    /// when the park was already liked.
    pub async fn like(&self, user_id: i64, park_name: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO liked_parks (user_id, liked_park)
            VALUES ($1, $2)
            ON CONFLICT (user_id, liked_park) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(park_name)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Remove a like, returning the number of rows deleted
    pub async fn unlike(&self, user_id: i64, park_name: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM liked_parks WHERE user_id = $1 AND liked_park = $2")
            .bind(user_id)
            .bind(park_name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
