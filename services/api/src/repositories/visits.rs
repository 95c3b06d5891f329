//! Visit history repository

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::parks::VisitEntry;

#[derive(Clone)]
pub struct VisitRepository {
    pool: PgPool,
}

impl VisitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A user's visits ordered by ascending visit date
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<VisitEntry>> {
        let visits = sqlx::query_as::<_, VisitEntry>(
            r#"
            SELECT park_name, visit_date
            FROM visit_history
            WHERE user_id = $1
            ORDER BY visit_date ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(visits)
    }

    /// Append a visit and return its id
    pub async fn create(&self, user_id: i64, park_name: &str, visit_date: NaiveDate) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO visit_history (user_id, park_name, visit_date)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(park_name)
        .bind(visit_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
