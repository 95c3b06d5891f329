//! Application state shared across handlers

use std::sync::Arc;

use media::ObjectStore;
use sqlx::PgPool;

use crate::repositories::{AccountRepository, LikeRepository, ReviewRepository, VisitRepository};

/// Application state shared across handlers
///
/// Built once at startup; every handle is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub account_repository: AccountRepository,
    pub like_repository: LikeRepository,
    pub review_repository: ReviewRepository,
    pub visit_repository: VisitRepository,
    /// Absent when the bucket or credentials are not configured
    pub object_store: Option<Arc<dyn ObjectStore>>,
}

impl AppState {
    pub fn new(db_pool: PgPool, object_store: Option<Arc<dyn ObjectStore>>) -> Self {
        Self {
            account_repository: AccountRepository::new(db_pool.clone()),
            like_repository: LikeRepository::new(db_pool.clone()),
            review_repository: ReviewRepository::new(db_pool.clone()),
            visit_repository: VisitRepository::new(db_pool.clone()),
            db_pool,
            object_store,
        }
    }
}
