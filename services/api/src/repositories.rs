//! Repositories for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::{NewAccount, UserAccount, normalize_username};

pub mod likes;
pub mod reviews;
pub mod visits;

pub use likes::LikeRepository;
pub use reviews::ReviewRepository;
pub use visits::VisitRepository;

const ACCOUNT_COLUMNS: &str = "user_id, username, password, secret, fav_park, profile_image";

/// Account repository for database operations
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account and return its id
    ///
    /// Usernames are not checked for uniqueness.
    pub async fn create(&self, account: &NewAccount) -> Result<i64> {
        info!("Creating new account: {}", account.username);

        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO user_accounts (username, password, secret, fav_park, profile_image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id
            "#,
        )
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(&account.secret)
        .bind(&account.fav_park)
        .bind(&account.profile_image)
        .fetch_one(&self.pool)
        .await?;

        Ok(user_id)
    }

    /// Get all accounts
    pub async fn get_all(&self) -> Result<Vec<UserAccount>> {
        let accounts = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {} FROM user_accounts ORDER BY user_id",
            ACCOUNT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    /// Find an account by ID
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<UserAccount>> {
        let account = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {} FROM user_accounts WHERE user_id = $1",
            ACCOUNT_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Find an account by username, ignoring case and surrounding whitespace
    ///
    /// When several accounts share a username the oldest one wins.
    pub async fn find_for_login(&self, username: &str) -> Result<Option<UserAccount>> {
        let account = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {} FROM user_accounts WHERE LOWER(username) = $1 ORDER BY user_id LIMIT 1",
            ACCOUNT_COLUMNS
        ))
        .bind(normalize_username(username))
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Find an account by its exact username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>> {
        let account = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {} FROM user_accounts WHERE username = $1 ORDER BY user_id LIMIT 1",
            ACCOUNT_COLUMNS
        ))
        .bind(username.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Check whether an account exists
    pub async fn exists(&self, user_id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM user_accounts WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Persist the mutable settings of an account
    pub async fn update_settings(&self, account: &UserAccount) -> Result<()> {
        info!("Updating settings for account: {}", account.user_id);

        sqlx::query(
            r#"
            UPDATE user_accounts
            SET password = $1, secret = $2, fav_park = $3, profile_image = $4
            WHERE user_id = $5
            "#,
        )
        .bind(&account.password)
        .bind(&account.secret)
        .bind(&account.fav_park)
        .bind(&account.profile_image)
        .bind(account.user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Point an account's profile image at an uploaded object
    ///
    /// Returns false when no account has this id.
    pub async fn set_profile_image(&self, user_id: i64, url: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE user_accounts SET profile_image = $1 WHERE user_id = $2")
            .bind(url)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
