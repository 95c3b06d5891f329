//! API models for request and response payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::password::hash_password;

pub mod media;
pub mod parks;

/// Number sent either as a JSON number or as a numeric string
///
/// Browser forms submit every value as text, so ids and ratings arrive in
/// both shapes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(i64),
    Float(f64),
    Text(String),
}

impl NumericField {
    /// Whole-number value; fractional numbers and non-numeric text give `None`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumericField::Number(n) => Some(*n),
            NumericField::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Some(*f as i64)
            }
            NumericField::Float(_) => None,
            NumericField::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Parse an optional numeric id out of a text value
pub fn parse_id(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// User account row
#[derive(Debug, Clone, FromRow)]
pub struct UserAccount {
    pub user_id: i64,
    pub username: String,
    /// Argon2 PHC string
    pub password: String,
    pub secret: Option<String>,
    pub fav_park: Option<String>,
    pub profile_image: Option<String>,
}

impl UserAccount {
    /// Merge a settings update into this account
    ///
    /// The password is re-hashed only when a non-blank one is supplied.
    /// `secret` and `fav_park` are replaced whenever present, the profile
    /// image only when non-empty.
    pub fn apply_settings(mut self, update: &UpdateSettingsRequest) -> anyhow::Result<Self> {
        if let Some(password) = update
            .password
            .as_deref()
            .filter(|p| !p.trim().is_empty())
        {
            self.password = hash_password(password)?;
        }
        if let Some(secret) = &update.secret {
            self.secret = Some(secret.clone());
        }
        if let Some(fav_park) = &update.fav_park {
            self.fav_park = Some(fav_park.clone());
        }
        if let Some(profile_image) = update.profile_image.as_deref().filter(|p| !p.is_empty()) {
            self.profile_image = Some(profile_image.to_string());
        }

        Ok(self)
    }
}

/// Account as returned to clients; the password hash never leaves the server
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub user_id: i64,
    pub username: String,
    pub secret: Option<String>,
    pub fav_park: Option<String>,
    pub profile_image: Option<String>,
}

impl From<UserAccount> for AccountResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            user_id: account.user_id,
            username: account.username,
            secret: account.secret,
            fav_park: account.fav_park,
            profile_image: account.profile_image,
        }
    }
}

/// Request for account signup
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub secret: Option<String>,
    pub fav_park: Option<String>,
    pub profile_image: Option<String>,
}

/// Account ready to be inserted
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub secret: Option<String>,
    pub fav_park: Option<String>,
    pub profile_image: Option<String>,
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Request for account recovery
#[derive(Debug, Deserialize)]
pub struct RecoverRequest {
    pub username: Option<String>,
    #[serde(rename = "secretWord")]
    pub secret_word: Option<String>,
}

/// Request for an account settings update
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub password: Option<String>,
    pub secret: Option<String>,
    pub fav_park: Option<String>,
    pub profile_image: Option<String>,
}

/// Response of signup, login and recovery
#[derive(Debug, Serialize)]
pub struct AccountActionResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login lookups compare lowercase, trimmed usernames
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Recovery secret check: trimmed and case-insensitive
pub fn secret_matches(stored: Option<&str>, given: &str) -> bool {
    stored
        .map(|s| s.trim().to_lowercase() == given.trim().to_lowercase())
        .unwrap_or(false)
}
