//! Account endpoints: signup, login, recovery and settings

use axum::{Json, extract::State};
use tracing::info;

use super::internal_error;
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::{AppJson, AppPath},
    models::{
        AccountActionResponse, AccountResponse, CreateAccountRequest, LoginRequest,
        MessageResponse, NewAccount, RecoverRequest, UpdateSettingsRequest, secret_matches,
    },
    password::{hash_password, verify_password},
};

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Get all accounts
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<AccountResponse>>> {
    let accounts = state
        .account_repository
        .get_all()
        .await
        .map_err(internal_error("Failed to fetch users"))?;

    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Create a new account (signup)
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAccountRequest>,
) -> ApiResult<Json<AccountActionResponse>> {
    let (Some(username), Some(password)) =
        (required(payload.username), required(payload.password))
    else {
        return Err(ApiError::bad_request("Username and password are required"));
    };

    let password_hash = hash_password(&password).map_err(internal_error("Failed to create user"))?;

    let account = NewAccount {
        username,
        password_hash,
        secret: payload.secret,
        fav_park: payload.fav_park,
        profile_image: payload.profile_image.filter(|p| !p.is_empty()),
    };

    let user_id = state
        .account_repository
        .create(&account)
        .await
        .map_err(internal_error("Failed to create user"))?;

    Ok(Json(AccountActionResponse {
        message: "User created successfully".to_string(),
        user_id,
    }))
}

/// Log in with a case-insensitive username
///
/// An unknown username and a wrong password are reported differently.
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> ApiResult<Json<AccountActionResponse>> {
    let (Some(username), Some(password)) = (required(payload.username), payload.password) else {
        return Err(ApiError::bad_request("Username and password are required"));
    };

    info!("Login attempt for user: {}", username.trim());

    let account = state
        .account_repository
        .find_for_login(&username)
        .await
        .map_err(internal_error("Failed to login"))?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    let matches =
        verify_password(&password, &account.password).map_err(internal_error("Failed to login"))?;
    if !matches {
        return Err(ApiError::Unauthorized("Incorrect password".to_string()));
    }

    Ok(Json(AccountActionResponse {
        message: "Login successful".to_string(),
        user_id: account.user_id,
    }))
}

/// Recover an account with its secret word
pub async fn recover(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RecoverRequest>,
) -> ApiResult<Json<AccountActionResponse>> {
    let (Some(username), Some(secret_word)) = (required(payload.username), payload.secret_word)
    else {
        return Err(ApiError::bad_request("Username and secret word are required"));
    };

    let account = state
        .account_repository
        .find_by_username(&username)
        .await
        .map_err(internal_error("Failed to recover account"))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !secret_matches(account.secret.as_deref(), &secret_word) {
        return Err(ApiError::Unauthorized("Incorrect secret word".to_string()));
    }

    Ok(Json(AccountActionResponse {
        message: "Account recovery successful".to_string(),
        user_id: account.user_id,
    }))
}

/// Get the settings of one account
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> ApiResult<Json<AccountResponse>> {
    let account = state
        .account_repository
        .find_by_id(user_id)
        .await
        .map_err(internal_error("Failed to fetch user settings"))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(account.into()))
}

/// Update the settings of one account
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateSettingsRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let account = state
        .account_repository
        .find_by_id(user_id)
        .await
        .map_err(internal_error("Failed to update user settings"))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let account = account
        .apply_settings(&payload)
        .map_err(internal_error("Failed to update user settings"))?;

    state
        .account_repository
        .update_settings(&account)
        .await
        .map_err(internal_error("Failed to update user settings"))?;

    Ok(Json(MessageResponse::new("User settings updated successfully")))
}
