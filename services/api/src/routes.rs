//! API service routes

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, warn};

use crate::{AppState, config::ServerConfig, error::ApiError};

pub mod accounts;
pub mod uploads;
pub mod parks;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/test-db", get(test_db))
        .route("/api/upload", post(uploads::upload_media))
        .route("/api/gallery", get(uploads::list_gallery))
        .route("/users", get(accounts::list_users).post(accounts::create_user))
        .route(
            "/users/:id",
            get(accounts::get_user).put(accounts::update_user),
        )
        .route("/login", post(accounts::login))
        .route("/recover", post(accounts::recover))
        .route(
            "/liked-parks",
            get(parks::list_liked_parks)
                .post(parks::like_park)
                .delete(parks::unlike_park),
        )
        .route("/liked-parks/:user_id", get(parks::list_liked_parks_for_user))
        .route(
            "/reviews",
            get(parks::list_reviews).post(parks::create_review),
        )
        .route(
            "/visit-history",
            get(parks::list_visits).post(parks::create_visit),
        )
        .with_state(state)
}

/// Router with body limit, CORS and request tracing applied
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    create_router(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}

/// Log an unexpected failure and hide it behind a client-facing message
pub(crate) fn internal_error<E: std::fmt::Display>(
    message: &'static str,
) -> impl FnOnce(E) -> ApiError {
    move |e| {
        error!("{}: {}", message, e);
        ApiError::internal(message)
    }
}

pub async fn root() -> &'static str {
    "Backend is running"
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = common::database::health_check(&state.db_pool).await;
    let storage = state.object_store.is_some();

    Json(json!({
        "status": if database { "ok" } else { "degraded" },
        "service": "park-explorer-api",
        "database": database,
        "storage": storage,
    }))
}

/// Database round trip
pub async fn test_db(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let result: i32 = sqlx::query_scalar("SELECT 1 + 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(internal_error("Database error"))?;

    Ok(Json(json!([{ "result": result }])))
}
