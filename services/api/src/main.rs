use std::sync::Arc;

use anyhow::Result;
use api::{AppState, config::ServerConfig, create_app};
use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use media::{ObjectStore, S3ObjectStore, StorageConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "api=info,park_explorer_api=info,media=info,common=info,tower_http=info".into()
        }))
        .init();

    info!("Starting park explorer API");

    let server_config = ServerConfig::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    if health_check(&pool).await {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }
    run_migrations(&pool).await?;

    // Uploads answer 500 until the bucket and credentials are configured
    let storage_config = StorageConfig::from_env();
    let object_store = match S3ObjectStore::from_config(&storage_config).await {
        Some(store) => Some(Arc::new(store) as Arc<dyn ObjectStore>),
        None => {
            warn!("Uploads and gallery listings are disabled");
            None
        }
    };

    let app_state = AppState::new(pool, object_store);
    let app = create_app(app_state, &server_config);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Park explorer API listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
