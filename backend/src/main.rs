//! Around API server
//!
//! Serves the users and cards API, backed by PostgreSQL or, for local runs,
//! an in-process store.

use anyhow::Context;
use std::net::SocketAddr;
use tokio::signal;

use around_server::auth::AuthSettings;
use around_server::config::{Config, StorageBackend};
use around_server::db;
use around_server::middleware::configure_cors;
use around_server::routes::{app_router, PipelineOptions};
use around_server::state::AppState;
use around_server::store::{MemoryStore, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting Around API server");

    if config.uses_dev_jwt_secret() {
        tracing::warn!("JWT_SECRET not set; signing tokens with the development secret");
    }

    let settings = AuthSettings::from(&config);

    let app_state = match &config.storage {
        StorageBackend::Postgres { database_url } => {
            tracing::info!("Connecting to database at {}", config.database_url_masked());
            let pool = db::create_pool(database_url, config.db_max_connections).await?;
            db::run_migrations(&pool).await?;
            AppState::from_store(PgStore::new(pool), settings)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            AppState::from_store(MemoryStore::new(), settings)
        }
    };

    let app = app_router(
        app_state,
        PipelineOptions {
            cors: Some(configure_cors(config.cors_allowed_origins.as_deref())),
            hsts: config.environment.is_production(),
        },
    );

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
