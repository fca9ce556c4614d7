//! HTTP server initialization and runtime setup.
//!
//! Builds the layers from the inside out (store → service → router) and
//! runs the Axum server until a shutdown signal arrives.

use crate::application::services::ShorteningService;
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteShortUrlRepository, sqlite};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Opens the database and returns a ready store.
///
/// Creates the data directory if needed, connects, verifies connectivity
/// and ensures the schema.
///
/// # Errors
///
/// Returns an error if any of these steps fails.
pub async fn open_store(config: &Config) -> Result<(Arc<SqlitePool>, SqliteShortUrlRepository)> {
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create data directory {}",
                config.data_dir.display()
            )
        })?;

    let path = config.database_path();
    let pool = sqlite::connect(&path, config.db_max_connections, config.acquire_timeout())
        .await
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);
    let repository = SqliteShortUrlRepository::init(pool.clone())
        .await
        .context("Failed to initialize repository")?;

    Ok((pool, repository))
}

/// Wires store, code generator and service into the shared state.
pub fn build_state(config: &Config, repository: SqliteShortUrlRepository) -> AppState {
    let generator = Arc::new(RandomCodeGenerator::new());
    let service = ShorteningService::new(Arc::new(repository), generator, config.base_url.clone());

    AppState::new(Arc::new(service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory or database cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (pool, repository) = open_store(&config).await?;

    let state = build_state(&config, repository);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
