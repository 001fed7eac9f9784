//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state construction, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::{MemoryLinkStore, RedisLinkStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the link store selected by the configuration.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable. A configured
/// Redis never falls back to the in-memory store.
pub async fn open_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let store: Arc<dyn LinkStore> = match &config.redis_url {
        Some(redis_url) => Arc::new(
            RedisLinkStore::connect(redis_url, config.redis_key_prefix.clone())
                .await
                .context("Failed to open Redis link store")?,
        ),
        None => {
            tracing::warn!("No Redis configured; using in-memory link store");
            Arc::new(MemoryLinkStore::new())
        }
    };

    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (Redis or in-memory)
/// - Application state
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config).await?;
    tracing::info!(
        backend = store.backend_name(),
        durable = config.is_redis_enabled(),
        "Link store ready"
    );

    let state = AppState::new(store, config.api_key.as_deref(), &config.site_name);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
