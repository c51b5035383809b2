//! # Brawls Stats Server
//!
//! Loads configuration, connects to the statistics store, builds the
//! leaderboard catalog and serves the HTTP API until Ctrl-C.

use anyhow::Context;
use brawls_stats::config::ConfigManager;
use brawls_stats::database::DatabaseConnection;
use brawls_stats::leaderboard::catalog;
use brawls_stats::logging::init_structured_logging;
use brawls_stats::web::{create_app, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let config_manager = ConfigManager::load().context("failed to load configuration")?;
    let config = config_manager.config().clone();

    let database = DatabaseConnection::new(&config.database)
        .await
        .context("failed to connect to the statistics database")?;

    let registry = catalog::builtin().context("failed to build leaderboard catalog")?;
    info!(
        leaderboards = registry.len(),
        environment = config_manager.environment(),
        "Leaderboard catalog ready"
    );

    let bind_address = config.web.bind_address.clone();
    let state = AppState::new(config, database.pool().clone(), Arc::new(registry));
    let app = create_app(state);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(bind_address = %bind_address, "🚀 Brawls stats API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
