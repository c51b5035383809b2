use crate::config::DatabaseConfig;
use crate::logging::log_database_operation;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Instant;

/// Owns the shared connection pool. Requests borrow connections from it and
/// return them when their transaction or query completes.
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Connect using the pool settings from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let started = Instant::now();

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .connect(&config.url)
            .await?;

        log_database_operation(
            "connect",
            None,
            "ok",
            Some(started.elapsed().as_millis() as u64),
            Some(&format!("max_connections={}", config.max_connections)),
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<bool, sqlx::Error> {
        health_check(&self.pool).await
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// `SELECT 1` round trip
pub async fn health_check(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 as health").fetch_one(pool).await?;

    let health: i32 = row.get("health");
    Ok(health == 1)
}
