//! # Leaderboard Execution Service
//!
//! Resolves a leaderboard id, builds its query for the current request and
//! runs it inside a read-only transaction bounded by the configured timeout.

use super::definition::{LeaderboardRegistry, QueryContext};
use super::ranking::rank_rows;
use crate::config::LeaderboardConfig;
use crate::error::{Result, StatsError};
use crate::logging::log_leaderboard_operation;
use crate::models::{Leaderboard, LeaderboardRow};
use crate::query_builder::QueryBuilder;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LeaderboardService {
    pool: PgPool,
    registry: Arc<LeaderboardRegistry>,
    config: LeaderboardConfig,
}

impl LeaderboardService {
    pub fn new(pool: PgPool, registry: Arc<LeaderboardRegistry>, config: LeaderboardConfig) -> Self {
        Self {
            pool,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &LeaderboardRegistry {
        &self.registry
    }

    /// Ids of every leaderboard in registration order
    pub fn list_ids(&self) -> Vec<String> {
        self.registry.all_ids()
    }

    /// Execute a leaderboard against live data
    pub async fn get_leaderboard(
        &self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Leaderboard> {
        self.get_leaderboard_at(id, limit, offset, QueryContext::now())
            .await
    }

    /// Execute a leaderboard with an explicit request context
    pub async fn get_leaderboard_at(
        &self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        context: QueryContext,
    ) -> Result<Leaderboard> {
        let started = Instant::now();
        let definition = self
            .registry
            .get(id)
            .ok_or_else(|| StatsError::unknown_leaderboard(id))?;

        let factory = definition.produce(&context);
        let query = factory.finalize(self.config.effective_limit(limit), offset);

        let rows = match self.fetch_rows(&query).await {
            Ok(rows) => rows,
            Err(error) => {
                log_leaderboard_operation(
                    "get_leaderboard",
                    id,
                    "failed",
                    None,
                    Some(started.elapsed().as_millis() as u64),
                );
                return Err(error);
            }
        };

        let ranked = rank_rows(rows);
        log_leaderboard_operation(
            "get_leaderboard",
            id,
            if ranked.skipped.is_empty() {
                "ok"
            } else {
                "ok_with_skipped_rows"
            },
            Some(ranked.entries.len()),
            Some(started.elapsed().as_millis() as u64),
        );

        Ok(Leaderboard {
            id: definition.id().to_string(),
            title: definition.title().to_string(),
            entries: ranked.entries,
        })
    }

    /// Run a finalized query under the configured timeout.
    ///
    /// The timeout covers connection checkout too. On expiry the transaction
    /// is dropped, which rolls it back and returns the connection.
    async fn fetch_rows(&self, query: &QueryBuilder) -> Result<Vec<LeaderboardRow>> {
        let timeout = self.config.query_timeout();
        let statement = query.build();
        debug!(sql = %statement.sql, params = statement.params.len(), "Executing leaderboard query");

        match tokio::time::timeout(timeout, self.fetch_rows_read_only(query)).await {
            Ok(result) => result,
            Err(_) => Err(StatsError::QueryTimeout {
                timeout_ms: self.config.query_timeout_ms,
            }),
        }
    }

    async fn fetch_rows_read_only(&self, query: &QueryBuilder) -> Result<Vec<LeaderboardRow>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;
        // SET cannot take bind parameters; the value is a configured integer
        sqlx::query(&format!(
            "SET LOCAL statement_timeout = {}",
            self.config.query_timeout_ms
        ))
        .execute(&mut *tx)
        .await?;

        let rows = query.fetch_all::<LeaderboardRow, _>(&mut *tx).await?;
        tx.commit().await?;
        Ok(rows)
    }
}
