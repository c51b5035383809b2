//! # Web API Application State
//!
//! Shared state handed to every handler: configuration, the connection pool
//! and the leaderboard service built on top of it.

use crate::config::StatsConfig;
use crate::leaderboard::{LeaderboardRegistry, LeaderboardService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<StatsConfig>,
    pub pool: PgPool,
    pub leaderboards: LeaderboardService,
}

impl AppState {
    pub fn new(config: StatsConfig, pool: PgPool, registry: Arc<LeaderboardRegistry>) -> Self {
        let leaderboards =
            LeaderboardService::new(pool.clone(), registry, config.leaderboards.clone());
        Self {
            config: Arc::new(config),
            pool,
            leaderboards,
        }
    }
}
