#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Brawls Stats
//!
//! Leaderboards and player statistics for the MC Brawls game network, served
//! from the shared statistics store.
//!
//! ## Overview
//!
//! Game servers append one row per in-game event (a kill, a round win, an
//! arrow fired) to the statistics store. This crate turns those rows into
//! ranked leaderboards by composing SQL from small pieces: an aggregate value
//! expression, optional narrowing filters, and a final grouping, ordering
//! and paging step.
//!
//! ## Module Organization
//!
//! - [`query_builder`] - SQL composition with bound parameters and aggregate expressions
//! - [`registry`] - Keyed registry preserving registration order
//! - [`leaderboard`] - Query factories, the builtin catalog and the execution service
//! - [`stats`] - Experience totals, chat counts and player profiles
//! - [`models`] - Response shapes
//! - [`database`] - Pool construction and health checks
//! - [`config`] - Layered configuration
//! - [`web`] - axum router, authentication and handlers
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brawls_stats::config::StatsConfig;
//! use brawls_stats::leaderboard::{catalog, LeaderboardService};
//! use sqlx::PgPool;
//! use std::sync::Arc;
//!
//! # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let config = StatsConfig::default();
//! let registry = Arc::new(catalog::builtin()?);
//! let service = LeaderboardService::new(pool, registry, config.leaderboards);
//!
//! let board = service.get_leaderboard("dodgebolt_kills", Some(10), None).await?;
//! for entry in &board.entries {
//!     println!("{} {} {}", entry.position, entry.player_id, entry.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! Database tests use SQLx native testing with a fresh database per test:
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests, requires DATABASE_URL
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod leaderboard;
pub mod logging;
pub mod models;
pub mod query_builder;
pub mod registry;
pub mod stats;
pub mod web;

pub use config::{ConfigManager, StatsConfig};
pub use error::{Result, StatsError};
pub use leaderboard::{LeaderboardService, QueryContext, QueryFactory};
pub use models::{Leaderboard, LeaderboardEntry};
