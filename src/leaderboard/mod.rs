//! # Leaderboards
//!
//! Declarative leaderboard definitions and their execution.
//!
//! ## Flow
//!
//! ```text
//! id ─▶ LeaderboardRegistry ─▶ LeaderboardDefinition ─▶ QueryFactory
//!        (catalog, startup)      (per request, with QueryContext)
//!                                                          │ finalize(limit, offset)
//!                                                          ▼
//!                          Leaderboard ◀─ rank_rows ◀─ read-only transaction
//! ```
//!
//! - [`query_factory`] - base query + value expression, narrowing and finalizing
//! - [`definition`] - registered definitions and the per-request context
//! - [`catalog`] - the builtin leaderboards
//! - [`ranking`] - row parsing and position assignment
//! - [`service`] - end-to-end execution against the pool

pub mod catalog;
pub mod definition;
pub mod query_factory;
pub mod ranking;
pub mod service;

pub use definition::{
    register_leaderboard, FactoryProducer, LeaderboardDefinition, LeaderboardRegistry,
    QueryContext,
};
pub use query_factory::QueryFactory;
pub use ranking::{parse_row, rank_rows, RankedRows};
pub use service::LeaderboardService;
