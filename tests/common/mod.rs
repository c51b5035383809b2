//! Shared seeding helpers for database-backed tests

#![allow(dead_code)]

use brawls_stats::config::LeaderboardConfig;
use brawls_stats::leaderboard::{catalog, LeaderboardService};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Deterministic player ids so tie-break order is predictable in assertions
pub fn player(n: u8) -> Uuid {
    Uuid::from_bytes([n; 16])
}

/// Insert a single statistic event
pub async fn insert_event(
    pool: &PgPool,
    player_id: &str,
    cause_id: &str,
    game_type: Option<&str>,
    experience: i32,
    timestamp: DateTime<Utc>,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"INSERT INTO "StatisticEvents" (player_id, cause_id, game_type, experience_amount, "timestamp")
           VALUES ($1, $2, $3, $4, $5)"#,
    )
    .bind(player_id)
    .bind(cause_id)
    .bind(game_type)
    .bind(experience)
    .bind(timestamp)
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert `count` identical game events for one player
pub async fn insert_events(
    pool: &PgPool,
    player_id: Uuid,
    game_type: &str,
    cause_id: &str,
    count: usize,
) -> sqlx::Result<()> {
    for _ in 0..count {
        insert_event(
            pool,
            &player_id.to_string(),
            cause_id,
            Some(game_type),
            0,
            Utc::now(),
        )
        .await?;
    }
    Ok(())
}

/// Insert one experience award for a player
pub async fn insert_experience(
    pool: &PgPool,
    player_id: &str,
    amount: i32,
    timestamp: DateTime<Utc>,
) -> sqlx::Result<()> {
    insert_event(pool, player_id, "experience", None, amount, timestamp).await
}

pub async fn insert_chat(
    pool: &PgPool,
    player_id: Uuid,
    chat_mode: &str,
    chat_result: &str,
) -> sqlx::Result<()> {
    sqlx::query(r#"INSERT INTO "ChatLogs" (player_id, chat_mode, chat_result) VALUES ($1, $2, $3)"#)
        .bind(player_id.to_string())
        .bind(chat_mode)
        .bind(chat_result)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn insert_api_key(pool: &PgPool, player_id: Uuid, api_key: &str) -> sqlx::Result<()> {
    sqlx::query(r#"INSERT INTO "ApiKeys" (player_id, api_key) VALUES ($1, $2)"#)
        .bind(player_id.to_string())
        .bind(api_key)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn insert_permissions(
    pool: &PgPool,
    player_id: Uuid,
    username: &str,
    primary_group: &str,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"INSERT INTO "luckperms_players" (uuid, username, primary_group) VALUES ($1, $2, $3)"#,
    )
    .bind(player_id.to_string())
    .bind(username)
    .bind(primary_group)
    .execute(pool)
    .await?;
    Ok(())
}

/// Service over the builtin catalog with default limits
pub fn service(pool: PgPool) -> LeaderboardService {
    service_with_config(pool, LeaderboardConfig::default())
}

pub fn service_with_config(pool: PgPool, config: LeaderboardConfig) -> LeaderboardService {
    let registry = catalog::builtin().expect("builtin catalog has unique ids");
    LeaderboardService::new(pool, Arc::new(registry), config)
}
