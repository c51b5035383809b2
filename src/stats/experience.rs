//! Lifetime experience totals

use crate::constants::columns;
use crate::error::{Result, StatsError};
use crate::leaderboard::{parse_row, QueryFactory};
use crate::models::{LeaderboardRow, TotalExperience};
use crate::query_builder::ValueAggregate;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

/// Every player's total, highest first; rows with unparsable ids are skipped
pub async fn all_totals(pool: &PgPool) -> Result<Vec<TotalExperience>> {
    let rows: Vec<LeaderboardRow> = QueryFactory::statistics(ValueAggregate::experience_sum())
        .finalize(None, None)
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .filter_map(|row| match parse_row(row) {
            Ok((uuid, experience)) => Some(TotalExperience { uuid, experience }),
            Err(reason) => {
                warn!(reason = %reason, "Skipping experience row");
                None
            }
        })
        .collect())
}

/// One player's total, `PlayerNotFound` when they have no events
pub async fn player_total(pool: &PgPool, player_id: Uuid) -> Result<TotalExperience> {
    let row: Option<LeaderboardRow> = QueryFactory::statistics(ValueAggregate::experience_sum())
        .narrow(|query| query.where_eq(columns::PLAYER_ID, player_id))
        .finalize(None, None)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(TotalExperience {
            uuid: player_id,
            experience: row.value.unwrap_or(0),
        }),
        None => Err(StatsError::player_not_found(player_id)),
    }
}
