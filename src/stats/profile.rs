//! Player profiles: permission rank plus lifetime experience

use crate::constants::{columns, tables};
use crate::error::{Result, StatsError};
use crate::models::{Profile, Rank};
use crate::query_builder::{Expr, QueryBuilder};
use sqlx::{FromRow, PgPool};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct ProfileRow {
    primary_group: String,
    experience: i64,
}

pub fn profile_query(player_id: Uuid) -> QueryBuilder {
    QueryBuilder::new(&format!("{} p", tables::LUCKPERMS_PLAYERS))
        .select(&["p.primary_group"])
        .select_expr(Expr::sum(Expr::column("s.experience_amount")), "experience")
        .left_join(
            &format!("{} s", tables::STATISTIC_EVENTS),
            "s.player_id = p.uuid",
        )
        .where_eq(&format!("p.{}", columns::UUID), player_id)
        .group_by(&["p.primary_group"])
}

/// Unknown groups fall back to the default rank
pub fn rank_for_group(group: &str) -> Rank {
    group.parse().unwrap_or_else(|_| {
        warn!(group = %group, "Unknown permission group, using default rank");
        Rank::Default
    })
}

/// Profile of a player with a permissions record
pub async fn player_profile(pool: &PgPool, player_id: Uuid) -> Result<Profile> {
    let row: Option<ProfileRow> = profile_query(player_id).fetch_optional(pool).await?;
    let row = row.ok_or_else(|| StatsError::player_not_found(player_id))?;

    Ok(Profile {
        uuid: player_id,
        rank: rank_for_group(&row.primary_group),
        experience: row.experience,
    })
}
