use brawls_stats::constants::{causes, game_types};
use brawls_stats::leaderboard::QueryContext;
use chrono::{Duration, TimeZone, Utc};
use sqlx::PgPool;

use crate::common::{insert_event, insert_experience, player, service};

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_weekly_experience_uses_request_time(pool: PgPool) -> sqlx::Result<()> {
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
    insert_experience(&pool, &player(1).to_string(), 40, now - Duration::days(3)).await?;
    insert_experience(&pool, &player(1).to_string(), 500, now - Duration::days(8)).await?;
    insert_experience(&pool, &player(2).to_string(), 60, now - Duration::hours(1)).await?;
    insert_experience(&pool, &player(3).to_string(), 90, now + Duration::days(1)).await?;

    let board = service(pool)
        .get_leaderboard_at("weekly_experience", None, None, QueryContext::at(now))
        .await
        .unwrap();

    let ranked: Vec<_> = board
        .entries
        .iter()
        .map(|entry| (entry.player_id, entry.value))
        .collect();
    assert_eq!(ranked, vec![(player(2), 60), (player(1), 40)]);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_giveaway_counts_kills_inside_window(pool: PgPool) -> sqlx::Result<()> {
    let inside = Utc.with_ymd_and_hms(2024, 10, 15, 18, 0, 0).unwrap();
    let last_second = Utc.with_ymd_and_hms(2024, 11, 7, 23, 59, 59).unwrap();
    let after = Utc.with_ymd_and_hms(2024, 11, 8, 0, 0, 0).unwrap();
    let p1 = player(1).to_string();
    let p2 = player(2).to_string();

    insert_event(&pool, &p1, causes::KILL, Some(game_types::DODGEBOLT), 0, inside).await?;
    insert_event(&pool, &p1, causes::KILL, Some(game_types::TUMBLE), 0, last_second).await?;
    insert_event(&pool, &p1, causes::KILL, Some(game_types::DODGEBOLT), 0, after).await?;
    insert_event(&pool, &p2, causes::KILL, Some(game_types::LASER_TAG), 0, inside).await?;
    insert_event(&pool, &p2, causes::DEATH, Some(game_types::LASER_TAG), 0, inside).await?;

    let board = service(pool)
        .get_leaderboard("october_2024_giveaway", None, None)
        .await
        .unwrap();

    assert_eq!(board.title, "Kills Leaderboard (7th Oct - 7th Nov)");
    let ranked: Vec<_> = board
        .entries
        .iter()
        .map(|entry| (entry.player_id, entry.value))
        .collect();
    assert_eq!(ranked, vec![(player(1), 2), (player(2), 1)]);
    Ok(())
}
