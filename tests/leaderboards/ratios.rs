use brawls_stats::constants::{causes, game_types};
use sqlx::PgPool;

use crate::common::{insert_events, player, service};

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_hit_ratio_scaled_and_thresholded(pool: PgPool) -> sqlx::Result<()> {
    // 10 of 20 arrows hit
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::ARROW_FIRED, 20).await?;
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::ARROW_HIT, 10).await?;
    // Below the 15 arrow minimum
    insert_events(&pool, player(2), game_types::DODGEBOLT, causes::ARROW_FIRED, 5).await?;
    insert_events(&pool, player(2), game_types::DODGEBOLT, causes::ARROW_HIT, 5).await?;

    let board = service(pool)
        .get_leaderboard("dodgebolt_hit_ratio", None, None)
        .await
        .unwrap();

    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].player_id, player(1));
    assert_eq!(board.entries[0].value, 50);
    assert_eq!(board.entries[0].position, 1);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_threshold_is_strict(pool: PgPool) -> sqlx::Result<()> {
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::ARROW_FIRED, 15).await?;
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::ARROW_HIT, 15).await?;
    insert_events(&pool, player(2), game_types::DODGEBOLT, causes::ARROW_FIRED, 16).await?;
    insert_events(&pool, player(2), game_types::DODGEBOLT, causes::ARROW_HIT, 4).await?;

    let board = service(pool)
        .get_leaderboard("dodgebolt_hit_ratio", None, None)
        .await
        .unwrap();

    let ranked: Vec<_> = board
        .entries
        .iter()
        .map(|entry| (entry.player_id, entry.value))
        .collect();
    assert_eq!(ranked, vec![(player(2), 25)]);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_kill_death_ratio_counts_only_dodgebolt(pool: PgPool) -> sqlx::Result<()> {
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::KILL, 33).await?;
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::DEATH, 11).await?;
    // Deaths elsewhere neither count toward the threshold nor the ratio
    insert_events(&pool, player(2), game_types::DODGEBOLT, causes::KILL, 4).await?;
    insert_events(&pool, player(2), game_types::DODGEBOLT, causes::DEATH, 2).await?;
    insert_events(&pool, player(2), game_types::ROCKET_SPLEEF, causes::DEATH, 20).await?;

    let board = service(pool)
        .get_leaderboard("dodgebolt_kill_death_ratio", None, None)
        .await
        .unwrap();

    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].player_id, player(1));
    assert_eq!(board.entries[0].value, 300);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_ratio_with_no_hits_is_zero(pool: PgPool) -> sqlx::Result<()> {
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::ARROW_FIRED, 30).await?;

    let board = service(pool)
        .get_leaderboard("dodgebolt_hit_ratio", None, None)
        .await
        .unwrap();

    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].value, 0);
    Ok(())
}
