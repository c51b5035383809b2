use brawls_stats::config::LeaderboardConfig;
use brawls_stats::constants::{causes, game_types};
use brawls_stats::leaderboard::{
    register_leaderboard, LeaderboardDefinition, LeaderboardRegistry, LeaderboardService,
    QueryFactory,
};
use brawls_stats::query_builder::ValueAggregate;
use brawls_stats::StatsError;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::common::{insert_events, insert_experience, player, service, service_with_config};

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_empty_store_yields_empty_leaderboard(pool: PgPool) -> sqlx::Result<()> {
    let board = service(pool)
        .get_leaderboard("total_experience", None, None)
        .await
        .unwrap();

    assert_eq!(board.id, "total_experience");
    assert_eq!(board.title, "Total Experience Leaderboard");
    assert!(board.entries.is_empty());
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_experience_ranked_with_player_id_tie_break(pool: PgPool) -> sqlx::Result<()> {
    let now = Utc::now();
    insert_experience(&pool, &player(3).to_string(), 30, now).await?;
    insert_experience(&pool, &player(1).to_string(), 20, now).await?;
    insert_experience(&pool, &player(1).to_string(), 30, now).await?;
    insert_experience(&pool, &player(2).to_string(), 30, now).await?;

    let board = service(pool)
        .get_leaderboard("total_experience", None, None)
        .await
        .unwrap();

    let ranked: Vec<_> = board
        .entries
        .iter()
        .map(|entry| (entry.player_id, entry.position, entry.value))
        .collect();
    assert_eq!(
        ranked,
        vec![(player(1), 1, 50), (player(2), 2, 30), (player(3), 3, 30)]
    );
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_unknown_leaderboard(pool: PgPool) -> sqlx::Result<()> {
    let result = service(pool)
        .get_leaderboard("nonexistent_board", None, None)
        .await;

    match result {
        Err(StatsError::UnknownLeaderboard { id }) => assert_eq!(id, "nonexistent_board"),
        other => panic!("expected UnknownLeaderboard, got {other:?}"),
    }
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_limit_and_offset_window(pool: PgPool) -> sqlx::Result<()> {
    let now = Utc::now();
    for (n, amount) in [(1, 50), (2, 40), (3, 30), (4, 20), (5, 10)] {
        insert_experience(&pool, &player(n).to_string(), amount, now).await?;
    }

    let board = service(pool)
        .get_leaderboard("total_experience", Some(2), Some(1))
        .await
        .unwrap();

    let ranked: Vec<_> = board
        .entries
        .iter()
        .map(|entry| (entry.player_id, entry.position, entry.value))
        .collect();
    assert_eq!(ranked, vec![(player(2), 1, 40), (player(3), 2, 30)]);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_offset_without_limit_is_ignored(pool: PgPool) -> sqlx::Result<()> {
    let now = Utc::now();
    for n in 1..=3 {
        insert_experience(&pool, &player(n).to_string(), 10 * i32::from(n), now).await?;
    }

    let board = service(pool)
        .get_leaderboard("total_experience", None, Some(2))
        .await
        .unwrap();

    assert_eq!(board.entries.len(), 3);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_limit_clamped_to_configured_maximum(pool: PgPool) -> sqlx::Result<()> {
    let now = Utc::now();
    for n in 1..=4 {
        insert_experience(&pool, &player(n).to_string(), 10, now).await?;
    }

    let config = LeaderboardConfig {
        default_limit: Some(1),
        max_limit: 2,
        ..LeaderboardConfig::default()
    };
    let service = service_with_config(pool, config);

    let clamped = service
        .get_leaderboard("total_experience", Some(100), None)
        .await
        .unwrap();
    assert_eq!(clamped.entries.len(), 2);

    let defaulted = service
        .get_leaderboard("total_experience", None, None)
        .await
        .unwrap();
    assert_eq!(defaulted.entries.len(), 1);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_corrupt_player_id_rows_are_skipped(pool: PgPool) -> sqlx::Result<()> {
    let now = Utc::now();
    insert_experience(&pool, "not-a-uuid", 1_000, now).await?;
    for n in 1..=3 {
        insert_experience(&pool, &player(n).to_string(), 10 * i32::from(n), now).await?;
    }

    let board = service(pool)
        .get_leaderboard("total_experience", None, None)
        .await
        .unwrap();

    assert_eq!(board.entries.len(), 3);
    let positions: Vec<u32> = board.entries.iter().map(|entry| entry.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(board.entries[0].player_id, player(3));
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_event_counts_are_scoped_to_game(pool: PgPool) -> sqlx::Result<()> {
    insert_events(&pool, player(1), game_types::DODGEBOLT, causes::KILL, 3).await?;
    insert_events(&pool, player(2), game_types::DODGEBOLT, causes::KILL, 1).await?;
    insert_events(&pool, player(2), game_types::ROCKET_SPLEEF, causes::KILL, 9).await?;
    insert_events(&pool, player(3), game_types::DODGEBOLT, causes::DEATH, 5).await?;

    let service = service(pool);
    let board = service
        .get_leaderboard("dodgebolt_kills", None, None)
        .await
        .unwrap();

    let ranked: Vec<_> = board
        .entries
        .iter()
        .map(|entry| (entry.player_id, entry.value))
        .collect();
    assert_eq!(ranked, vec![(player(1), 3), (player(2), 1)]);

    let spleef = service
        .get_leaderboard("rocket_spleef_kills", None, None)
        .await
        .unwrap();
    assert_eq!(spleef.entries.len(), 1);
    assert_eq!(spleef.entries[0].value, 9);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_repeated_execution_is_identical(pool: PgPool) -> sqlx::Result<()> {
    let now = Utc::now();
    for n in 1..=6 {
        insert_experience(&pool, &player(n).to_string(), 10 * i32::from(n % 3), now).await?;
    }

    let service = service(pool);
    let first = service
        .get_leaderboard("total_experience", Some(5), None)
        .await
        .unwrap();
    let second = service
        .get_leaderboard("total_experience", Some(5), None)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.entries.len(), 5);
    assert!(first
        .entries
        .windows(2)
        .all(|pair| pair[0].value >= pair[1].value));
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_every_builtin_leaderboard_executes(pool: PgPool) -> sqlx::Result<()> {
    let service = service(pool);

    for id in service.list_ids() {
        let board = service.get_leaderboard(&id, Some(10), None).await;
        assert!(board.is_ok(), "leaderboard {id} failed: {board:?}");
    }
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_slow_query_fails_within_timeout(pool: PgPool) -> sqlx::Result<()> {
    insert_experience(&pool, &player(1).to_string(), 10, Utc::now()).await?;

    let mut registry = LeaderboardRegistry::new();
    register_leaderboard(
        &mut registry,
        LeaderboardDefinition::new("sleepy", "Sleepy Leaderboard", |_| {
            QueryFactory::new(
                "(SELECT player_id, pg_sleep(3) AS pause FROM \"StatisticEvents\") slow",
                ValueAggregate::event_count().into(),
            )
        }),
    )
    .unwrap();
    let config = LeaderboardConfig {
        query_timeout_ms: 200,
        ..LeaderboardConfig::default()
    };
    let service = LeaderboardService::new(pool.clone(), Arc::new(registry), config);

    let started = Instant::now();
    let result = service.get_leaderboard("sleepy", None, None).await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(
        matches!(
            result,
            Err(StatsError::QueryTimeout { .. }) | Err(StatsError::DataStore(_))
        ),
        "expected the query to be cut off, got {result:?}"
    );

    // The connection went back to the pool usable
    let (one,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await?;
    assert_eq!(one, 1);
    Ok(())
}
