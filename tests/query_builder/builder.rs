use brawls_stats::constants::{causes, columns, game_types, tables};
use brawls_stats::query_builder::{Condition, Expr, QueryBuilder, SqlValue};
use chrono::Utc;
use sqlx::PgPool;

use crate::common::{insert_api_key, insert_events, player};

#[test]
fn test_basic_query_building() {
    let query = QueryBuilder::new(tables::STATISTIC_EVENTS)
        .select(&["player_id", "cause_id"])
        .where_eq(columns::GAME_TYPE, game_types::TUMBLE)
        .order_desc("player_id")
        .limit(10);

    let statement = query.build();
    assert_eq!(
        statement.sql,
        "SELECT player_id, cause_id FROM \"StatisticEvents\" \
         WHERE game_type = $1 ORDER BY player_id DESC LIMIT 10 OFFSET 0"
    );
    assert_eq!(statement.params, vec![SqlValue::from("tumble")]);
}

#[test]
fn test_join_query_building() {
    let query = QueryBuilder::new("\"luckperms_players\" p")
        .inner_join("\"ApiKeys\" k", "k.player_id = p.uuid")
        .left_join("\"StatisticEvents\" s", "s.player_id = p.uuid");

    let sql = query.build_sql();
    assert!(sql.contains("INNER JOIN \"ApiKeys\" k ON k.player_id = p.uuid"));
    assert!(sql.contains("LEFT JOIN \"StatisticEvents\" s ON s.player_id = p.uuid"));
}

#[test]
fn test_values_never_inlined() {
    let hostile = "x' OR '1'='1";
    let sql = QueryBuilder::new(tables::CHAT_LOGS)
        .where_eq(columns::PLAYER_ID, hostile)
        .build_sql();

    assert!(!sql.contains(hostile));
    assert!(sql.ends_with("WHERE player_id = $1"));
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_grouped_aggregate_executes(pool: PgPool) -> sqlx::Result<()> {
    insert_events(&pool, player(1), game_types::LASER_TAG, causes::KILL, 4).await?;
    insert_events(&pool, player(1), game_types::LASER_TAG, causes::DEATH, 1).await?;
    insert_events(&pool, player(2), game_types::LASER_TAG, causes::KILL, 2).await?;

    let rows: Vec<(String, i64)> = QueryBuilder::new(tables::STATISTIC_EVENTS)
        .select(&[columns::PLAYER_ID])
        .select_expr(
            Expr::count_of_events(causes::KILL, game_types::LASER_TAG),
            "kills",
        )
        .group_by(&[columns::PLAYER_ID])
        .having(Condition::gt(
            Expr::count_of_events(causes::KILL, game_types::LASER_TAG),
            Expr::literal(2),
        ))
        .order_desc("kills")
        .fetch_all(&pool)
        .await?;

    assert_eq!(rows, vec![(player(1).to_string(), 4)]);
    Ok(())
}

#[sqlx::test(migrations = "tests/fixtures/schema")]
async fn test_exists_and_between(pool: PgPool) -> sqlx::Result<()> {
    insert_api_key(&pool, player(1), "secret").await?;

    let matching = QueryBuilder::new(tables::API_KEYS)
        .where_eq(columns::PLAYER_ID, player(1))
        .where_eq(columns::API_KEY, "secret")
        .exists(&pool)
        .await?;
    assert!(matching);

    let wrong_key = QueryBuilder::new(tables::API_KEYS)
        .where_eq(columns::PLAYER_ID, player(1))
        .where_eq(columns::API_KEY, "guess")
        .exists(&pool)
        .await?;
    assert!(!wrong_key);

    insert_events(&pool, player(2), game_types::TUMBLE, causes::WIN, 1).await?;
    let now = Utc::now();
    let recent = QueryBuilder::new(tables::STATISTIC_EVENTS)
        .where_clause(Condition::between(
            columns::TIMESTAMP,
            now - chrono::Duration::hours(1),
            now + chrono::Duration::hours(1),
        ))
        .exists(&pool)
        .await?;
    assert!(recent);
    Ok(())
}
