//! Chat message statistics

use crate::constants::{chat, columns, tables};
use crate::error::Result;
use crate::models::MessageCount;
use crate::query_builder::{Condition, Expr, QueryBuilder};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct MessageCountRow {
    local_message_count: i64,
    filtered_message_count: i64,
}

/// Message counts query, optionally restricted to one player
pub fn message_counts_query(player_id: Option<Uuid>) -> QueryBuilder {
    let local = Expr::count_if(
        Condition::eq(columns::CHAT_MODE, chat::MODE_LOCAL)
            .and(Condition::eq(columns::CHAT_RESULT, chat::RESULT_SUCCESS)),
    );
    let filtered = Expr::count_if(Condition::eq(
        columns::CHAT_RESULT,
        chat::RESULT_FILTERED_PROFANITY,
    ));

    let query = QueryBuilder::new(tables::CHAT_LOGS)
        .select_expr(local, "local_message_count")
        .select_expr(filtered, "filtered_message_count");

    match player_id {
        Some(player_id) => query.where_eq(columns::PLAYER_ID, player_id),
        None => query,
    }
}

/// Local and filtered message counts; zero counts for unknown players
pub async fn message_counts(pool: &PgPool, player_id: Option<Uuid>) -> Result<MessageCount> {
    let row: MessageCountRow = message_counts_query(player_id).fetch_one(pool).await?;

    Ok(MessageCount {
        local_message_count: row.local_message_count,
        filtered_message_count: row.filtered_message_count,
    })
}
