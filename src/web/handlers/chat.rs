//! # Chat Statistics Handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::models::MessageCount;
use crate::stats;
use crate::web::handlers::parse_player_uuid;
use crate::web::response_types::ApiResult;
use crate::web::state::AppState;

/// Server-wide message counts: GET /chat_statistics
pub async fn global_chat_statistics(State(state): State<AppState>) -> ApiResult<Json<MessageCount>> {
    Ok(Json(stats::message_counts(&state.pool, None).await?))
}

/// Message counts for one player: GET /chat_statistics/{uuid}
pub async fn player_chat_statistics(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<MessageCount>> {
    let player_id = parse_player_uuid(&uuid)?;
    Ok(Json(stats::message_counts(&state.pool, Some(player_id)).await?))
}
