//! # Leaderboard Handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::models::Leaderboard;
use crate::web::response_types::ApiResult;
use crate::web::state::AppState;

/// Query parameters for paging a leaderboard
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// List leaderboard ids: GET /leaderboards
pub async fn list_leaderboards(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.leaderboards.list_ids())
}

/// Fetch one leaderboard: GET /leaderboards/{board}
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(board): Path<String>,
    Query(params): Query<LeaderboardQuery>,
) -> ApiResult<Json<Leaderboard>> {
    debug!(leaderboard_id = %board, limit = ?params.limit, offset = ?params.offset, "Fetching leaderboard");

    let leaderboard = state
        .leaderboards
        .get_leaderboard(&board, params.limit, params.offset)
        .await?;

    Ok(Json(leaderboard))
}
