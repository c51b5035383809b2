//! # Experience Handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::models::TotalExperience;
use crate::stats;
use crate::web::handlers::parse_player_uuid;
use crate::web::response_types::ApiResult;
use crate::web::state::AppState;

/// Every player's lifetime experience: GET /experience
pub async fn all_experience(State(state): State<AppState>) -> ApiResult<Json<Vec<TotalExperience>>> {
    Ok(Json(stats::all_totals(&state.pool).await?))
}

/// One player's lifetime experience: GET /experience/{uuid}
pub async fn player_experience(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<TotalExperience>> {
    let player_id = parse_player_uuid(&uuid)?;
    Ok(Json(stats::player_total(&state.pool, player_id).await?))
}
