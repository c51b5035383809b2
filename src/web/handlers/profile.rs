//! # Profile Handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::models::Profile;
use crate::stats;
use crate::web::handlers::parse_player_uuid;
use crate::web::response_types::ApiResult;
use crate::web::state::AppState;

/// Rank and experience of a player: GET /profile/{uuid}
pub async fn player_profile(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Profile>> {
    let player_id = parse_player_uuid(&uuid)?;
    Ok(Json(stats::player_profile(&state.pool, player_id).await?))
}
