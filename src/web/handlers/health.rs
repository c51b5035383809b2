//! # Health Check Handlers

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::database::health_check;
use crate::web::response_types::ApiError;
use crate::web::state::AppState;

/// Basic health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Plain-text banner: GET /
pub async fn banner() -> &'static str {
    concat!("MC Brawls Stats API v", env!("CARGO_PKG_VERSION"))
}

/// Database-backed health check: GET /health
///
/// Runs `SELECT 1` against the pool; an unreachable database yields 503.
pub async fn basic_health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    debug!("Performing health check");

    match health_check(&state.pool).await {
        Ok(true) => {}
        Ok(false) => return Err(ApiError::ServiceUnavailable),
        Err(e) => {
            error!(error = %e, "Database health check failed");
            return Err(ApiError::ServiceUnavailable);
        }
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
