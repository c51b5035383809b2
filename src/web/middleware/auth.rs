//! # Authentication Middleware
//!
//! HTTP Basic authentication where the username is a player id and the
//! password is an API key issued to that player.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::constants::{columns, tables};
use crate::query_builder::QueryBuilder;
use crate::web::response_types::ApiError;
use crate::web::state::AppState;

/// Decoded Basic credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub player_id: String,
    pub api_key: String,
}

/// Authentication middleware for protected endpoints
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.config.auth.enabled {
        debug!("Authentication disabled - allowing request");
        return Ok(next.run(request).await);
    }

    let auth_str = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?
        .to_str()
        .map_err(|_| ApiError::Unauthorized)?;

    let credentials = extract_basic_credentials(auth_str)?;

    if !verify_api_key(&state.pool, &credentials).await? {
        warn!(player_id = %credentials.player_id, "Rejected API key");
        return Err(ApiError::Unauthorized);
    }

    debug!(player_id = %credentials.player_id, "Authenticated API request");
    request.extensions_mut().insert(credentials);

    Ok(next.run(request).await)
}

/// Check the credentials against the issued keys
pub async fn verify_api_key(pool: &PgPool, credentials: &ApiCredentials) -> Result<bool, ApiError> {
    let found = QueryBuilder::new(tables::API_KEYS)
        .where_eq(columns::PLAYER_ID, credentials.player_id.as_str())
        .where_eq(columns::API_KEY, credentials.api_key.as_str())
        .exists(pool)
        .await?;
    Ok(found)
}

/// Extract Basic credentials from Authorization header
fn extract_basic_credentials(auth_header: &str) -> Result<ApiCredentials, ApiError> {
    let encoded = auth_header
        .strip_prefix("Basic ")
        .ok_or(ApiError::Unauthorized)?
        .trim();

    let decoded = STANDARD.decode(encoded).map_err(|_| ApiError::Unauthorized)?;
    let decoded = String::from_utf8(decoded).map_err(|_| ApiError::Unauthorized)?;

    let (player_id, api_key) = decoded.split_once(':').ok_or(ApiError::Unauthorized)?;
    if player_id.is_empty() || api_key.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    Ok(ApiCredentials {
        player_id: player_id.to_string(),
        api_key: api_key.to_string(),
    })
}
