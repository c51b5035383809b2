//! # Web API Request Handlers
//!
//! Contains all HTTP request handlers organized by functional area.

pub mod chat;
pub mod experience;
pub mod health;
pub mod leaderboards;
pub mod profile;

use crate::web::response_types::ApiError;
use uuid::Uuid;

/// Parse a player UUID path segment
pub(crate) fn parse_player_uuid(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_uuid(raw))
}
