//! # Web API Error Types
//!
//! Errors returned by handlers and their HTTP response conversions. Bodies
//! take the shape `{"error": {"code": ..., "message": ...}}`. Internal
//! failures never carry SQL text or driver messages.

use crate::error::StatsError;
use crate::logging::log_error;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Web API specific errors with HTTP status code mappings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unknown leaderboard: {id}")]
    UnknownLeaderboard { id: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Invalid UUID format: {uuid}")]
    InvalidUuid { uuid: String },

    #[error("Authentication required")]
    Unauthorized,

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create an InvalidUuid error
    pub fn invalid_uuid(uuid: impl Into<String>) -> Self {
        Self::InvalidUuid { uuid: uuid.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownLeaderboard { .. } | ApiError::InvalidUuid { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PlayerNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::UnknownLeaderboard { .. } => "UNKNOWN_LEADERBOARD",
            ApiError::PlayerNotFound { .. } => "PLAYER_NOT_FOUND",
            ApiError::InvalidUuid { .. } => "INVALID_UUID",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_response = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        });

        let mut response = (status_code, Json(error_response)).into_response();
        if status_code == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Basic realm=\"brawls-stats\""),
            );
        }
        response
    }
}

/// Map domain errors onto client-safe API errors
impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::UnknownLeaderboard { id } => ApiError::UnknownLeaderboard { id },
            StatsError::PlayerNotFound { player_id } => ApiError::PlayerNotFound { player_id },
            other => {
                log_error("web", "request", &other.to_string(), None);
                ApiError::Internal
            }
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::from(StatsError::DataStore(err))
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;
