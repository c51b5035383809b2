use thiserror::Error;

use crate::config::ConfigurationError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Unknown leaderboard: {id}")]
    UnknownLeaderboard { id: String },

    #[error("Registry key already registered: {key}")]
    DuplicateKey { key: String },

    #[error("Data store error: {0}")]
    DataStore(#[from] sqlx::Error),

    #[error("Query exceeded timeout of {timeout_ms}ms")]
    QueryTimeout { timeout_ms: u64 },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },
}

impl StatsError {
    pub fn unknown_leaderboard(id: impl Into<String>) -> Self {
        Self::UnknownLeaderboard { id: id.into() }
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    pub fn player_not_found(player_id: impl ToString) -> Self {
        Self::PlayerNotFound {
            player_id: player_id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Why a fetched row was left out of a ranking
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowSkip {
    #[error("player id '{0}' is not a valid UUID")]
    InvalidPlayerId(String),

    #[error("aggregate value is missing")]
    MissingValue,
}
