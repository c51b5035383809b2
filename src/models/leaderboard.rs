use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A ranked leaderboard as returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub id: String,
    pub title: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// One ranked player. `position` is 1-based within this response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "uuid")]
    pub player_id: Uuid,
    pub position: u32,
    pub value: i64,
}

/// Raw row of a finalized leaderboard query.
///
/// `player_id` is stored as text and may be malformed or NULL; such rows are
/// skipped during ranking.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LeaderboardRow {
    pub player_id: Option<String>,
    pub value: Option<i64>,
}

impl LeaderboardRow {
    pub fn new(player_id: impl Into<String>, value: i64) -> Self {
        Self {
            player_id: Some(player_id.into()),
            value: Some(value),
        }
    }
}
