use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime experience of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalExperience {
    pub uuid: Uuid,
    #[serde(rename = "total_experience")]
    pub experience: i64,
}

/// Chat message counts, global or for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageCount {
    /// Unfiltered messages sent in local chat
    #[serde(rename = "local")]
    pub local_message_count: i64,
    /// Messages blocked by the profanity filter in any chat mode
    #[serde(rename = "filtered")]
    pub filtered_message_count: i64,
}
