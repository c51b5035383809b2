use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Permission ranks on the game server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Admin,
    Builder,
    Moderator,
    Mccit,
    Partner,
    Staff,
    Default,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Admin => "admin",
            Rank::Builder => "builder",
            Rank::Moderator => "moderator",
            Rank::Mccit => "mccit",
            Rank::Partner => "partner",
            Rank::Staff => "staff",
            Rank::Default => "default",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown rank: {0}")]
pub struct UnknownRank(pub String);

impl FromStr for Rank {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Rank::Admin),
            "builder" => Ok(Rank::Builder),
            "moderator" => Ok(Rank::Moderator),
            "mccit" => Ok(Rank::Mccit),
            "partner" => Ok(Rank::Partner),
            "staff" => Ok(Rank::Staff),
            "default" => Ok(Rank::Default),
            _ => Err(UnknownRank(s.to_string())),
        }
    }
}

/// Public profile of a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub uuid: Uuid,
    pub rank: Rank,
    pub experience: i64,
}
