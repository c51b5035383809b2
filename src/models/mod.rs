pub mod leaderboard;
pub mod profile;
pub mod statistics;

// Re-export response shapes for easy access
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardRow};
pub use profile::{Profile, Rank, UnknownRank};
pub use statistics::{MessageCount, TotalExperience};
