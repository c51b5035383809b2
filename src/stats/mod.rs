//! # Player Statistics
//!
//! Non-leaderboard statistics built on the same query builder.

pub mod chat;
pub mod experience;
pub mod profile;

pub use chat::message_counts;
pub use experience::{all_totals, player_total};
pub use profile::player_profile;
