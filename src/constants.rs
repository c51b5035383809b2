//! # Schema Constants
//!
//! Table names, column names and the string tags stored in the event tables.
//! The store is owned by the game servers; this crate only reads it.

/// Quoted table identifiers
pub mod tables {
    pub const STATISTIC_EVENTS: &str = "\"StatisticEvents\"";
    pub const CHAT_LOGS: &str = "\"ChatLogs\"";
    pub const API_KEYS: &str = "\"ApiKeys\"";
    pub const LUCKPERMS_PLAYERS: &str = "\"luckperms_players\"";
}

/// Column names shared by the event tables
pub mod columns {
    pub const PLAYER_ID: &str = "player_id";
    pub const CAUSE_ID: &str = "cause_id";
    pub const GAME_TYPE: &str = "game_type";
    pub const GAME_ID: &str = "game_id";
    pub const EXPERIENCE_AMOUNT: &str = "experience_amount";
    pub const TIMESTAMP: &str = "timestamp";
    pub const CHAT_MODE: &str = "chat_mode";
    pub const CHAT_RESULT: &str = "chat_result";
    pub const API_KEY: &str = "api_key";
    pub const UUID: &str = "uuid";
    pub const PRIMARY_GROUP: &str = "primary_group";

    /// Alias of the ranked value in every leaderboard query
    pub const VALUE: &str = "value";
}

/// Game type tags written by the minigame servers
pub mod game_types {
    pub const DODGEBOLT: &str = "dodgebolt";
    pub const OLD_RISE: &str = "old_rise";
    pub const ROCKET_SPLEEF: &str = "rocket_spleef";
    pub const RISE_CAPTURE: &str = "rise_capture";
    pub const TUMBLE: &str = "tumble";
    pub const LASER_TAG: &str = "laser_tag";

    pub const ALL: [&str; 6] = [
        DODGEBOLT,
        OLD_RISE,
        ROCKET_SPLEEF,
        RISE_CAPTURE,
        TUMBLE,
        LASER_TAG,
    ];
}

/// Cause ids identifying what produced a statistic event
pub mod causes {
    pub const ROUND_WIN: &str = "round_win";
    pub const WIN: &str = "win";
    pub const LOSS: &str = "loss";
    pub const KILL: &str = "kill";
    pub const KILL_ASSIST: &str = "kill_assist";
    pub const DEATH: &str = "death";
    pub const FALL: &str = "fall";
    pub const ARROW_FIRED: &str = "arrow_fired";
    pub const ARROW_HIT: &str = "arrow_hit";
    pub const OUTLIVE: &str = "outlive";
    pub const POWDER_FLOORS: &str = "powder_floors";
    pub const ROCKET_FIRED: &str = "rocket_fired";
    pub const ROCKET_HIT: &str = "rocket_hit";
    pub const PLACEMENT: &str = "placement";
    pub const CAPTURE: &str = "capture";
    pub const CAPTURE_COLLECTED: &str = "capture_collected";
    pub const CAPTURE_LOST: &str = "capture_lost";
}

/// Chat log tags
pub mod chat {
    pub const MODE_LOCAL: &str = "local";
    pub const RESULT_SUCCESS: &str = "success";
    pub const RESULT_FILTERED_PROFANITY: &str = "filtered_profanity";
}

/// Minimum denominator counts for ratio leaderboards
pub mod thresholds {
    pub const DODGEBOLT_ARROWS_FIRED: i64 = 15;
    pub const DODGEBOLT_DEATHS: i64 = 10;
}

/// Ratio values are percentages
pub const RATIO_SCALE: i64 = 100;
