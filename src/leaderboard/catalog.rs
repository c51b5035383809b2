//! # Builtin Leaderboard Catalog
//!
//! Every leaderboard the API serves, registered in listing order.

use super::definition::{register_leaderboard, LeaderboardDefinition, LeaderboardRegistry};
use super::query_factory::QueryFactory;
use crate::constants::{causes, columns, game_types, thresholds};
use crate::error::Result;
use crate::query_builder::{Condition, ValueAggregate};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Rolling window of the weekly experience leaderboard
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Fixed window of the October 2024 giveaway, inclusive on both ends
pub fn october_2024_window() -> (DateTime<Utc>, DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2024, 10, 7, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
        Utc.with_ymd_and_hms(2024, 11, 7, 23, 59, 59)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
    )
}

/// (id, title, game type, cause id) of the plain event-count leaderboards
const EVENT_COUNT_BOARDS: &[(&str, &str, &str, &str)] = &[
    ("dodgebolt_rounds_won", "Dodgebolt Rounds Won Leaderboard", game_types::DODGEBOLT, causes::ROUND_WIN),
    ("dodgebolt_games_won", "Dodgebolt Games Won Leaderboard", game_types::DODGEBOLT, causes::WIN),
    ("dodgebolt_kills", "Dodgebolt Kills Leaderboard", game_types::DODGEBOLT, causes::KILL),
    ("dodgebolt_deaths", "Dodgebolt Deaths Leaderboard", game_types::DODGEBOLT, causes::DEATH),
];

const OLD_RISE_BOARDS: &[(&str, &str, &str, &str)] = &[
    ("old_rise_survival", "Rise Survival Leaderboard", game_types::OLD_RISE, causes::OUTLIVE),
    ("old_rise_rounds_won", "Rise Rounds Won Leaderboard", game_types::OLD_RISE, causes::ROUND_WIN),
    ("old_rise_deaths", "Rise Deaths Leaderboard", game_types::OLD_RISE, causes::DEATH),
    ("old_rise_powder_floors", "Rise Floor Drops Survived Leaderboard", game_types::OLD_RISE, causes::POWDER_FLOORS),
];

const ROCKET_SPLEEF_BOARDS: &[(&str, &str, &str, &str)] = &[
    ("rockets_fired", "Rockets Fired Leaderboard", game_types::ROCKET_SPLEEF, causes::ROCKET_FIRED),
    ("rockets_hit", "Direct Rockets Hit Leaderboard", game_types::ROCKET_SPLEEF, causes::ROCKET_HIT),
    ("rocket_spleef_survival", "Rocket Spleef Survival Leaderboard", game_types::ROCKET_SPLEEF, causes::OUTLIVE),
    ("rocket_spleef_kills", "Rocket Spleef Kills Leaderboard", game_types::ROCKET_SPLEEF, causes::KILL),
    ("rocket_spleef_kill_assists", "Rocket Spleef Kill Assists Leaderboard", game_types::ROCKET_SPLEEF, causes::KILL_ASSIST),
    ("rocket_spleef_deaths", "Rocket Spleef Deaths Leaderboard", game_types::ROCKET_SPLEEF, causes::DEATH),
];

const RISE_CAPTURE_BOARDS: &[(&str, &str, &str, &str)] = &[
    ("rise_capture_times_captured", "Rise Capture Times Captured Leaderboard", game_types::RISE_CAPTURE, causes::CAPTURE),
    ("rise_capture_times_collected", "Rise Capture Times Collected Leaderboard", game_types::RISE_CAPTURE, causes::CAPTURE_COLLECTED),
    ("rise_capture_times_capture_lost", "Rise Capture Times Capture Lost Leaderboard", game_types::RISE_CAPTURE, causes::CAPTURE_LOST),
    ("rise_capture_games_won", "Rise Capture Games Won Leaderboard", game_types::RISE_CAPTURE, causes::WIN),
    ("rise_capture_games_lost", "Rise Capture Games Lost Leaderboard", game_types::RISE_CAPTURE, causes::LOSS),
    ("rise_capture_kills", "Rise Capture Kills Leaderboard", game_types::RISE_CAPTURE, causes::KILL),
    ("rise_capture_falls", "Rise Capture Falls Leaderboard", game_types::RISE_CAPTURE, causes::FALL),
];

fn register_event_counts(
    registry: &mut LeaderboardRegistry,
    boards: &[(&'static str, &'static str, &'static str, &'static str)],
) -> Result<()> {
    for &(id, title, game_type, cause_id) in boards {
        register_leaderboard(
            registry,
            LeaderboardDefinition::new(id, title, move |_| {
                QueryFactory::event_count(game_type, cause_id)
            }),
        )?;
    }
    Ok(())
}

/// Build the catalog of every builtin leaderboard.
///
/// Fails with `DuplicateKey` if two entries share an id; the server refuses
/// to start on that.
pub fn builtin() -> Result<LeaderboardRegistry> {
    let mut registry = LeaderboardRegistry::new();

    register_leaderboard(
        &mut registry,
        LeaderboardDefinition::new("total_experience", "Total Experience Leaderboard", |_| {
            QueryFactory::statistics(ValueAggregate::experience_sum())
        }),
    )?;

    register_event_counts(&mut registry, EVENT_COUNT_BOARDS)?;

    register_leaderboard(
        &mut registry,
        LeaderboardDefinition::new(
            "dodgebolt_hit_ratio",
            "Dodgebolt Shots Hit / Fired Ratio Leaderboard",
            |_| {
                QueryFactory::event_ratio(
                    game_types::DODGEBOLT,
                    causes::ARROW_HIT,
                    causes::ARROW_FIRED,
                    thresholds::DODGEBOLT_ARROWS_FIRED,
                )
            },
        ),
    )?;

    register_leaderboard(
        &mut registry,
        LeaderboardDefinition::new(
            "dodgebolt_kill_death_ratio",
            "Dodgebolt Kill / Death Ratio Leaderboard",
            |_| {
                QueryFactory::event_ratio(
                    game_types::DODGEBOLT,
                    causes::KILL,
                    causes::DEATH,
                    thresholds::DODGEBOLT_DEATHS,
                )
            },
        ),
    )?;

    register_event_counts(&mut registry, OLD_RISE_BOARDS)?;
    register_event_counts(&mut registry, ROCKET_SPLEEF_BOARDS)?;

    register_leaderboard(
        &mut registry,
        LeaderboardDefinition::new(
            "rocket_spleef_placement",
            "Rocket Spleef Placement Leaderboard",
            |_| QueryFactory::experience_sum(game_types::ROCKET_SPLEEF, causes::PLACEMENT),
        ),
    )?;

    register_event_counts(&mut registry, RISE_CAPTURE_BOARDS)?;

    register_leaderboard(
        &mut registry,
        LeaderboardDefinition::new(
            "october_2024_giveaway",
            "Kills Leaderboard (7th Oct - 7th Nov)",
            |_| {
                let (start, end) = october_2024_window();
                QueryFactory::statistics(ValueAggregate::event_count()).narrow(|query| {
                    query
                        .where_eq(columns::CAUSE_ID, causes::KILL)
                        .where_clause(Condition::between(columns::TIMESTAMP, start, end))
                })
            },
        ),
    )?;

    register_leaderboard(
        &mut registry,
        LeaderboardDefinition::new(
            "weekly_experience",
            "Weekly Experience Leaderboard",
            |context| {
                let start = context.now - Duration::days(WEEKLY_WINDOW_DAYS);
                QueryFactory::statistics(ValueAggregate::experience_sum()).narrow(|query| {
                    query.where_clause(Condition::between(columns::TIMESTAMP, start, context.now))
                })
            },
        ),
    )?;

    Ok(registry)
}
