use crate::error::RowSkip;
use crate::models::{LeaderboardEntry, LeaderboardRow};
use tracing::warn;
use uuid::Uuid;

/// Entries produced from a page of rows, plus the rows that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedRows {
    pub entries: Vec<LeaderboardEntry>,
    pub skipped: Vec<RowSkip>,
}

/// Parse one row into `(player, value)`
pub fn parse_row(row: &LeaderboardRow) -> Result<(Uuid, i64), RowSkip> {
    let raw = row.player_id.as_deref().unwrap_or_default();
    let player_id = Uuid::parse_str(raw).map_err(|_| RowSkip::InvalidPlayerId(raw.to_string()))?;
    let value = row.value.ok_or(RowSkip::MissingValue)?;
    Ok((player_id, value))
}

/// Assign positions in row order.
///
/// Positions count emitted entries only, so a skipped row never leaves a gap.
pub fn rank_rows<I>(rows: I) -> RankedRows
where
    I: IntoIterator<Item = LeaderboardRow>,
{
    let mut ranked = RankedRows::default();

    for row in rows {
        match parse_row(&row) {
            Ok((player_id, value)) => {
                let position = ranked.entries.len() as u32 + 1;
                ranked.entries.push(LeaderboardEntry {
                    player_id,
                    position,
                    value,
                });
            }
            Err(reason) => {
                warn!(reason = %reason, "Skipping leaderboard row");
                ranked.skipped.push(reason);
            }
        }
    }

    ranked
}
