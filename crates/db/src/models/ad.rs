//! Ad rows.

use duo_core::ad::{Ad, AdSummary};
use duo_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A full row from the `ads` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdRow {
    pub id: EntityId,
    pub game_id: EntityId,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
    pub created_at: Timestamp,
}

/// The listing projection of an ad: no `discord`, no `game_id`.
#[derive(Debug, Clone, FromRow)]
pub struct AdSummaryRow {
    pub id: EntityId,
    pub name: String,
    pub years_playing: i32,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
}

impl From<AdRow> for Ad {
    fn from(row: AdRow) -> Self {
        Self {
            id: row.id,
            game_id: row.game_id,
            name: row.name,
            years_playing: row.years_playing,
            discord: row.discord,
            week_days: row.week_days,
            hour_start: row.hour_start,
            hour_end: row.hour_end,
            use_voice_channel: row.use_voice_channel,
            created_at: row.created_at,
        }
    }
}

impl From<AdSummaryRow> for AdSummary {
    fn from(row: AdSummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            years_playing: row.years_playing,
            week_days: row.week_days,
            hour_start: row.hour_start,
            hour_end: row.hour_end,
            use_voice_channel: row.use_voice_channel,
        }
    }
}
