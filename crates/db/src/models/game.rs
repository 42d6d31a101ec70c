//! Game rows.

use duo_core::game::{AdCount, GameWithAdCount};
use duo_core::types::EntityId;
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: EntityId,
    pub title: String,
    pub banner_url: String,
}

/// A game joined with the number of ads referencing it.
#[derive(Debug, Clone, FromRow)]
pub struct GameWithAdCountRow {
    pub id: EntityId,
    pub title: String,
    pub banner_url: String,
    pub ad_count: i64,
}

impl From<GameWithAdCountRow> for GameWithAdCount {
    fn from(row: GameWithAdCountRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            banner_url: row.banner_url,
            count: AdCount { ads: row.ad_count },
        }
    }
}
