//! Repository for the `games` table.

use duo_core::types::EntityId;
use sqlx::PgPool;

use crate::models::game::{GameRow, GameWithAdCountRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, banner_url";

/// Provides read access to games, plus inserts for seeding.
pub struct GameRepo;

impl GameRepo {
    /// Insert a game, returning the created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        banner_url: &str,
    ) -> Result<GameRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, banner_url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(title)
            .bind(banner_url)
            .fetch_one(pool)
            .await
    }

    /// List every game with the number of ads posted for it, ordered by title.
    pub async fn list_with_ad_counts(pool: &PgPool) -> Result<Vec<GameWithAdCountRow>, sqlx::Error> {
        sqlx::query_as::<_, GameWithAdCountRow>(
            "SELECT g.id, g.title, g.banner_url, COUNT(a.id) AS ad_count
             FROM games g
             LEFT JOIN ads a ON a.game_id = g.id
             GROUP BY g.id
             ORDER BY g.title ASC, g.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Whether a game with the given ID exists.
    pub async fn exists(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM games WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }
}
