//! Repository for the `ads` table.

use duo_core::ad::NewAd;
use duo_core::types::EntityId;
use sqlx::PgPool;

use crate::models::ad::{AdRow, AdSummaryRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, game_id, name, years_playing, discord, week_days, \
                       hour_start, hour_end, use_voice_channel, created_at";

/// Columns exposed in listings. `discord` is deliberately absent.
const SUMMARY_COLUMNS: &str =
    "id, name, years_playing, week_days, hour_start, hour_end, use_voice_channel";

/// Provides create and lookup operations for ads. Ads are never updated or
/// deleted.
pub struct AdRepo;

impl AdRepo {
    /// Insert a new ad, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAd) -> Result<AdRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO ads
                (game_id, name, years_playing, discord, week_days,
                 hour_start, hour_end, use_voice_channel)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdRow>(&query)
            .bind(input.game_id)
            .bind(&input.name)
            .bind(input.years_playing)
            .bind(&input.discord)
            .bind(&input.week_days)
            .bind(input.hour_start)
            .bind(input.hour_end)
            .bind(input.use_voice_channel)
            .fetch_one(pool)
            .await
    }

    /// List a game's ads, most recently created first.
    pub async fn list_for_game(
        pool: &PgPool,
        game_id: EntityId,
    ) -> Result<Vec<AdSummaryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM ads
             WHERE game_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, AdSummaryRow>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch only the Discord handle of an ad.
    pub async fn find_discord(pool: &PgPool, id: EntityId) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT discord FROM ads WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(discord,)| discord))
    }
}
