use async_trait::async_trait;
use duo_core::ad::{Ad, AdSummary, NewAd};
use duo_core::error::CoreError;
use duo_core::game::GameWithAdCount;
use duo_core::store::AdStore;
use duo_core::types::EntityId;

use crate::repositories::{AdRepo, GameRepo};
use crate::DbPool;

/// PostgreSQL error code for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// [`AdStore`] backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgAdStore {
    pool: DbPool,
}

impl PgAdStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Translate a sqlx error into [`CoreError::StoreUnavailable`].
///
/// The full error is logged here; callers surface only a sanitized message.
pub fn store_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::StoreUnavailable(err.to_string())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION),
        _ => false,
    }
}

#[async_trait]
impl AdStore for PgAdStore {
    async fn list_games(&self) -> Result<Vec<GameWithAdCount>, CoreError> {
        let rows = GameRepo::list_with_ad_counts(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn game_exists(&self, game_id: EntityId) -> Result<bool, CoreError> {
        GameRepo::exists(&self.pool, game_id)
            .await
            .map_err(store_error)
    }

    async fn create_ad(&self, ad: NewAd) -> Result<Ad, CoreError> {
        match AdRepo::create(&self.pool, &ad).await {
            Ok(row) => Ok(row.into()),
            // The game was removed between the existence check and the insert.
            Err(err) if is_foreign_key_violation(&err) => Err(CoreError::NotFound {
                entity: "Game",
                id: ad.game_id,
            }),
            Err(err) => Err(store_error(err)),
        }
    }

    async fn list_ads_for_game(&self, game_id: EntityId) -> Result<Vec<AdSummary>, CoreError> {
        let rows = AdRepo::list_for_game(&self.pool, game_id)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_ad_discord(&self, ad_id: EntityId) -> Result<Option<String>, CoreError> {
        AdRepo::find_discord(&self.pool, ad_id)
            .await
            .map_err(store_error)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}
