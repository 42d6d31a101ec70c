use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::AdStore;
use crate::ad::{Ad, AdSummary, NewAd};
use crate::error::CoreError;
use crate::game::{AdCount, Game, GameWithAdCount};
use crate::types::EntityId;

/// In-process [`AdStore`] keeping games and ads in insertion order.
///
/// Used by tests and for running the service without a database. Ads that
/// share a `created_at` are listed in reverse insertion order.
#[derive(Debug, Default)]
pub struct MemoryAdStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    games: Vec<Game>,
    ads: Vec<Ad>,
}

impl MemoryAdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `games`.
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                games: games.into_iter().collect(),
                ads: Vec::new(),
            }),
        }
    }

    /// Add a game to the catalog.
    pub async fn insert_game(&self, game: Game) {
        self.inner.write().await.games.push(game);
    }
}

#[async_trait]
impl AdStore for MemoryAdStore {
    async fn list_games(&self) -> Result<Vec<GameWithAdCount>, CoreError> {
        let inner = self.inner.read().await;

        let mut games: Vec<GameWithAdCount> = inner
            .games
            .iter()
            .map(|game| GameWithAdCount {
                id: game.id,
                title: game.title.clone(),
                banner_url: game.banner_url.clone(),
                count: AdCount {
                    ads: inner.ads.iter().filter(|ad| ad.game_id == game.id).count() as i64,
                },
            })
            .collect();
        games.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

        Ok(games)
    }

    async fn game_exists(&self, game_id: EntityId) -> Result<bool, CoreError> {
        Ok(self.inner.read().await.games.iter().any(|g| g.id == game_id))
    }

    async fn create_ad(&self, ad: NewAd) -> Result<Ad, CoreError> {
        let mut inner = self.inner.write().await;

        // Mirrors the foreign key on `ads.game_id`.
        if !inner.games.iter().any(|g| g.id == ad.game_id) {
            return Err(CoreError::NotFound {
                entity: "Game",
                id: ad.game_id,
            });
        }

        let stored = Ad {
            id: Uuid::new_v4(),
            game_id: ad.game_id,
            name: ad.name,
            years_playing: ad.years_playing,
            discord: ad.discord,
            week_days: ad.week_days,
            hour_start: ad.hour_start,
            hour_end: ad.hour_end,
            use_voice_channel: ad.use_voice_channel,
            created_at: Utc::now(),
        };
        inner.ads.push(stored.clone());

        Ok(stored)
    }

    async fn list_ads_for_game(&self, game_id: EntityId) -> Result<Vec<AdSummary>, CoreError> {
        let inner = self.inner.read().await;

        let mut ads: Vec<&Ad> = inner
            .ads
            .iter()
            .rev()
            .filter(|ad| ad.game_id == game_id)
            .collect();
        // Stable sort keeps reverse insertion order among equal timestamps.
        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(ads
            .into_iter()
            .map(|ad| AdSummary {
                id: ad.id,
                name: ad.name.clone(),
                years_playing: ad.years_playing,
                week_days: ad.week_days.clone(),
                hour_start: ad.hour_start,
                hour_end: ad.hour_end,
                use_voice_channel: ad.use_voice_channel,
            })
            .collect())
    }

    async fn find_ad_discord(&self, ad_id: EntityId) -> Result<Option<String>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .ads
            .iter()
            .find(|ad| ad.id == ad_id)
            .map(|ad| ad.discord.clone()))
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
