//! The four ad operations, expressed over an [`AdStore`] capability.

use std::sync::Arc;

use crate::ad::{Ad, AdContact, AdListing, CreateAdInput};
use crate::error::CoreError;
use crate::game::GameWithAdCount;
use crate::store::AdStore;
use crate::types::EntityId;

/// Orchestrates codec conversion, validation and store calls.
///
/// Cheaply cloneable; every clone shares the same store handle.
#[derive(Clone)]
pub struct AdService {
    store: Arc<dyn AdStore>,
}

impl AdService {
    pub fn new(store: Arc<dyn AdStore>) -> Self {
        Self { store }
    }

    /// Whether the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }

    /// All games with their ad counts, ordered by title.
    pub async fn list_games(&self) -> Result<Vec<GameWithAdCount>, CoreError> {
        self.store.list_games().await
    }

    /// Validate `input` and persist it as a new ad for `game_id`.
    ///
    /// Fails with [`CoreError::Validation`] for malformed fields and
    /// [`CoreError::NotFound`] if the game does not exist.
    pub async fn create_ad(
        &self,
        game_id: EntityId,
        input: CreateAdInput,
    ) -> Result<Ad, CoreError> {
        let new_ad = input.into_new_ad(game_id)?;

        if !self.store.game_exists(game_id).await? {
            return Err(CoreError::NotFound {
                entity: "Game",
                id: game_id,
            });
        }

        self.store.create_ad(new_ad).await
    }

    /// Ads for `game_id` in external form, newest first. Unknown games yield
    /// an empty list.
    pub async fn list_ads_for_game(&self, game_id: EntityId) -> Result<Vec<AdListing>, CoreError> {
        self.store
            .list_ads_for_game(game_id)
            .await?
            .into_iter()
            .map(AdListing::try_from)
            .collect()
    }

    /// The Discord handle of `ad_id`.
    pub async fn get_ad_contact(&self, ad_id: EntityId) -> Result<AdContact, CoreError> {
        self.store
            .find_ad_discord(ad_id)
            .await?
            .map(|discord| AdContact { discord })
            .ok_or(CoreError::NotFound {
                entity: "Ad",
                id: ad_id,
            })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::ad::{AdSummary, NewAd};
    use crate::game::Game;
    use crate::store::MemoryAdStore;

    fn service_with_game() -> (AdService, EntityId) {
        let game = Game {
            id: Uuid::new_v4(),
            title: "Counter-Strike".into(),
            banner_url: "https://cdn.example/cs.png".into(),
        };
        let id = game.id;
        let store = MemoryAdStore::with_games([game]);
        (AdService::new(Arc::new(store)), id)
    }

    fn input(name: &str, discord: &str) -> CreateAdInput {
        CreateAdInput {
            name: name.to_string(),
            years_playing: 4,
            discord: discord.to_string(),
            week_days: vec!["mon".into(), "wed".into(), "fri".into()],
            hour_start: "09:30".into(),
            hour_end: "23:59".into(),
            use_voice_channel: true,
        }
    }

    #[tokio::test]
    async fn create_then_list_preserves_week_days_and_hours() {
        let (service, game_id) = service_with_game();

        let ad = service
            .create_ad(game_id, input("Fallen", "fallen#1"))
            .await
            .unwrap();
        assert_eq!(ad.week_days, "mon,wed,fri");
        assert_eq!(ad.hour_start, 570);
        assert_eq!(ad.hour_end, 1439);

        let listed = service.list_ads_for_game(game_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, ad.id);
        assert_eq!(listed[0].week_days, vec!["mon", "wed", "fri"]);
        assert_eq!(listed[0].hour_start, "09:30");
        assert_eq!(listed[0].hour_end, "23:59");
    }

    #[tokio::test]
    async fn contact_returns_created_discord() {
        let (service, game_id) = service_with_game();
        let ad = service
            .create_ad(game_id, input("Coldzera", "coldzera#42"))
            .await
            .unwrap();

        let contact = service.get_ad_contact(ad.id).await.unwrap();
        assert_eq!(contact.discord, "coldzera#42");
    }

    #[tokio::test]
    async fn contact_for_missing_ad_is_not_found() {
        let (service, _) = service_with_game();
        let missing = Uuid::new_v4();

        assert_matches!(
            service.get_ad_contact(missing).await,
            Err(CoreError::NotFound { entity: "Ad", id }) if id == missing
        );
    }

    #[tokio::test]
    async fn create_for_missing_game_is_not_found() {
        let (service, _) = service_with_game();

        assert_matches!(
            service.create_ad(Uuid::new_v4(), input("a", "a#1")).await,
            Err(CoreError::NotFound { entity: "Game", .. })
        );
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_store() {
        let (service, game_id) = service_with_game();
        let mut bad = input("Fer", "fer#1");
        bad.hour_end = "24:00".into();

        assert_matches!(
            service.create_ad(game_id, bad).await,
            Err(CoreError::Validation(_))
        );
        assert!(service.list_ads_for_game(game_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn game_ad_count_matches_created_ads() {
        let (service, game_id) = service_with_game();
        for i in 0..3 {
            service
                .create_ad(game_id, input(&format!("p{i}"), "p#1"))
                .await
                .unwrap();
        }

        let games = service.list_games().await.unwrap();
        assert_eq!(games[0].id, game_id);
        assert_eq!(games[0].count.ads, 3);
    }

    #[tokio::test]
    async fn unknown_game_lists_no_ads() {
        let (service, _) = service_with_game();
        assert!(service
            .list_ads_for_game(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }

    /// Store whose every call fails, as an unreachable database would.
    struct DownStore;

    #[async_trait]
    impl AdStore for DownStore {
        async fn list_games(&self) -> Result<Vec<GameWithAdCount>, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused".into()))
        }
        async fn game_exists(&self, _: EntityId) -> Result<bool, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused".into()))
        }
        async fn create_ad(&self, _: NewAd) -> Result<Ad, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused".into()))
        }
        async fn list_ads_for_game(&self, _: EntityId) -> Result<Vec<AdSummary>, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused".into()))
        }
        async fn find_ad_discord(&self, _: EntityId) -> Result<Option<String>, CoreError> {
            Err(CoreError::StoreUnavailable("connection refused".into()))
        }
        async fn ping(&self) -> Result<(), CoreError> {
            Err(CoreError::StoreUnavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let service = AdService::new(Arc::new(DownStore));

        assert_matches!(service.list_games().await, Err(CoreError::StoreUnavailable(_)));
        assert_matches!(
            service.get_ad_contact(Uuid::new_v4()).await,
            Err(CoreError::StoreUnavailable(_))
        );
        assert_matches!(
            service.create_ad(Uuid::new_v4(), input("a", "a#1")).await,
            Err(CoreError::StoreUnavailable(_))
        );
    }
}
