//! The persistence capability behind [`AdService`](crate::service::AdService).
//!
//! [`AdStore`] is the only seam between the domain and storage. The service
//! holds one long-lived `Arc<dyn AdStore>`; PostgreSQL (`duo_db::PgAdStore`)
//! and in-process ([`MemoryAdStore`]) implementations are provided.

mod memory;

pub use memory::MemoryAdStore;

use async_trait::async_trait;

use crate::ad::{Ad, AdSummary, NewAd};
use crate::error::CoreError;
use crate::game::GameWithAdCount;
use crate::types::EntityId;

/// Create/find operations over games and ads.
///
/// Implementations report backend failures as [`CoreError::StoreUnavailable`].
#[async_trait]
pub trait AdStore: Send + Sync {
    /// All games with their ad counts, ordered by title.
    async fn list_games(&self) -> Result<Vec<GameWithAdCount>, CoreError>;

    /// Whether a game with `game_id` exists.
    async fn game_exists(&self, game_id: EntityId) -> Result<bool, CoreError>;

    /// Persist a new ad, returning the stored row with its generated id and
    /// creation timestamp.
    async fn create_ad(&self, ad: NewAd) -> Result<Ad, CoreError>;

    /// Ads for one game, most recently created first.
    async fn list_ads_for_game(&self, game_id: EntityId) -> Result<Vec<AdSummary>, CoreError>;

    /// The Discord handle of one ad, `None` if the ad does not exist.
    async fn find_ad_discord(&self, ad_id: EntityId) -> Result<Option<String>, CoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), CoreError>;
}
