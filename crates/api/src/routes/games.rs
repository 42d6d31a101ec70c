//! Route definitions for games and their ads, mounted at `/games`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{ads, games};
use crate::state::AppState;

/// ```text
/// GET    /              -> list_games
/// GET    /{id}/ads      -> list_ads_for_game
/// POST   /{id}/ads      -> create_ad
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_games))
        .route(
            "/{id}/ads",
            get(ads::list_ads_for_game).post(ads::create_ad),
        )
}
