//! Route definitions for individual ads, mounted at `/ads`.

use axum::routing::get;
use axum::Router;

use crate::handlers::ads;
use crate::state::AppState;

/// ```text
/// GET    /{id}/discord  -> get_ad_discord
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/discord", get(ads::get_ad_discord))
}
