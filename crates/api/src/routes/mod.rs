pub mod ads;
pub mod games;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                      list games with ad counts (GET)
/// /games/{id}/ads             list ads (GET), create ad (POST)
/// /ads/{id}/discord           ad contact handle (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .nest("/ads", ads::router())
}
