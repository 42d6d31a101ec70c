use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /games
///
/// List every game with its ad count, ordered by title.
pub async fn list_games(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = state.ads.list_games().await?;

    Ok(Json(games))
}
