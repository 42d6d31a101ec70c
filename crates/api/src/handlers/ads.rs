//! Handlers for posting and browsing ads.
//!
//! The contact handle is only ever returned by [`get_ad_discord`]; listings
//! serialize [`AdListing`](duo_core::ad::AdListing), which has no such field.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use duo_core::ad::{AdView, CreateAdInput};
use duo_core::types::EntityId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// POST /games/{id}/ads
///
/// Create an ad for a game and echo it back in external form.
pub async fn create_ad(
    State(state): State<AppState>,
    AppPath(game_id): AppPath<EntityId>,
    AppJson(input): AppJson<CreateAdInput>,
) -> AppResult<impl IntoResponse> {
    let ad = state.ads.create_ad(game_id, input).await?;

    tracing::info!(%game_id, ad_id = %ad.id, "Ad created");

    Ok((StatusCode::CREATED, Json(AdView::try_from(ad)?)))
}

/// GET /games/{id}/ads
///
/// List a game's ads, newest first.
pub async fn list_ads_for_game(
    State(state): State<AppState>,
    AppPath(game_id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let ads = state.ads.list_ads_for_game(game_id).await?;

    Ok(Json(ads))
}

/// GET /ads/{id}/discord
///
/// Reveal the Discord handle of a single ad.
pub async fn get_ad_discord(
    State(state): State<AppState>,
    AppPath(ad_id): AppPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let contact = state.ads.get_ad_contact(ad_id).await.inspect_err(|_| {
        tracing::debug!(%ad_id, "Ad contact lookup failed");
    })?;

    Ok(Json(contact))
}
