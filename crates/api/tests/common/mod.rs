#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use duo_api::config::ServerConfig;
use duo_api::router::build_app_router;
use duo_api::state::AppState;
use duo_core::game::Game;
use duo_core::service::AdService;
use duo_core::store::{AdStore, MemoryAdStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn AdStore>) -> Router {
    let state = AppState {
        ads: AdService::new(store),
    };
    build_app_router(state, &test_config())
}

/// A game fixture with a fresh id.
pub fn game(title: &str) -> Game {
    Game {
        id: Uuid::new_v4(),
        title: title.to_string(),
        banner_url: format!("https://cdn.example/{}.png", title.to_lowercase()),
    }
}

/// A memory store seeded with `games`.
pub fn store_with(games: &[Game]) -> Arc<MemoryAdStore> {
    Arc::new(MemoryAdStore::with_games(games.iter().cloned()))
}

/// A valid create-ad body.
pub fn ad_body(name: &str, discord: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "yearsPlaying": 3,
        "discord": discord,
        "weekDays": ["mon", "wed", "fri"],
        "hourStart": "18:00",
        "hourEnd": "22:30",
        "useVoiceChannel": true,
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
