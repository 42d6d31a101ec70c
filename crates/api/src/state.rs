use duo_core::service::AdService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the service holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Ad operations over the configured store.
    pub ads: AdService,
}
