use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{company, health, stock};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/v1.0/market/company", company::router())
        .nest("/api/v1.0/market/stock", stock::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
