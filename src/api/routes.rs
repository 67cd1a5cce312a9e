use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Creates the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/health", get(handlers::health_check))
        // Recommendation lookups, one route per strategy table
        .route("/compute_ur", get(handlers::compute_ur))
        .route("/compute_als", get(handlers::compute_als))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
