/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` - request/response spans through `tracing`
 * - `CorsLayer::permissive()` - the browser frontend runs on another origin
 */

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, token service, hashing cost)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "message": "Not found",
            "status": 404,
        })),
    )
}
