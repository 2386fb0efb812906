/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Logout acknowledgement
 *
 * ## Events (bearer token required)
 * - `GET /api/events` - List events
 * - `POST /api/events` - Create event
 * - `GET /api/events/{id}` - Get event
 * - `PUT /api/events/{id}` - Update event
 * - `DELETE /api/events/{id}` - Delete event
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, signup};
use crate::backend::events::{create_event, delete_event, get_event, list_events, update_event};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The event routes get the auth middleware as a route layer, so it only
/// runs for requests that matched one of them; unknown paths still fall
/// through to the 404 fallback.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let event_routes = Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .merge(event_routes)
}
