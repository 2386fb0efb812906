/**
 * Logout Handler
 *
 * Tokens are stateless and there is no revocation list, so logout only
 * acknowledges the request. The client is expected to discard its token.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MessageResponse;

pub const LOGOUT_MESSAGE: &str = "Logged out successfully. Please delete the token on client side.";

/// Logout handler (no authentication required)
pub async fn logout() -> Json<MessageResponse> {
    tracing::debug!("Logout acknowledged");

    Json(MessageResponse {
        message: LOGOUT_MESSAGE.to_string(),
    })
}
