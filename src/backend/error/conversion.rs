/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse`, so handlers return them
 * directly. Server-side failures are logged here, once, with their full
 * detail; the client only sees the generic message.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Event not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
