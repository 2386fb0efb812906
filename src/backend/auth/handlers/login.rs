/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue an access token
 * 4. Return user info and token
 *
 * # Security
 *
 * Every failure, including internal ones, returns the same 401 body so the
 * response never reveals whether a username exists. Attempts that match no
 * user are verified against the decoy hash in `AppState`, so they take as
 * long as a wrong password.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing fields, unknown user, wrong password, or
///   an internal failure while checking them
pub async fn login(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    match authenticate(&app_state, &request).await {
        Ok(Some(response)) => {
            tracing::info!("User logged in: {}", response.user.username);
            Ok(Json(response))
        }
        Ok(None) => {
            tracing::warn!("Invalid credentials for: {}", request.username);
            Err(BackendError::authentication(INVALID_CREDENTIALS))
        }
        Err(e) => {
            tracing::error!("Login failed for {}: {}", request.username, e);
            Err(BackendError::authentication(INVALID_CREDENTIALS))
        }
    }
}

/// `Ok(None)` means the credentials did not match
async fn authenticate(
    app_state: &AppState,
    request: &LoginRequest,
) -> Result<Option<AuthResponse>, BackendError> {
    let user = if request.username.is_empty() || request.password.is_empty() {
        None
    } else {
        get_user_by_username(&app_state.db_pool, &request.username).await?
    };

    let user = match user {
        Some(user) if verify(&request.password, &user.password_hash)? => user,
        Some(_) => return Ok(None),
        None => {
            verify(&request.password, &app_state.password_decoy)?;
            return Ok(None);
        }
    };

    let token = app_state.tokens.issue(user.id)?;

    Ok(Some(AuthResponse {
        user: user.into(),
        token,
    }))
}
