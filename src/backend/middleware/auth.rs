/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the bearer token from the
 * Authorization header, resolves it to a stored user and attaches that
 * identity to the request for handlers.
 *
 * Every rejection is a 401 with the same body, so a caller cannot tell a
 * malformed header from an expired token or a deleted account.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const UNAUTHENTICATED: &str = "Authentication credentials were not provided or are invalid";

/// Authenticated user resolved from a bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// Pull the token out of an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it with the token service
/// 3. Loads the user the token was issued for
/// 4. Attaches `AuthenticatedUser` to the request extensions
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::authentication(UNAUTHENTICATED)
    })?;

    let user_id = app_state.tokens.verify(token).ok_or_else(|| {
        tracing::warn!("Invalid or expired token");
        BackendError::authentication(UNAUTHENTICATED)
    })?;

    let user = get_user_by_id(&app_state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token refers to unknown user {}", user_id);
            BackendError::authentication(UNAUTHENTICATED)
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable behind `auth_middleware`; anywhere else it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::authentication(UNAUTHENTICATED)
            })
    }
}
