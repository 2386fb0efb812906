/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate that username, email and password are present
 * 2. Check username, then email, for an existing account
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue an access token
 * 6. Return user info and token
 *
 * Once validation has passed, any failure is reported to the client as
 * "User already exists" (400). The real cause is logged.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username, NewUser};
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::server::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

fn validate(request: &SignupRequest) -> Result<(), BackendError> {
    if request.username.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(BackendError::validation(
            "Username, email and password are required",
        ));
    }

    if !request.email.contains('@') {
        return Err(BackendError::validation("Invalid email format"));
    }

    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(BackendError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    Ok(())
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Unparseable body, missing fields, invalid email,
///   short password, or the username/email is taken
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "a@x.com",
///   "password": "secret1"
/// }
/// ```
pub async fn signup(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request for username: {}", request.username);

    validate(&request).inspect_err(|e| {
        tracing::warn!("Signup rejected for {}: {}", request.username, e);
    })?;

    match register(&app_state, &request).await {
        Ok(response) => {
            tracing::info!("User created successfully: {}", response.user.username);
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) if e.is_client_error() => {
            tracing::warn!("Signup rejected for {}: {}", request.username, e);
            Err(e)
        }
        Err(e) => {
            tracing::error!("Signup failed for {}: {}", request.username, e);
            Err(BackendError::conflict("User already exists"))
        }
    }
}

async fn register(app_state: &AppState, request: &SignupRequest) -> Result<AuthResponse, BackendError> {
    let pool = &app_state.db_pool;

    if get_user_by_username(pool, &request.username).await?.is_some() {
        return Err(BackendError::conflict("Username already exists"));
    }

    if get_user_by_email(pool, &request.email).await?.is_some() {
        return Err(BackendError::conflict("Email already exists"));
    }

    let password_hash = hash(&request.password, app_state.bcrypt_cost)?;

    let user = create_user(
        pool,
        NewUser {
            username: &request.username,
            email: &request.email,
            password_hash: &password_hash,
            first_name: request.first_name.as_deref().unwrap_or_default(),
            last_name: request.last_name.as_deref().unwrap_or_default(),
        },
    )
    .await?;

    let token = app_state.tokens.issue(user.id)?;

    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}
