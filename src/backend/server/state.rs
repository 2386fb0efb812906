/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * The state is immutable once built: a connection pool, the token service,
 * the password hashing cost and a decoy hash for logins that match no user.
 * It is cloned into every request.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::tokens::TokenService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,

    /// Issues and verifies bearer tokens
    pub tokens: TokenService,

    /// bcrypt cost used when hashing new passwords
    pub bcrypt_cost: u32,

    /// Hash at `bcrypt_cost` that login verifies against when no stored
    /// hash applies, so unknown usernames cost as much as wrong passwords
    pub password_decoy: Arc<str>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
