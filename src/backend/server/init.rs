/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool (creating the file if missing, foreign keys on)
 * 2. Run migrations
 * 3. Build the token service from the configured secret
 * 4. Hash the login decoy at the configured cost
 * 5. Create and configure the router
 *
 * Unlike optional services, the database is required: any failure here
 * aborts startup.
 */

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::tokens::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

const MAX_CONNECTIONS: u32 = 5;

const DECOY_PASSWORD: &str = "decoy-password-never-issued";

/// Startup errors
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Open the connection pool and bring the schema up to date
///
/// In-memory databases live only as long as their connection, so they get
/// a single connection that is never recycled. Each call then yields an
/// isolated database.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, InitError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Build the shared application state from configuration
pub async fn build_state(config: &ServerConfig) -> Result<AppState, InitError> {
    config.validate()?;

    let db_pool = load_database(&config.database_url).await?;
    let password_decoy = bcrypt::hash(DECOY_PASSWORD, config.bcrypt_cost)?;

    Ok(AppState {
        db_pool,
        tokens: TokenService::new(&config.jwt_secret),
        bcrypt_cost: config.bcrypt_cost,
        password_decoy: password_decoy.into(),
    })
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing calendar backend server");

    let app_state = build_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
