//! Calendar Backend - Main Library
//!
//! A calendar event service: users sign up and log in to obtain a bearer
//! token, then create, list, update and delete their own events. Each user
//! sees only the events they own.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types independent of the HTTP layer
//!   - `Event`, `EventType`, create/update payloads and their validation
//!   - Presence-aware `Patch<T>` for partial updates
//!   - Timestamp parsing
//!
//! - **`backend`** - Axum server
//!   - Configuration, state and startup
//!   - Authentication (bcrypt passwords, HS256 tokens)
//!   - Owner-scoped event storage in SQLite
//!
//! # Usage
//!
//! ```rust,no_run
//! use calendar_backend::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
