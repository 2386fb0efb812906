//! Backend Module
//!
//! This module contains all server-side code for the calendar backend: an
//! Axum HTTP server with token-based authentication and per-user event
//! storage in SQLite.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, access tokens, signup/login/logout handlers
//! - **`events`** - Owner-scoped event queries and handlers
//! - **`middleware`** - Bearer-token authentication gate
//! - **`extract`** - JSON body extractor with `BackendError` rejections
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── events/         - Calendar events
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool, the token service and the bcrypt
//! cost. It is immutable and cloned into each request; the database is the
//! only shared mutable resource.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse` and renders as `{"message": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Calendar events
pub mod events;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
