//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token gate for the event routes, plus the
//!   `AuthUser` extractor handlers use to read the caller's identity
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use calendar_backend::backend::middleware::auth_middleware;
//!
//! let protected = routes.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
