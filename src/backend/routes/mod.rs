//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers and fallback
//! └── api_routes.rs   - `/api` auth and event routes
//! ```
//!
//! # Route Types
//!
//! ## Authentication (public)
//!
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/logout` - Logout acknowledgement
//!
//! ## Events (require `Authorization: Bearer <token>`)
//!
//! - `GET /api/events` / `POST /api/events`
//! - `GET /api/events/{id}` / `PUT /api/events/{id}` / `DELETE /api/events/{id}`
//!
//! Anything else gets a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
