//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── logout.rs   - Stateless logout acknowledgement
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration (201)
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Acknowledgement only
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{routing::post, Router};
//! use calendar_backend::backend::auth::handlers::{login, logout, signup};
//!
//! let router = Router::new()
//!     .route("/api/auth/signup", post(signup))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/logout", post(logout));
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, MessageResponse, SignupRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use signup::signup;
