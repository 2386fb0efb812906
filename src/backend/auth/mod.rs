//! Authentication Module
//!
//! This module handles user registration, login and access tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`tokens`** - Access token issuing and verification
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── tokens.rs       - HS256 token service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── logout.rs   - Logout acknowledgement
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email and password → user created → token returned
//! 2. **Login**: username and password verified → token returned
//! 3. **Requests**: `Authorization: Bearer <token>` checked by the auth middleware
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and expire after 10 days
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Access token issuing and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{login, logout, signup};
pub use tokens::{Claims, TokenResponse, TokenService};
