/**
 * Authentication Request/Response Types
 *
 * Missing request fields deserialize to empty strings so that the handlers,
 * not the JSON extractor, decide what an incomplete submission means. The
 * optional name fields also accept `null`.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::tokens::TokenResponse;
use crate::backend::auth::users::User;

/// Signup request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user; never includes the password hash
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Authentication response (returned by signup and login)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: TokenResponse,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
