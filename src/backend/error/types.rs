/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by every handler. Each variant
 * maps to exactly one HTTP status code and carries a message that is safe to
 * show to clients.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - Malformed or missing input (400)
 * - `Conflict` - Duplicate username or email (400)
 * - `Authentication` - Missing/invalid/expired token or bad credentials (401)
 * - `NotFound` - Resource absent or owned by someone else (404)
 *
 * ## Server Errors
 *
 * Database, token encoding, and password hashing failures all surface as
 * 500 with a generic message. Their details are only logged.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message shown for every 5xx response
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use calendar_backend::backend::error::BackendError;
///
/// let err = BackendError::not_found("Event not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Uniqueness violation on signup
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Missing/invalid token or rejected credentials
    #[error("Authentication error: {message}")]
    Authentication {
        /// Human-readable error message
        message: String,
    },

    /// Resource absent or not owned by the caller
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Payload rule violation from the shared module
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// Relational store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token encoding failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Whether this error is the client's fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `Conflict`, `Shared` - 400 Bad Request
    /// - `Authentication` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Database`, `Token`, `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } | Self::Shared(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Authentication { message }
            | Self::NotFound { message } => message.clone(),
            Self::Shared(err) => err.to_string(),
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}
