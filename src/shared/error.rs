//! Shared Error Types
//!
//! This module defines the error type raised while validating and parsing
//! event payloads. These errors describe bad client input and never carry
//! storage or transport details.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed a business rule
//! - `InvalidTimestamp` - A timestamp string could not be parsed
//! - `UnknownEventType` - An event type outside `event`/`task`/`reminder`
//!
//! # Usage
//!
//! ```rust
//! use calendar_backend::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title may not be blank");
//! ```
use thiserror::Error;

/// Errors produced by shared payload validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("{field}: {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Timestamp parse error
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp {
        /// The rejected input
        value: String,
    },

    /// Event type outside the supported set
    #[error("Unknown event type: {value}")]
    UnknownEventType {
        /// The rejected input
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new timestamp error
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Create a new event type error
    pub fn unknown_event_type(value: impl Into<String>) -> Self {
        Self::UnknownEventType {
            value: value.into(),
        }
    }
}
