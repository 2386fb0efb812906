//! Shared Module
//!
//! Types and data structures that describe the calendar domain independently
//! of the HTTP layer and the database. Request payloads are validated here so
//! that handlers only ever pass well-formed values to storage.

/// Calendar event record and request payloads
pub mod event;

/// Shared error types
pub mod error;

/// Presence-aware partial update field
pub mod patch;

/// Timestamp parsing
pub mod time;

/// Re-export commonly used types for convenience
pub use event::{CreateEventRequest, Event, EventType, UpdateEventRequest, DEFAULT_COLOR};
pub use error::SharedError;
pub use patch::Patch;
