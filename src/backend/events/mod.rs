//! Events Module
//!
//! Owner-scoped storage and HTTP handlers for calendar events.
//!
//! # Module Structure
//!
//! ```text
//! events/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Queries, each filtered by owner id
//! └── handlers.rs - `/api/events` handlers
//! ```

pub mod db;
pub mod handlers;

pub use handlers::{create_event, delete_event, get_event, list_events, update_event};
