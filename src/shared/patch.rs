//! Presence-aware field wrapper for partial updates
//!
//! A JSON body for a partial update has three states per field: the key is
//! missing, the key is present with `null`, or the key carries a value.
//! `Option<T>` collapses the first two, so update payloads wrap every field
//! in [`Patch`] and mark it `#[serde(default)]`:
//!
//! ```rust
//! use calendar_backend::shared::patch::Patch;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Changes {
//!     #[serde(default)]
//!     description: Patch<String>,
//! }
//!
//! let c: Changes = serde_json::from_str("{}").unwrap();
//! assert!(c.description.is_missing());
//! let c: Changes = serde_json::from_str(r#"{"description": null}"#).unwrap();
//! assert_eq!(c.description, Patch::Null);
//! ```

use serde::{Deserialize, Deserializer};

/// One field of a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not sent; keep the stored value
    #[default]
    Missing,
    /// The field was sent as `null`
    Null,
    /// The field was sent with a value
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the field was left out of the body
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

// Only called when the key is present, so `None` here means an explicit null.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
