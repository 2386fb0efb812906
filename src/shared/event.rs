/**
 * Calendar Event Types
 *
 * This module defines the calendar event record and the request payloads
 * used to create and partially update it. Field rules (title length, color
 * length, time ordering) live here so every entry point applies the same
 * checks before anything reaches storage.
 */
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::patch::Patch;
use crate::shared::time;

/// Color assigned when a client does not pick one (Google Calendar blue)
pub const DEFAULT_COLOR: &str = "#4285F4";

/// Maximum title length in characters
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum color string length in characters
pub const COLOR_MAX_LEN: usize = 20;

/// Kind of calendar entry
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Event,
    Task,
    Reminder,
}

impl EventType {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Event => "event",
            EventType::Task => "task",
            EventType::Reminder => "reminder",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event" => Ok(EventType::Event),
            "task" => Ok(EventType::Task),
            "reminder" => Ok(EventType::Reminder),
            other => Err(SharedError::unknown_event_type(other)),
        }
    }
}

/// A stored calendar event
///
/// The owner id is kept server-side only and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(skip_serializing, default)]
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub all_day: bool,
    pub event_type: EventType,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Create event request
///
/// `title`, `start_time` and `end_time` are required; the remaining fields
/// fall back to their defaults when omitted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "time::deserialize")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "time::deserialize")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default = "default_color")]
    pub color: String,
}

impl CreateEventRequest {
    /// Check field rules before insertion
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_title(&self.title)?;
        validate_color(&self.color)?;
        validate_range(self.start_time, self.end_time)
    }
}

/// Partial update request
///
/// Every field is a [`Patch`]: omitted keys leave the stored value alone.
/// `description` is the only nullable column, so an explicit `null` clears
/// it; `null` on any other field is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default, deserialize_with = "time::deserialize_patch")]
    pub start_time: Patch<DateTime<Utc>>,
    #[serde(default, deserialize_with = "time::deserialize_patch")]
    pub end_time: Patch<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: Patch<bool>,
    #[serde(default)]
    pub event_type: Patch<EventType>,
    #[serde(default)]
    pub color: Patch<String>,
}

impl UpdateEventRequest {
    /// Produce the updated event, leaving `current` untouched
    ///
    /// Timestamps (`updated_at`) are the store's concern and are not changed
    /// here.
    pub fn apply(self, current: &Event) -> Result<Event, SharedError> {
        let mut event = current.clone();

        if let Some(title) = required("title", self.title)? {
            validate_title(&title)?;
            event.title = title;
        }
        match self.description {
            Patch::Missing => {}
            Patch::Null => event.description = None,
            Patch::Value(description) => event.description = Some(description),
        }
        if let Some(start_time) = required("start_time", self.start_time)? {
            event.start_time = start_time;
        }
        if let Some(end_time) = required("end_time", self.end_time)? {
            event.end_time = end_time;
        }
        if let Some(all_day) = required("all_day", self.all_day)? {
            event.all_day = all_day;
        }
        if let Some(event_type) = required("event_type", self.event_type)? {
            event.event_type = event_type;
        }
        if let Some(color) = required("color", self.color)? {
            validate_color(&color)?;
            event.color = color;
        }

        validate_range(event.start_time, event.end_time)?;
        Ok(event)
    }
}

fn required<T>(field: &str, patch: Patch<T>) -> Result<Option<T>, SharedError> {
    match patch {
        Patch::Missing => Ok(None),
        Patch::Null => Err(SharedError::validation(field, "This field may not be null")),
        Patch::Value(value) => Ok(Some(value)),
    }
}

fn validate_title(title: &str) -> Result<(), SharedError> {
    if title.trim().is_empty() {
        return Err(SharedError::validation("title", "Title may not be blank"));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at most {} characters", TITLE_MAX_LEN),
        ));
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<(), SharedError> {
    if color.trim().is_empty() || color.chars().count() > COLOR_MAX_LEN {
        return Err(SharedError::validation(
            "color",
            format!("Color must be 1-{} characters", COLOR_MAX_LEN),
        ));
    }
    Ok(())
}

fn validate_range(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<(), SharedError> {
    if end_time < start_time {
        return Err(SharedError::validation(
            "end_time",
            "End time must not be before start time",
        ));
    }
    Ok(())
}
