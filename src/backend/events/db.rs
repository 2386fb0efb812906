//! Database operations for calendar events
//!
//! Every query takes the owner id explicitly and filters on it, so a row that
//! belongs to someone else looks exactly like a row that does not exist.

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, FromRow, Row, SqlitePool};

use crate::shared::{CreateEventRequest, Event, EventType};

const EVENT_COLUMNS: &str = "id, user_id, title, description, start_time, end_time, \
                             all_day, event_type, color, created_at, updated_at";

impl<'r> FromRow<'r, SqliteRow> for Event {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let event_type: String = row.try_get("event_type")?;
        let event_type = event_type
            .parse::<EventType>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "event_type".to_string(),
                source: Box::new(e),
            })?;

        Ok(Event {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            all_day: row.try_get("all_day")?,
            event_type,
            color: row.try_get("color")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// All events owned by a user, earliest first
pub async fn list_events(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Event>, sqlx::Error> {
    let query = format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE user_id = ? ORDER BY start_time ASC, id ASC"
    );

    sqlx::query_as::<_, Event>(&query)
        .bind(owner_id)
        .fetch_all(pool)
        .await
}

/// A single event, only if it belongs to `owner_id`
pub async fn get_event(
    pool: &SqlitePool,
    owner_id: i64,
    event_id: i64,
) -> Result<Option<Event>, sqlx::Error> {
    let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ? AND user_id = ?");

    sqlx::query_as::<_, Event>(&query)
        .bind(event_id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await
}

/// Insert a validated event for `owner_id`
pub async fn insert_event(
    pool: &SqlitePool,
    owner_id: i64,
    request: &CreateEventRequest,
) -> Result<Event, sqlx::Error> {
    let now = Utc::now();
    let query = format!(
        "INSERT INTO events (user_id, title, description, start_time, end_time, all_day, \
         event_type, color, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {EVENT_COLUMNS}"
    );

    sqlx::query_as::<_, Event>(&query)
        .bind(owner_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.all_day)
        .bind(request.event_type.as_str())
        .bind(&request.color)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
}

/// Write back every mutable column of `event` and refresh `updated_at`
///
/// Returns `None` when the row vanished or changed owner in the meantime.
pub async fn save_event(
    pool: &SqlitePool,
    owner_id: i64,
    event: &Event,
) -> Result<Option<Event>, sqlx::Error> {
    let query = format!(
        "UPDATE events SET title = ?, description = ?, start_time = ?, end_time = ?, \
         all_day = ?, event_type = ?, color = ?, updated_at = ? \
         WHERE id = ? AND user_id = ? \
         RETURNING {EVENT_COLUMNS}"
    );

    sqlx::query_as::<_, Event>(&query)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.all_day)
        .bind(event.event_type.as_str())
        .bind(&event.color)
        .bind(Utc::now())
        .bind(event.id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await
}

/// Remove an event owned by `owner_id`
///
/// # Returns
/// Whether a row was removed
pub async fn delete_event(
    pool: &SqlitePool,
    owner_id: i64,
    event_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE id = ? AND user_id = ?")
        .bind(event_id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
