/**
 * Event Handlers
 *
 * HTTP handlers for the `/api/events` routes. All of them sit behind the
 * authentication middleware and pass the caller's id to every query, so an
 * event owned by someone else is reported as not found.
 *
 * # Routes
 *
 * - `GET /api/events` - List the caller's events
 * - `POST /api/events` - Create an event
 * - `GET /api/events/{id}` - Fetch one event
 * - `PUT /api/events/{id}` - Partially update an event
 * - `DELETE /api/events/{id}` - Delete an event
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::events::db;
use crate::backend::extract::ApiJson;
use crate::backend::middleware::AuthUser;
use crate::shared::{CreateEventRequest, Event, UpdateEventRequest};

const EVENT_NOT_FOUND: &str = "Event not found";

/// Body returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteEventResponse {
    pub success: bool,
    pub message: String,
}

/// List the caller's events, earliest first
pub async fn list_events(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Event>>, BackendError> {
    let events = db::list_events(&pool, user.user_id).await?;
    tracing::info!("Listed {} events for user {}", events.len(), user.user_id);

    Ok(Json(events))
}

/// Fetch a single event
pub async fn get_event(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<i64>,
) -> Result<Json<Event>, BackendError> {
    let event = owned_event(&pool, user.user_id, event_id).await?;
    Ok(Json(event))
}

/// Create an event for the caller
///
/// # Errors
///
/// * `400 Bad Request` - Unparseable body, blank or oversized title, bad
///   color, or an end time before the start time
pub async fn create_event(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), BackendError> {
    request.validate().inspect_err(|e| {
        tracing::warn!("Rejected event from user {}: {}", user.user_id, e);
    })?;

    let event = db::insert_event(&pool, user.user_id, &request).await?;
    tracing::info!("Created event {} for user {}", event.id, user.user_id);

    Ok((StatusCode::CREATED, Json(event)))
}

/// Apply a partial update to one of the caller's events
///
/// Fields absent from the body keep their stored values.
pub async fn update_event(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<i64>,
    ApiJson(changes): ApiJson<UpdateEventRequest>,
) -> Result<Json<Event>, BackendError> {
    let current = owned_event(&pool, user.user_id, event_id).await?;

    let updated = changes.apply(&current).inspect_err(|e| {
        tracing::warn!("Rejected update to event {}: {}", event_id, e);
    })?;

    let saved = db::save_event(&pool, user.user_id, &updated)
        .await?
        .ok_or_else(|| BackendError::not_found(EVENT_NOT_FOUND))?;
    tracing::info!("Updated event {} for user {}", saved.id, user.user_id);

    Ok(Json(saved))
}

/// Delete one of the caller's events
pub async fn delete_event(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<i64>,
) -> Result<Json<DeleteEventResponse>, BackendError> {
    let event = owned_event(&pool, user.user_id, event_id).await?;

    if !db::delete_event(&pool, user.user_id, event.id).await? {
        return Err(BackendError::not_found(EVENT_NOT_FOUND));
    }
    tracing::info!("Deleted event {} for user {}", event.id, user.user_id);

    Ok(Json(DeleteEventResponse {
        success: true,
        message: format!("Event '{}' deleted successfully", event.title),
    }))
}

async fn owned_event(pool: &SqlitePool, owner_id: i64, event_id: i64) -> Result<Event, BackendError> {
    db::get_event(pool, owner_id, event_id).await?.ok_or_else(|| {
        tracing::warn!("Event {} not found for user {}", event_id, owner_id);
        BackendError::not_found(EVENT_NOT_FOUND)
    })
}
