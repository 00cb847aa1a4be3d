use axum::http::StatusCode;
use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a002_room;
use contracts::domain::a002_room::aggregate::{Room, RoomDto};

/// GET /api/room
pub async fn list_all() -> Result<Json<Vec<Room>>, StatusCode> {
    match a002_room::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("room list failed: {e}");
            Err(e.status_code())
        }
    }
}

/// GET /api/room/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Room>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a002_room::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(e.status_code()),
    }
}

/// POST /api/room
///
/// Upsert: a DTO with an id updates, without an id creates. An update whose
/// target row is gone answers 404 so the dialog can surface a recoverable
/// failure.
pub async fn upsert(Json(dto): Json<RoomDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    if let Some(id) = dto.id.clone() {
        match a002_room::service::update(dto).await {
            Ok(true) => Ok(Json(json!({"id": id}))),
            Ok(false) => Err(StatusCode::NOT_FOUND),
            Err(e) => {
                tracing::warn!("room update rejected: {e}");
                Err(e.status_code())
            }
        }
    } else {
        match a002_room::service::create(dto).await {
            Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
            Err(e) => {
                tracing::warn!("room create rejected: {e}");
                Err(e.status_code())
            }
        }
    }
}

/// GET /api/location/:id/rooms
pub async fn list_by_location(Path(id): Path<String>) -> Result<Json<Vec<Room>>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a002_room::service::list_by_location(uuid).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(e.status_code()),
    }
}

/// DELETE /api/room/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a002_room::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(e.status_code()),
    }
}
