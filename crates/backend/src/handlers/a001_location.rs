use axum::http::StatusCode;
use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a001_location;
use contracts::domain::a001_location::aggregate::{Location, LocationDto};

/// GET /api/location
pub async fn list_all() -> Result<Json<Vec<Location>>, StatusCode> {
    match a001_location::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("location list failed: {e}");
            Err(e.status_code())
        }
    }
}

/// GET /api/location/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Location>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a001_location::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(e.status_code()),
    }
}

/// POST /api/location
pub async fn upsert(Json(dto): Json<LocationDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = if let Some(id) = dto.id.clone() {
        a001_location::service::update(dto).await.map(|_| id)
    } else {
        a001_location::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::warn!("location upsert rejected: {e}");
            Err(e.status_code())
        }
    }
}

/// DELETE /api/location/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a001_location::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(e.status_code()),
    }
}

/// POST /api/location/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_location::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("location test data failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
