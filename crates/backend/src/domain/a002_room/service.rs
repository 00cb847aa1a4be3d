use super::repository;
use crate::domain::a001_location;
use crate::shared::error::ServiceError;
use contracts::domain::a002_room::aggregate::{Room, RoomDto};
use uuid::Uuid;

/// Resolve the DTO's location reference to a live (non-deleted) location.
async fn require_location(location_id: &str) -> Result<Uuid, ServiceError> {
    let uuid = Uuid::parse_str(location_id)
        .map_err(|_| ServiceError::Validation("Location is required.".into()))?;

    let location = a001_location::repository::get_by_id(uuid).await?;
    match location {
        Some(l) if !l.base.metadata.is_deleted => Ok(uuid),
        _ => Err(ServiceError::Validation(format!(
            "Location {} does not exist",
            location_id
        ))),
    }
}

/// Create a new room
pub async fn create(dto: RoomDto) -> Result<Uuid, ServiceError> {
    let location_uuid = require_location(&dto.location_id).await?;

    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("RM-{}", Uuid::new_v4()));
    let mut aggregate = Room::new_for_insert(
        code,
        dto.description,
        contracts::domain::a001_location::aggregate::LocationId(location_uuid),
        dto.comment,
    );

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing room.
///
/// Returns `Ok(false)` when the room row is gone (e.g. deleted concurrently);
/// the dialog treats that as a recoverable failure rather than an error.
pub async fn update(dto: RoomDto) -> Result<bool, ServiceError> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let existing = repository::get_by_id(id).await?;
    let mut aggregate = match existing {
        Some(r) if !r.base.metadata.is_deleted => r,
        _ => return Ok(false),
    };

    require_location(&dto.location_id).await?;

    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(true)
}

/// Soft delete a room
pub async fn delete(id: Uuid) -> Result<bool, ServiceError> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Room>, ServiceError> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> Result<Vec<Room>, ServiceError> {
    Ok(repository::list_all().await?)
}

pub async fn list_by_location(location_id: Uuid) -> Result<Vec<Room>, ServiceError> {
    Ok(repository::list_by_location(location_id).await?)
}
