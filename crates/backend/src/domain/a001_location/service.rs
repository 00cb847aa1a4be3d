use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_location::aggregate::{Location, LocationDto};
use uuid::Uuid;

/// Create a new location
pub async fn create(dto: LocationDto) -> Result<Uuid, ServiceError> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("LOC-{}", Uuid::new_v4()));
    let mut aggregate = Location::new_for_insert(code, dto.description, dto.address, dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing location
pub async fn update(dto: LocationDto) -> Result<(), ServiceError> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::update(&aggregate).await?)
}

/// Soft delete a location
pub async fn delete(id: Uuid) -> Result<bool, ServiceError> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Location>, ServiceError> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> Result<Vec<Location>, ServiceError> {
    Ok(repository::list_all().await?)
}

/// Seed a few demo locations
pub async fn insert_test_data() -> Result<(), ServiceError> {
    let data = vec![
        LocationDto {
            id: None,
            code: Some("loc-main".into()),
            description: "Main Building".into(),
            address: Some("1 Harbour Road".into()),
            comment: None,
        },
        LocationDto {
            id: None,
            code: Some("loc-annex".into()),
            description: "Annex".into(),
            address: Some("3 Harbour Road".into()),
            comment: Some("Opened 2024".into()),
        },
        LocationDto {
            id: None,
            code: Some("loc-garden".into()),
            description: "Garden Pavilion".into(),
            address: None,
            comment: None,
        },
    ];

    for dto in data {
        create(dto).await?;
    }

    Ok(())
}
