use crate::domain::a001_location::aggregate::LocationId;
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for RoomId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RoomId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Room name must be at least this long; shared with the form draft.
pub const NAME_RULES: ValidationRules = ValidationRules::min_length(3);

/// Room (a bookable space owned by a location)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(flatten)]
    pub base: BaseAggregate<RoomId>,

    #[serde(rename = "locationId")]
    pub location_id: LocationId,
}

impl Room {
    /// Create a new room for insertion into the database
    pub fn new_for_insert(
        code: String,
        description: String,
        location_id: LocationId,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(RoomId::new_v4(), code, description);
        base.comment = comment;

        Self { base, location_id }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO fields on top of the loaded aggregate
    pub fn update(&mut self, dto: &RoomDto) -> Result<(), String> {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.location_id = LocationId::from_string(&dto.location_id)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        NAME_RULES.validate_string(&self.base.description, "Room name")?;
        if self.base.code.trim().is_empty() {
            return Err("Code is required.".into());
        }
        Ok(())
    }

    /// Hook executed before every write
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a room
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "locationId")]
    pub location_id: String,

    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str) -> Room {
        Room::new_for_insert("RM-1".into(), name.into(), LocationId::new_v4(), None)
    }

    #[test]
    fn validate_enforces_minimum_name_length() {
        assert_eq!(
            room("ab").validate(),
            Err("Room name must be at least 3 characters long.".to_string())
        );
        assert!(room("Sunrise Suite").validate().is_ok());
    }

    #[test]
    fn update_reassigns_location() {
        let mut r = room("Old");
        let target = LocationId::new_v4();
        r.update(&RoomDto {
            id: Some(r.to_string_id()),
            code: None,
            description: "New".into(),
            location_id: target.as_string(),
            comment: None,
        })
        .unwrap();
        assert_eq!(r.base.description, "New");
        assert_eq!(r.location_id, target);
    }

    #[test]
    fn update_rejects_malformed_location_id() {
        let mut r = room("Old");
        let err = r
            .update(&RoomDto {
                id: None,
                code: None,
                description: "New".into(),
                location_id: "not-a-uuid".into(),
                comment: None,
            })
            .unwrap_err();
        assert!(err.starts_with("Invalid UUID"));
    }
}
