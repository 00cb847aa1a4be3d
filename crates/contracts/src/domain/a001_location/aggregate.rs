use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
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

impl AggregateId for LocationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LocationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

const NAME_RULES: ValidationRules = ValidationRules::required();

/// Location (a building or site that owns rooms)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(flatten)]
    pub base: BaseAggregate<LocationId>,

    pub address: Option<String>,
}

impl Location {
    /// Create a new location for insertion into the database
    pub fn new_for_insert(
        code: String,
        description: String,
        address: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(LocationId::new_v4(), code, description);
        base.comment = comment;

        Self { base, address }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO fields on top of the loaded aggregate
    pub fn update(&mut self, dto: &LocationDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.address = dto.address.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        NAME_RULES.validate_string(&self.base.description, "Location name")?;
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

/// DTO for creating/updating a location
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub address: Option<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_name() {
        let loc = Location::new_for_insert("LOC-1".into(), "  ".into(), None, None);
        assert_eq!(loc.validate(), Err("Location name is required.".to_string()));
    }

    #[test]
    fn update_applies_dto_fields() {
        let mut loc = Location::new_for_insert("LOC-1".into(), "Main".into(), None, None);
        loc.update(&LocationDto {
            id: None,
            code: None,
            description: "Main building".into(),
            address: Some("1 High St".into()),
            comment: None,
        });
        assert_eq!(loc.base.description, "Main building");
        assert_eq!(loc.address.as_deref(), Some("1 High St"));
        // code untouched when the DTO omits it
        assert_eq!(loc.base.code, "LOC-1");
    }
}
