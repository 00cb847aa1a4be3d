//! Transient form values for the room create/edit dialog.
//!
//! The draft exists only for the lifetime of an open dialog. It is re-seeded
//! on every open, validated on every edit and on submit, and turned into a
//! `RoomDto` only when the user saves.

use super::aggregate::{Room, NAME_RULES};
use crate::domain::a001_location::aggregate::Location;
use crate::domain::common::AggregateId;
use crate::shared::validation::ValidationRules;
use serde::{Deserialize, Serialize};

const LOCATION_RULES: ValidationRules = ValidationRules::required();

/// Client-side draft of the room form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoomDraft {
    pub name: String,
    pub location_id: String,
}

/// Field-level validation errors for the room form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomDraftErrors {
    pub name: Option<String>,
    pub location_id: Option<String>,
}

impl RoomDraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location_id.is_none()
    }
}

impl RoomDraft {
    /// Seed the draft for a freshly opened dialog.
    ///
    /// Name comes from the existing room or stays empty. The location falls
    /// back from the existing room to the supplied default to the first
    /// available location; with no locations at all it stays empty (and
    /// submission is rejected upstream).
    pub fn seeded(
        existing: Option<&Room>,
        locations: &[Location],
        default_location_id: Option<&str>,
    ) -> Self {
        let name = existing
            .map(|r| r.base.description.clone())
            .unwrap_or_default();

        let location_id = existing
            .map(|r| r.location_id.as_string())
            .or_else(|| default_location_id.map(str::to_string))
            .or_else(|| locations.first().map(|l| l.base.id.as_string()))
            .unwrap_or_default();

        Self { name, location_id }
    }

    /// Validate the draft. Pure; returns per-field messages on failure.
    pub fn validate(&self) -> Result<(), RoomDraftErrors> {
        let errors = RoomDraftErrors {
            name: NAME_RULES.validate_string(&self.name, "Room name").err(),
            location_id: LOCATION_RULES
                .validate_string(&self.location_id, "Location")
                .err(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the persistence DTO: a merged record in edit mode (original id
    /// and code, new name and location), a plain create payload otherwise.
    pub fn into_dto(self, existing: Option<&Room>) -> super::aggregate::RoomDto {
        super::aggregate::RoomDto {
            id: existing.map(|r| r.to_string_id()),
            code: existing.map(|r| r.base.code.clone()),
            description: self.name,
            location_id: self.location_id,
            comment: existing.and_then(|r| r.base.comment.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_location::aggregate::LocationId;
    use uuid::Uuid;

    fn location(id: &str, name: &str) -> Location {
        let mut loc =
            Location::new_for_insert(format!("LOC-{}", name), name.to_string(), None, None);
        loc.base.id = LocationId::new(Uuid::parse_str(id).unwrap());
        loc
    }

    fn room(id: &str, name: &str, location: &str) -> Room {
        let mut r = Room::new_for_insert(
            "RM-1".into(),
            name.into(),
            LocationId::new(Uuid::parse_str(location).unwrap()),
            None,
        );
        r.base.id = super::super::aggregate::RoomId::new(Uuid::parse_str(id).unwrap());
        r
    }

    const L1: &str = "11111111-1111-1111-1111-111111111111";
    const L2: &str = "22222222-2222-2222-2222-222222222222";
    const R1: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";

    #[test]
    fn short_name_is_rejected_with_length_message() {
        for name in ["", "a", "ab"] {
            let draft = RoomDraft {
                name: name.into(),
                location_id: L1.into(),
            };
            let errors = draft.validate().unwrap_err();
            assert_eq!(
                errors.name.as_deref(),
                Some("Room name must be at least 3 characters long.")
            );
            assert!(errors.location_id.is_none());
        }
    }

    #[test]
    fn empty_location_is_rejected_with_required_message() {
        let draft = RoomDraft {
            name: "Sunrise Suite".into(),
            location_id: String::new(),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.location_id.as_deref(), Some("Location is required."));
        assert!(errors.name.is_none());
    }

    #[test]
    fn valid_draft_passes() {
        let draft = RoomDraft {
            name: "Sunrise Suite".into(),
            location_id: L1.into(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn seeding_prefers_existing_room_over_default() {
        let locations = vec![location(L1, "Lobby"), location(L2, "Annex")];
        let existing = room(R1, "Old", L2);
        let draft = RoomDraft::seeded(Some(&existing), &locations, Some(L1));
        assert_eq!(draft.name, "Old");
        assert_eq!(draft.location_id, L2);
    }

    #[test]
    fn seeding_create_mode_uses_default_location() {
        let locations = vec![location(L1, "Lobby")];
        let draft = RoomDraft::seeded(None, &locations, Some(L1));
        assert_eq!(draft.name, "");
        assert_eq!(draft.location_id, L1);
    }

    #[test]
    fn seeding_falls_back_to_first_location() {
        let locations = vec![location(L2, "Annex"), location(L1, "Lobby")];
        let draft = RoomDraft::seeded(None, &locations, None);
        assert_eq!(draft.location_id, L2);
    }

    #[test]
    fn seeding_with_no_locations_leaves_location_empty() {
        let draft = RoomDraft::seeded(None, &[], None);
        assert_eq!(draft.location_id, "");
        // an empty-location draft can never validate
        assert!(draft.validate().is_err());
    }

    #[test]
    fn reseeding_with_a_different_room_discards_previous_edits() {
        let locations = vec![location(L1, "Lobby"), location(L2, "Annex")];
        let first = room(R1, "First", L1);
        let mut draft = RoomDraft::seeded(Some(&first), &locations, None);
        draft.name = "Edited but never saved".into();

        let second = room("bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb", "Second", L2);
        draft = RoomDraft::seeded(Some(&second), &locations, None);
        assert_eq!(draft.name, "Second");
        assert_eq!(draft.location_id, L2);
    }

    #[test]
    fn create_scenario_produces_plain_payload() {
        // open with no existing room, locations = [Lobby], default = L1
        let locations = vec![location(L1, "Lobby")];
        let mut draft = RoomDraft::seeded(None, &locations, Some(L1));
        assert_eq!(draft.location_id, L1);

        draft.name = "Sunrise Suite".into();
        assert!(draft.validate().is_ok());

        let dto = draft.into_dto(None);
        assert_eq!(dto.id, None);
        assert_eq!(dto.description, "Sunrise Suite");
        assert_eq!(dto.location_id, L1);
    }

    #[test]
    fn edit_scenario_merges_original_identity() {
        let locations = vec![location(L1, "Lobby")];
        let existing = room(R1, "Old", L1);
        let mut draft = RoomDraft::seeded(Some(&existing), &locations, None);
        draft.name = "New".into();

        let dto = draft.into_dto(Some(&existing));
        assert_eq!(dto.id.as_deref(), Some(R1));
        assert_eq!(dto.description, "New");
        assert_eq!(dto.location_id, L1);
        assert_eq!(dto.code.as_deref(), Some("RM-1"));
    }
}
