//! Declarative validation rules for form fields

/// Validation rules for a single field.
/// Copy trait for efficient passing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Field must be non-empty
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    /// Field must be at least `min` characters long
    pub const fn min_length(min: usize) -> Self {
        Self {
            required: false,
            min_length: Some(min),
            max_length: None,
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Pure function of input; the error message is built from `field_label`
    /// and is shown to the user verbatim.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required.", field_label));
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(format!(
                    "{} must be at least {} characters long.",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!(
                    "{} must be at most {} characters long.",
                    field_label, max
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Location"),
            Err("Location is required.".to_string())
        );
        assert!(rules.validate_string("L1", "Location").is_ok());
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let rules = ValidationRules::min_length(3);
        assert!(rules.validate_string("зал", "Room name").is_ok());
        assert_eq!(
            rules.validate_string("ab", "Room name"),
            Err("Room name must be at least 3 characters long.".to_string())
        );
    }

    #[test]
    fn none_accepts_anything() {
        assert!(ValidationRules::none().validate_string("", "x").is_ok());
    }
}
