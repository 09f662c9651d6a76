//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Pain rating outside the accepted 1-10 scale
    #[error("Invalid pain rating: {0} (expected 1-10)")]
    InvalidPainRating(u8),

    /// Duration value of zero or otherwise unusable
    #[error("Invalid symptom duration: {0}")]
    InvalidDuration(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Operation not permitted in the current state
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Consultation", "abc");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Consultation");
                assert_eq!(id, "abc");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Consultation", "abc");
        assert_eq!(err.to_string(), "Consultation not found: abc");
    }

    #[test]
    fn invalid_pain_rating_message() {
        let err = DomainError::InvalidPainRating(11);
        assert_eq!(err.to_string(), "Invalid pain rating: 11 (expected 1-10)");
    }

    #[test]
    fn invalid_duration_message() {
        let err = DomainError::InvalidDuration("zero length".to_string());
        assert_eq!(err.to_string(), "Invalid symptom duration: zero length");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("description is required".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: description is required"
        );
    }

    #[test]
    fn not_permitted_error_message() {
        let err = DomainError::NotPermitted("consultation already closed".to_string());
        assert_eq!(
            err.to_string(),
            "Operation not permitted: consultation already closed"
        );
    }
}
