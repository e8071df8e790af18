//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EntityRef, RecordId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Action type not found: {0}")]
    ActionTypeNotFound(String),

    #[error("Action not found: {0}")]
    ActionNotFound(RecordId),

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    #[error("Entity lookup failed: {0}")]
    EntityLookup(EntityRef),

    // =========================================================================
    // Format Errors
    // =========================================================================
    #[error("Format template references unknown placeholder: {0}")]
    UnknownPlaceholder(String),

    #[error("Format template is malformed: {0}")]
    MalformedTemplate(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Action type name already exists: {0}")]
    DuplicateActionType(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for callers that log or report errors
    pub fn code(&self) -> &'static str {
        match self {
            Self::ActionTypeNotFound(_) => "UNKNOWN_ACTION_TYPE",
            Self::ActionNotFound(_) => "UNKNOWN_ACTION",
            Self::EntityLookup(_) => "ENTITY_LOOKUP_FAILED",
            Self::UnknownPlaceholder(_) => "UNKNOWN_PLACEHOLDER",
            Self::MalformedTemplate(_) => "MALFORMED_TEMPLATE",
            Self::DuplicateActionType(_) => "DUPLICATE_ACTION_TYPE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActionTypeNotFound(_) | Self::ActionNotFound(_))
    }

    /// Check if this is a render-time format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::UnknownPlaceholder(_) | Self::MalformedTemplate(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateActionType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ActionTypeNotFound("comment".to_string());
        assert_eq!(err.code(), "UNKNOWN_ACTION_TYPE");

        let err = DomainError::UnknownPlaceholder("user".to_string());
        assert_eq!(err.code(), "UNKNOWN_PLACEHOLDER");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ActionTypeNotFound("x".into()).is_not_found());
        assert!(DomainError::ActionNotFound(RecordId::new(1)).is_not_found());
        assert!(!DomainError::DuplicateActionType("x".into()).is_not_found());
    }

    #[test]
    fn test_is_format() {
        assert!(DomainError::UnknownPlaceholder("user".into()).is_format());
        assert!(DomainError::MalformedTemplate("{".into()).is_format());
        assert!(!DomainError::DatabaseError("boom".into()).is_format());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::EntityLookup(EntityRef::new("user", 7));
        assert_eq!(err.to_string(), "Entity lookup failed: user:7");
    }
}
