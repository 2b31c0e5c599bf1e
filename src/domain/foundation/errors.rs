//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

use super::DayNumber;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Range start {start} is after range end {end}")]
    InvalidRange { start: DayNumber, end: DayNumber },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an inverted range validation error.
    pub fn invalid_range(start: DayNumber, end: DayNumber) -> Self {
        ValidationError::InvalidRange { start, end }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidRange,

    // Infrastructure errors
    RepositoryUnavailable,
    SnapshotInvalid,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::RepositoryUnavailable => "REPOSITORY_UNAVAILABLE",
            ErrorCode::SnapshotInvalid => "SNAPSHOT_INVALID",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Returned across port boundaries; the pure calculators never produce one.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::InvalidRange { .. } => ErrorCode::InvalidRange,
            _ => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_invalid_range_displays_correctly() {
        let err = ValidationError::invalid_range(10, 3);
        assert_eq!(format!("{}", err), "Range start 10 is after range end 3");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("date", "expected YYYY-MM-DD");
        assert_eq!(
            format!("{}", err),
            "Field 'date' has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::RepositoryUnavailable, "Store offline");
        assert_eq!(format!("{}", err), "[REPOSITORY_UNAVAILABLE] Store offline");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::SnapshotInvalid, "Missing periods")
            .with_detail("path", "/tmp/snapshot.json");

        assert_eq!(err.code, ErrorCode::SnapshotInvalid);
        assert_eq!(err.details.get("path"), Some(&"/tmp/snapshot.json".to_string()));
    }

    #[test]
    fn domain_error_from_invalid_range_keeps_code() {
        let err: DomainError = ValidationError::invalid_range(5, 1).into();
        assert_eq!(err.code, ErrorCode::InvalidRange);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::SnapshotInvalid), "SNAPSHOT_INVALID");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
