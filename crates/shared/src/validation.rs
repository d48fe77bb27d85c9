//! Bilingual validation error raised by params DTOs.

use crate::errors::{ErrorCode, ErrorEnvelope};
use serde::Serialize;
use std::fmt;

/// Error code namespace used for validation failures.
pub const VALIDATION_NAMESPACE: &str = "validation";

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required value was absent or null.
    MissingValue,
    /// The value has the wrong JSON type.
    InvalidType,
    /// The value lies outside numeric or length bounds.
    OutOfRange,
    /// The value does not match the required pattern.
    PatternMismatch,
    /// The value is not part of the allow-list.
    NotAllowed,
    /// The value is malformed (date, decimal, JSON).
    InvalidFormat,
    /// An array that must have items is empty.
    EmptyCollection,
    /// An update request carries no values to update.
    NothingToUpdate,
    /// A cross-field range rule was violated.
    InvalidRange,
    /// The request as a whole has an unusable shape.
    InvalidInput,
}

impl ValidationErrorKind {
    /// Stable identifier used as the error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingValue => "missing_value",
            Self::InvalidType => "invalid_type",
            Self::OutOfRange => "out_of_range",
            Self::PatternMismatch => "pattern_mismatch",
            Self::NotAllowed => "not_allowed",
            Self::InvalidFormat => "invalid_format",
            Self::EmptyCollection => "empty_collection",
            Self::NothingToUpdate => "nothing_to_update",
            Self::InvalidRange => "invalid_range",
            Self::InvalidInput => "invalid_input",
        }
    }

    /// Error code for this kind.
    #[must_use]
    pub fn error_code(self) -> ErrorCode {
        ErrorCode::new(VALIDATION_NAMESPACE, self.as_str())
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A rejected request parameter.
///
/// `message` is an English diagnostic naming the raw field key. `user_message`
/// is the Spanish text meant for end users and uses the human field label.
/// Instances are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    message: String,
    user_message: String,
}

impl ValidationError {
    /// Build an error not tied to a single field.
    pub fn new(
        kind: ValidationErrorKind,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
            user_message: user_message.into(),
        }
    }

    /// Build an error for the field with the given key.
    pub fn for_field(
        kind: ValidationErrorKind,
        key: &str,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: Some(key.to_owned()),
            message: message.into(),
            user_message: user_message.into(),
        }
    }

    /// A required value is absent.
    pub fn missing(key: &str, label: &str) -> Self {
        Self::for_field(
            ValidationErrorKind::MissingValue,
            key,
            format!("missing required value for '{key}'"),
            format!("El campo {label} es obligatorio."),
        )
    }

    /// A value lies outside its constraints.
    ///
    /// `constraint` completes "'key' must be ..." and `user_constraint`
    /// completes "El campo label debe ...".
    pub fn out_of_constraints(key: &str, label: &str, constraint: &str, user_constraint: &str) -> Self {
        Self::for_field(
            ValidationErrorKind::OutOfRange,
            key,
            format!("'{key}' must be {constraint}"),
            format!("El campo {label} debe {user_constraint}."),
        )
    }

    /// An update request did not set any updatable field.
    pub fn nothing_to_update() -> Self {
        Self::new(
            ValidationErrorKind::NothingToUpdate,
            "no values to update",
            "No hay valores para actualizar.",
        )
    }

    /// Failure category.
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Raw key of the offending field, when the failure concerns one field.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Diagnostic message (English).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// End-user message (Spanish).
    #[must_use]
    pub fn user_message(&self) -> &str {
        &self.user_message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ErrorEnvelope {
    fn from(error: ValidationError) -> Self {
        let envelope = Self::expected(error.kind.error_code(), error.message)
            .with_user_message(error.user_message);
        match error.field {
            Some(field) => envelope.with_metadata("field", field),
            None => envelope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn missing_names_key_and_label() {
        let error = ValidationError::missing("maxResults", "número máximo de resultados");

        assert_eq!(error.kind(), ValidationErrorKind::MissingValue);
        assert_eq!(error.field(), Some("maxResults"));
        assert!(error.message().contains("'maxResults'"));
        assert_eq!(
            error.user_message(),
            "El campo número máximo de resultados es obligatorio."
        );
    }

    #[test]
    fn out_of_constraints_builds_both_sentences() {
        let error = ValidationError::out_of_constraints(
            "day",
            "día",
            "less than or equal to 31",
            "ser menor o igual a 31",
        );

        assert_eq!(error.kind(), ValidationErrorKind::OutOfRange);
        assert_eq!(error.to_string(), "'day' must be less than or equal to 31");
        assert_eq!(error.user_message(), "El campo día debe ser menor o igual a 31.");
    }

    #[test]
    fn converts_into_expected_envelope() {
        let envelope = ErrorEnvelope::from(ValidationError::missing("poolId", "piscina"));

        assert_eq!(envelope.kind, ErrorKind::Expected);
        assert_eq!(envelope.code, ErrorCode::new("validation", "missing_value"));
        assert_eq!(
            envelope.user_message.as_deref(),
            Some("El campo piscina es obligatorio.")
        );
        assert_eq!(envelope.metadata.get("field").map(String::as_str), Some("poolId"));
    }

    #[test]
    fn nothing_to_update_has_no_field() {
        let envelope = ErrorEnvelope::from(ValidationError::nothing_to_update());

        assert_eq!(envelope.code, ErrorCode::new("validation", "nothing_to_update"));
        assert!(envelope.metadata.is_empty());
    }
}
