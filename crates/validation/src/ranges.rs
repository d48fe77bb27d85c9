//! Cross-field checks used by `ParamsModel::check` implementations.

use crate::dates::{parse_date_like, parse_time_of_day};
use crate::pattern::Pattern;
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use swimdesk_shared::{ValidationError, ValidationErrorKind};

/// One end of a range: wire key, human label and raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBound<'a> {
    /// Wire key.
    pub key: &'static str,
    /// Human label.
    pub label: &'static str,
    /// Raw value as validated by the field rule.
    pub value: &'a str,
}

impl<'a> RangeBound<'a> {
    /// Describe a bound.
    pub const fn new(key: &'static str, label: &'static str, value: &'a str) -> Self {
        Self { key, label, value }
    }

    fn unparseable(self, what: &str, user_what: &str) -> ValidationError {
        ValidationError::for_field(
            ValidationErrorKind::InvalidFormat,
            self.key,
            format!("'{}' must be a valid {what}", self.key),
            format!("El campo {} debe ser {user_what}.", self.label),
        )
    }

    fn date(self) -> Result<DateTime<Utc>, ValidationError> {
        parse_date_like(self.value).ok_or_else(|| self.unparseable("date", "una fecha válida"))
    }

    fn time(self) -> Result<NaiveTime, ValidationError> {
        parse_time_of_day(self.value)
            .ok_or_else(|| self.unparseable("time of day", "una hora válida (HH:MM)"))
    }
}

fn order_error(start: RangeBound<'_>, end: RangeBound<'_>, relation: &str, user_relation: &str) -> ValidationError {
    ValidationError::for_field(
        ValidationErrorKind::InvalidRange,
        start.key,
        format!("'{}' must be {relation} '{}'", start.key, end.key),
        format!("El campo {} debe ser {user_relation} {}.", start.label, end.label),
    )
}

/// Fails when `start` is later than `end`; equal instants pass.
pub fn ensure_not_after(start: RangeBound<'_>, end: RangeBound<'_>) -> Result<(), ValidationError> {
    if start.date()? > end.date()? {
        return Err(order_error(start, end, "on or before", "anterior o igual a"));
    }
    Ok(())
}

/// Fails unless `start` is strictly earlier than `end`.
pub fn ensure_before(start: RangeBound<'_>, end: RangeBound<'_>) -> Result<(), ValidationError> {
    if start.date()? >= end.date()? {
        return Err(order_error(start, end, "before", "anterior a"));
    }
    Ok(())
}

/// Fails when `end - start` exceeds `max_days` whole days.
///
/// A span of exactly `max_days` passes.
pub fn ensure_max_span(
    start: RangeBound<'_>,
    end: RangeBound<'_>,
    max_days: i64,
) -> Result<(), ValidationError> {
    if end.date()? - start.date()? > TimeDelta::days(max_days) {
        return Err(ValidationError::for_field(
            ValidationErrorKind::InvalidRange,
            end.key,
            format!(
                "range between '{}' and '{}' must not exceed {max_days} days",
                start.key, end.key
            ),
            format!(
                "El rango entre {} y {} no puede superar los {max_days} días.",
                start.label, end.label
            ),
        ));
    }
    Ok(())
}

/// Fails unless the `HH:MM` time `start` is strictly earlier than `end`.
pub fn ensure_time_before(start: RangeBound<'_>, end: RangeBound<'_>) -> Result<(), ValidationError> {
    if start.time()? >= end.time()? {
        return Err(order_error(start, end, "before", "anterior a"));
    }
    Ok(())
}

/// Fails when `value` does not match a pattern chosen at runtime, such as
/// the document pattern of an identity type.
pub fn ensure_pattern(
    key: &'static str,
    label: &'static str,
    value: &str,
    pattern: &Pattern,
) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::for_field(
        ValidationErrorKind::PatternMismatch,
        key,
        format!("'{key}' does not match pattern {}", pattern.source()),
        format!("El campo {label} no es válido: {}.", pattern.explanation()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(value: &str) -> RangeBound<'_> {
        RangeBound::new("startDate", "fecha de inicio", value)
    }

    fn end(value: &str) -> RangeBound<'_> {
        RangeBound::new("endDate", "fecha de fin", value)
    }

    #[test]
    fn not_after_accepts_equal_and_rejects_inverted() {
        assert!(ensure_not_after(start("2024-03-01"), end("2024-03-01")).is_ok());
        let error = ensure_not_after(start("2024-03-02"), end("2024-03-01")).err();
        assert!(matches!(
            error,
            Some(error) if error.kind() == ValidationErrorKind::InvalidRange
                && error.user_message() == "El campo fecha de inicio debe ser anterior o igual a fecha de fin."
        ));
    }

    #[test]
    fn before_is_strict() {
        assert!(ensure_before(start("2024-03-01"), end("2024-03-02")).is_ok());
        assert!(ensure_before(start("2024-03-01"), end("2024-03-01")).is_err());
    }

    #[test]
    fn span_boundary_is_inclusive() {
        assert!(ensure_max_span(start("2024-01-01"), end("2024-03-31"), 90).is_ok());
        assert!(
            ensure_max_span(
                start("2024-01-01T00:00:00.000Z"),
                end("2024-03-31T00:00:00.000Z"),
                90
            )
            .is_ok()
        );
        assert!(
            ensure_max_span(
                start("2024-01-01T00:00:00.000Z"),
                end("2024-03-31T00:00:00.001Z"),
                90
            )
            .is_err()
        );
    }

    #[test]
    fn times_compare_within_a_day() {
        let open = RangeBound::new("startTime", "hora de inicio", "09:00");
        let close = RangeBound::new("endTime", "hora de fin", "10:30");
        assert!(ensure_time_before(open, close).is_ok());
        assert!(ensure_time_before(close, open).is_err());
    }

    #[test]
    fn unparseable_bounds_are_format_errors() {
        let error = ensure_before(start("soon"), end("2024-03-01")).err();
        assert!(matches!(
            error,
            Some(error) if error.kind() == ValidationErrorKind::InvalidFormat
        ));
    }

    #[test]
    fn runtime_patterns_report_explanation() {
        static DIGITS: Pattern = Pattern::new(r"^\d+$", "solo dígitos");
        assert!(ensure_pattern("code", "código", "123", &DIGITS).is_ok());
        let error = ensure_pattern("code", "código", "12a", &DIGITS).err();
        assert!(matches!(
            error,
            Some(error) if error.user_message() == "El campo código no es válido: solo dígitos."
        ));
    }
}
