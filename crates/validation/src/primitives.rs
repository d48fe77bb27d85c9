//! Stateless validator primitives, one per scalar shape.
//!
//! Every primitive takes the raw JSON value (`None` when the key is missing),
//! the field reference and its options, and returns the normalized value.
//! JSON `null` counts as absent. An absent optional field yields `Ok(None)`.

use crate::dates::{parse_date_like, parse_iso_date};
use crate::pattern::DECIMAL;
use crate::rules::{ArrayItems, ArrayRule, CommaIntegersRule, ConstantRule, IntegerRule, StringRule};
use serde_json::Value;
use swimdesk_shared::{ValidationError, ValidationErrorKind};

/// Key, human label and optionality of the field being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    /// Raw wire key, used in diagnostic messages.
    pub key: &'a str,
    /// Human label (Spanish), used in user messages.
    pub label: &'a str,
    /// Absent values are accepted.
    pub optional: bool,
}

impl<'a> FieldRef<'a> {
    /// A field that must be present.
    pub const fn required(key: &'a str, label: &'a str) -> Self {
        Self {
            key,
            label,
            optional: false,
        }
    }

    /// A field that may be absent.
    pub const fn optional(key: &'a str, label: &'a str) -> Self {
        Self {
            key,
            label,
            optional: true,
        }
    }

    fn error(
        self,
        kind: ValidationErrorKind,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> ValidationError {
        ValidationError::for_field(kind, self.key, message, user_message)
    }

    fn wrong_type(self, expected: &str, user_expected: &str) -> ValidationError {
        self.error(
            ValidationErrorKind::InvalidType,
            format!("'{}' must be {expected}", self.key),
            format!("El campo {} debe ser {user_expected}.", self.label),
        )
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

fn require<'v>(
    value: Option<&'v Value>,
    field: FieldRef<'_>,
) -> Result<Option<&'v Value>, ValidationError> {
    match present(value) {
        Some(value) => Ok(Some(value)),
        None if field.optional => Ok(None),
        None => Err(ValidationError::missing(field.key, field.label)),
    }
}

fn require_str<'v>(
    value: Option<&'v Value>,
    field: FieldRef<'_>,
) -> Result<Option<&'v str>, ValidationError> {
    match require(value, field)? {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(field.wrong_type("a string", "un texto")),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "float is checked to be integral and within i64 range before the cast"
)]
fn integral(number: f64) -> Option<i64> {
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.is_finite() && number.fract() == 0.0 && in_range).then(|| number as i64)
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        },
        _ => None,
    }
}

fn check_bounds(
    number: i64,
    field: FieldRef<'_>,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<i64, ValidationError> {
    if let Some(min) = min.filter(|min| number < *min) {
        return Err(ValidationError::out_of_constraints(
            field.key,
            field.label,
            &format!("greater than or equal to {min}"),
            &format!("ser mayor o igual a {min}"),
        ));
    }
    if let Some(max) = max.filter(|max| number > *max) {
        return Err(ValidationError::out_of_constraints(
            field.key,
            field.label,
            &format!("less than or equal to {max}"),
            &format!("ser menor o igual a {max}"),
        ));
    }
    Ok(number)
}

/// Integer given as a JSON number or a numeric string.
///
/// Integral floats (`2.0`) are accepted. When the field is required and
/// absent, `rule.default` is substituted if set.
pub fn validate_integer(
    value: Option<&Value>,
    field: FieldRef<'_>,
    rule: &IntegerRule,
) -> Result<Option<i64>, ValidationError> {
    if present(value).is_none() && !field.optional {
        if let Some(default) = rule.default {
            return Ok(Some(default));
        }
    }
    let Some(value) = require(value, field)? else {
        return Ok(None);
    };
    let number =
        parse_integer(value).ok_or_else(|| field.wrong_type("an integer", "un número entero"))?;
    check_bounds(number, field, rule.min, rule.max).map(Some)
}

/// String with optional length bounds (in characters) and pattern.
pub fn validate_string(
    value: Option<&Value>,
    field: FieldRef<'_>,
    rule: &StringRule,
) -> Result<Option<String>, ValidationError> {
    let Some(text) = require_str(value, field)? else {
        return Ok(None);
    };
    let length = text.chars().count();
    if let Some(min) = rule.min.filter(|min| length < *min) {
        return Err(ValidationError::out_of_constraints(
            field.key,
            field.label,
            &format!("at least {min} characters long"),
            &format!("tener al menos {min} caracteres"),
        ));
    }
    if let Some(max) = rule.max.filter(|max| length > *max) {
        return Err(ValidationError::out_of_constraints(
            field.key,
            field.label,
            &format!("at most {max} characters long"),
            &format!("tener como máximo {max} caracteres"),
        ));
    }
    if let Some(pattern) = rule.pattern.filter(|pattern| !pattern.is_match(text)) {
        return Err(field.error(
            ValidationErrorKind::PatternMismatch,
            format!("'{}' does not match pattern {}", field.key, pattern.source()),
            format!("El campo {} no es válido: {}.", field.label, pattern.explanation()),
        ));
    }
    Ok(Some(text.to_owned()))
}

/// Decimal amount as a string with at most two fractional digits.
pub fn validate_decimal(
    value: Option<&Value>,
    field: FieldRef<'_>,
) -> Result<Option<String>, ValidationError> {
    let Some(text) = require_str(value, field)? else {
        return Ok(None);
    };
    if !DECIMAL.is_match(text) {
        return Err(field.error(
            ValidationErrorKind::InvalidFormat,
            format!(
                "'{}' must be a decimal number with at most two decimal places",
                field.key
            ),
            format!("El campo {} {}.", field.label, DECIMAL.explanation()),
        ));
    }
    Ok(Some(text.to_owned()))
}

/// Strict JSON boolean.
pub fn validate_boolean(
    value: Option<&Value>,
    field: FieldRef<'_>,
) -> Result<Option<bool>, ValidationError> {
    match require(value, field)? {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(field.wrong_type("a boolean", "verdadero o falso")),
    }
}

/// The literal strings `"true"` or `"false"`, normalized to a boolean.
///
/// A JSON boolean is accepted as already normalized.
pub fn validate_string_boolean(
    value: Option<&Value>,
    field: FieldRef<'_>,
) -> Result<Option<bool>, ValidationError> {
    match require(value, field)? {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(Value::String(text)) if text == "true" => Ok(Some(true)),
        Some(Value::String(text)) if text == "false" => Ok(Some(false)),
        Some(_) => Err(field.wrong_type("the string 'true' or 'false'", "verdadero o falso")),
    }
}

/// Any string a browser `Date` would parse; returned unchanged.
pub fn validate_date_string(
    value: Option<&Value>,
    field: FieldRef<'_>,
) -> Result<Option<String>, ValidationError> {
    let Some(text) = require_str(value, field)? else {
        return Ok(None);
    };
    if parse_date_like(text).is_none() {
        return Err(field.error(
            ValidationErrorKind::InvalidFormat,
            format!("'{}' must be a valid date", field.key),
            format!("El campo {} debe ser una fecha válida.", field.label),
        ));
    }
    Ok(Some(text.to_owned()))
}

/// ISO-8601 date or date-time; returned unchanged.
pub fn validate_iso_date_string(
    value: Option<&Value>,
    field: FieldRef<'_>,
) -> Result<Option<String>, ValidationError> {
    let Some(text) = require_str(value, field)? else {
        return Ok(None);
    };
    if parse_iso_date(text).is_none() {
        return Err(field.error(
            ValidationErrorKind::InvalidFormat,
            format!("'{}' must be an ISO-8601 date", field.key),
            format!(
                "El campo {} debe ser una fecha con formato AAAA-MM-DD.",
                field.label
            ),
        ));
    }
    Ok(Some(text.to_owned()))
}

/// String holding a JSON document; returned unchanged.
pub fn validate_json_string(
    value: Option<&Value>,
    field: FieldRef<'_>,
) -> Result<Option<String>, ValidationError> {
    let Some(text) = require_str(value, field)? else {
        return Ok(None);
    };
    if let Err(error) = serde_json::from_str::<Value>(text) {
        return Err(field.error(
            ValidationErrorKind::InvalidFormat,
            format!("'{}' must contain valid JSON: {error}", field.key),
            format!("El campo {} debe contener un JSON válido.", field.label),
        ));
    }
    Ok(Some(text.to_owned()))
}

/// JSON array, optionally non-empty, with per-element validation.
pub fn validate_array(
    value: Option<&Value>,
    field: FieldRef<'_>,
    rule: &ArrayRule,
) -> Result<Option<Vec<Value>>, ValidationError> {
    let items = match require(value, field)? {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(field.wrong_type("an array", "una lista")),
    };
    if items.is_empty() && !rule.can_be_empty {
        return Err(field.error(
            ValidationErrorKind::EmptyCollection,
            format!("'{}' must not be empty", field.key),
            format!("El campo {} no puede estar vacío.", field.label),
        ));
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let key = format!("{}[{index}]", field.key);
            let item_field = FieldRef::required(&key, field.label);
            match &rule.items {
                ArrayItems::Any => Ok(item.clone()),
                ArrayItems::Integer(item_rule) => {
                    validate_integer(Some(item), item_field, item_rule)
                        .map(|number| number.map_or(Value::Null, Value::from))
                },
                ArrayItems::String(item_rule) => validate_string(Some(item), item_field, item_rule)
                    .map(|text| text.map_or(Value::Null, Value::String)),
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn is_allowed(rule: &ConstantRule, candidate: &str) -> bool {
    rule.allowed.iter().any(|allowed| *allowed == candidate)
}

fn describe_allowed(allowed: &[&str]) -> String {
    format!("[{}]", allowed.join(", "))
}

/// Member of an allow-list.
pub fn validate_constant(
    value: Option<&Value>,
    field: FieldRef<'_>,
    rule: &ConstantRule,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = require(value, field)? else {
        return Ok(None);
    };
    match value {
        Value::String(text) if is_allowed(rule, text) => Ok(Some(text.clone())),
        _ => Err(field.error(
            ValidationErrorKind::NotAllowed,
            format!(
                "'{}' must be one of {}",
                field.key,
                describe_allowed(rule.allowed)
            ),
            format!("El valor del campo {} no es válido.", field.label),
        )),
    }
}

/// Comma-joined list whose every segment belongs to the allow-list.
pub fn validate_comma_separated_constant(
    value: Option<&Value>,
    field: FieldRef<'_>,
    rule: &ConstantRule,
) -> Result<Option<String>, ValidationError> {
    let Some(text) = require_str(value, field)? else {
        return Ok(None);
    };
    if let Some(segment) = text
        .split(',')
        .find(|segment| !is_allowed(rule, segment))
    {
        return Err(field.error(
            ValidationErrorKind::NotAllowed,
            format!(
                "'{}' contains '{segment}' which is not one of {}",
                field.key,
                describe_allowed(rule.allowed)
            ),
            format!("El campo {} contiene un valor no válido.", field.label),
        ));
    }
    Ok(Some(text.to_owned()))
}

/// Comma-joined list of integers, each at least `rule.min`.
pub fn validate_comma_separated_integers(
    value: Option<&Value>,
    field: FieldRef<'_>,
    rule: &CommaIntegersRule,
) -> Result<Option<String>, ValidationError> {
    let Some(text) = require_str(value, field)? else {
        return Ok(None);
    };
    let valid = text
        .split(',')
        .all(|segment| segment.trim().parse::<i64>().is_ok_and(|number| number >= rule.min));
    if !valid {
        return Err(field.error(
            ValidationErrorKind::InvalidFormat,
            format!(
                "'{}' must be a comma-separated list of integers greater than or equal to {}",
                field.key, rule.min
            ),
            format!(
                "El campo {} debe ser una lista de números enteros mayores o iguales a {} separados por comas.",
                field.label, rule.min
            ),
        ));
    }
    Ok(Some(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use proptest::prelude::*;
    use serde_json::json;

    static CODE: Pattern = Pattern::new(
        r"^[a-zA-Z0-9-_]{1,40}$",
        "solo letras, números, guiones y guiones bajos",
    );

    const DAY: FieldRef<'static> = FieldRef::required("day", "día");

    fn code_rule() -> StringRule {
        StringRule {
            min: Some(1),
            max: Some(40),
            pattern: Some(&CODE),
        }
    }

    fn kind_of<T>(result: Result<T, ValidationError>) -> Option<ValidationErrorKind> {
        result.err().map(|error| error.kind())
    }

    #[test]
    fn integer_accepts_numeric_strings_in_range() -> Result<(), Box<dyn std::error::Error>> {
        let rule = IntegerRule::between(1, 31);
        for day in 1..=31 {
            let value = json!(day.to_string());
            assert_eq!(validate_integer(Some(&value), DAY, &rule)?, Some(day));
        }
        Ok(())
    }

    #[test]
    fn integer_rejects_out_of_range_garbage_and_fractions() {
        let rule = IntegerRule::between(1, 31);
        let cases = [
            (json!("0"), ValidationErrorKind::OutOfRange),
            (json!("32"), ValidationErrorKind::OutOfRange),
            (json!("abc"), ValidationErrorKind::InvalidType),
            (json!(1.5), ValidationErrorKind::InvalidType),
            (json!("NaN"), ValidationErrorKind::InvalidType),
            (json!(true), ValidationErrorKind::InvalidType),
        ];
        for (value, expected) in cases {
            assert_eq!(
                kind_of(validate_integer(Some(&value), DAY, &rule)),
                Some(expected),
                "value {value}"
            );
        }
    }

    #[test]
    fn integer_user_message_uses_label() {
        let value = json!("32");
        let error = validate_integer(Some(&value), DAY, &IntegerRule::between(1, 31)).err();

        assert!(matches!(
            error,
            Some(error) if error.user_message() == "El campo día debe ser menor o igual a 31."
                && error.message().contains("'day'")
        ));
    }

    #[test]
    fn integer_applies_default_only_when_required() -> Result<(), Box<dyn std::error::Error>> {
        let rule = IntegerRule {
            default: Some(10),
            ..IntegerRule::between(1, 40)
        };
        assert_eq!(validate_integer(None, DAY, &rule)?, Some(10));
        assert_eq!(validate_integer(Some(&Value::Null), DAY, &rule)?, Some(10));
        assert_eq!(
            validate_integer(None, FieldRef::optional("day", "día"), &rule)?,
            None
        );
        Ok(())
    }

    #[test]
    fn integer_accepts_integral_floats() -> Result<(), Box<dyn std::error::Error>> {
        let value = json!(2.0);
        assert_eq!(validate_integer(Some(&value), DAY, &IntegerRule::default())?, Some(2));
        Ok(())
    }

    #[test]
    fn missing_required_values_are_rejected() {
        assert_eq!(
            kind_of(validate_string(None, DAY, &StringRule::default())),
            Some(ValidationErrorKind::MissingValue)
        );
        assert_eq!(
            kind_of(validate_boolean(Some(&Value::Null), DAY)),
            Some(ValidationErrorKind::MissingValue)
        );
    }

    #[test]
    fn string_enforces_length_and_pattern() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("code", "código");
        let rule = code_rule();
        let accepted = json!("abc-1_2");
        assert_eq!(
            validate_string(Some(&accepted), field, &rule)?.as_deref(),
            Some("abc-1_2")
        );

        let empty = json!("");
        let long = json!("a".repeat(41));
        let bad = json!("bad char!");
        assert_eq!(
            kind_of(validate_string(Some(&empty), field, &rule)),
            Some(ValidationErrorKind::OutOfRange)
        );
        assert_eq!(
            kind_of(validate_string(Some(&long), field, &rule)),
            Some(ValidationErrorKind::OutOfRange)
        );
        let error = validate_string(Some(&bad), field, &rule).err();
        assert!(matches!(
            error,
            Some(error) if error.kind() == ValidationErrorKind::PatternMismatch
                && error.user_message().contains("solo letras")
        ));
        Ok(())
    }

    #[test]
    fn string_length_counts_characters() -> Result<(), Box<dyn std::error::Error>> {
        let rule = StringRule {
            max: Some(4),
            ..StringRule::default()
        };
        let value = json!("ñañá");
        assert!(validate_string(Some(&value), DAY, &rule)?.is_some());
        Ok(())
    }

    #[test]
    fn decimal_allows_two_places() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("amount", "importe");
        let ok = json!("12.34");
        assert_eq!(validate_decimal(Some(&ok), field)?.as_deref(), Some("12.34"));

        for bad in [json!("12.345"), json!("abc"), json!(12.34)] {
            assert!(validate_decimal(Some(&bad), field).is_err(), "value {bad}");
        }
        Ok(())
    }

    #[test]
    fn boolean_is_strict() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("active", "activo");
        assert_eq!(validate_boolean(Some(&json!(true)), field)?, Some(true));
        assert!(validate_boolean(Some(&json!("true")), field).is_err());
        assert!(validate_boolean(Some(&json!(1)), field).is_err());
        Ok(())
    }

    #[test]
    fn string_boolean_requires_exact_literals() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("active", "activo");
        assert_eq!(validate_string_boolean(Some(&json!("true")), field)?, Some(true));
        assert_eq!(validate_string_boolean(Some(&json!("false")), field)?, Some(false));
        assert_eq!(validate_string_boolean(Some(&json!(false)), field)?, Some(false));
        for bad in [json!("TRUE"), json!("1"), json!(" true"), json!(0)] {
            assert!(validate_string_boolean(Some(&bad), field).is_err(), "value {bad}");
        }
        Ok(())
    }

    #[test]
    fn dates_distinguish_lenient_and_iso() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("date", "fecha");
        let slashed = json!("2024/03/01");
        assert!(validate_date_string(Some(&slashed), field)?.is_some());
        assert_eq!(
            kind_of(validate_iso_date_string(Some(&slashed), field)),
            Some(ValidationErrorKind::InvalidFormat)
        );

        let iso = json!("2024-03-01T08:00:00Z");
        assert_eq!(
            validate_iso_date_string(Some(&iso), field)?.as_deref(),
            Some("2024-03-01T08:00:00Z")
        );
        assert!(validate_date_string(Some(&json!("someday")), field).is_err());
        Ok(())
    }

    #[test]
    fn json_string_must_parse() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("steps", "pasos");
        assert!(validate_json_string(Some(&json!(r#"[{"a":1}]"#)), field)?.is_some());
        assert_eq!(
            kind_of(validate_json_string(Some(&json!("{oops")), field)),
            Some(ValidationErrorKind::InvalidFormat)
        );
        Ok(())
    }

    #[test]
    fn array_honours_can_be_empty_and_items() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("ids", "identificadores");
        let empty = json!([]);
        assert_eq!(
            kind_of(validate_array(Some(&empty), field, &ArrayRule::default())),
            Some(ValidationErrorKind::EmptyCollection)
        );
        let lenient = ArrayRule {
            can_be_empty: true,
            ..ArrayRule::default()
        };
        assert_eq!(validate_array(Some(&empty), field, &lenient)?, Some(Vec::new()));

        let integers = ArrayRule {
            can_be_empty: false,
            items: ArrayItems::Integer(IntegerRule {
                min: Some(1),
                ..IntegerRule::default()
            }),
        };
        let mixed = json!(["1", 2]);
        assert_eq!(
            validate_array(Some(&mixed), field, &integers)?,
            Some(vec![json!(1), json!(2)])
        );
        let error = validate_array(Some(&json!([1, 0])), field, &integers).err();
        assert!(matches!(error, Some(error) if error.field() == Some("ids[1]")));
        Ok(())
    }

    #[test]
    fn constant_membership() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("state", "estado");
        let rule = ConstantRule {
            allowed: &["PENDING", "PAID"],
        };
        assert_eq!(
            validate_constant(Some(&json!("PAID")), field, &rule)?.as_deref(),
            Some("PAID")
        );
        let error = validate_constant(Some(&json!("LOST")), field, &rule).err();
        assert!(matches!(
            error,
            Some(error) if error.kind() == ValidationErrorKind::NotAllowed
                && error.message().contains("[PENDING, PAID]")
        ));
        assert!(validate_constant(Some(&json!(1)), field, &rule).is_err());
        Ok(())
    }

    #[test]
    fn comma_separated_constant_checks_every_segment() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("states", "estados");
        let rule = ConstantRule {
            allowed: &["PENDING", "PAID"],
        };
        assert!(validate_comma_separated_constant(Some(&json!("PAID,PENDING")), field, &rule)?.is_some());
        assert!(validate_comma_separated_constant(Some(&json!("PAID,LOST")), field, &rule).is_err());
        assert!(validate_comma_separated_constant(Some(&json!("")), field, &rule).is_err());
        Ok(())
    }

    #[test]
    fn comma_separated_integers_respect_min() -> Result<(), Box<dyn std::error::Error>> {
        let field = FieldRef::required("ids", "identificadores");
        let rule = CommaIntegersRule { min: 1 };
        assert_eq!(
            validate_comma_separated_integers(Some(&json!("1, 2,3")), field, &rule)?.as_deref(),
            Some("1, 2,3")
        );
        for bad in [json!("1,0"), json!("1,,2"), json!("a,b"), json!(12)] {
            assert!(
                validate_comma_separated_integers(Some(&bad), field, &rule).is_err(),
                "value {bad}"
            );
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn integer_accepts_exactly_the_range(number in -100_i64..100) {
            let value = json!(number.to_string());
            let result = validate_integer(Some(&value), DAY, &IntegerRule::between(1, 31));
            prop_assert_eq!(result.is_ok(), (1..=31).contains(&number));
        }

        #[test]
        fn integer_normalization_is_idempotent(number in any::<i32>()) {
            let rule = IntegerRule::default();
            let first = validate_integer(Some(&json!(number.to_string())), DAY, &rule);
            let first = first.ok().flatten();
            prop_assert_eq!(first, Some(i64::from(number)));
            let again = first.map(Value::from);
            let second = validate_integer(again.as_ref(), DAY, &rule).ok().flatten();
            prop_assert_eq!(second, first);
        }

        #[test]
        fn comma_integers_accept_joined_naturals(numbers in proptest::collection::vec(1_u32..10_000, 1..8)) {
            let joined = numbers.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
            let field = FieldRef::required("ids", "identificadores");
            let result = validate_comma_separated_integers(Some(&json!(joined)), field, &CommaIntegersRule { min: 1 });
            prop_assert!(result.is_ok());
        }
    }
}
