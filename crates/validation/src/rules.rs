//! Declarative rule table entries, one per primitive.

use crate::pattern::Pattern;
use crate::primitives::{self, FieldRef};
use serde_json::Value;
use swimdesk_shared::ValidationError;

/// Bounds and default for integer fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerRule {
    /// Inclusive minimum.
    pub min: Option<i64>,
    /// Inclusive maximum.
    pub max: Option<i64>,
    /// Value substituted when the field is absent and required.
    pub default: Option<i64>,
}

impl IntegerRule {
    /// Inclusive `min..=max` bounds without a default.
    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            default: None,
        }
    }
}

/// Length bounds (in characters) and pattern for string fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringRule {
    /// Minimum length.
    pub min: Option<usize>,
    /// Maximum length.
    pub max: Option<usize>,
    /// Pattern the whole value must match.
    pub pattern: Option<&'static Pattern>,
}

/// Item validation applied to each array element.
#[derive(Debug, Clone, Copy, Default)]
pub enum ArrayItems {
    /// Elements are not inspected.
    #[default]
    Any,
    /// Every element must be an integer.
    Integer(IntegerRule),
    /// Every element must be a string.
    String(StringRule),
}

/// Shape of array fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayRule {
    /// Accept a zero-length array.
    pub can_be_empty: bool,
    /// Element rule.
    pub items: ArrayItems,
}

/// Allow-list for constant fields, usually a registry's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantRule {
    /// Accepted values.
    pub allowed: &'static [&'static str],
}

/// Lower bound for comma-separated integer lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommaIntegersRule {
    /// Inclusive minimum for every element.
    pub min: i64,
}

/// The validation applied to one declared field.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Number or numeric string normalized to an integer.
    Integer(IntegerRule),
    /// Plain string.
    String(StringRule),
    /// Decimal amount kept as a string.
    Decimal,
    /// JSON boolean.
    Boolean,
    /// `"true"` / `"false"` normalized to a boolean.
    StringBoolean,
    /// Any parseable date, kept as a string.
    DateString,
    /// ISO-8601 date, kept as a string.
    IsoDateString,
    /// String holding a JSON document.
    JsonString,
    /// JSON array.
    Array(ArrayRule),
    /// Member of an allow-list.
    Constant(ConstantRule),
    /// Comma-joined members of an allow-list.
    CommaSeparatedConstant(ConstantRule),
    /// Comma-joined integers.
    CommaSeparatedIntegers(CommaIntegersRule),
}

impl Rule {
    /// Short rule name used in logs and schema hints.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::StringBoolean => "string_boolean",
            Self::DateString => "date",
            Self::IsoDateString => "iso_date",
            Self::JsonString => "json",
            Self::Array(_) => "array",
            Self::Constant(_) => "constant",
            Self::CommaSeparatedConstant(_) => "comma_constants",
            Self::CommaSeparatedIntegers(_) => "comma_integers",
        }
    }

    /// Run the matching primitive and re-encode the normalized value.
    ///
    /// `Ok(None)` means the field is legitimately absent.
    pub fn apply(
        &self,
        value: Option<&Value>,
        field: FieldRef<'_>,
    ) -> Result<Option<Value>, ValidationError> {
        match self {
            Self::Integer(rule) => {
                primitives::validate_integer(value, field, rule).map(|v| v.map(Value::from))
            },
            Self::String(rule) => {
                primitives::validate_string(value, field, rule).map(|v| v.map(Value::String))
            },
            Self::Decimal => primitives::validate_decimal(value, field).map(|v| v.map(Value::String)),
            Self::Boolean => primitives::validate_boolean(value, field).map(|v| v.map(Value::Bool)),
            Self::StringBoolean => {
                primitives::validate_string_boolean(value, field).map(|v| v.map(Value::Bool))
            },
            Self::DateString => {
                primitives::validate_date_string(value, field).map(|v| v.map(Value::String))
            },
            Self::IsoDateString => {
                primitives::validate_iso_date_string(value, field).map(|v| v.map(Value::String))
            },
            Self::JsonString => {
                primitives::validate_json_string(value, field).map(|v| v.map(Value::String))
            },
            Self::Array(rule) => {
                primitives::validate_array(value, field, rule).map(|v| v.map(Value::Array))
            },
            Self::Constant(rule) => {
                primitives::validate_constant(value, field, rule).map(|v| v.map(Value::String))
            },
            Self::CommaSeparatedConstant(rule) => {
                primitives::validate_comma_separated_constant(value, field, rule)
                    .map(|v| v.map(Value::String))
            },
            Self::CommaSeparatedIntegers(rule) => {
                primitives::validate_comma_separated_integers(value, field, rule)
                    .map(|v| v.map(Value::String))
            },
        }
    }
}
